//! Final report generation

use crate::cli::prompt::Prompter;
use crate::cli::shell::Shell;
use crate::core::error::Result;
use crate::core::report::{self, ReportMeta};

/// Write the final report of one aircraft to the data directory
pub fn generate<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.heading("Gerar Relatório Final")?;

    let code = shell.ask("Código da aeronave: ")?;
    shell.repo.require_aircraft(&code)?;

    let client = shell.ask("Nome do cliente (opcional): ")?;
    let delivery_date = shell.ask("Data de entrega (ex: 2025-10-04, opcional): ")?;
    let meta = ReportMeta::from_input(&client, &delivery_date);

    let path = report::generate(&shell.repo, &code, meta)?;
    shell.success(&format!("Relatório salvo em {}", path.display()))
}
