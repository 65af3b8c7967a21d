//! Part registration and status updates

use crate::cli::prompt::Prompter;
use crate::cli::shell::Shell;
use crate::core::error::{AerocodeError, Result};
use crate::entities::{Part, PartCategory, PartStatus, PermissionLevel};

pub fn register<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ANY)?;
    shell.heading("Cadastro de Peça")?;

    let code = shell.ask("Código da aeronave (ENTER para cadastrar sem vínculo): ")?;
    let aircraft_code = if code.is_empty() {
        None
    } else {
        shell.repo.require_aircraft(&code)?;
        Some(code)
    };

    let name = shell.ask("Nome da peça: ")?;
    let category = shell
        .choose::<PartCategory>("Tipo")?
        .ok_or_else(|| AerocodeError::invalid_input("tipo de peça inválido"))?;
    let supplier = shell.ask("Fornecedor: ")?;
    let status = shell
        .choose::<PartStatus>("Status")?
        .unwrap_or(PartStatus::Ready);

    let message = format!("Peça {} cadastrada ({}).", name, status);
    shell.repo.register_part(
        &shell.session,
        Part::new(name, category, supplier, status, aircraft_code),
    )?;
    shell.success(&message)
}

/// Set a new status on the first part with the given name
pub fn update_status<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ANY)?;
    shell.heading("Atualizar Status da Peça")?;

    let name = shell.ask("Nome da peça (exato): ")?;
    let current = shell.repo.require_part(&name)?.status;
    shell.say(&format!("Status atual: {}", current))?;

    let status = shell
        .choose::<PartStatus>("Novo status")?
        .ok_or_else(|| AerocodeError::invalid_input("status de peça inválido"))?;

    shell.repo.update_part_status(&shell.session, &name, status)?;
    shell.success(&format!("Status atualizado para {}.", status))
}
