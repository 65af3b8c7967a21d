//! Test result registration

use crate::cli::prompt::Prompter;
use crate::cli::shell::Shell;
use crate::core::error::{AerocodeError, Result};
use crate::entities::{PermissionLevel, Test, TestCategory, Verdict};

/// Record a test result against an aircraft, stamped with the current time
pub fn register<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ANY)?;
    shell.heading("Registro de Teste")?;

    let category = shell
        .choose::<TestCategory>("Tipo")?
        .ok_or_else(|| AerocodeError::invalid_input("tipo de teste inválido"))?;
    let result = shell
        .choose::<Verdict>("Resultado")?
        .ok_or_else(|| AerocodeError::invalid_input("resultado inválido"))?;
    let code = shell.ask("Código da aeronave testada: ")?;

    let message = format!("Teste {} registrado para {}: {}.", category, code, result);
    shell
        .repo
        .register_test(&shell.session, Test::new(category, result, code))?;
    shell.success(&message)
}

#[cfg(test)]
mod tests {
    use crate::cli::shell::tests::{run_script, ENGINEER_LOGIN};
    use crate::entities::{TestCategory, Verdict};
    use tempfile::tempdir;

    #[test]
    fn test_register_test() {
        let dir = tempdir().unwrap();
        let script = format!("{ENGINEER_LOGIN}3\nAC1\nE195\n1\n1\n1\n12\n3\n2\nAC1\n0\n");
        let (shell, out) = run_script(&dir, &script);
        assert!(out.contains("Teste AERODINAMICO registrado para AC1: REPROVADO."));

        let test = &shell.repo().tests()[0];
        assert_eq!(test.category, TestCategory::Aerodynamic);
        assert_eq!(test.result, Verdict::Failed);
        assert!(test.timestamp.is_some());
    }

    #[test]
    fn test_invalid_choices() {
        let dir = tempdir().unwrap();
        let script = format!("{ENGINEER_LOGIN}12\n4\n12\n1\n3\n12\n1\n1\nAC9\n0\n");
        let (shell, out) = run_script(&dir, &script);
        assert!(out.contains("tipo de teste inválido"));
        assert!(out.contains("resultado inválido"));
        assert!(out.contains("Não encontrado: aeronave 'AC9'"));
        assert!(shell.repo().tests().is_empty());
    }
}
