//! Production stages: registration, listing, staffing and progress

use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::parse_lenient_number;
use crate::cli::prompt::Prompter;
use crate::cli::shell::Shell;
use crate::core::error::Result;
use crate::core::report::NO_ASSIGNEES;
use crate::core::repository::Assignment;
use crate::entities::{PermissionLevel, Stage};

pub fn register<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ENGINEERING)?;
    shell.heading("Cadastro de Etapa")?;

    let code = shell.ask("Código da aeronave: ")?;
    shell.repo.require_aircraft(&code)?;

    let name = shell.ask("Nome da etapa: ")?;
    let deadline = parse_lenient_number(&shell.ask("Prazo (em dias): ")?);

    let message = format!("Etapa {} cadastrada para {}.", name, code);
    shell
        .repo
        .register_stage(&shell.session, Stage::new(code, name, deadline))?;
    shell.success(&message)
}

/// Stages of one aircraft, in the order they must be carried out
pub fn list<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.heading("Etapas da Aeronave")?;
    let code = shell.ask("Código da aeronave: ")?;

    let repo = &shell.repo;
    let mut table = Builder::default();
    table.push_record(["#", "Nome", "Prazo", "Status", "Funcionários"]);

    let mut count = 0;
    for (i, stage) in repo.stages_of(&code).enumerate() {
        let names = repo.assigned_names(stage);
        let staff = if names.is_empty() {
            NO_ASSIGNEES.to_string()
        } else {
            names.join(", ")
        };
        table.push_record([
            (i + 1).to_string(),
            stage.name.clone(),
            format!("{} dias", stage.deadline_days),
            stage.status.to_string(),
            staff,
        ]);
        count += 1;
    }

    if count == 0 {
        return shell.say("Nenhuma etapa encontrada para esta aeronave.");
    }
    let rendered = table.build().with(Style::rounded()).to_string();
    shell.say(&rendered)
}

/// Put an employee on a stage; open to everyone
pub fn assign<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.heading("Associar Funcionário a Etapa")?;

    let stage = shell.ask("Nome da etapa: ")?;
    shell.repo.require_stage(&stage)?;
    let employee = shell.ask("ID do funcionário: ")?;

    match shell.repo.assign_employee(&stage, &employee)? {
        Assignment::Added => shell.success("Funcionário associado à etapa."),
        Assignment::AlreadyAssigned => shell.notice("Funcionário já está associado a esta etapa."),
    }
}

pub fn start<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ENGINEERING)?;
    shell.heading("Iniciar Etapa")?;

    let name = shell.ask("Nome da etapa: ")?;
    shell.repo.start_stage(&shell.session, &name)?;
    shell.success(&format!("Etapa {} iniciada.", name))
}

pub fn finish<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ENGINEERING)?;
    shell.heading("Finalizar Etapa")?;

    let name = shell.ask("Nome da etapa: ")?;
    shell.repo.finish_stage(&shell.session, &name)?;
    shell.success(&format!("Etapa {} finalizada.", name))
}

#[cfg(test)]
mod tests {
    use crate::cli::shell::tests::{run_script, ENGINEER_LOGIN};
    use crate::entities::StageStatus;
    use tempfile::tempdir;

    fn with_stages(rest: &str) -> String {
        format!(
            "{ENGINEER_LOGIN}3\nAC1\nE195\n1\n120\n4000\n\
             7\nAC1\nA\n5\n7\nAC1\nB\n3\n7\nAC1\nC\nx\n{rest}"
        )
    }

    #[test]
    fn test_register_stage() {
        let dir = tempdir().unwrap();
        let (shell, out) = run_script(&dir, &with_stages("0\n"));
        assert!(out.contains("Etapa A cadastrada para AC1."));
        let stages = shell.repo().stages();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[2].deadline_days, 0);
        assert!(stages.iter().all(|s| s.status == StageStatus::Pending));
    }

    #[test]
    fn test_register_stage_unknown_aircraft() {
        let dir = tempdir().unwrap();
        let (shell, out) = run_script(&dir, &format!("{ENGINEER_LOGIN}7\nAC9\n0\n"));
        assert!(out.contains("Não encontrado: aeronave 'AC9'"));
        assert!(!out.contains("Nome da etapa: "));
        assert!(shell.repo().stages().is_empty());
    }

    #[test]
    fn test_operator_cannot_register_stage() {
        let dir = tempdir().unwrap();
        let script = "2\nO1\nOp\n1\nRua\nop\npw\n3\n1\nop\npw\n7\n0\n";
        let (shell, out) = run_script(&dir, script);
        assert!(out.contains("Permissão insuficiente"));
        assert!(shell.repo().stages().is_empty());
    }

    #[test]
    fn test_sequencing() {
        let dir = tempdir().unwrap();
        let script = with_stages("10\nB\n11\nA\n10\nA\n10\nA\n11\nA\n10\nB\n0\n");
        let (shell, out) = run_script(&dir, &script);
        assert!(out.contains("etapas anteriores não concluídas (A)"));
        assert!(out.contains("Transição inválida na etapa 'A': PENDENTE → CONCLUIDA"));
        assert!(out.contains("Transição inválida na etapa 'A': ANDAMENTO → ANDAMENTO"));
        assert!(out.contains("Etapa A finalizada."));
        assert!(out.contains("Etapa B iniciada."));

        let stages = shell.repo().stages();
        assert_eq!(stages[0].status, StageStatus::Done);
        assert_eq!(stages[1].status, StageStatus::InProgress);
        assert_eq!(stages[2].status, StageStatus::Pending);
    }

    #[test]
    fn test_assign_and_list() {
        let dir = tempdir().unwrap();
        let script = with_stages("9\nA\nE1\n9\nA\nE1\n9\nZ\n9\nB\nE9\n8\nAC1\n8\nAC2\n0\n");
        let (shell, out) = run_script(&dir, &script);
        assert!(out.contains("Funcionário associado à etapa."));
        assert!(out.contains("Funcionário já está associado a esta etapa."));
        assert!(out.contains("Não encontrado: etapa 'Z'"));
        assert!(out.contains("Não encontrado: funcionário 'E9'"));
        assert!(out.contains("Nenhuma etapa encontrada para esta aeronave."));
        assert!(out.contains("5 dias"));
        assert!(out.contains("Eng"));
        assert!(out.contains("Nenhum"));
        assert_eq!(shell.repo().stages()[0].assigned_employees, vec!["E1"]);
    }
}
