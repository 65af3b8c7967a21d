//! Login and employee registration

use crate::cli::prompt::Prompter;
use crate::cli::shell::Shell;
use crate::core::error::Result;
use crate::entities::{Employee, PermissionLevel};

/// Log in, replacing whoever was logged in before
pub fn login<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.heading("Login")?;
    let username = shell.ask("Usuário: ")?;
    let password = shell.ask_secret("Senha: ")?;

    let employee = shell.session.login(&shell.repo, &username, &password)?;
    let message = format!(
        "Bem-vindo, {} ({})",
        employee.name, employee.permission_level
    );
    shell.success(&message)
}

/// Register an employee; no login needed
pub fn register_employee<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.heading("Cadastro de Funcionário")?;

    let id = shell.ask_required("ID: ", "ID")?;
    shell.repo.ensure_employee_id_free(&id)?;

    let name = shell.ask("Nome: ")?;
    let phone = shell.ask("Telefone: ")?;
    let address = shell.ask("Endereço: ")?;

    let username = shell.ask_required("Usuário: ", "Usuário")?;
    shell.repo.ensure_username_free(&username)?;
    let password = shell.ask_secret("Senha: ")?;

    let permission_level = shell
        .choose::<PermissionLevel>("Nível de permissão")?
        .unwrap_or(PermissionLevel::Operator);

    let message = format!("Funcionário {} cadastrado como {}.", name, permission_level);
    shell.repo.register_employee(Employee {
        id,
        name,
        phone,
        address,
        username,
        password,
        permission_level,
    })?;
    shell.success(&message)
}
