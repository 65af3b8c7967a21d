//! Aircraft registration and listing

use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{parse_lenient_number, truncate_str};
use crate::cli::prompt::Prompter;
use crate::cli::shell::Shell;
use crate::core::error::{AerocodeError, Result};
use crate::entities::{Aircraft, AircraftCategory, PermissionLevel};

pub fn register<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.session.require_level(PermissionLevel::ENGINEERING)?;
    shell.heading("Cadastro de Aeronave")?;

    let code = shell.ask_required("Código: ", "Código")?;
    shell.repo.ensure_aircraft_code_free(&code)?;

    let model = shell.ask("Modelo: ")?;
    let category = shell
        .choose::<AircraftCategory>("Tipo")?
        .ok_or_else(|| AerocodeError::invalid_input("tipo de aeronave inválido"))?;
    let capacity = parse_lenient_number(&shell.ask("Capacidade: ")?);
    let range = parse_lenient_number(&shell.ask("Alcance (km): ")?);

    shell.repo.register_aircraft(
        &shell.session,
        Aircraft::new(code.as_str(), model, category, capacity, range),
    )?;
    shell.success(&format!("Aeronave {} cadastrada.", code))
}

/// Table of every aircraft with its part and stage counts
pub fn list<P: Prompter>(shell: &mut Shell<P>) -> Result<()> {
    shell.heading("Aeronaves")?;

    let repo = &shell.repo;
    if repo.aircraft().is_empty() {
        return shell.say("Nenhuma aeronave cadastrada.");
    }

    let mut table = Builder::default();
    table.push_record([
        "Código",
        "Modelo",
        "Tipo",
        "Capacidade",
        "Alcance",
        "Peças",
        "Etapas",
    ]);
    for aircraft in repo.aircraft() {
        table.push_record([
            aircraft.code.clone(),
            truncate_str(&aircraft.model, 30),
            aircraft.category.to_string(),
            aircraft.capacity.to_string(),
            format!("{} km", aircraft.range),
            repo.parts_of(&aircraft.code).count().to_string(),
            repo.stages_of(&aircraft.code).count().to_string(),
        ]);
    }

    let rendered = table.build().with(Style::rounded()).to_string();
    let total = repo.aircraft().len();
    shell.say(&rendered)?;
    shell.say(&format!("{} aeronave(s)", total))
}
