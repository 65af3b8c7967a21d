//! Final aircraft report
//!
//! Joins an aircraft with its parts, stages and tests and renders a plain
//! text document. Rendering depends only on repository state and the
//! optional metadata, so regenerating with the same input yields the same
//! file.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::error::{AerocodeError, Result};
use crate::core::loader;
use crate::core::repository::Repository;
use crate::entities::{Aircraft, Part, Stage, Test};

/// Shown in place of the assignee list when nobody is assigned
pub const NO_ASSIGNEES: &str = "Nenhum";

/// Optional header fields entered when the report is generated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMeta {
    pub client: Option<String>,
    pub delivery_date: Option<String>,
}

impl ReportMeta {
    /// Build from raw input, treating blank values as absent
    pub fn from_input(client: &str, delivery_date: &str) -> Self {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            client: non_blank(client),
            delivery_date: non_blank(delivery_date),
        }
    }
}

/// An aircraft joined with everything that references it
#[derive(Debug)]
pub struct AircraftReport<'a> {
    aircraft: &'a Aircraft,
    parts: Vec<&'a Part>,
    stages: Vec<(&'a Stage, Vec<String>)>,
    tests: Vec<&'a Test>,
    meta: ReportMeta,
}

impl<'a> AircraftReport<'a> {
    /// Gather the records of `code` in collection order
    pub fn assemble(repo: &'a Repository, code: &str, meta: ReportMeta) -> Result<Self> {
        let aircraft = repo.require_aircraft(code)?;
        let code = aircraft.code.as_str();
        let stages = repo
            .stages_of(code)
            .map(|stage| (stage, repo.assigned_names(stage)))
            .collect();

        Ok(Self {
            aircraft,
            parts: repo.parts_of(code).collect(),
            stages,
            tests: repo.tests_of(code).collect(),
            meta,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let a = self.aircraft;

        // Writing to a String cannot fail
        let _ = writeln!(out, "___ Relatório Final de Aeronave ___");
        if let Some(client) = &self.meta.client {
            let _ = writeln!(out, "Cliente: {}", client);
        }
        if let Some(date) = &self.meta.delivery_date {
            let _ = writeln!(out, "Data de entrega: {}", date);
        }
        out.push('\n');

        let _ = writeln!(out, "___ Aeronave ___");
        let _ = writeln!(out, "Código: {}", a.code);
        let _ = writeln!(out, "Modelo: {}", a.model);
        let _ = writeln!(out, "Tipo: {}", a.category);
        let _ = writeln!(out, "Capacidade: {}", a.capacity);
        let _ = writeln!(out, "Alcance: {}", a.range);
        out.push('\n');

        let _ = writeln!(out, "__ Peças __");
        if self.parts.is_empty() {
            let _ = writeln!(out, "Nenhuma peça associada.");
        }
        for (i, p) in self.parts.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. Nome: {}  Tipo: {}  Fornecedor: {}  Status: {}",
                i + 1,
                p.name,
                p.category,
                p.supplier,
                p.status
            );
        }
        out.push('\n');

        let _ = writeln!(out, "__ Etapas __");
        if self.stages.is_empty() {
            let _ = writeln!(out, "Nenhuma etapa.");
        }
        for (i, (s, names)) in self.stages.iter().enumerate() {
            let assignees = if names.is_empty() {
                NO_ASSIGNEES.to_string()
            } else {
                names.join(", ")
            };
            let _ = writeln!(
                out,
                "{}. Nome: {}  Prazo: {} dias  Status: {}  Funcionários: {}",
                i + 1,
                s.name,
                s.deadline_days,
                s.status,
                assignees
            );
        }
        out.push('\n');

        let _ = writeln!(out, "__ Testes __");
        if self.tests.is_empty() {
            let _ = writeln!(out, "Nenhum teste registrado.");
        }
        for (i, t) in self.tests.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. Tipo: {}  Resultado: {}  Data: {}",
                i + 1,
                t.category,
                t.result,
                t.timestamp_display()
            );
        }

        out
    }
}

/// File the report of `code` is written to
pub fn report_path(data_dir: &Path, code: &str) -> PathBuf {
    let safe: String = code
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    data_dir.join(format!("report_{}.txt", safe))
}

/// Render the report of `code` and write it next to the collection files,
/// replacing any previous version
pub fn generate(repo: &Repository, code: &str, meta: ReportMeta) -> Result<PathBuf> {
    let report = AircraftReport::assemble(repo, code, meta)?;
    let path = report_path(repo.data_dir(), code);

    loader::ensure_dir(repo.data_dir())?;
    fs::write(&path, report.render()).map_err(|source| AerocodeError::Storage {
        path: path.clone(),
        source,
    })?;

    info!(code, path = %path.display(), "report written");
    Ok(path)
}
