//! Stage entity - a unit of production work on one aircraft

use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;

/// Stage execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum StageStatus {
    #[default]
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "ANDAMENTO")]
    InProgress,
    #[serde(rename = "CONCLUIDA")]
    Done,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Pending => write!(f, "PENDENTE"),
            StageStatus::InProgress => write!(f, "ANDAMENTO"),
            StageStatus::Done => write!(f, "CONCLUIDA"),
        }
    }
}

/// A production stage
///
/// Stages of the same aircraft are ordered by registration, which is their
/// position in the repository collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub aircraft_code: String,

    pub name: String,

    /// Deadline in days
    #[serde(default)]
    pub deadline_days: u32,

    #[serde(default)]
    pub status: StageStatus,

    /// IDs of the employees assigned to this stage, each at most once
    #[serde(default)]
    pub assigned_employees: Vec<String>,
}

impl Stage {
    /// Create a pending stage with nobody assigned
    pub fn new(aircraft_code: impl Into<String>, name: impl Into<String>, deadline_days: u32) -> Self {
        Self {
            aircraft_code: aircraft_code.into(),
            name: name.into(),
            deadline_days,
            status: StageStatus::Pending,
            assigned_employees: Vec::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == StageStatus::Done
    }

    pub fn is_assigned(&self, employee_id: &str) -> bool {
        self.assigned_employees.iter().any(|id| id == employee_id)
    }

    /// Assign an employee; returns false if already assigned
    pub fn assign(&mut self, employee_id: &str) -> bool {
        if self.is_assigned(employee_id) {
            return false;
        }
        self.assigned_employees.push(employee_id.to_string());
        true
    }
}

impl Entity for Stage {
    const KIND: &'static str = "etapa";
    const FILE_NAME: &'static str = "stages.json";
}
