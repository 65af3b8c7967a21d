//! Employee entity and permission levels

use serde::{Deserialize, Serialize};

use crate::core::entity::{Choice, Entity};

/// Permission levels for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum PermissionLevel {
    #[serde(rename = "ADMINISTRADOR")]
    Admin,
    #[serde(rename = "ENGENHEIRO")]
    Engineer,
    #[serde(rename = "OPERADOR")]
    Operator,
}

impl PermissionLevel {
    /// Levels allowed to manage aircraft and stages
    pub const ENGINEERING: &'static [PermissionLevel] =
        &[PermissionLevel::Admin, PermissionLevel::Engineer];

    /// Every level; any logged-in employee qualifies
    pub const ANY: &'static [PermissionLevel] = &[
        PermissionLevel::Admin,
        PermissionLevel::Engineer,
        PermissionLevel::Operator,
    ];
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionLevel::Admin => write!(f, "ADMINISTRADOR"),
            PermissionLevel::Engineer => write!(f, "ENGENHEIRO"),
            PermissionLevel::Operator => write!(f, "OPERADOR"),
        }
    }
}

impl std::str::FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrador" | "admin" => Ok(PermissionLevel::Admin),
            "engenheiro" | "engineer" => Ok(PermissionLevel::Engineer),
            "operador" | "operator" => Ok(PermissionLevel::Operator),
            _ => Err(format!("Nível de permissão desconhecido: {}", s)),
        }
    }
}

impl Choice for PermissionLevel {
    const ALL: &'static [Self] = PermissionLevel::ANY;
}

/// A staff member who can log in and be assigned to stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique ID
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Unique login name
    pub username: String,
    /// Stored and compared in clear text
    pub password: String,
    pub permission_level: PermissionLevel,
}

impl Employee {
    /// Exact, case-sensitive credential match
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Check if the employee holds any of the given levels
    pub fn has_any_level(&self, levels: &[PermissionLevel]) -> bool {
        levels.contains(&self.permission_level)
    }
}

impl Entity for Employee {
    const KIND: &'static str = "funcionário";
    const FILE_NAME: &'static str = "employees.json";
}
