//! Part entity - components optionally attached to an aircraft

use serde::{Deserialize, Serialize};

use crate::core::entity::{Choice, Entity};

/// Where the part comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    #[serde(rename = "NACIONAL")]
    Domestic,
    #[serde(rename = "IMPORTADA")]
    Imported,
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartCategory::Domestic => write!(f, "NACIONAL"),
            PartCategory::Imported => write!(f, "IMPORTADA"),
        }
    }
}

impl std::str::FromStr for PartCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nacional" | "domestic" => Ok(PartCategory::Domestic),
            "importada" | "imported" => Ok(PartCategory::Imported),
            _ => Err(format!("Tipo de peça desconhecido: {}", s)),
        }
    }
}

impl Choice for PartCategory {
    const ALL: &'static [Self] = &[PartCategory::Domestic, PartCategory::Imported];
}

/// Part logistics status
///
/// Unlike stages, parts may move between any two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum PartStatus {
    #[default]
    #[serde(rename = "PRODUCAO")]
    InProduction,
    #[serde(rename = "TRANSPORTE")]
    InTransport,
    #[serde(rename = "PRONTA")]
    Ready,
}

impl std::fmt::Display for PartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartStatus::InProduction => write!(f, "PRODUCAO"),
            PartStatus::InTransport => write!(f, "TRANSPORTE"),
            PartStatus::Ready => write!(f, "PRONTA"),
        }
    }
}

impl std::str::FromStr for PartStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "producao" | "produção" | "in_production" => Ok(PartStatus::InProduction),
            "transporte" | "in_transport" => Ok(PartStatus::InTransport),
            "pronta" | "ready" => Ok(PartStatus::Ready),
            _ => Err(format!("Status de peça desconhecido: {}", s)),
        }
    }
}

impl Choice for PartStatus {
    const ALL: &'static [Self] = &[
        PartStatus::InProduction,
        PartStatus::InTransport,
        PartStatus::Ready,
    ];
}

/// A part, looked up by name (first match wins)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub name: String,

    pub category: PartCategory,

    pub supplier: String,

    #[serde(default)]
    pub status: PartStatus,

    /// Aircraft this part is attached to, if any
    #[serde(default)]
    pub aircraft_code: Option<String>,
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        category: PartCategory,
        supplier: impl Into<String>,
        status: PartStatus,
        aircraft_code: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            supplier: supplier.into(),
            status,
            aircraft_code,
        }
    }

    /// Whether this part is attached to the given aircraft
    pub fn belongs_to(&self, code: &str) -> bool {
        self.aircraft_code.as_deref() == Some(code)
    }
}

impl Entity for Part {
    const KIND: &'static str = "peça";
    const FILE_NAME: &'static str = "parts.json";
}
