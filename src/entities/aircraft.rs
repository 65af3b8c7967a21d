//! Aircraft entity - the natural key every other record points at

use serde::{Deserialize, Serialize};

use crate::core::entity::{Choice, Entity};

/// Aircraft category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    #[serde(rename = "COMERCIAL")]
    Commercial,
    #[serde(rename = "MILITAR")]
    Military,
}

impl std::fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AircraftCategory::Commercial => write!(f, "COMERCIAL"),
            AircraftCategory::Military => write!(f, "MILITAR"),
        }
    }
}

impl std::str::FromStr for AircraftCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comercial" | "commercial" => Ok(AircraftCategory::Commercial),
            "militar" | "military" => Ok(AircraftCategory::Military),
            _ => Err(format!("Tipo de aeronave desconhecido: {}", s)),
        }
    }
}

impl Choice for AircraftCategory {
    const ALL: &'static [Self] = &[AircraftCategory::Commercial, AircraftCategory::Military];
}

/// An aircraft under production
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    /// Unique code referenced by parts, stages and tests
    pub code: String,

    pub model: String,

    pub category: AircraftCategory,

    /// Passenger capacity
    #[serde(default)]
    pub capacity: u32,

    /// Range in km
    #[serde(default)]
    pub range: u32,
}

impl Aircraft {
    pub fn new(
        code: impl Into<String>,
        model: impl Into<String>,
        category: AircraftCategory,
        capacity: u32,
        range: u32,
    ) -> Self {
        Self {
            code: code.into(),
            model: model.into(),
            category,
            capacity,
            range,
        }
    }
}

impl Entity for Aircraft {
    const KIND: &'static str = "aeronave";
    const FILE_NAME: &'static str = "aircraft.json";
}
