//! Test entity - append-only test results recorded against an aircraft

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Choice, Entity};

/// Kind of test performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestCategory {
    #[serde(rename = "ELETRICO")]
    Electrical,
    #[serde(rename = "HIDRAULICO")]
    Hydraulic,
    #[serde(rename = "AERODINAMICO")]
    Aerodynamic,
}

impl std::fmt::Display for TestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestCategory::Electrical => write!(f, "ELETRICO"),
            TestCategory::Hydraulic => write!(f, "HIDRAULICO"),
            TestCategory::Aerodynamic => write!(f, "AERODINAMICO"),
        }
    }
}

impl std::str::FromStr for TestCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eletrico" | "elétrico" | "electrical" => Ok(TestCategory::Electrical),
            "hidraulico" | "hidráulico" | "hydraulic" => Ok(TestCategory::Hydraulic),
            "aerodinamico" | "aerodinâmico" | "aerodynamic" => Ok(TestCategory::Aerodynamic),
            _ => Err(format!("Tipo de teste desconhecido: {}", s)),
        }
    }
}

impl Choice for TestCategory {
    const ALL: &'static [Self] = &[
        TestCategory::Electrical,
        TestCategory::Hydraulic,
        TestCategory::Aerodynamic,
    ];
}

/// Test verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "APROVADO")]
    Passed,
    #[serde(rename = "REPROVADO")]
    Failed,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Passed => write!(f, "APROVADO"),
            Verdict::Failed => write!(f, "REPROVADO"),
        }
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aprovado" | "passed" | "pass" => Ok(Verdict::Passed),
            "reprovado" | "failed" | "fail" => Ok(Verdict::Failed),
            _ => Err(format!("Resultado desconhecido: {}", s)),
        }
    }
}

impl Choice for Verdict {
    const ALL: &'static [Self] = &[Verdict::Passed, Verdict::Failed];
}

/// A recorded test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub category: TestCategory,

    pub result: Verdict,

    pub aircraft_code: String,

    /// When the test was recorded
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Test {
    /// Record a test stamped with the current time
    pub fn new(category: TestCategory, result: Verdict, aircraft_code: impl Into<String>) -> Self {
        Self {
            category,
            result,
            aircraft_code: aircraft_code.into(),
            timestamp: Some(Utc::now()),
        }
    }

    /// Timestamp as RFC 3339 with milliseconds, or "N/A"
    pub fn timestamp_display(&self) -> String {
        self.timestamp
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl Entity for Test {
    const KIND: &'static str = "teste";
    const FILE_NAME: &'static str = "tests.json";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_is_timestamped() {
        let test = Test::new(TestCategory::Hydraulic, Verdict::Passed, "AC1");
        assert!(test.timestamp.is_some());
    }

    #[test]
    fn test_timestamp_display() {
        let mut test = Test::new(TestCategory::Electrical, Verdict::Failed, "AC1");
        test.timestamp = Some(Utc.with_ymd_and_hms(2025, 10, 4, 13, 5, 0).unwrap());
        assert_eq!(test.timestamp_display(), "2025-10-04T13:05:00.000Z");

        test.timestamp = None;
        assert_eq!(test.timestamp_display(), "N/A");
    }

    #[test]
    fn test_verdict_from_choice() {
        assert_eq!(Verdict::from_choice("1"), Some(Verdict::Passed));
        assert_eq!(Verdict::from_choice("2"), Some(Verdict::Failed));
        assert_eq!(Verdict::from_choice("3"), None);
    }

    #[test]
    fn test_category_menu_line() {
        assert_eq!(
            TestCategory::menu_line(),
            "1) ELETRICO  2) HIDRAULICO  3) AERODINAMICO"
        );
    }
}
