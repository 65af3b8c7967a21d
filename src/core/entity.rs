//! Entity trait - common interface for all record types

use serde::{de::DeserializeOwned, Serialize};

/// Common trait for all Aerocode records
pub trait Entity: Serialize + DeserializeOwned {
    /// Human-readable record kind, used in messages (e.g. "aeronave")
    const KIND: &'static str;

    /// File holding the whole collection inside the data directory
    const FILE_NAME: &'static str;
}

/// Enumerations picked from a numbered list in the shell
///
/// Options are numbered from 1 in the order of [`Choice::ALL`]. The label
/// shown by `Display` is also accepted, case-insensitively.
pub trait Choice: Copy + std::fmt::Display + std::str::FromStr + 'static {
    /// Every variant, in menu order
    const ALL: &'static [Self];

    /// Resolve user input to a variant
    fn from_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied();
        }
        input.parse().ok()
    }

    /// One-line rendering of the options, e.g. `1) COMERCIAL  2) MILITAR`
    fn menu_line() -> String {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}) {}", i + 1, c))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
