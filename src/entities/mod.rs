//! Entity type definitions
//!
//! Aerocode tracks the following records:
//!
//! - [`Aircraft`] - Aircraft under production, keyed by code
//! - [`Part`] - Components, optionally attached to an aircraft
//! - [`Stage`] - Ordered production stages of an aircraft
//! - [`Employee`] - Staff with login credentials and a permission level
//! - [`Test`] - Test results recorded against an aircraft

pub mod aircraft;
pub mod employee;
pub mod part;
pub mod stage;
pub mod test;

pub use aircraft::{Aircraft, AircraftCategory};
pub use employee::{Employee, PermissionLevel};
pub use part::{Part, PartCategory, PartStatus};
pub use stage::{Stage, StageStatus};
pub use test::{Test, TestCategory, Verdict};
