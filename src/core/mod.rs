//! Core module - repository, domain rules and shared types

pub mod config;
pub mod entity;
pub mod error;
pub mod loader;
pub mod report;
pub mod repository;
pub mod session;
pub mod workflow;

pub use config::Config;
pub use entity::{Choice, Entity};
pub use error::{AerocodeError, Result};
pub use report::{AircraftReport, ReportMeta};
pub use repository::{Assignment, Repository};
pub use session::Session;
