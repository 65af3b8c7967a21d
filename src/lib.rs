//! Aerocode: aircraft production tracker
//!
//! Records aircraft, parts, production stages, staff and test results as
//! JSON files in a data directory, and writes a final text report per
//! aircraft.

pub mod cli;
pub mod core;
pub mod entities;
pub mod logging;
