//! Menu command implementations, one module per area

pub mod aircraft;
pub mod auth;
pub mod part;
pub mod report;
pub mod stage;
pub mod test;
