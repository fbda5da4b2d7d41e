//! Command implementations for the fifteen CLI

pub mod analyze;
pub mod play;
