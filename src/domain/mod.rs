//! Domain layer containing the costing model and its input types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects (cost estimate, fiscal year, TRL, errors)
//! - `mission` - The cost request as submitted
//! - `costing` - Spacecraft and constellation cost estimation

pub mod costing;
pub mod foundation;
pub mod mission;
