//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! costing domain.

mod cost_estimate;
mod errors;
mod fiscal_year;
mod ids;
mod tech_readiness;

pub use cost_estimate::CostEstimate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fiscal_year::FiscalYear;
pub use ids::RunId;
pub use tech_readiness::TechReadinessLevel;
