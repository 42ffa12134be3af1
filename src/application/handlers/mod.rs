//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod estimate;

pub use estimate::{
    EstimateCostCommand, EstimateCostError, EstimateCostHandler, EstimateCostResult,
};
