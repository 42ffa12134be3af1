//! Estimate command handlers.

mod estimate_cost;

pub use estimate_cost::{
    EstimateCostCommand, EstimateCostError, EstimateCostHandler, EstimateCostResult,
};
