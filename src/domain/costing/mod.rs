//! Costing Module - constellation cost estimation.
//!
//! # Components
//!
//! - `CostBreakdown` - RDTE / TFU / total with quadrature error, CER choosers
//! - `SubsystemKind`, `SubsystemRecord` - subsystem sizing and costs
//! - `models` - CubeSat, small satellite, unmanned vehicle and instrument CERs
//! - `SpacecraftCostRecord` - one costed spacecraft
//! - `DesignGrouper` - duplicate design detection and plane assignment
//! - `ConstellationContext` - immutable inputs derived from a request
//! - `ConstellationAggregator` - category roll-ups, operations, ranking
//! - `ConstellationResult`, `CostReport` - outcome and result document
//! - `Diagnostics` - inputs that resolved to defaults
//!
//! # Pipeline
//!
//! `ConstellationContext::from_request` costs each design once, then
//! `ConstellationAggregator::aggregate` reads the context and produces a
//! result. Neither step performs I/O.

mod aggregator;
mod context;
mod cost_breakdown;
mod design_grouper;
mod diagnostics;
pub mod models;
mod result;
mod spacecraft_cost;
mod subsystem;

pub use aggregator::{
    ConstellationAggregator, LEARNING_FEW_COPIES, LEARNING_FLEET, LEARNING_MANY_COPIES,
};
pub use context::ConstellationContext;
pub use cost_breakdown::{
    choose_cer_three_case, choose_cer_two_param, CerCandidate, CostBreakdown, CER_RANGE_BUFFER,
};
pub use design_grouper::{DesignGrouper, DesignKey, GroupedDesigns};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use models::CostRegime;
pub use result::{ConstellationResult, CostReport, SpacecraftRank};
pub use spacecraft_cost::SpacecraftCostRecord;
pub use subsystem::{MassBudget, SubsystemKind, SubsystemRecord};

use crate::domain::mission::MissionRequest;

/// Costs a mission request end to end.
pub fn estimate(request: &MissionRequest) -> ConstellationResult {
    ConstellationAggregator::aggregate(&ConstellationContext::from_request(request))
}
