//! Costing models - one cost estimating regime per spacecraft size class.
//!
//! # Components
//!
//! - `CubeSatModel` - decision table on total mass, up to 20 kg
//! - `SmallSatModel` - Small Satellite Cost Model, 20 to 1000 kg
//! - `UnmannedVehicleModel` - Unmanned Space Vehicle Cost Model, 1000 kg and up
//! - `InstrumentModel` - instrument (payload) costs for the unmanned regime
//!
//! Every model is a pure function of one spacecraft's inputs. Costs come out
//! in FY2000 k$.

mod cube_sat;
mod instrument;
mod small_sat;
mod unmanned_vehicle;

pub use cube_sat::CubeSatModel;
pub use instrument::{InstrumentModel, InstrumentType};
pub use small_sat::SmallSatModel;
pub use unmanned_vehicle::UnmannedVehicleModel;

use serde::Serialize;

use super::{CostBreakdown, Diagnostics, MassBudget, SubsystemKind, SubsystemRecord};
use crate::domain::foundation::FiscalYear;
use crate::domain::mission::SpacecraftSpec;

/// Inputs a regime needs to cost one spacecraft design.
#[derive(Debug, Clone, Copy)]
pub struct SpacecraftInput<'a> {
    /// Position of the spacecraft in the request.
    pub index: usize,
    pub spec: &'a SpacecraftSpec,
    pub budget: MassBudget,
    /// Bus plus payload, kg.
    pub total_mass: f64,
    /// More than one spacecraft in the request.
    pub in_constellation: bool,
    /// Constellation design life, months.
    pub design_life: f64,
}

impl<'a> SpacecraftInput<'a> {
    pub fn new(index: usize, spec: &'a SpacecraftSpec, in_constellation: bool, design_life: f64) -> Self {
        Self {
            index,
            spec,
            budget: MassBudget::new(spec.total_dry_mass, spec.bus_mass()),
            total_mass: spec.total_mass(),
            in_constellation,
            design_life,
        }
    }
}

/// What a regime produces for one spacecraft.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeEstimate {
    /// Whole-spacecraft cost (bus plus payload).
    pub total_cost: CostBreakdown,
    /// Subsystem and category records, in costing order.
    pub subsystems: Vec<SubsystemRecord>,
}

impl RegimeEstimate {
    /// No regime applied: zero cost, no records.
    pub fn empty() -> Self {
        Self {
            total_cost: CostBreakdown::new(FiscalYear::BASE),
            subsystems: Vec::new(),
        }
    }
}

/// Cost model family selected by spacecraft total mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CostRegime {
    CubeSat,
    SmallSat,
    UnmannedVehicle,
}

impl CostRegime {
    /// Heaviest spacecraft costed as a CubeSat, kg.
    pub const CUBE_SAT_MAX_MASS: f64 = 20.0;

    /// Lightest spacecraft costed as an unmanned vehicle, kg.
    pub const UNMANNED_VEHICLE_MIN_MASS: f64 = 1000.0;

    /// Routes by total mass. A NaN mass selects no regime.
    pub fn for_mass(total_mass: f64) -> Option<Self> {
        if total_mass <= Self::CUBE_SAT_MAX_MASS {
            Some(CostRegime::CubeSat)
        } else if total_mass > Self::CUBE_SAT_MAX_MASS && total_mass < Self::UNMANNED_VEHICLE_MIN_MASS {
            Some(CostRegime::SmallSat)
        } else if total_mass >= Self::UNMANNED_VEHICLE_MIN_MASS {
            Some(CostRegime::UnmannedVehicle)
        } else {
            None
        }
    }

    pub fn estimate(&self, input: &SpacecraftInput<'_>, diagnostics: &mut Diagnostics) -> RegimeEstimate {
        match self {
            CostRegime::CubeSat => CubeSatModel::estimate(input),
            CostRegime::SmallSat => SmallSatModel::estimate(input),
            CostRegime::UnmannedVehicle => UnmannedVehicleModel::estimate(input, diagnostics),
        }
    }
}

/// Share of spacecraft cost attributed to a programmatic category.
struct CategoryShare {
    kind: SubsystemKind,
    fraction: f64,
    rdte_weight: f64,
    tfu_weight: f64,
}

const CATEGORY_SHARES: [CategoryShare; 4] = [
    CategoryShare {
        kind: SubsystemKind::Iat,
        fraction: 0.139,
        rdte_weight: 0.0,
        tfu_weight: 1.0,
    },
    CategoryShare {
        kind: SubsystemKind::Program,
        fraction: 0.229,
        rdte_weight: 0.5,
        tfu_weight: 0.5,
    },
    CategoryShare {
        kind: SubsystemKind::Ground,
        fraction: 0.066,
        rdte_weight: 1.0,
        tfu_weight: 0.0,
    },
    CategoryShare {
        kind: SubsystemKind::LaunchOps,
        fraction: 0.061,
        rdte_weight: 0.0,
        tfu_weight: 1.0,
    },
];

/// Category records as fixed shares of a spacecraft-level estimate.
fn category_shares(budget: &MassBudget, estimate: f64, standard_error: f64) -> Vec<SubsystemRecord> {
    CATEGORY_SHARES
        .iter()
        .map(|share| {
            let cost = CostBreakdown::split(
                share.fraction * estimate,
                share.fraction * standard_error,
                share.rdte_weight,
                share.tfu_weight,
                FiscalYear::BASE,
            );
            SubsystemRecord::sized(share.kind, budget, cost)
        })
        .collect()
}
