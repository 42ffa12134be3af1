//! Subsystem kinds, mass sizing and per-subsystem cost records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CostBreakdown;

/// Cost elements attached to a spacecraft: the hardware subsystems, the
/// payload, and the programmatic categories priced alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubsystemKind {
    Structure,
    Thermal,
    Eps,
    Ttc,
    Adcs,
    Propulsion,
    Payload,
    Iat,
    Program,
    Ground,
    LaunchOps,
}

impl SubsystemKind {
    /// The six bus subsystems, in costing order.
    pub const BUS: [SubsystemKind; 6] = [
        SubsystemKind::Structure,
        SubsystemKind::Thermal,
        SubsystemKind::Eps,
        SubsystemKind::Ttc,
        SubsystemKind::Adcs,
        SubsystemKind::Propulsion,
    ];

    /// Categories rolled up per design by the aggregator.
    pub const CATEGORIES: [SubsystemKind; 4] = [
        SubsystemKind::Iat,
        SubsystemKind::Program,
        SubsystemKind::Ground,
        SubsystemKind::LaunchOps,
    ];

    /// Name used in documents and logs.
    pub fn name(&self) -> &'static str {
        match self {
            SubsystemKind::Structure => "structure",
            SubsystemKind::Thermal => "thermal",
            SubsystemKind::Eps => "eps",
            SubsystemKind::Ttc => "ttc",
            SubsystemKind::Adcs => "adcs",
            SubsystemKind::Propulsion => "propulsion",
            SubsystemKind::Payload => "payload",
            SubsystemKind::Iat => "iat",
            SubsystemKind::Program => "program",
            SubsystemKind::Ground => "ground",
            SubsystemKind::LaunchOps => "launchOps",
        }
    }

    /// Share of spacecraft dry mass allotted to this subsystem.
    ///
    /// Spacecraft without propellant use a separate table with no
    /// propulsion share. Non-hardware kinds have no mass.
    pub fn mass_fraction(&self, carries_propellant: bool) -> f64 {
        match (self, carries_propellant) {
            (SubsystemKind::Structure, false) => 0.318718381100,
            (SubsystemKind::Structure, true) => 0.288990825700,
            (SubsystemKind::Thermal, false) => 0.035413153500,
            (SubsystemKind::Thermal, true) => 0.032110091700,
            (SubsystemKind::Eps, false) => 0.409780775700,
            (SubsystemKind::Eps, true) => 0.371559633000,
            (SubsystemKind::Ttc, false) => 0.057335581800,
            (SubsystemKind::Ttc, true) => 0.051987767600,
            (SubsystemKind::Adcs, false) => 0.075885328800,
            (SubsystemKind::Adcs, true) => 0.068807339400,
            (SubsystemKind::Propulsion, false) => 0.0,
            (SubsystemKind::Propulsion, true) => 0.093272171300,
            _ => 0.0,
        }
    }
}

impl fmt::Display for SubsystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mass-sizing inputs shared by every subsystem of one spacecraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBudget {
    pub dry_mass: f64,
    pub bus_mass: f64,
}

impl MassBudget {
    pub fn new(dry_mass: f64, bus_mass: f64) -> Self {
        Self { dry_mass, bus_mass }
    }

    /// A spacecraft carries propellant when its bus outweighs its dry mass.
    pub fn carries_propellant(&self) -> bool {
        self.bus_mass != self.dry_mass
    }

    /// Sized mass of one subsystem in kg.
    pub fn subsystem_mass(&self, kind: SubsystemKind) -> f64 {
        kind.mass_fraction(self.carries_propellant()) * self.dry_mass
    }
}

/// One costed subsystem of a spacecraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsystemRecord {
    pub kind: SubsystemKind,
    /// kg
    pub mass: f64,
    pub cost: CostBreakdown,
}

impl SubsystemRecord {
    /// Sizes the subsystem from the budget and attaches its cost.
    pub fn sized(kind: SubsystemKind, budget: &MassBudget, cost: CostBreakdown) -> Self {
        Self {
            kind,
            mass: budget.subsystem_mass(kind),
            cost,
        }
    }
}
