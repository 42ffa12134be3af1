//! Spacecraft Cost Record - one costed spacecraft and its derived factors.

use serde::Serialize;

use super::models::{CostRegime, RegimeEstimate, SpacecraftInput};
use super::{CostBreakdown, Diagnostic, Diagnostics, SubsystemKind, SubsystemRecord};

/// Mass at which a spacecraft moves to the large-spacecraft reliability
/// factor, kg.
const RELIABILITY_MASS_THRESHOLD: f64 = 1000.0;

/// Derived costing for one physical spacecraft.
///
/// Spacecraft sharing a design share every field except `plane`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacecraftCostRecord {
    /// Index of the design, dense from 0 in order of first appearance.
    pub design: usize,
    /// Index of the orbital plane, dense from 0.
    pub plane: usize,
    pub dry_mass: f64,
    pub bus_mass: f64,
    pub total_mass: f64,
    /// `None` when the total mass selects no regime (NaN).
    pub regime: Option<CostRegime>,
    /// FY2000 k$.
    pub total_cost: CostBreakdown,
    pub heritage_factor: f64,
    pub reliability_factor: f64,
    pub subsystems: Vec<SubsystemRecord>,
}

impl SpacecraftCostRecord {
    /// Costs a newly seen design.
    pub fn estimate(
        design: usize,
        plane: usize,
        input: &SpacecraftInput<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let level = input.spec.tech_readiness_level;
        if !level.is_on_scale() {
            diagnostics.push(Diagnostic::UnrecognizedTrl {
                spacecraft_index: input.index,
                level: level.value(),
            });
        }

        let regime = CostRegime::for_mass(input.total_mass);
        let estimate = match regime {
            Some(regime) => regime.estimate(input, diagnostics),
            None => RegimeEstimate::empty(),
        };

        tracing::debug!(
            spacecraft = input.index,
            design,
            plane,
            total_mass = input.total_mass,
            ?regime,
            total_cost = estimate.total_cost.total().estimate,
            "costed spacecraft design"
        );

        Self {
            design,
            plane,
            dry_mass: input.budget.dry_mass,
            bus_mass: input.budget.bus_mass,
            total_mass: input.total_mass,
            regime,
            total_cost: estimate.total_cost,
            heritage_factor: level.heritage_factor(),
            reliability_factor: Self::reliability_factor_for_mass(input.total_mass),
            subsystems: estimate.subsystems,
        }
    }

    /// Copy of this record flying in another plane.
    pub fn in_plane(&self, plane: usize) -> Self {
        Self {
            plane,
            ..self.clone()
        }
    }

    /// First record of the given kind, if the regime produced one.
    pub fn subsystem(&self, kind: SubsystemKind) -> Option<&SubsystemRecord> {
        self.subsystems.iter().find(|s| s.kind == kind)
    }

    /// Reliability factor by total mass: 1.0 when massless, 0.11 below
    /// 1000 kg, 0.06 otherwise.
    pub fn reliability_factor_for_mass(total_mass: f64) -> f64 {
        if total_mass <= 0.0 {
            1.0
        } else if total_mass < RELIABILITY_MASS_THRESHOLD {
            0.11
        } else {
            0.06
        }
    }
}
