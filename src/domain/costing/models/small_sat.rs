//! Small Satellite Cost Model - parametric subsystem CERs for 20 to 1000 kg.
//!
//! Every CER yields a total and a standard error in FY2000 k$, split into
//! RDTE and TFU by a fixed weight per subsystem.

use super::{category_shares, RegimeEstimate, SpacecraftInput};
use crate::domain::costing::{
    choose_cer_three_case, CerCandidate, CostBreakdown, MassBudget, SubsystemKind, SubsystemRecord,
};
use crate::domain::foundation::FiscalYear;

/// Payload cost as a share of bus cost.
const PAYLOAD_SHARE: f64 = 0.4;

/// Parametric costing for mid-size spacecraft.
pub struct SmallSatModel;

impl SmallSatModel {
    pub fn estimate(input: &SpacecraftInput<'_>) -> RegimeEstimate {
        let budget = &input.budget;
        let bus: Vec<SubsystemRecord> = SubsystemKind::BUS
            .iter()
            .map(|&kind| SubsystemRecord::sized(kind, budget, Self::bus_subsystem(kind, input)))
            .collect();

        let bus_cost = CostBreakdown::sum(bus.iter().map(|r| &r.cost), FiscalYear::BASE);
        let payload_cost = CostBreakdown::split(
            PAYLOAD_SHARE * bus_cost.total().estimate,
            PAYLOAD_SHARE * bus_cost.total().standard_error,
            0.6,
            0.4,
            FiscalYear::BASE,
        );
        let total_cost = bus_cost.plus(&payload_cost);

        // Category errors scale with the bus, not the whole spacecraft.
        let categories = category_shares(
            budget,
            total_cost.total().estimate,
            bus_cost.total().standard_error,
        );

        let mut subsystems = bus;
        subsystems.push(SubsystemRecord::sized(SubsystemKind::Payload, budget, payload_cost));
        subsystems.extend(categories);

        RegimeEstimate {
            total_cost,
            subsystems,
        }
    }

    fn bus_subsystem(kind: SubsystemKind, input: &SpacecraftInput<'_>) -> CostBreakdown {
        let budget = &input.budget;
        let spec = input.spec;
        match kind {
            SubsystemKind::Structure => Self::structure(budget.subsystem_mass(kind)),
            SubsystemKind::Thermal => Self::thermal(budget.subsystem_mass(kind)),
            SubsystemKind::Eps => Self::eps(
                budget.subsystem_mass(kind),
                spec.begin_life_power,
                spec.end_life_power,
            ),
            SubsystemKind::Ttc => Self::ttc(budget.subsystem_mass(kind)),
            SubsystemKind::Adcs => Self::adcs(budget.subsystem_mass(kind), spec.pointing_accuracy),
            SubsystemKind::Propulsion => Self::propulsion(budget),
            _ => CostBreakdown::new(FiscalYear::BASE),
        }
    }

    /// Structure on structure mass.
    pub fn structure(mass: f64) -> CostBreakdown {
        let total = 299.0 + 14.2 * mass * mass.ln();
        CostBreakdown::split(total, 1097.0, 0.7, 0.3, FiscalYear::BASE)
    }

    /// Thermal control on thermal mass.
    pub fn thermal(mass: f64) -> CostBreakdown {
        let total = 246.0 + 4.2 * mass.powi(2);
        CostBreakdown::split(total, 119.0, 0.5, 0.5, FiscalYear::BASE)
    }

    /// Electrical power: best supported of the mass, beginning-of-life power
    /// and end-of-life power CERs.
    pub fn eps(mass: f64, begin_life_power: f64, end_life_power: f64) -> CostBreakdown {
        let (total, error) = choose_cer_three_case(&[
            CerCandidate::new(mass, -926.0 + 396.0 * mass.powf(0.72), 910.0, 7.0, 70.0),
            CerCandidate::new(
                begin_life_power,
                -5850.0 + 4692.0 * begin_life_power.powf(0.15),
                1585.0,
                20.0,
                480.0,
            ),
            CerCandidate::new(
                end_life_power,
                131.0 + 401.0 * end_life_power.powf(0.452),
                1603.0,
                5.0,
                440.0,
            ),
        ]);
        CostBreakdown::split(total, error, 0.62, 0.38, FiscalYear::BASE)
    }

    /// Telemetry, tracking and command on its mass.
    pub fn ttc(mass: f64) -> CostBreakdown {
        let total = 841.0 + 95.6 * mass.powf(1.35);
        CostBreakdown::split(total, 1060.6399011917, 0.71, 0.29, FiscalYear::BASE)
    }

    /// Attitude determination and control: mass or pointing accuracy CER.
    ///
    /// The third slot is a placeholder that always sits below the mass CER
    /// with a degenerate range, so it never wins.
    pub fn adcs(mass: f64, pointing_accuracy: f64) -> CostBreakdown {
        let by_mass = 1358.0 + 8.58 * mass.powi(2);
        let (total, error) = choose_cer_three_case(&[
            CerCandidate::new(mass, by_mass, 1113.0, 1.0, 25.0),
            CerCandidate::new(
                pointing_accuracy,
                341.0 + 2651.0 * pointing_accuracy.powf(-0.5),
                1505.0,
                0.25,
                12.0,
            ),
            CerCandidate::new(-1.0, by_mass - 1.0, 0.0, 0.0, 0.0),
        ]);
        CostBreakdown::split(total, error, 0.37, 0.63, FiscalYear::BASE)
    }

    /// Propulsion on spacecraft dry mass.
    pub fn propulsion(budget: &MassBudget) -> CostBreakdown {
        let total = 65.6 + 2.19 * budget.dry_mass.powf(1.261);
        CostBreakdown::split(total, 310.0, 0.5, 0.5, FiscalYear::BASE)
    }
}
