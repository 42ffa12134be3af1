//! Unmanned Space Vehicle Cost Model - separate RDTE and TFU CERs for
//! spacecraft of 1000 kg and up.
//!
//! Standard errors are fractions of each estimate. Payload comes from the
//! instrument model.

use super::{InstrumentModel, RegimeEstimate, SpacecraftInput};
use crate::domain::costing::{
    choose_cer_two_param, CostBreakdown, Diagnostics, SubsystemKind, SubsystemRecord,
};
use crate::domain::foundation::{CostEstimate, FiscalYear, TechReadinessLevel};

/// Propulsion RDTE by readiness tier, FY2012 k$.
const PROPULSION_NEW_DEVELOPMENT: f64 = 15165.18;
const PROPULSION_QUALIFIED: f64 = 3893.99;
const PROPULSION_FLIGHT_PROVEN: f64 = 421.38;

/// Parametric costing for large spacecraft.
pub struct UnmannedVehicleModel;

impl UnmannedVehicleModel {
    pub fn estimate(input: &SpacecraftInput<'_>, diagnostics: &mut Diagnostics) -> RegimeEstimate {
        let budget = &input.budget;
        let spec = input.spec;

        let bus: Vec<SubsystemRecord> = SubsystemKind::BUS
            .iter()
            .map(|&kind| {
                let mass = budget.subsystem_mass(kind);
                let cost = match kind {
                    SubsystemKind::Structure => Self::structure(mass),
                    SubsystemKind::Thermal => Self::thermal(mass, input.total_mass),
                    SubsystemKind::Eps => Self::eps(mass, spec.begin_life_power),
                    SubsystemKind::Ttc => Self::ttc(mass),
                    SubsystemKind::Adcs => Self::adcs(mass),
                    SubsystemKind::Propulsion => Self::propulsion(spec.tech_readiness_level),
                    _ => CostBreakdown::new(FiscalYear::BASE),
                };
                SubsystemRecord::sized(kind, budget, cost)
            })
            .collect();

        let bus_cost = CostBreakdown::sum(bus.iter().map(|r| &r.cost), FiscalYear::BASE);
        let payload_cost = InstrumentModel::estimate(input.index, spec, input.design_life, diagnostics);
        let total_cost = bus_cost.plus(&payload_cost);

        let spacecraft_rdte = total_cost.rdte().estimate;
        let spacecraft_tfu = total_cost.tfu().estimate;
        let dry_mass = budget.dry_mass;

        let mut subsystems = bus;
        subsystems.push(SubsystemRecord::sized(SubsystemKind::Payload, budget, payload_cost));
        subsystems.push(SubsystemRecord::sized(
            SubsystemKind::Iat,
            budget,
            Self::iat(spacecraft_rdte, dry_mass),
        ));
        subsystems.push(SubsystemRecord::sized(
            SubsystemKind::Program,
            budget,
            Self::program(spacecraft_rdte, spacecraft_tfu),
        ));
        subsystems.push(SubsystemRecord::sized(
            SubsystemKind::Ground,
            budget,
            Self::ground(spacecraft_rdte),
        ));
        subsystems.push(SubsystemRecord::sized(
            SubsystemKind::LaunchOps,
            budget,
            Self::launch_ops(dry_mass),
        ));

        RegimeEstimate {
            total_cost,
            subsystems,
        }
    }

    pub fn structure(mass: f64) -> CostBreakdown {
        Self::fractional(157.0 * mass.powf(0.83), 0.38, 13.1 * mass, 0.39)
    }

    /// RDTE picks the larger of the mass-only and mass-and-total-mass CERs.
    pub fn thermal(mass: f64, total_mass: f64) -> CostBreakdown {
        let by_mass = 394.0 * mass.powf(0.635);
        let by_mass_and_size = 1.1 * mass.powf(0.61) * total_mass.powf(0.943);
        let (rdte, rdte_error) =
            choose_cer_two_param((by_mass, 0.45 * by_mass), (by_mass_and_size, 0.32 * by_mass_and_size));
        let tfu = 50.6 * mass.powf(0.707);
        Self::from_estimates(rdte, rdte_error, tfu, 0.61 * tfu)
    }

    /// RDTE picks the larger of the mass-only and mass-times-power CERs.
    pub fn eps(mass: f64, begin_life_power: f64) -> CostBreakdown {
        let by_mass = 62.7 * mass;
        let by_mass_and_power = 2.63 * (mass * begin_life_power).powf(0.712);
        let (rdte, rdte_error) =
            choose_cer_two_param((by_mass, 0.57 * by_mass), (by_mass_and_power, 0.36 * by_mass_and_power));
        let tfu = 112.0 * mass.powf(0.763);
        Self::from_estimates(rdte, rdte_error, tfu, 0.44 * tfu)
    }

    pub fn ttc(mass: f64) -> CostBreakdown {
        Self::fractional(545.0 * mass.powf(0.761), 0.57, 635.0 * mass.powf(0.568), 0.41)
    }

    pub fn adcs(mass: f64) -> CostBreakdown {
        Self::fractional(464.0 * mass.powf(0.867), 0.48, 293.0 * mass.powf(0.777), 0.34)
    }

    /// Fixed development cost by readiness tier; no recurring cost.
    ///
    /// Levels above 9 price as flight proven.
    pub fn propulsion(level: TechReadinessLevel) -> CostBreakdown {
        let fy2012 = match level.value() {
            l if l <= 6 => PROPULSION_NEW_DEVELOPMENT,
            l if l <= 8 => PROPULSION_QUALIFIED,
            _ => PROPULSION_FLIGHT_PROVEN,
        };
        let rdte = FiscalYear::PROPULSION_REFERENCE.deflate_to_base(fy2012);
        Self::from_estimates(rdte, 0.0, 0.0, 0.0)
    }

    /// `spacecraft_rdte` is the whole-spacecraft RDTE estimate.
    pub fn iat(spacecraft_rdte: f64, dry_mass: f64) -> CostBreakdown {
        Self::fractional(989.0 + 0.215 * spacecraft_rdte, 0.46, 10.4 * dry_mass, 0.44)
    }

    pub fn program(spacecraft_rdte: f64, spacecraft_tfu: f64) -> CostBreakdown {
        Self::fractional(1.963 * spacecraft_rdte.powf(0.841), 0.36, 0.341 * spacecraft_tfu, 0.39)
    }

    pub fn ground(spacecraft_rdte: f64) -> CostBreakdown {
        Self::fractional(9.262 * spacecraft_rdte.powf(0.642), 0.34, 0.0, 0.0)
    }

    pub fn launch_ops(dry_mass: f64) -> CostBreakdown {
        Self::fractional(0.0, 0.0, 4.9 * dry_mass, 0.42)
    }

    fn fractional(rdte: f64, rdte_fraction: f64, tfu: f64, tfu_fraction: f64) -> CostBreakdown {
        Self::from_estimates(rdte, rdte_fraction * rdte, tfu, tfu_fraction * tfu)
    }

    fn from_estimates(rdte: f64, rdte_error: f64, tfu: f64, tfu_error: f64) -> CostBreakdown {
        CostBreakdown::from_parts(
            CostEstimate::new(rdte, rdte_error, FiscalYear::BASE),
            CostEstimate::new(tfu, tfu_error, FiscalYear::BASE),
            FiscalYear::BASE,
        )
    }
}
