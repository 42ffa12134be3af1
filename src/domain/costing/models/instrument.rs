//! Instrument Model - payload costs for large spacecraft.
//!
//! CERs are calibrated in FY2015 k$ and converted to FY2000 k$ on the way
//! out. Only the first payload of a spacecraft is costed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::costing::{CostBreakdown, Diagnostic, Diagnostics};
use crate::domain::foundation::{FiscalYear, ValidationError};
use crate::domain::mission::{PayloadSpec, SpacecraftSpec};

/// Absolute standard error of the telescope CERs, FY2015 k$.
const TELESCOPE_ERROR: f64 = 0.23;

/// Instrument categories with a calibrated CER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    OpticalImager,
    ActiveMicrowave,
    PassiveMicrowave,
    FieldsDetection,
    Particle,
    ActiveAntenna,
    PassiveAntenna,
    VisibleTelescope,
    InfraredTelescope,
}

impl InstrumentType {
    pub const ALL: [InstrumentType; 9] = [
        InstrumentType::OpticalImager,
        InstrumentType::ActiveMicrowave,
        InstrumentType::PassiveMicrowave,
        InstrumentType::FieldsDetection,
        InstrumentType::Particle,
        InstrumentType::ActiveAntenna,
        InstrumentType::PassiveAntenna,
        InstrumentType::VisibleTelescope,
        InstrumentType::InfraredTelescope,
    ];

    /// Name as written in payload documents.
    pub fn name(&self) -> &'static str {
        match self {
            InstrumentType::OpticalImager => "Optical/Imager",
            InstrumentType::ActiveMicrowave => "Active Microwave Instruments",
            InstrumentType::PassiveMicrowave => "Passive Microwave Instruments",
            InstrumentType::FieldsDetection => "Fields Detection System",
            InstrumentType::Particle => "Particle System",
            InstrumentType::ActiveAntenna => "Antenna Subsystem (Active)",
            InstrumentType::PassiveAntenna => "Antenna Subsystem (Passive)",
            InstrumentType::VisibleTelescope => "Telescope (Visible/UV)",
            InstrumentType::InfraredTelescope => "Telescope (Infrared)",
        }
    }

    /// Resolves a payload by its name, then by its function type.
    pub fn for_payload(payload: &PayloadSpec) -> Option<Self> {
        payload
            .name
            .parse()
            .or_else(|_| payload.function_type.parse())
            .ok()
    }

    /// Hardware CER as `(total, standard_error)` in FY2015 k$.
    ///
    /// `mass` is payload mass (kg), `power` spacecraft peak power (W),
    /// `design_life` in months; telescopes use `aperture` (m) instead.
    pub fn hardware_cost(&self, mass: f64, power: f64, design_life: f64, aperture: f64) -> (f64, f64) {
        match self {
            InstrumentType::OpticalImager => (673.0 * mass.powf(0.48) * power.powf(0.51), 0.0),
            InstrumentType::ActiveMicrowave => (1244.0 * mass.powf(0.36) * power.powf(0.50), 0.0),
            InstrumentType::PassiveMicrowave => (1664.0 * mass.powf(0.38) * power.powf(0.40), 0.0),
            InstrumentType::FieldsDetection => (1646.0 * mass.powf(0.31) * power.powf(0.35), 0.0),
            InstrumentType::Particle => (
                233.0 * mass.powf(0.35) * power.powf(0.45) * design_life.powf(0.49),
                0.0,
            ),
            InstrumentType::ActiveAntenna => (23.0 * mass.powf(0.41) * power.powf(0.94), 0.0),
            InstrumentType::PassiveAntenna => (914.0 * mass.powf(0.70), 0.0),
            InstrumentType::VisibleTelescope => (49.0 * aperture.powf(1.47), TELESCOPE_ERROR),
            InstrumentType::InfraredTelescope => (95.4 * aperture.powf(1.47), TELESCOPE_ERROR),
        }
    }
}

impl FromStr for InstrumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("payload.name", format!("unknown instrument type '{}'", s))
            })
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instrument hardware and flight software costing.
pub struct InstrumentModel;

impl InstrumentModel {
    /// Costs the first payload of a spacecraft in FY2000 k$.
    ///
    /// A missing payload or an unrecognized type costs zero and is reported.
    pub fn estimate(
        index: usize,
        spec: &SpacecraftSpec,
        design_life: f64,
        diagnostics: &mut Diagnostics,
    ) -> CostBreakdown {
        let Some(payload) = spec.payload.first() else {
            diagnostics.push(Diagnostic::NoPayload {
                spacecraft_index: index,
            });
            return Self::from_hardware(0.0, 0.0);
        };

        let (total, error) = match InstrumentType::for_payload(payload) {
            Some(instrument) => instrument.hardware_cost(
                payload.total_mass,
                spec.peak_max_power,
                design_life,
                payload.aperture_diameter,
            ),
            None => {
                diagnostics.push(Diagnostic::UnmatchedPayloadType {
                    spacecraft_index: index,
                    name: payload.name.clone(),
                    function_type: payload.function_type.clone(),
                });
                (0.0, 0.0)
            }
        };

        Self::from_hardware(total, error)
    }

    /// Adds flight software to a hardware estimate (FY2015 k$) and converts
    /// both to FY2000 k$.
    pub fn from_hardware(total: f64, error: f64) -> CostBreakdown {
        let reference = FiscalYear::INSTRUMENT_REFERENCE;
        let software = reference.deflate_to_base(0.13 * total.powf(0.91));
        let hardware_cost = CostBreakdown::split(
            reference.deflate_to_base(total),
            reference.deflate_to_base(error),
            0.6,
            0.4,
            FiscalYear::BASE,
        );
        let software_cost = CostBreakdown::split(software, 0.0, 0.6, 0.4, FiscalYear::BASE);
        hardware_cost.plus(&software_cost)
    }
}
