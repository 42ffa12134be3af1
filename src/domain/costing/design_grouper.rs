//! Spacecraft Design Grouper - deduplicates designs and assigns planes.
//!
//! Two spacecraft share a design when everything that drives their cost
//! matches. Orbit placement, launch scheduling and spare status do not take
//! part, except that altitude matters when radiation tolerance depends on it.

use std::collections::HashMap;

use super::models::SpacecraftInput;
use super::{Diagnostics, SpacecraftCostRecord};
use crate::domain::foundation::TechReadinessLevel;
use crate::domain::mission::{PayloadSpec, SpacecraftSpec};

/// Bit pattern of a float with both zeros folded together.
///
/// NaN has a bit pattern too, so callers must keep NaN values out of key
/// comparisons; see [`DesignKey::for_spacecraft`].
fn float_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Compared only when positive; all non-positive values are equivalent.
fn optional_key(value: f64) -> Option<u64> {
    (value > 0.0).then(|| float_key(value))
}

/// Radiation requirement as it bears on design identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RadiationKey {
    /// Negative tolerance: the requirement follows the orbit altitude.
    AltitudeDependent { alt: u64 },
    Specified { tolerance: u64 },
}

impl RadiationKey {
    fn for_spacecraft(spec: &SpacecraftSpec) -> Self {
        if spec.radiation_tolerance < 0.0 {
            RadiationKey::AltitudeDependent {
                alt: float_key(spec.alt),
            }
        } else {
            RadiationKey::Specified {
                tolerance: float_key(spec.radiation_tolerance),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PayloadKey {
    name: String,
    design_life: u64,
    total_mass: u64,
    instrument_mass: u64,
    peak_power: u64,
    tech_readiness_level: TechReadinessLevel,
    mounting: String,
    aperture_diameter: Option<u64>,
    data_rate: Option<u64>,
}

impl From<&PayloadSpec> for PayloadKey {
    fn from(p: &PayloadSpec) -> Self {
        Self {
            name: p.name.clone(),
            design_life: float_key(p.design_life),
            total_mass: float_key(p.total_mass),
            instrument_mass: float_key(p.instrument_mass),
            peak_power: float_key(p.peak_power),
            tech_readiness_level: p.tech_readiness_level,
            mounting: p.mounting.clone(),
            aperture_diameter: optional_key(p.aperture_diameter),
            data_rate: optional_key(p.data_rate),
        }
    }
}

/// Canonical identity of a spacecraft design.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DesignKey {
    stabilization_type: String,
    total_dry_mass: u64,
    propellant_type: String,
    total_delta_v: u64,
    propellant_mass: u64,
    total_max_power: u64,
    peak_max_power: u64,
    begin_life_power: u64,
    end_life_power: u64,
    radiation: RadiationKey,
    station_keeping_mnvr_freq: u64,
    atm_drag_mnvr_freq: u64,
    can_mnvr_via_gnd_cmd: bool,
    pointing_accuracy: u64,
    comm_band_types: String,
    thermal_control_type: String,
    tech_readiness_level: TechReadinessLevel,
    payload: Vec<PayloadKey>,
}

impl From<&SpacecraftSpec> for DesignKey {
    fn from(s: &SpacecraftSpec) -> Self {
        Self {
            stabilization_type: s.stabilization_type.clone(),
            total_dry_mass: float_key(s.total_dry_mass),
            propellant_type: s.propellant_type.clone(),
            total_delta_v: float_key(s.total_delta_v),
            propellant_mass: float_key(s.propellant_mass),
            total_max_power: float_key(s.total_max_power),
            peak_max_power: float_key(s.peak_max_power),
            begin_life_power: float_key(s.begin_life_power),
            end_life_power: float_key(s.end_life_power),
            radiation: RadiationKey::for_spacecraft(s),
            station_keeping_mnvr_freq: float_key(s.station_keeping_mnvr_freq),
            atm_drag_mnvr_freq: float_key(s.atm_drag_mnvr_freq),
            can_mnvr_via_gnd_cmd: s.can_mnvr_via_gnd_cmd,
            pointing_accuracy: float_key(s.pointing_accuracy),
            comm_band_types: s.comm_band_types.clone(),
            thermal_control_type: s.thermal_control_type.clone(),
            tech_readiness_level: s.tech_readiness_level,
            payload: s.payload.iter().map(PayloadKey::from).collect(),
        }
    }
}

impl DesignKey {
    /// Key of a spacecraft, or `None` when a compared field is NaN. Such a
    /// spacecraft matches no other design, itself included.
    pub fn for_spacecraft(spec: &SpacecraftSpec) -> Option<Self> {
        (!Self::has_nan(spec)).then(|| Self::from(spec))
    }

    fn has_nan(s: &SpacecraftSpec) -> bool {
        let radiation = if s.radiation_tolerance < 0.0 {
            s.alt
        } else {
            s.radiation_tolerance
        };
        let spacecraft = [
            s.total_dry_mass,
            s.total_delta_v,
            s.propellant_mass,
            s.total_max_power,
            s.peak_max_power,
            s.begin_life_power,
            s.end_life_power,
            radiation,
            s.station_keeping_mnvr_freq,
            s.atm_drag_mnvr_freq,
            s.pointing_accuracy,
        ];
        spacecraft.iter().any(|v| v.is_nan())
            || s.payload.iter().any(|p| {
                [p.design_life, p.total_mass, p.instrument_mass, p.peak_power]
                    .iter()
                    .any(|v| v.is_nan())
            })
    }
}

/// Output of grouping a constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedDesigns {
    /// Number of distinct designs.
    pub designs: usize,
    /// Number of distinct inclinations; every NaN inclination is its own plane.
    pub planes: usize,
    /// One record per input spacecraft, in input order.
    pub records: Vec<SpacecraftCostRecord>,
}

/// Walks a constellation in order, costing each design once.
pub struct DesignGrouper;

impl DesignGrouper {
    pub fn group(spacecraft: &[SpacecraftSpec], design_life: f64, diagnostics: &mut Diagnostics) -> GroupedDesigns {
        let in_constellation = spacecraft.len() > 1;
        let mut first_with_design: HashMap<DesignKey, usize> = HashMap::new();
        let mut inclinations: HashMap<u64, usize> = HashMap::new();
        let mut records: Vec<SpacecraftCostRecord> = Vec::with_capacity(spacecraft.len());
        let mut designs = 0;
        let mut planes = 0;

        for (index, spec) in spacecraft.iter().enumerate() {
            let plane = if spec.incl.is_nan() {
                planes += 1;
                planes - 1
            } else {
                *inclinations.entry(float_key(spec.incl)).or_insert_with(|| {
                    planes += 1;
                    planes - 1
                })
            };

            let key = DesignKey::for_spacecraft(spec);
            let seen = key.as_ref().and_then(|k| first_with_design.get(k)).copied();
            let record = match seen {
                Some(seen) => records[seen].in_plane(plane),
                None => {
                    if let Some(key) = key {
                        first_with_design.insert(key, index);
                    }
                    let input = SpacecraftInput::new(index, spec, in_constellation, design_life);
                    let record = SpacecraftCostRecord::estimate(designs, plane, &input, diagnostics);
                    designs += 1;
                    record
                }
            };
            records.push(record);
        }

        tracing::debug!(
            spacecraft = records.len(),
            designs,
            planes,
            "grouped constellation designs"
        );

        GroupedDesigns {
            designs,
            planes,
            records,
        }
    }
}
