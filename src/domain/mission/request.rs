//! Mission request records, decoded from the input document.
//!
//! Every field is optional on the wire; missing fields decode to zero,
//! `false` or the empty string. Scalars are coerced leniently (see
//! [`super::coerce`]).

use serde::{Deserialize, Serialize};

use super::coerce;
use crate::domain::foundation::{FiscalYear, TechReadinessLevel};

/// Top-level cost request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionRequest {
    #[serde(default)]
    pub constellation: Constellation,

    #[serde(default)]
    pub context: MissionContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constellation {
    /// Mission design life in months.
    #[serde(default, deserialize_with = "coerce::real")]
    pub design_life: f64,

    #[serde(default)]
    pub spacecraft: Vec<SpacecraftSpec>,
}

/// Engineering description of one physical spacecraft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacecraftSpec {
    #[serde(default, deserialize_with = "coerce::text")]
    pub stabilization_type: String,
    /// kg
    #[serde(default, deserialize_with = "coerce::real")]
    pub total_dry_mass: f64,
    #[serde(default, deserialize_with = "coerce::text")]
    pub propellant_type: String,
    /// m/s
    #[serde(default, deserialize_with = "coerce::real")]
    pub total_delta_v: f64,
    /// kg
    #[serde(default, deserialize_with = "coerce::real")]
    pub propellant_mass: f64,

    // Power, W
    #[serde(default, deserialize_with = "coerce::real")]
    pub total_max_power: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub peak_max_power: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub begin_life_power: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub end_life_power: f64,

    // Orbit
    #[serde(default, deserialize_with = "coerce::real")]
    pub alt: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub incl: f64,
    #[serde(rename = "RAAN", default, deserialize_with = "coerce::real")]
    pub raan: f64,

    #[serde(default, deserialize_with = "coerce::real")]
    pub station_keeping_mnvr_freq: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub atm_drag_mnvr_freq: f64,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub can_mnvr_via_gnd_cmd: bool,
    /// deg
    #[serde(default, deserialize_with = "coerce::real")]
    pub pointing_accuracy: f64,
    /// Negative means "depends on altitude".
    #[serde(default, deserialize_with = "coerce::real")]
    pub radiation_tolerance: f64,

    #[serde(default, deserialize_with = "coerce::text")]
    pub comm_band_types: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub thermal_control_type: String,

    // Launch scheduling
    #[serde(default, deserialize_with = "coerce::integer")]
    pub launch_number: i32,
    #[serde(default, deserialize_with = "coerce::integer")]
    pub launch_priority: i32,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub is_spare: bool,

    #[serde(default, deserialize_with = "coerce::integer")]
    pub tech_readiness_level: TechReadinessLevel,

    #[serde(default)]
    pub payload: Vec<PayloadSpec>,
}

impl SpacecraftSpec {
    /// Dry mass plus propellant.
    pub fn bus_mass(&self) -> f64 {
        self.total_dry_mass + self.propellant_mass
    }

    /// Sum of the payload masses.
    pub fn payload_mass(&self) -> f64 {
        self.payload.iter().map(|p| p.total_mass).sum()
    }

    /// Bus plus payload; selects the costing regime.
    pub fn total_mass(&self) -> f64 {
        self.bus_mass() + self.payload_mass()
    }
}

/// One instrument carried by a spacecraft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSpec {
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    /// months
    #[serde(default, deserialize_with = "coerce::real")]
    pub design_life: f64,
    #[serde(default, deserialize_with = "coerce::text")]
    pub function_type: String,
    #[serde(default, deserialize_with = "coerce::real")]
    pub total_mass: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub instrument_mass: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub peak_power: f64,
    #[serde(default, deserialize_with = "coerce::integer")]
    pub tech_readiness_level: TechReadinessLevel,
    #[serde(default, deserialize_with = "coerce::text")]
    pub mounting: String,
    /// m; only meaningful for telescopes.
    #[serde(default, deserialize_with = "coerce::real")]
    pub aperture_diameter: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub data_rate: f64,
}

/// Programmatic context of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionContext {
    #[serde(default, deserialize_with = "coerce::text")]
    pub mission_director: String,

    /// Fiscal year the outputs are expressed in.
    #[serde(default, deserialize_with = "coerce::integer")]
    pub fiscal_year: FiscalYear,

    #[serde(default)]
    pub launch: LaunchSpec,

    #[serde(rename = "groundStation", default)]
    pub ground_stations: Vec<GroundStation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpec {
    #[serde(default, deserialize_with = "coerce::text")]
    pub site: String,
    #[serde(default, deserialize_with = "coerce::integer")]
    pub year: i32,
    #[serde(default, deserialize_with = "coerce::text")]
    pub vehicle: String,
    /// Number of launches purchased.
    #[serde(default, deserialize_with = "coerce::integer")]
    pub total_number: i32,
    #[serde(default, deserialize_with = "coerce::real")]
    pub frequency: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub reliability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundStation {
    #[serde(default, deserialize_with = "coerce::real")]
    pub lat: f64,
    #[serde(default, deserialize_with = "coerce::real")]
    pub lon: f64,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub is_designated: bool,
    #[serde(default, deserialize_with = "coerce::text")]
    pub comm_band_types: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "constellation": {
            "designLife": 36,
            "spacecraft": [{
                "stabilizationType": "3-axis",
                "totalDryMass": 150,
                "propellantMass": 12.5,
                "beginLifePower": 300,
                "incl": 98.2,
                "RAAN": 45,
                "canMnvrViaGndCmd": 1,
                "techReadinessLevel": 7,
                "payload": [{"name": "Optical/Imager", "totalMass": 20, "peakPower": 40}]
            }]
        },
        "context": {
            "missionDirector": "Commercial",
            "fiscalYear": 2017,
            "launch": {"vehicle": "Falcon 9", "totalNumber": 2},
            "groundStation": [{"lat": 38.9, "lon": -76.8, "isDesignated": true}]
        }
    }"#;

    #[test]
    fn decodes_full_request() {
        let req: MissionRequest = serde_json::from_str(REQUEST).unwrap();

        assert_eq!(req.constellation.design_life, 36.0);
        let sc = &req.constellation.spacecraft[0];
        assert_eq!(sc.total_dry_mass, 150.0);
        assert_eq!(sc.raan, 45.0);
        assert!(sc.can_mnvr_via_gnd_cmd);
        assert_eq!(sc.tech_readiness_level, TechReadinessLevel::new(7));
        assert_eq!(sc.payload[0].name, "Optical/Imager");

        assert_eq!(req.context.fiscal_year, FiscalYear::new(2017));
        assert_eq!(req.context.launch.vehicle, "Falcon 9");
        assert_eq!(req.context.launch.total_number, 2);
        assert_eq!(req.context.ground_stations.len(), 1);
        assert!(req.context.ground_stations[0].is_designated);
    }

    #[test]
    fn derived_masses_sum_bus_and_payload() {
        let req: MissionRequest = serde_json::from_str(REQUEST).unwrap();
        let sc = &req.constellation.spacecraft[0];

        assert_eq!(sc.bus_mass(), 162.5);
        assert_eq!(sc.payload_mass(), 20.0);
        assert_eq!(sc.total_mass(), 182.5);
    }

    #[test]
    fn empty_document_decodes_to_defaults() {
        let req: MissionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.constellation.spacecraft.is_empty());
        assert_eq!(req.context.fiscal_year, FiscalYear::new(0));
        assert!(req.context.mission_director.is_empty());
    }

    #[test]
    fn serializes_with_document_field_names() {
        let req: MissionRequest = serde_json::from_str(REQUEST).unwrap();
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["constellation"]["spacecraft"][0]["RAAN"], 45.0);
        assert_eq!(json["constellation"]["spacecraft"][0]["totalDryMass"], 150.0);
        assert!(json["context"]["groundStation"].is_array());
    }
}
