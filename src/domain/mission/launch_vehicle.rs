//! Launch vehicle catalogue with FY2000 unit prices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Launch vehicles with a known unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchVehicle {
    AtlasII,
    AtlasIIA,
    AtlasIIAS,
    AtlasV,
    AthenaI,
    AthenaII,
    DeltaII,
    PegasusXL,
    MinotaurI,
    MinotaurIV,
    ArianeIVAr40,
    ArianeIVAr42p,
    ArianeIVAr44l,
    ArianeV,
    ProtonSl13,
    Falcon9,
}

impl LaunchVehicle {
    /// Every catalogued vehicle.
    pub const ALL: [LaunchVehicle; 16] = [
        LaunchVehicle::AtlasII,
        LaunchVehicle::AtlasIIA,
        LaunchVehicle::AtlasIIAS,
        LaunchVehicle::AtlasV,
        LaunchVehicle::AthenaI,
        LaunchVehicle::AthenaII,
        LaunchVehicle::DeltaII,
        LaunchVehicle::PegasusXL,
        LaunchVehicle::MinotaurI,
        LaunchVehicle::MinotaurIV,
        LaunchVehicle::ArianeIVAr40,
        LaunchVehicle::ArianeIVAr42p,
        LaunchVehicle::ArianeIVAr44l,
        LaunchVehicle::ArianeV,
        LaunchVehicle::ProtonSl13,
        LaunchVehicle::Falcon9,
    ];

    /// Name as it appears on mission documents.
    pub fn name(&self) -> &'static str {
        match self {
            LaunchVehicle::AtlasII => "Atlas II",
            LaunchVehicle::AtlasIIA => "Atlas II A",
            LaunchVehicle::AtlasIIAS => "Atlas II AS",
            LaunchVehicle::AtlasV => "Atlas V",
            LaunchVehicle::AthenaI => "Athena I",
            LaunchVehicle::AthenaII => "Athena II",
            LaunchVehicle::DeltaII => "Delta II",
            LaunchVehicle::PegasusXL => "Pegasus XL",
            LaunchVehicle::MinotaurI => "Minotaur I",
            LaunchVehicle::MinotaurIV => "Minotaur IV",
            LaunchVehicle::ArianeIVAr40 => "Ariane IV (AR40)",
            LaunchVehicle::ArianeIVAr42p => "Ariane IV (AR42P)",
            LaunchVehicle::ArianeIVAr44l => "Ariane IV (AR44L)",
            LaunchVehicle::ArianeV => "Ariane V (550 km)",
            LaunchVehicle::ProtonSl13 => "Proton SL-13",
            LaunchVehicle::Falcon9 => "Falcon 9",
        }
    }

    /// Price of one launch in FY2000 k$.
    pub fn unit_cost(&self) -> f64 {
        match self {
            LaunchVehicle::AtlasII => 90.0e3,
            LaunchVehicle::AtlasIIA => 95.0e3,
            LaunchVehicle::AtlasIIAS => 110.0e3,
            LaunchVehicle::AtlasV => 132.0e3,
            LaunchVehicle::AthenaI => 18.0e3,
            LaunchVehicle::AthenaII => 26.0e3,
            LaunchVehicle::DeltaII => 55.0e3,
            LaunchVehicle::PegasusXL => 13.0e3,
            LaunchVehicle::MinotaurI => 28.8e3,
            LaunchVehicle::MinotaurIV => 50.0e3,
            LaunchVehicle::ArianeIVAr40 => 65.0e3,
            LaunchVehicle::ArianeIVAr42p => 80.0e3,
            LaunchVehicle::ArianeIVAr44l => 120.0e3,
            LaunchVehicle::ArianeV => 130.0e3,
            LaunchVehicle::ProtonSl13 => 75.0e3,
            LaunchVehicle::Falcon9 => 62.0e3,
        }
    }
}

impl FromStr for LaunchVehicle {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the catalogue name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaunchVehicle::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("launch.vehicle", format!("unknown launch vehicle '{}'", s))
            })
    }
}

impl fmt::Display for LaunchVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
