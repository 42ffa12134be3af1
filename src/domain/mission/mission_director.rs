//! Mission director: who sponsors the mission.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionDirector {
    Government,
    Military,
    Commercial,
    Academic,
}

impl MissionDirector {
    /// Programmatic cost multiplier. Commercial programs run leaner.
    pub fn context_factor(&self) -> f64 {
        match self {
            MissionDirector::Commercial => 0.8,
            MissionDirector::Government | MissionDirector::Military | MissionDirector::Academic => 1.0,
        }
    }

    /// Factor applied when the director is not recognized.
    pub const DEFAULT_CONTEXT_FACTOR: f64 = 1.0;
}

impl FromStr for MissionDirector {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Government" => Ok(MissionDirector::Government),
            "Military" => Ok(MissionDirector::Military),
            "Commercial" => Ok(MissionDirector::Commercial),
            "Academic" => Ok(MissionDirector::Academic),
            other => Err(ValidationError::invalid_format(
                "context.missionDirector",
                format!("unknown mission director '{}'", other),
            )),
        }
    }
}
