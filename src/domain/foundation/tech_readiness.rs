//! Technology readiness level value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Technology readiness level as reported on the request.
///
/// Any integer is accepted so that out-of-scale values resolve to
/// documented defaults instead of failing the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TechReadinessLevel(i32);

impl TechReadinessLevel {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 9;

    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    /// Creates a level, returning error if outside the 1-9 scale.
    pub fn try_new(level: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(ValidationError::out_of_range(
                "techReadinessLevel",
                Self::MIN,
                Self::MAX,
                level,
            ));
        }
        Ok(Self(level))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// True when the level lies on the 1-9 scale.
    pub fn is_on_scale(&self) -> bool {
        Self::try_new(self.0).is_ok()
    }

    /// RDTE multiplier for flight heritage: proven hardware costs less to
    /// develop. Off-scale levels get the neutral factor.
    pub fn heritage_factor(&self) -> f64 {
        match self.0 {
            9 => 0.2,
            8 => 0.3,
            7 => 0.4,
            6 => 0.6,
            5 => 0.7,
            4 => 0.9,
            3 => 1.0,
            2 => 1.1,
            1 => 1.3,
            _ => 1.0,
        }
    }
}

impl From<i32> for TechReadinessLevel {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

impl fmt::Display for TechReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRL {}", self.0)
    }
}
