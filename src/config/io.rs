//! Document I/O configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::DocumentPath;

/// Where the mission request is read from and the report written to
#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    /// Mission request document (JSON, or YAML by extension)
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Cost report document (JSON)
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Indent the written report
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl IoConfig {
    pub fn input(&self) -> DocumentPath {
        DocumentPath::from(self.input_path.as_str())
    }

    pub fn output(&self) -> DocumentPath {
        DocumentPath::from(self.output_path.as_str())
    }

    /// Validate I/O configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("io.input_path"));
        }
        if self.output_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("io.output_path"));
        }
        if self.input() == self.output() {
            return Err(ValidationError::InputIsOutput(self.input_path.clone()));
        }
        Ok(())
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            pretty: default_pretty(),
        }
    }
}

fn default_input_path() -> String {
    "bin/CostRisk.json".to_string()
}

fn default_output_path() -> String {
    "bin/CostRisk_Default.json".to_string()
}

fn default_pretty() -> bool {
    true
}
