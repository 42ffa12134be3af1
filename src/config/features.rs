//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Fail the run when any input resolved to a default
    #[serde(default)]
    pub strict_diagnostics: bool,
}
