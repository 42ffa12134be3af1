//! Diagnostics - inputs the estimator resolved to a default.
//!
//! Costing never fails on unknown or incomplete inputs. Each fallback is
//! recorded here and logged, so callers can surface or reject it.

use serde::Serialize;
use std::fmt;

use super::SubsystemKind;
use crate::domain::foundation::{DomainError, ErrorCode};

/// A single input that fell back to a default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// Context factor defaulted to 1.0.
    UnknownMissionDirector { name: String },

    /// Launch cost defaulted to zero.
    UnknownLaunchVehicle { name: String },

    /// Instrument cost defaulted to zero.
    #[serde(rename_all = "camelCase")]
    UnmatchedPayloadType {
        spacecraft_index: usize,
        name: String,
        function_type: String,
    },

    /// A large spacecraft without payload; payload cost is zero.
    #[serde(rename_all = "camelCase")]
    NoPayload { spacecraft_index: usize },

    /// Technology readiness level off the 1..=9 scale.
    #[serde(rename_all = "camelCase")]
    UnrecognizedTrl { spacecraft_index: usize, level: i32 },

    /// The design's record lacks a category the aggregator prices; that
    /// design contributes zero to it.
    #[serde(rename_all = "camelCase")]
    MissingSubsystem { design: usize, subsystem: SubsystemKind },
}

impl Diagnostic {
    /// Converts the diagnostic into a domain error for strict callers.
    pub fn to_domain_error(&self) -> DomainError {
        let error = DomainError::new(ErrorCode::UnresolvedInput, self.to_string());
        match self {
            Diagnostic::UnmatchedPayloadType {
                spacecraft_index, ..
            }
            | Diagnostic::NoPayload { spacecraft_index }
            | Diagnostic::UnrecognizedTrl {
                spacecraft_index, ..
            } => error.with_detail("spacecraftIndex", spacecraft_index.to_string()),
            Diagnostic::MissingSubsystem { design, .. } => {
                error.with_detail("design", design.to_string())
            }
            _ => error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownMissionDirector { name } => {
                write!(f, "unknown mission director '{}', context factor defaults to 1.0", name)
            }
            Diagnostic::UnknownLaunchVehicle { name } => {
                write!(f, "unknown launch vehicle '{}', launch cost defaults to 0", name)
            }
            Diagnostic::UnmatchedPayloadType {
                spacecraft_index,
                name,
                function_type,
            } => write!(
                f,
                "spacecraft {}: payload '{}' ({}) matches no instrument type, cost defaults to 0",
                spacecraft_index, name, function_type
            ),
            Diagnostic::NoPayload { spacecraft_index } => {
                write!(f, "spacecraft {}: no payload to cost", spacecraft_index)
            }
            Diagnostic::UnrecognizedTrl {
                spacecraft_index,
                level,
            } => write!(
                f,
                "spacecraft {}: technology readiness level {} is off scale",
                spacecraft_index, level
            ),
            Diagnostic::MissingSubsystem { design, subsystem } => {
                write!(f, "design {}: no '{}' cost record", design, subsystem)
            }
        }
    }
}

/// Ordered collection of diagnostics raised during one estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records and logs a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(diagnostic = %diagnostic, "costing input resolved to default");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::UnknownLaunchVehicle { name: "Saturn V".into() });
        diagnostics.push(Diagnostic::NoPayload { spacecraft_index: 2 });

        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics.iter().next(),
            Some(Diagnostic::UnknownLaunchVehicle { .. })
        ));
    }

    #[test]
    fn domain_error_carries_spacecraft_index() {
        let err = Diagnostic::NoPayload { spacecraft_index: 3 }.to_domain_error();
        assert_eq!(err.code, ErrorCode::UnresolvedInput);
        assert_eq!(err.details.get("spacecraftIndex"), Some(&"3".to_string()));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Diagnostic::MissingSubsystem {
            design: 1,
            subsystem: SubsystemKind::LaunchOps,
        })
        .unwrap();

        assert_eq!(json["kind"], "missingSubsystem");
        assert_eq!(json["design"], 1);
        assert_eq!(json["subsystem"], "launchOps");
    }

    #[test]
    fn display_names_the_input() {
        let text = Diagnostic::UnknownMissionDirector { name: "NGO".into() }.to_string();
        assert!(text.contains("'NGO'"));
    }
}
