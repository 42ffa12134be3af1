//! Report Writer Port - persists the cost report document.

use async_trait::async_trait;

use super::{DocumentPath, StorageError};
use crate::domain::costing::CostReport;

/// Port for persisting cost reports.
///
/// # Contract
///
/// Implementations must:
/// - Replace any previous document at the same path
/// - Write atomically (a reader never observes a partial report)
/// - Encode with the report's own field names (`lifecycleCost`, ...)
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Write `report` to `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Encode` if the report cannot be serialized and
    /// an I/O variant if the document cannot be stored.
    async fn write(&self, path: &DocumentPath, report: &CostReport) -> Result<(), StorageError>;
}
