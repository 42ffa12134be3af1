//! Mission Reader Port - loads mission requests.
//!
//! The costing engine works on an already decoded `MissionRequest`; this
//! port is where the document format and its location are resolved.

use async_trait::async_trait;

use super::{DocumentPath, StorageError};
use crate::domain::mission::MissionRequest;

/// Port for loading mission requests.
///
/// # Contract
///
/// Implementations must:
/// - Decode the document with the lenient mission schema (missing fields
///   default, scalars coerced)
/// - Report a missing document as `StorageError::NotFound`
/// - Report an undecodable document as `StorageError::Malformed`
///
/// # Usage
///
/// ```rust,ignore
/// let reader: Arc<dyn MissionReader> = Arc::new(FileMissionReader::new());
/// let request = reader.read(&"bin/CostRisk.json".into()).await?;
/// ```
#[async_trait]
pub trait MissionReader: Send + Sync {
    /// Read and decode the mission request at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if nothing exists at `path` and
    /// `StorageError::Malformed` if the content does not decode.
    async fn read(&self, path: &DocumentPath) -> Result<MissionRequest, StorageError>;
}
