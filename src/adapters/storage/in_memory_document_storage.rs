//! In-Memory Document Storage Adapter
//!
//! Holds mission requests and cost reports in memory.
//! Useful for testing and for embedding the estimator in another process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::costing::CostReport;
use crate::domain::mission::MissionRequest;
use crate::ports::{DocumentPath, MissionReader, ReportWriter, StorageError};

/// In-memory storage for mission and report documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStorage {
    missions: Arc<RwLock<HashMap<DocumentPath, MissionRequest>>>,
    reports: Arc<RwLock<HashMap<DocumentPath, CostReport>>>,
}

impl InMemoryDocumentStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a mission request to be read back at `path`
    pub async fn insert_mission(&self, path: impl Into<DocumentPath>, request: MissionRequest) {
        self.missions.write().await.insert(path.into(), request);
    }

    /// Report last written at `path`, if any
    pub async fn report(&self, path: &DocumentPath) -> Option<CostReport> {
        self.reports.read().await.get(path).cloned()
    }

    /// Get the number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl MissionReader for InMemoryDocumentStorage {
    async fn read(&self, path: &DocumentPath) -> Result<MissionRequest, StorageError> {
        self.missions
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path.to_string_lossy()))
    }
}

#[async_trait]
impl ReportWriter for InMemoryDocumentStorage {
    async fn write(&self, path: &DocumentPath, report: &CostReport) -> Result<(), StorageError> {
        self.reports
            .write()
            .await
            .insert(path.clone(), report.clone());
        Ok(())
    }
}
