//! File-based Document Storage Adapter
//!
//! Reads mission requests from JSON or YAML files and writes cost reports
//! as JSON files on disk.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::costing::CostReport;
use crate::domain::mission::MissionRequest;
use crate::ports::{DocumentFormat, DocumentPath, MissionReader, ReportWriter, StorageError};

/// Filesystem storage for mission and report documents.
///
/// # Atomic Writes
///
/// Reports are written with a write-to-temp-then-rename pattern:
/// 1. Write content to `{path}.tmp`
/// 2. Flush and sync to disk
/// 3. Rename to `{path}`
///
/// A failure at any step removes `{path}.tmp` before the error is returned.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = FileDocumentStorage::new().with_pretty(true);
///
/// let request = storage.read(&"bin/CostRisk.json".into()).await?;
/// storage.write(&"bin/CostRisk_Default.json".into(), &report).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileDocumentStorage {
    /// Indent written reports.
    pretty: bool,
}

impl FileDocumentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(path: &DocumentPath) -> PathBuf {
        let mut name = path.as_path().as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Decodes a mission request in the given format.
    fn decode(
        path: &DocumentPath,
        content: &str,
        format: DocumentFormat,
    ) -> Result<MissionRequest, StorageError> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content)
                .map_err(|e| StorageError::malformed(path.to_string_lossy(), e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| StorageError::malformed(path.to_string_lossy(), e.to_string())),
        }
    }

    fn encode(&self, path: &DocumentPath, report: &CostReport) -> Result<String, StorageError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        encoded.map_err(|e| StorageError::encode(path.to_string_lossy(), e.to_string()))
    }
}

#[async_trait]
impl MissionReader for FileDocumentStorage {
    async fn read(&self, path: &DocumentPath) -> Result<MissionRequest, StorageError> {
        let content = fs::read_to_string(path.as_path())
            .await
            .map_err(|e| StorageError::from_io(path, e))?;

        let request = Self::decode(path, &content, path.format())?;

        tracing::debug!(
            path = %path,
            format = ?path.format(),
            spacecraft = request.constellation.spacecraft.len(),
            "mission request read"
        );

        Ok(request)
    }
}

#[async_trait]
impl ReportWriter for FileDocumentStorage {
    async fn write(&self, path: &DocumentPath, report: &CostReport) -> Result<(), StorageError> {
        let content = self.encode(path, report)?;

        if let Some(parent) = path.as_path().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    StorageError::io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let temp_path = Self::temp_path(path);

        let persisted: std::io::Result<()> = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, path.as_path()).await
        }
        .await;

        if let Err(e) = persisted {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::from_io(path, e));
        }

        tracing::debug!(path = %path, bytes = content.len(), "cost report written");

        Ok(())
    }
}
