//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Document Ports
//!
//! - `MissionReader` - Loads a mission request from a document
//! - `ReportWriter` - Stores the resulting cost report

mod document_storage;
mod mission_reader;
mod report_writer;

pub use document_storage::{DocumentFormat, DocumentPath, StorageError};
pub use mission_reader::MissionReader;
pub use report_writer::ReportWriter;
