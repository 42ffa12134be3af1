//! Document storage adapters.
//!
//! - `FileDocumentStorage` - JSON/YAML files on the local filesystem
//! - `InMemoryDocumentStorage` - process-local maps, for tests and embedding

mod file_document_storage;
mod in_memory_document_storage;

pub use file_document_storage::FileDocumentStorage;
pub use in_memory_document_storage::InMemoryDocumentStorage;
