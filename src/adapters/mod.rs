//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Mission and report document storage (filesystem, in-memory)

pub mod storage;

pub use storage::{FileDocumentStorage, InMemoryDocumentStorage};
