//! # tabula-types
//!
//! Domain types for the tabula dispatcher.
//! This crate contains pure data types: the tool catalog, the helper
//! result envelope and the shared error vocabulary. It performs no I/O.

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod tool;

// Re-exports for convenience.
pub use catalog::ToolCatalog;
pub use envelope::ResultEnvelope;
pub use error::{DiagnosticError, ErrorKind, TabulaError};
pub use tool::{HelperKind, ToolDescriptor, UnknownToolPolicy};
