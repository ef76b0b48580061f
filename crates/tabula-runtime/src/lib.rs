//! # tabula-runtime
//!
//! Runs tool calls as external helper processes.
//!
//! A call is routed through the catalog to one of two helper scripts,
//! launched as `<interpreter> <script> <tool> <json-args>`, and its
//! buffered stdout is interpreted as a JSON result envelope. Use
//! `HelperDispatcher` for the whole pipeline, or `ProcessExecutor` to run
//! a prepared `HelperInvocation` directly.

pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod invocation;
pub mod outcome;
pub mod paths;
pub mod types;

pub use dispatcher::HelperDispatcher;
pub use error::RuntimeError;
pub use executor::ProcessExecutor;
pub use invocation::HelperInvocation;
pub use outcome::interpret_output;
pub use paths::HelperPaths;
pub use types::{HelperExecutor, HelperOutput};
