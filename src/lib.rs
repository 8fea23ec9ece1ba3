//! Collects validation errors, either attached to a named field or global,
//! and serializes them for a client:
//!
//! ```text
//! {"Fields":{"email":[{"Message":"Required","Parameters":["{EMAIL}"]}]},"Globals":[]}
//! ```
//!
//! Nothing in here fails. The caller decides what to do once
//! [`ErrorCollection::has_error`] is true.

pub mod cli;
pub mod core;
pub mod macros;
pub mod utils;

// Export public types and functions
pub use crate::core::{
    label, label_key, CliError, CliResult, ErrorCollection, ErrorRecord, LogLevel, Parameter,
    ReportConfig,
};
