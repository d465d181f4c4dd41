//! Error handling for Plangate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Gates themselves never error on malformed input — deficiencies become
//! issue records and parse failures degrade to defaults. These enums
//! cover genuine infrastructure faults only.

pub mod config_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use pipeline_error::PipelineError;
