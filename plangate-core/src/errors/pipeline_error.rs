//! Pipeline errors.

use super::ConfigError;

/// Errors that can occur while composing or driving the gate pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The external content-generation collaborator failed to produce
    /// a draft. Its retry semantics are outside this core.
    #[error("Content provider error: {0}")]
    Provider(String),
}
