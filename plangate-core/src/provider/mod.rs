//! Content-generation boundary.
//!
//! The stage that turns a brief into draft content is an external
//! collaborator; this core only defines the call contract. The fixture
//! provider returns a deterministic canned draft for tests and demos.

use crate::errors::PipelineError;
use crate::fixtures;
use crate::model::{LessonBrief, LessonDraft};

/// Producer of draft lesson artifacts.
///
/// Implementations may call out to anything they like; this core never
/// defines their retry or failure semantics beyond the error type.
pub trait ContentProvider: Send + Sync {
    /// Produce a draft lesson for the given brief.
    fn generate(&self, brief: &LessonBrief) -> Result<LessonDraft, PipelineError>;
}

/// Deterministic provider backed by the built-in fixture unit.
/// Same brief → same draft across runs.
pub struct FixtureContentProvider;

impl ContentProvider for FixtureContentProvider {
    fn generate(&self, brief: &LessonBrief) -> Result<LessonDraft, PipelineError> {
        Ok(fixtures::solar_energy_draft(brief))
    }
}
