//! Plangate gates — quality gates and deterministic remediation.
//!
//! Four gates inspect a [`plangate_core::model::LessonDraft`] and classify
//! deficiencies by severity: time budget, safety documentation, UDL
//! coverage, and item-bank strength. Each gate pairs detection with a
//! deterministic repair path, and the [`pipeline`] module composes them
//! into a single certification run.

pub mod item_bank;
pub mod pipeline;
pub mod safety;
pub mod time;
pub mod udl;

pub use pipeline::{CertificationReport, Pipeline, QualityGate};
