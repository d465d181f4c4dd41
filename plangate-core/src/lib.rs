//! # plangate-core
//!
//! Core types for the Plangate lesson-certification engine.
//! Provides the lesson data model, shared issue/recommendation report
//! shapes, the configuration system, error enums, the content-generation
//! boundary trait, and deterministic test fixtures.

pub mod config;
pub mod errors;
pub mod fixtures;
pub mod model;
pub mod provider;
pub mod report;
pub mod tracing;
