//! Observability system for Plangate.
//! `tracing` crate with `EnvFilter`, per-gate log levels.

pub mod setup;

pub use setup::init_tracing;
