//! Configuration system for Plangate.
//! TOML-based, layered resolution: env > project > defaults.
//!
//! Every classification keyword table and severity threshold the gates
//! use lives here as data, so the rules can be extended per locale or
//! domain without touching gate logic.

pub mod item_bank_config;
pub mod plangate_config;
pub mod safety_config;
pub mod time_config;
pub mod udl_config;

pub use item_bank_config::ItemBankConfig;
pub use plangate_config::PlangateConfig;
pub use safety_config::SafetyConfig;
pub use time_config::TimeConfig;
pub use udl_config::UdlConfig;
