//! Top-level Plangate configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ItemBankConfig, SafetyConfig, TimeConfig, UdlConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all gate configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PLANGATE_*`)
/// 2. Project config (`plangate.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlangateConfig {
    pub time: TimeConfig,
    pub safety: SafetyConfig,
    pub udl: UdlConfig,
    pub item_bank: ItemBankConfig,
}

impl PlangateConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("plangate.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PlangateConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("time.underrun_factor", config.time.underrun_factor),
            ("time.rebalance_buffer", config.time.rebalance_buffer),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if let Some(score) = config.udl.min_coverage_score {
            if !(0.0..=100.0).contains(&score) {
                return Err(ConfigError::ValidationFailed {
                    field: "udl.min_coverage_score".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        for (field, value) in [
            (
                "item_bank.content_coverage_threshold",
                config.item_bank.content_coverage_threshold,
            ),
            ("item_bank.clarity_threshold", config.item_bank.clarity_threshold),
            (
                "item_bank.relevance_threshold",
                config.item_bank.relevance_threshold,
            ),
            (
                "item_bank.difficulty_distribution_threshold",
                config.item_bank.difficulty_distribution_threshold,
            ),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PlangateConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: PlangateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when present.
    fn merge(base: &mut PlangateConfig, other: &PlangateConfig) {
        // Time
        if other.time.underrun_factor.is_some() {
            base.time.underrun_factor = other.time.underrun_factor;
        }
        if other.time.rebalance_buffer.is_some() {
            base.time.rebalance_buffer = other.time.rebalance_buffer;
        }
        if other.time.min_sections_to_combine.is_some() {
            base.time.min_sections_to_combine = other.time.min_sections_to_combine;
        }
        if !other.time.combinable_keywords.is_empty() {
            base.time.combinable_keywords = other.time.combinable_keywords.clone();
        }
        if !other.time.transition_phrases.is_empty() {
            base.time.transition_phrases = other.time.transition_phrases.clone();
        }

        // Safety
        if !other.safety.high_risk_keywords.is_empty() {
            base.safety.high_risk_keywords = other.safety.high_risk_keywords.clone();
        }
        if !other.safety.medium_risk_keywords.is_empty() {
            base.safety.medium_risk_keywords = other.safety.medium_risk_keywords.clone();
        }
        if !other.safety.hazardous_materials.is_empty() {
            base.safety.hazardous_materials = other.safety.hazardous_materials.clone();
        }
        if other.safety.moderate_hazard_limit.is_some() {
            base.safety.moderate_hazard_limit = other.safety.moderate_hazard_limit;
        }

        // UDL
        if other.udl.min_coverage_score.is_some() {
            base.udl.min_coverage_score = other.udl.min_coverage_score;
        }
        if other.udl.low_coverage_threshold.is_some() {
            base.udl.low_coverage_threshold = other.udl.low_coverage_threshold;
        }
        if other.udl.max_grade_level.is_some() {
            base.udl.max_grade_level = other.udl.max_grade_level;
        }
        if other.udl.max_vocabulary_entries.is_some() {
            base.udl.max_vocabulary_entries = other.udl.max_vocabulary_entries;
        }
        if other.udl.complex_word_length.is_some() {
            base.udl.complex_word_length = other.udl.complex_word_length;
        }

        // Item bank
        if other.item_bank.min_items_per_type.is_some() {
            base.item_bank.min_items_per_type = other.item_bank.min_items_per_type;
        }
        if other.item_bank.content_coverage_threshold.is_some() {
            base.item_bank.content_coverage_threshold =
                other.item_bank.content_coverage_threshold;
        }
        if other.item_bank.clarity_threshold.is_some() {
            base.item_bank.clarity_threshold = other.item_bank.clarity_threshold;
        }
        if other.item_bank.relevance_threshold.is_some() {
            base.item_bank.relevance_threshold = other.item_bank.relevance_threshold;
        }
        if other.item_bank.difficulty_distribution_threshold.is_some() {
            base.item_bank.difficulty_distribution_threshold =
                other.item_bank.difficulty_distribution_threshold;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PLANGATE_TIME_UNDERRUN_FACTOR`, `PLANGATE_UDL_MIN_COVERAGE_SCORE`, etc.
    fn apply_env_overrides(config: &mut PlangateConfig) {
        if let Ok(val) = std::env::var("PLANGATE_TIME_UNDERRUN_FACTOR") {
            if let Ok(v) = val.parse::<f64>() {
                config.time.underrun_factor = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PLANGATE_TIME_REBALANCE_BUFFER") {
            if let Ok(v) = val.parse::<f64>() {
                config.time.rebalance_buffer = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PLANGATE_UDL_MIN_COVERAGE_SCORE") {
            if let Ok(v) = val.parse::<f64>() {
                config.udl.min_coverage_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PLANGATE_UDL_MAX_GRADE_LEVEL") {
            if let Ok(v) = val.parse::<u32>() {
                config.udl.max_grade_level = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PLANGATE_ITEM_BANK_MIN_ITEMS_PER_TYPE") {
            if let Ok(v) = val.parse::<usize>() {
                config.item_bank.min_items_per_type = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PLANGATE_SAFETY_MODERATE_HAZARD_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.safety.moderate_hazard_limit = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
