//! Safety gate configuration — risk keyword tables as data.

use serde::{Deserialize, Serialize};

/// Material keywords that classify an activity as high risk.
pub const DEFAULT_HIGH_RISK_KEYWORDS: &[&str] = &[
    "heat", "fire", "flame", "matches", "chemical", "acid", "base", "sharp", "blade",
    "electrical", "voltage",
];

/// Material keywords that classify an activity as medium risk.
pub const DEFAULT_MEDIUM_RISK_KEYWORDS: &[&str] =
    &["scissors", "thermometer", "fan", "motor", "battery", "wire"];

/// Keywords marking materials as hazardous for the hazard scan.
pub const DEFAULT_HAZARDOUS_MATERIALS: &[&str] = &[
    "matches",
    "lighters",
    "fire",
    "flame",
    "heat_source",
    "alcohol",
    "ethanol",
    "methanol",
    "acetone",
    "acid",
    "base",
    "chemical",
    "toxic",
    "poison",
    "explosive",
    "flammable",
    "corrosive",
    "radioactive",
];

/// Configuration for the safety gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SafetyConfig {
    /// Overrides for [`DEFAULT_HIGH_RISK_KEYWORDS`] when non-empty.
    #[serde(default)]
    pub high_risk_keywords: Vec<String>,
    /// Overrides for [`DEFAULT_MEDIUM_RISK_KEYWORDS`] when non-empty.
    #[serde(default)]
    pub medium_risk_keywords: Vec<String>,
    /// Overrides for [`DEFAULT_HAZARDOUS_MATERIALS`] when non-empty.
    #[serde(default)]
    pub hazardous_materials: Vec<String>,
    /// Hazard-match count above which the scan reports "high". Default: 2.
    pub moderate_hazard_limit: Option<usize>,
}

impl SafetyConfig {
    pub fn effective_high_risk_keywords(&self) -> Vec<String> {
        if self.high_risk_keywords.is_empty() {
            DEFAULT_HIGH_RISK_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.high_risk_keywords.clone()
        }
    }

    pub fn effective_medium_risk_keywords(&self) -> Vec<String> {
        if self.medium_risk_keywords.is_empty() {
            DEFAULT_MEDIUM_RISK_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.medium_risk_keywords.clone()
        }
    }

    pub fn effective_hazardous_materials(&self) -> Vec<String> {
        if self.hazardous_materials.is_empty() {
            DEFAULT_HAZARDOUS_MATERIALS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.hazardous_materials.clone()
        }
    }

    pub fn effective_moderate_hazard_limit(&self) -> usize {
        self.moderate_hazard_limit.unwrap_or(2)
    }
}
