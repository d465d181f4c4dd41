//! Time-budget gate configuration.

use serde::{Deserialize, Serialize};

/// Titles containing any of these keywords mark intro/wrap sections
/// that may be merged with an adjacent section of the same kind.
pub const DEFAULT_COMBINABLE_KEYWORDS: &[&str] =
    &["intro", "introduction", "warm", "review", "wrap", "close"];

/// Verbose transition lead-ins collapsed to "Next:".
pub const DEFAULT_TRANSITION_PHRASES: &[&str] = &[
    "Now let's move on to",
    "Let's transition to",
    "Moving forward to",
    "We will now proceed to",
    "Let's continue with",
];

/// Replacement token for optimized transitions.
pub const TRANSITION_REPLACEMENT: &str = "Next:";

/// Configuration for the time-budget gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeConfig {
    /// Budget utilization floor as a fraction of total time. Default: 0.8.
    pub underrun_factor: Option<f64>,
    /// Fraction of total time distributed during rebalance, holding the
    /// rest back as buffer. Default: 0.9.
    pub rebalance_buffer: Option<f64>,
    /// Minimum section count before merging is attempted. Default: 3.
    pub min_sections_to_combine: Option<usize>,
    /// Overrides for [`DEFAULT_COMBINABLE_KEYWORDS`] when non-empty.
    #[serde(default)]
    pub combinable_keywords: Vec<String>,
    /// Overrides for [`DEFAULT_TRANSITION_PHRASES`] when non-empty.
    #[serde(default)]
    pub transition_phrases: Vec<String>,
}

impl TimeConfig {
    pub fn effective_underrun_factor(&self) -> f64 {
        self.underrun_factor.unwrap_or(0.8)
    }

    pub fn effective_rebalance_buffer(&self) -> f64 {
        self.rebalance_buffer.unwrap_or(0.9)
    }

    pub fn effective_min_sections_to_combine(&self) -> usize {
        self.min_sections_to_combine.unwrap_or(3)
    }

    pub fn effective_combinable_keywords(&self) -> Vec<String> {
        if self.combinable_keywords.is_empty() {
            DEFAULT_COMBINABLE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.combinable_keywords.clone()
        }
    }

    pub fn effective_transition_phrases(&self) -> Vec<String> {
        if self.transition_phrases.is_empty() {
            DEFAULT_TRANSITION_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.transition_phrases.clone()
        }
    }
}
