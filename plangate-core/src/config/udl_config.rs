//! UDL gate configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the UDL coverage gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UdlConfig {
    /// Minimum overall compliance percentage. Default: 70.
    pub min_coverage_score: Option<f64>,
    /// Below this percentage the coverage issue escalates to high
    /// severity. Default: 50.
    pub low_coverage_threshold: Option<f64>,
    /// Reading grade level above which a reading-level issue is raised.
    /// Default: 8.
    pub max_grade_level: Option<u32>,
    /// Complex-word count above which a vocabulary issue is raised.
    /// Default: 5.
    pub max_vocabulary_entries: Option<usize>,
    /// Length in characters above which a word counts as complex for
    /// the vocabulary-complexity scan. Default: 8.
    pub complex_word_length: Option<usize>,
}

impl UdlConfig {
    pub fn effective_min_coverage_score(&self) -> f64 {
        self.min_coverage_score.unwrap_or(70.0)
    }

    pub fn effective_low_coverage_threshold(&self) -> f64 {
        self.low_coverage_threshold.unwrap_or(50.0)
    }

    pub fn effective_max_grade_level(&self) -> u32 {
        self.max_grade_level.unwrap_or(8)
    }

    pub fn effective_max_vocabulary_entries(&self) -> usize {
        self.max_vocabulary_entries.unwrap_or(5)
    }

    pub fn effective_complex_word_length(&self) -> usize {
        self.complex_word_length.unwrap_or(8)
    }
}
