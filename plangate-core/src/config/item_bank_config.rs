//! Item-bank gate configuration.

use serde::{Deserialize, Serialize};

use crate::model::item_bank::QualityMetric;

/// Configuration for the item-bank gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ItemBankConfig {
    /// Minimum items required per item type. Default: 3.
    pub min_items_per_type: Option<usize>,
    /// Minimum content coverage score. Default: 0.8.
    pub content_coverage_threshold: Option<f64>,
    /// Quality metric thresholds. Defaults: clarity 0.8, relevance 0.9,
    /// difficulty_distribution 0.7, content_coverage 0.8.
    pub clarity_threshold: Option<f64>,
    pub relevance_threshold: Option<f64>,
    pub difficulty_distribution_threshold: Option<f64>,
}

impl ItemBankConfig {
    pub fn effective_min_items_per_type(&self) -> usize {
        self.min_items_per_type.unwrap_or(3)
    }

    /// Threshold for the given quality metric.
    pub fn quality_threshold(&self, metric: QualityMetric) -> f64 {
        match metric {
            QualityMetric::Clarity => self.clarity_threshold.unwrap_or(0.8),
            QualityMetric::Relevance => self.relevance_threshold.unwrap_or(0.9),
            QualityMetric::DifficultyDistribution => {
                self.difficulty_distribution_threshold.unwrap_or(0.7)
            }
            QualityMetric::ContentCoverage => self.content_coverage_threshold.unwrap_or(0.8),
        }
    }

    pub fn effective_content_coverage_threshold(&self) -> f64 {
        self.quality_threshold(QualityMetric::ContentCoverage)
    }
}
