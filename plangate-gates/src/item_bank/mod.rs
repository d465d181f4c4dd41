//! Item bank gate — assessment sufficiency and quality analysis.
//!
//! Operates on the aggregate [`ItemBank`] view: per-type counts,
//! difficulty spread, coverage, quality metrics, and duplicate/bias
//! findings. Synthesis and blueprint selection live in the `synthesis`
//! submodule; shape validation for individual items and rubrics in
//! `validate`.

mod synthesis;
mod validate;

use plangate_core::config::ItemBankConfig;
use plangate_core::model::{Difficulty, ItemBank, ItemType, QualityMetric};
use plangate_core::report::{GateId, GateReport, Issue, IssueKind, Recommendation, Severity, Strategy};
use serde::{Deserialize, Serialize};

/// One of the top prioritized remediation actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub action: String,
    pub priority: Severity,
    pub description: String,
    pub estimated_effort: String,
}

/// Evaluates item banks and synthesizes filler items.
pub struct ItemBankGate {
    config: ItemBankConfig,
}

impl ItemBankGate {
    pub fn new(config: ItemBankConfig) -> Self {
        Self { config }
    }

    /// Analyze an item bank for sufficiency, spread, coverage, quality,
    /// duplicates, and bias.
    pub fn detect(&self, bank: &ItemBank) -> GateReport {
        let mut report = GateReport::clean(GateId::ItemBank);
        let min_items = self.config.effective_min_items_per_type();

        for item_type in ItemType::ALL {
            let count = bank.count_of(item_type);
            if count < min_items {
                let severity = if count == 0 {
                    Severity::High
                } else {
                    Severity::Medium
                };
                report.issues.push(Issue::new(
                    IssueKind::InsufficientItems {
                        item_type,
                        current_count: count,
                        required_count: min_items,
                    },
                    severity,
                    format!("Insufficient {item_type} items ({count} < {min_items})"),
                ));
                report.recommendations.push(
                    Recommendation::new(
                        Strategy::IncreaseGeneratorCount {
                            item_type,
                            target_count: min_items,
                        },
                        format!("Increase {item_type} item generation"),
                        severity,
                    )
                    .with_implementation(vec![format!(
                        "Generate {} additional {item_type} items",
                        min_items - count
                    )]),
                );
            }
        }

        for difficulty in Difficulty::ALL {
            if bank.count_at(difficulty) == 0 {
                report.issues.push(Issue::new(
                    IssueKind::MissingDifficulty { difficulty },
                    Severity::Medium,
                    format!("No items at {difficulty} difficulty level"),
                ));
                report.recommendations.push(
                    Recommendation::new(
                        Strategy::AddDifficultyItems { difficulty },
                        format!("Add items at {difficulty} difficulty"),
                        Severity::Medium,
                    )
                    .with_implementation(vec![format!(
                        "Generate 3-5 {difficulty} difficulty items"
                    )]),
                );
            }
        }

        if let Some(coverage) = bank.content_coverage {
            let threshold = self.config.effective_content_coverage_threshold();
            if coverage.score < threshold {
                report.issues.push(Issue::new(
                    IssueKind::PoorContentCoverage {
                        score: coverage.score,
                        threshold,
                    },
                    Severity::Medium,
                    format!(
                        "Poor content coverage ({:.1}% < {:.1}%)",
                        coverage.score * 100.0,
                        threshold * 100.0
                    ),
                ));
                report.recommendations.push(
                    Recommendation::new(
                        Strategy::ExpandContentCoverage,
                        "Expand content coverage across topics",
                        Severity::Medium,
                    )
                    .with_implementation(vec![
                        "Identify missing content areas".to_string(),
                        "Generate items for uncovered topics".to_string(),
                        "Ensure balanced topic distribution".to_string(),
                    ]),
                );
            }
        }

        for metric in QualityMetric::ALL {
            if let Some(&score) = bank.quality_metrics.get(&metric) {
                let threshold = self.config.quality_threshold(metric);
                if score < threshold {
                    report.issues.push(Issue::new(
                        IssueKind::PoorQuality {
                            metric,
                            score,
                            threshold,
                        },
                        Severity::Medium,
                        format!(
                            "Poor {metric} quality ({:.1}% < {:.1}%)",
                            score * 100.0,
                            threshold * 100.0
                        ),
                    ));
                    report.recommendations.push(
                        Recommendation::new(
                            Strategy::ImproveItemQuality { metric },
                            format!("Improve {metric} quality"),
                            Severity::Medium,
                        )
                        .with_implementation(Self::quality_improvement_steps(metric)),
                    );
                }
            }
        }

        if !bank.duplicate_items.is_empty() {
            report.issues.push(Issue::new(
                IssueKind::Duplicates {
                    count: bank.duplicate_items.len(),
                },
                Severity::Low,
                format!("Found {} duplicate items", bank.duplicate_items.len()),
            ));
            report.recommendations.push(
                Recommendation::new(
                    Strategy::RemoveDuplicates,
                    "Remove duplicate items",
                    Severity::Low,
                )
                .with_implementation(vec![
                    "Identify and remove exact duplicates".to_string(),
                    "Consolidate similar items".to_string(),
                    "Maintain item bank uniqueness".to_string(),
                ]),
            );
        }

        if !bank.biased_items.is_empty() {
            report.issues.push(Issue::new(
                IssueKind::Bias {
                    count: bank.biased_items.len(),
                },
                Severity::High,
                format!(
                    "Found {} potentially biased items",
                    bank.biased_items.len()
                ),
            ));
            report.recommendations.push(
                Recommendation::new(Strategy::AddressBias, "Address biased items", Severity::High)
                    .with_implementation(vec![
                        "Review and revise biased items".to_string(),
                        "Ensure cultural sensitivity".to_string(),
                        "Apply bias detection filters".to_string(),
                    ]),
            );
        }

        report
    }

    /// Top five issues by severity, with a fixed action label and an
    /// effort bucket each. Stable order, so ties keep detection order.
    pub fn priority_actions(&self, report: &GateReport) -> Vec<PriorityAction> {
        let mut issues: Vec<&Issue> = report.issues.iter().collect();
        issues.sort_by(|a, b| b.severity.cmp(&a.severity));

        issues
            .into_iter()
            .take(5)
            .map(|issue| PriorityAction {
                action: Self::action_for(&issue.kind).to_string(),
                priority: issue.severity,
                description: issue.description.clone(),
                estimated_effort: Self::estimate_effort(&issue.kind).to_string(),
            })
            .collect()
    }

    fn action_for(kind: &IssueKind) -> &'static str {
        match kind {
            IssueKind::InsufficientItems { .. } => "Generate additional items",
            IssueKind::MissingDifficulty { .. } => "Add difficulty-specific items",
            IssueKind::PoorContentCoverage { .. } => "Expand content coverage",
            IssueKind::PoorQuality { .. } => "Improve item quality",
            IssueKind::Duplicates { .. } => "Remove duplicates",
            IssueKind::Bias { .. } => "Address bias issues",
            _ => "Review and improve",
        }
    }

    fn estimate_effort(kind: &IssueKind) -> &'static str {
        match kind {
            IssueKind::InsufficientItems {
                current_count,
                required_count,
                ..
            } => {
                let needed = required_count.saturating_sub(*current_count);
                if needed <= 3 {
                    "Low (1-2 hours)"
                } else if needed <= 10 {
                    "Medium (2-4 hours)"
                } else {
                    "High (4-8 hours)"
                }
            }
            IssueKind::Bias { .. } => "High (requires careful review)",
            IssueKind::PoorQuality { .. } => "Medium (2-4 hours)",
            _ => "Low (1-2 hours)",
        }
    }

    fn quality_improvement_steps(metric: QualityMetric) -> Vec<String> {
        let steps: &[&str] = match metric {
            QualityMetric::Clarity => &[
                "Simplify language and sentence structure",
                "Remove ambiguous wording",
                "Use clear, direct questions",
                "Provide clear answer choices",
            ],
            QualityMetric::Relevance => &[
                "Ensure alignment with learning objectives",
                "Connect to real-world applications",
                "Use current, relevant examples",
                "Match grade-level expectations",
            ],
            QualityMetric::DifficultyDistribution => &[
                "Balance easy, medium, and hard items",
                "Use difficulty calibration",
                "Ensure appropriate cognitive levels",
                "Match target student population",
            ],
            QualityMetric::ContentCoverage => &[
                "Cover all learning objectives",
                "Include various topic areas",
                "Ensure comprehensive assessment",
                "Balance different content types",
            ],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }

    /// True when remediation reduced the issue count, raised any
    /// per-type count, or raised any quality metric.
    pub fn validate_improvement(&self, before: &ItemBank, after: &ItemBank) -> bool {
        if self.detect(after).issues.len() < self.detect(before).issues.len() {
            return true;
        }

        if ItemType::ALL
            .iter()
            .any(|t| after.count_of(*t) > before.count_of(*t))
        {
            return true;
        }

        QualityMetric::ALL.iter().any(|m| {
            match (before.quality_metrics.get(m), after.quality_metrics.get(m)) {
                (Some(b), Some(a)) => a > b,
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plangate_core::model::CoverageScore;

    fn gate() -> ItemBankGate {
        ItemBankGate::new(ItemBankConfig::default())
    }

    fn full_bank() -> ItemBank {
        let mut bank = ItemBank::default();
        for item_type in ItemType::ALL {
            bank.item_counts.insert(item_type, 3);
        }
        for difficulty in Difficulty::ALL {
            bank.difficulty_distribution.insert(difficulty, 4);
        }
        bank
    }

    #[test]
    fn full_bank_passes() {
        assert!(gate().detect(&full_bank()).passed());
    }

    #[test]
    fn empty_type_is_high_partial_is_medium() {
        let mut bank = full_bank();
        bank.item_counts.insert(ItemType::Numeric, 0);
        bank.item_counts.insert(ItemType::Mcq, 2);
        let report = gate().detect(&bank);

        let numeric = report
            .issues
            .iter()
            .find(|i| {
                matches!(i.kind, IssueKind::InsufficientItems { item_type: ItemType::Numeric, .. })
            })
            .unwrap();
        assert_eq!(numeric.severity, Severity::High);

        let mcq = report
            .issues
            .iter()
            .find(|i| {
                matches!(i.kind, IssueKind::InsufficientItems { item_type: ItemType::Mcq, .. })
            })
            .unwrap();
        assert_eq!(mcq.severity, Severity::Medium);
    }

    #[test]
    fn coverage_below_threshold_is_flagged() {
        let mut bank = full_bank();
        bank.content_coverage = Some(CoverageScore { score: 0.75 });
        let report = gate().detect(&bank);
        assert!(report
            .issues
            .iter()
            .any(|i| matches!(i.kind, IssueKind::PoorContentCoverage { .. })));

        bank.content_coverage = Some(CoverageScore { score: 0.8 });
        assert!(gate().detect(&bank).passed());
    }

    #[test]
    fn quality_metrics_use_per_metric_thresholds() {
        let mut bank = full_bank();
        bank.quality_metrics.insert(QualityMetric::Relevance, 0.85);
        bank.quality_metrics.insert(QualityMetric::Clarity, 0.85);
        let report = gate().detect(&bank);
        // 0.85 fails the 0.9 relevance bar but passes the 0.8 clarity bar.
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(
            report.issues[0].kind,
            IssueKind::PoorQuality { metric: QualityMetric::Relevance, .. }
        ));
    }

    #[test]
    fn priority_actions_take_top_five_by_severity() {
        let mut bank = ItemBank::default();
        bank.biased_items.push("q9".to_string());
        let report = gate().detect(&bank);
        // 4 insufficient-type (High), 3 missing-difficulty (Medium), bias (High).
        assert_eq!(report.issues.len(), 8);

        let actions = gate().priority_actions(&report);
        assert_eq!(actions.len(), 5);
        assert!(actions.iter().all(|a| a.priority == Severity::High));
        assert_eq!(actions[4].action, "Address bias issues");
        assert_eq!(actions[4].estimated_effort, "High (requires careful review)");
    }

    #[test]
    fn improvement_via_fewer_issues_or_higher_counts() {
        let gate = gate();
        let weak = ItemBank::default();
        let mut better = full_bank();
        assert!(gate.validate_improvement(&weak, &better));

        better.quality_metrics.insert(QualityMetric::Clarity, 0.9);
        let mut best = better.clone();
        best.quality_metrics.insert(QualityMetric::Clarity, 0.95);
        assert!(gate.validate_improvement(&better, &best));
        assert!(!gate.validate_improvement(&best, &best.clone()));
    }
}
