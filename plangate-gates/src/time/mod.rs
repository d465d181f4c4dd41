//! Time budget gate — priority-weighted allocation and overrun analysis.
//!
//! Sections are weighted by priority (high 3, medium 2, low 1). Every
//! non-last section receives `max(1, floor(weight/total_weight * total))`
//! minutes and the last section absorbs the exact remainder, so allocated
//! minutes always sum to the budget. The remainder is deliberately not
//! clamped: a negative last section means the weighted minimums alone
//! exceed the budget, which `validate_budget` surfaces as an infeasible
//! plan.

mod restructure;

pub use restructure::{DayPlan, SplitPlan};

use aho_corasick::AhoCorasick;
use plangate_core::config::TimeConfig;
use plangate_core::errors::ConfigError;
use plangate_core::model::Section;
use plangate_core::report::{GateId, GateReport, Issue, IssueKind, Recommendation, Severity, Strategy};

/// Outcome of checking allocated minutes against the period budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCheck {
    pub status: BudgetStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Valid,
    Overrun,
    Underrun,
    Infeasible,
}

impl BudgetCheck {
    pub fn is_valid(&self) -> bool {
        self.status == BudgetStatus::Valid
    }
}

/// Allocates time across sections and analyzes budget violations.
pub struct TimeAllocator {
    config: TimeConfig,
    transition_matcher: AhoCorasick,
}

impl TimeAllocator {
    pub fn new(config: TimeConfig) -> Result<Self, ConfigError> {
        let transition_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(config.effective_transition_phrases())
            .map_err(|e| ConfigError::ValidationFailed {
                field: "time.transition_phrases".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            config,
            transition_matcher,
        })
    }

    /// Distribute `total_time` minutes across `sections` by priority weight.
    ///
    /// The returned sections always sum to exactly `total_time`. The last
    /// section's duration can be negative when the per-section minimum of
    /// one minute leaves no remainder.
    pub fn allocate(&self, sections: &[Section], total_time: i32) -> Vec<Section> {
        if sections.is_empty() {
            return Vec::new();
        }

        let total_weight: i64 = sections.iter().map(|s| s.priority.weight()).sum();
        let mut remaining = total_time;
        let mut result = Vec::with_capacity(sections.len());

        for (i, section) in sections.iter().enumerate() {
            let duration = if i == sections.len() - 1 {
                remaining
            } else {
                let weight = section.priority.weight();
                let share = (weight * total_time as i64 / total_weight) as i32;
                let d = share.max(1);
                remaining -= d;
                d
            };
            let mut allocated = section.clone();
            allocated.duration_minutes = duration;
            result.push(allocated);
        }

        result
    }

    /// Check allocated minutes against the budget.
    ///
    /// Overrun when allocated exceeds the budget; underrun when allocated
    /// falls strictly below the underrun factor (default 80%) of the
    /// budget. A plan with any negative section duration is infeasible.
    pub fn validate_budget(&self, sections: &[Section], total_time: i32) -> BudgetCheck {
        let deficit: i32 = sections
            .iter()
            .filter(|s| s.duration_minutes < 0)
            .map(|s| -s.duration_minutes)
            .sum();
        if deficit > 0 {
            return BudgetCheck {
                status: BudgetStatus::Infeasible,
                message: format!("Time budget infeasible: plan is short by {deficit} minutes"),
            };
        }

        let allocated: i32 = sections.iter().map(|s| s.duration_minutes).sum();
        if allocated > total_time {
            let overrun = allocated - total_time;
            BudgetCheck {
                status: BudgetStatus::Overrun,
                message: format!("Time budget overrun by {overrun} minutes"),
            }
        } else if (allocated as f64) < total_time as f64 * self.config.effective_underrun_factor() {
            let underrun = total_time - allocated;
            BudgetCheck {
                status: BudgetStatus::Underrun,
                message: format!("Time budget underutilized by {underrun} minutes"),
            }
        } else {
            BudgetCheck {
                status: BudgetStatus::Valid,
                message: "Time budget is valid".to_string(),
            }
        }
    }

    /// Analyze the budget and produce a gate report with remediation
    /// recommendations sized to the overrun severity.
    pub fn detect(&self, sections: &[Section], total_time: i32) -> GateReport {
        let mut report = GateReport::clean(GateId::TimeBudget);
        let check = self.validate_budget(sections, total_time);

        match check.status {
            BudgetStatus::Valid => {}
            BudgetStatus::Infeasible => {
                let deficit: i32 = sections
                    .iter()
                    .filter(|s| s.duration_minutes < 0)
                    .map(|s| -s.duration_minutes)
                    .sum();
                report.issues.push(Issue::new(
                    IssueKind::AllocationInfeasible { deficit },
                    Severity::High,
                    check.message.clone(),
                ));
                report.recommendations.push(
                    Recommendation::new(
                        Strategy::SplitLesson,
                        "Split lesson into two days",
                        Severity::High,
                    )
                    .with_savings("Full deficit amount"),
                );
            }
            BudgetStatus::Underrun => {
                let allocated: i32 = sections.iter().map(|s| s.duration_minutes).sum();
                report.issues.push(Issue::new(
                    IssueKind::Underrun {
                        minutes: total_time - allocated,
                    },
                    Severity::Low,
                    check.message.clone(),
                ));
            }
            BudgetStatus::Overrun => {
                let allocated: i32 = sections.iter().map(|s| s.duration_minutes).sum();
                let overrun = allocated - total_time;
                let percentage = overrun as f64 / total_time as f64 * 100.0;
                let severity = Self::overrun_severity(percentage);
                report.issues.push(Issue::new(
                    IssueKind::Overrun {
                        minutes: overrun,
                        percentage,
                    },
                    severity,
                    check.message.clone(),
                ));
                report
                    .recommendations
                    .extend(Self::overrun_recommendations(percentage));
            }
        }

        report
    }

    fn overrun_severity(percentage: f64) -> Severity {
        if percentage <= 10.0 {
            Severity::Low
        } else if percentage <= 25.0 {
            Severity::Medium
        } else {
            Severity::High
        }
    }

    fn overrun_recommendations(percentage: f64) -> Vec<Recommendation> {
        if percentage <= 10.0 {
            vec![
                Recommendation::new(
                    Strategy::ReduceDuration,
                    "Reduce duration of non-critical sections",
                    Severity::Medium,
                )
                .with_savings("5-10 minutes"),
                Recommendation::new(
                    Strategy::OptimizeTransitions,
                    "Streamline transitions between sections",
                    Severity::Low,
                )
                .with_savings("2-5 minutes"),
            ]
        } else if percentage <= 25.0 {
            vec![
                Recommendation::new(
                    Strategy::SplitLesson,
                    "Split lesson into two days",
                    Severity::High,
                )
                .with_savings("Full overrun amount")
                .with_implementation(vec!["Create day 1 and day 2 versions".to_string()]),
                Recommendation::new(
                    Strategy::ReduceDuration,
                    "Significantly reduce non-essential sections",
                    Severity::Medium,
                )
                .with_savings("10-15 minutes"),
                Recommendation::new(
                    Strategy::CombineSections,
                    "Combine related sections to reduce overhead",
                    Severity::Medium,
                )
                .with_savings("5-10 minutes"),
            ]
        } else {
            vec![
                Recommendation::new(
                    Strategy::SplitLesson,
                    "Split into multiple lessons",
                    Severity::Critical,
                )
                .with_savings("Full overrun amount")
                .with_implementation(vec!["Create 2-3 separate lessons".to_string()]),
                Recommendation::new(
                    Strategy::ReduceDuration,
                    "Dramatically reduce all non-essential content",
                    Severity::High,
                )
                .with_savings("15-20 minutes"),
                Recommendation::new(
                    Strategy::CombineSections,
                    "Merge multiple sections into streamlined format",
                    Severity::High,
                )
                .with_savings("10-15 minutes"),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plangate_core::model::Priority;

    fn sections(priorities: &[Priority]) -> Vec<Section> {
        priorities
            .iter()
            .enumerate()
            .map(|(i, p)| Section::new(format!("Section {i}"), *p))
            .collect()
    }

    #[test]
    fn allocation_sums_to_total() {
        let allocator = TimeAllocator::new(TimeConfig::default()).unwrap();
        let input = sections(&[Priority::High, Priority::Medium, Priority::Low]);
        let out = allocator.allocate(&input, 45);
        let sum: i32 = out.iter().map(|s| s.duration_minutes).sum();
        assert_eq!(sum, 45);
    }

    #[test]
    fn non_last_sections_get_at_least_one_minute() {
        let allocator = TimeAllocator::new(TimeConfig::default()).unwrap();
        let input = sections(&[Priority::Low; 10]);
        let out = allocator.allocate(&input, 5);
        for section in &out[..9] {
            assert!(section.duration_minutes >= 1);
        }
        // Remainder goes negative rather than breaking the sum.
        let sum: i32 = out.iter().map(|s| s.duration_minutes).sum();
        assert_eq!(sum, 5);
        assert!(out[9].duration_minutes < 0);
    }

    #[test]
    fn infeasible_plan_reports_deficit() {
        let allocator = TimeAllocator::new(TimeConfig::default()).unwrap();
        // Nine one-minute minimums leave the last section at -4.
        let input = allocator.allocate(&sections(&[Priority::Low; 10]), 5);
        let check = allocator.validate_budget(&input, 5);
        assert_eq!(check.status, BudgetStatus::Infeasible);
        assert_eq!(
            check.message,
            "Time budget infeasible: plan is short by 4 minutes"
        );

        let report = allocator.detect(&input, 5);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::High);
        assert!(matches!(
            report.issues[0].kind,
            IssueKind::AllocationInfeasible { deficit: 4 }
        ));
        assert!(matches!(
            report.recommendations[0].strategy,
            Strategy::SplitLesson
        ));
    }

    #[test]
    fn exact_underrun_factor_passes() {
        let allocator = TimeAllocator::new(TimeConfig::default()).unwrap();
        let mut input = sections(&[Priority::Medium]);
        input[0].duration_minutes = 36;
        let check = allocator.validate_budget(&input, 45);
        assert_eq!(check.status, BudgetStatus::Valid);

        input[0].duration_minutes = 35;
        let check = allocator.validate_budget(&input, 45);
        assert_eq!(check.status, BudgetStatus::Underrun);
        assert_eq!(check.message, "Time budget underutilized by 10 minutes");
    }

    #[test]
    fn overrun_tiers_classify_by_percentage() {
        assert_eq!(TimeAllocator::overrun_severity(10.0), Severity::Low);
        assert_eq!(TimeAllocator::overrun_severity(10.1), Severity::Medium);
        assert_eq!(TimeAllocator::overrun_severity(25.0), Severity::Medium);
        assert_eq!(TimeAllocator::overrun_severity(25.1), Severity::High);
    }

    #[test]
    fn overrun_report_carries_tier_menu() {
        let allocator = TimeAllocator::new(TimeConfig::default()).unwrap();
        let mut input = sections(&[Priority::High]);
        input[0].duration_minutes = 60;
        let report = allocator.detect(&input, 45);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::High);
        assert_eq!(report.recommendations.len(), 3);
        assert!(matches!(
            report.recommendations[0].strategy,
            Strategy::SplitLesson
        ));
    }

    #[test]
    fn empty_sections_allocate_to_empty() {
        let allocator = TimeAllocator::new(TimeConfig::default()).unwrap();
        assert!(allocator.allocate(&[], 45).is_empty());
    }
}
