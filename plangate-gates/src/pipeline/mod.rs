//! Certification pipeline — runs all gates over a lesson draft.
//!
//! Gates read disjoint sub-objects of the draft, so evaluation order
//! does not affect results. Only the safety gate can block export.

use plangate_core::config::PlangateConfig;
use plangate_core::errors::ConfigError;
use plangate_core::model::{ItemBank, LessonDraft};
use plangate_core::report::{GateId, GateReport, Issue, IssueKind, Severity};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::item_bank::ItemBankGate;
use crate::safety::SafetyGate;
use crate::time::TimeAllocator;
use crate::udl::UdlGate;

/// A quality gate evaluates one facet of a lesson draft.
pub trait QualityGate: Send + Sync {
    fn id(&self) -> GateId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn evaluate(&self, draft: &LessonDraft) -> GateReport;
}

impl QualityGate for TimeAllocator {
    fn id(&self) -> GateId {
        GateId::TimeBudget
    }

    fn name(&self) -> &'static str {
        "time-budget"
    }

    fn description(&self) -> &'static str {
        "Section durations fit the period time budget"
    }

    fn evaluate(&self, draft: &LessonDraft) -> GateReport {
        self.detect(&draft.sections, draft.total_minutes)
    }
}

impl QualityGate for SafetyGate {
    fn id(&self) -> GateId {
        GateId::Safety
    }

    fn name(&self) -> &'static str {
        "safety"
    }

    fn description(&self) -> &'static str {
        "Activity safety documentation is complete for its risk level"
    }

    fn evaluate(&self, draft: &LessonDraft) -> GateReport {
        self.detect(&draft.activity).report
    }
}

impl QualityGate for UdlGate {
    fn id(&self) -> GateId {
        GateId::Udl
    }

    fn name(&self) -> &'static str {
        "udl"
    }

    fn description(&self) -> &'static str {
        "Lesson meets Universal Design for Learning coverage"
    }

    fn evaluate(&self, draft: &LessonDraft) -> GateReport {
        self.detect(&draft.udl_report)
    }
}

impl QualityGate for ItemBankGate {
    fn id(&self) -> GateId {
        GateId::ItemBank
    }

    fn name(&self) -> &'static str {
        "item-bank"
    }

    fn description(&self) -> &'static str {
        "Assessment item bank is sufficient and well-formed"
    }

    /// Aggregate analysis plus per-item and per-rubric shape checks.
    fn evaluate(&self, draft: &LessonDraft) -> GateReport {
        let bank = ItemBank::from_items(&draft.quiz_items);
        let mut report = self.detect(&bank);

        for item in &draft.quiz_items {
            let errors = self.validate_item(item);
            if !errors.is_empty() {
                report.issues.push(Issue::new(
                    IssueKind::InvalidItem {
                        item_id: item.id.clone(),
                    },
                    Severity::Medium,
                    format!("Item {} is malformed: {}", item.id, errors.join("; ")),
                ));
            }
        }

        for rubric in &draft.rubrics {
            let errors = self.validate_rubric(rubric);
            if !errors.is_empty() {
                report.issues.push(Issue::new(
                    IssueKind::InvalidRubric {
                        question_id: rubric.question_id.clone(),
                    },
                    Severity::Medium,
                    format!(
                        "Rubric for {} is malformed: {}",
                        rubric.question_id,
                        errors.join("; ")
                    ),
                ));
            }
        }

        report
    }
}

/// Aggregated outcome of a full certification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationReport {
    pub reports: Vec<GateReport>,
    /// True iff the safety gate blocks export.
    pub block_export: bool,
    pub issue_total: usize,
}

impl CertificationReport {
    pub fn passed(&self) -> bool {
        self.issue_total == 0
    }

    pub fn report_for(&self, gate: GateId) -> Option<&GateReport> {
        self.reports.iter().find(|r| r.gate == gate)
    }
}

/// Composition root: owns the four gates, constructed from config.
pub struct Pipeline {
    gates: Vec<Box<dyn QualityGate>>,
}

impl Pipeline {
    pub fn new(config: &PlangateConfig) -> Result<Self, ConfigError> {
        let gates: Vec<Box<dyn QualityGate>> = vec![
            Box::new(TimeAllocator::new(config.time.clone())?),
            Box::new(SafetyGate::new(config.safety.clone())?),
            Box::new(UdlGate::new(config.udl.clone())?),
            Box::new(ItemBankGate::new(config.item_bank.clone())),
        ];
        Ok(Self { gates })
    }

    /// Run every gate over the draft and aggregate the outcome.
    pub fn certify(&self, draft: &LessonDraft) -> CertificationReport {
        let mut reports = Vec::with_capacity(self.gates.len());

        for gate in &self.gates {
            let report = gate.evaluate(draft);
            if report.block_export {
                warn!(
                    gate = %report.gate,
                    issues = report.issues.len(),
                    "gate blocks export"
                );
            } else {
                debug!(
                    gate = %report.gate,
                    issues = report.issues.len(),
                    passed = report.passed(),
                    "gate evaluated"
                );
            }
            reports.push(report);
        }

        let block_export = reports
            .iter()
            .any(|r| r.gate == GateId::Safety && r.block_export);
        let issue_total = reports.iter().map(|r| r.issues.len()).sum();

        CertificationReport {
            reports,
            block_export,
            issue_total,
        }
    }
}
