//! Shared gate report shapes — severity, issues, recommendations.
//!
//! Every deficiency a gate finds becomes an [`Issue`] with a tagged
//! kind rather than a free-text status, so downstream comparison is
//! structural instead of string matching.

use serde::{Deserialize, Serialize};

use crate::model::activity::SafetyComponent;
use crate::model::item_bank::QualityMetric;
use crate::model::quiz::{Difficulty, ItemType};
use crate::model::udl::UdlPrinciple;

/// Deficiency severity. Ordering is Low < Medium < High < Critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Numeric rank used for priority ordering: low=1 .. critical=4.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Identifies one of the four quality gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateId {
    TimeBudget,
    Safety,
    Udl,
    ItemBank,
}

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TimeBudget => "time_budget",
            Self::Safety => "safety",
            Self::Udl => "udl",
            Self::ItemBank => "item_bank",
        };
        f.write_str(s)
    }
}

/// What kind of deficiency an issue describes, with per-gate payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    // Time budget
    Overrun { minutes: i32, percentage: f64 },
    Underrun { minutes: i32 },
    AllocationInfeasible { deficit: i32 },
    // Safety
    MissingSafetyComponent { component: SafetyComponent },
    // UDL
    Coverage { score: f64 },
    MissingPrinciple { principle: UdlPrinciple },
    CriticalFlag { flag_type: String },
    ReadingLevel { current_level: String },
    Vocabulary { complex_word_count: usize },
    // Item bank
    InsufficientItems {
        item_type: ItemType,
        current_count: usize,
        required_count: usize,
    },
    MissingDifficulty { difficulty: Difficulty },
    PoorContentCoverage { score: f64, threshold: f64 },
    PoorQuality {
        metric: QualityMetric,
        score: f64,
        threshold: f64,
    },
    Duplicates { count: usize },
    Bias { count: usize },
    InvalidItem { item_id: String },
    InvalidRubric { question_id: String },
}

/// A single classified deficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(flatten)]
    pub kind: IssueKind,
    pub severity: Severity,
    pub description: String,
}

impl Issue {
    pub fn new(kind: IssueKind, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
        }
    }
}

/// Remediation strategy attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Strategy {
    // Time budget
    ReduceDuration,
    SplitLesson,
    OptimizeTransitions,
    CombineSections,
    // Safety
    CompleteSafetyComponent { component: SafetyComponent },
    // UDL
    ApplySuggestedRewrites,
    AddPrincipleSupport { principle: UdlPrinciple },
    SimplifyLanguage,
    AddVocabularySupport,
    AddressCriticalIssue,
    // Item bank
    IncreaseGeneratorCount { item_type: ItemType, target_count: usize },
    AddDifficultyItems { difficulty: Difficulty },
    ExpandContentCoverage,
    ImproveItemQuality { metric: QualityMetric },
    RemoveDuplicates,
    AddressBias,
}

/// A severity-prioritized remediation suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: Strategy,
    pub description: String,
    pub priority: Severity,
    /// Concrete implementation checklist, fixed per strategy.
    pub implementation: Vec<String>,
    /// Textual savings estimate where the strategy has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings: Option<String>,
}

impl Recommendation {
    pub fn new(strategy: Strategy, description: impl Into<String>, priority: Severity) -> Self {
        Self {
            strategy,
            description: description.into(),
            priority,
            implementation: Vec::new(),
            estimated_savings: None,
        }
    }

    pub fn with_implementation(mut self, steps: Vec<String>) -> Self {
        self.implementation = steps;
        self
    }

    pub fn with_savings(mut self, savings: impl Into<String>) -> Self {
        self.estimated_savings = Some(savings.into());
        self
    }
}

/// Output of a single gate evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateReport {
    pub gate: GateId,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
    /// Only the safety gate sets this; packaging must honor it.
    pub block_export: bool,
}

impl GateReport {
    /// An empty passing report for the given gate.
    pub fn clean(gate: GateId) -> Self {
        Self {
            gate,
            issues: Vec::new(),
            recommendations: Vec::new(),
            block_export: false,
        }
    }

    /// True when no deficiencies were found.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Highest severity present, if any issues exist.
    pub fn max_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }

    /// Recommendations sorted by priority, highest first. Stable, so
    /// equal-priority entries keep their insertion order.
    pub fn prioritized_recommendations(&self) -> Vec<&Recommendation> {
        let mut recs: Vec<&Recommendation> = self.recommendations.iter().collect();
        recs.sort_by(|a, b| b.priority.cmp(&a.priority));
        recs
    }
}
