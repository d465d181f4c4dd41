//! Universal Design for Learning report shapes.

use serde::{Deserialize, Serialize};

/// The three UDL principles a lesson must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UdlPrinciple {
    Representation,
    Engagement,
    Expression,
}

impl UdlPrinciple {
    pub const ALL: [UdlPrinciple; 3] = [Self::Representation, Self::Engagement, Self::Expression];

    /// Case-insensitive match against an upstream flag type string
    /// (upstream emits variants like `REPRESENTATION`).
    pub fn matches(&self, flag_type: &str) -> bool {
        flag_type.eq_ignore_ascii_case(self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Representation => "representation",
            Self::Engagement => "engagement",
            Self::Expression => "expression",
        }
    }
}

impl std::fmt::Display for UdlPrinciple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accessibility barrier flagged by the upstream UDL checker.
///
/// `flag_type` is free text from upstream; principle matching is
/// case-insensitive substring-free comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UdlFlag {
    pub flag_type: String,
    pub severity: String,
    pub description: String,
    pub suggestion: String,
    pub principle: String,
}

impl UdlFlag {
    /// Upstream severities arrive as free text; only `high` escalates.
    pub fn is_high_severity(&self) -> bool {
        self.severity.eq_ignore_ascii_case("high")
    }
}

/// Estimated reading level plus upstream improvement suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReadingLevel {
    pub current_level: String,
    pub recommendations: Vec<String>,
}

/// A complex word with its suggested replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VocabularyEntry {
    pub complex_word: String,
    pub simpler_alternative: String,
    pub context: String,
}

/// Additive structured-support bundles layered in by enrichment.
///
/// All fields start absent; enrichment operations set them to fixed
/// bundles and are idempotent. Nothing ever removes a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UdlSupport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_support: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_support: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation_support: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_support: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_support: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udl_scaffolds: Option<serde_json::Value>,
}

impl UdlSupport {
    /// Count of support bundles present.
    pub fn bundle_count(&self) -> usize {
        [
            self.vocabulary_support.is_some(),
            self.reading_support.is_some(),
            self.representation_support.is_some(),
            self.engagement_support.is_some(),
            self.expression_support.is_some(),
            self.udl_scaffolds.is_some(),
        ]
        .into_iter()
        .filter(|p| *p)
        .count()
    }

    /// True if `self` carries any bundle `before` does not.
    pub fn gained_over(&self, before: &UdlSupport) -> bool {
        (self.vocabulary_support.is_some() && before.vocabulary_support.is_none())
            || (self.reading_support.is_some() && before.reading_support.is_none())
            || (self.representation_support.is_some() && before.representation_support.is_none())
            || (self.engagement_support.is_some() && before.engagement_support.is_none())
            || (self.expression_support.is_some() && before.expression_support.is_none())
            || (self.udl_scaffolds.is_some() && before.udl_scaffolds.is_none())
    }
}

/// Accessibility coverage report for a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UdlReport {
    /// Free text containing a percentage, e.g. "85% UDL compliant".
    pub overall_score: String,
    pub flags: Vec<UdlFlag>,
    pub reading_level: ReadingLevel,
    pub vocabulary: Vec<VocabularyEntry>,
    pub scaffolds: Vec<String>,
    pub support: UdlSupport,
}
