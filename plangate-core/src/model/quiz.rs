//! Quiz items and rubrics.

use serde::{Deserialize, Serialize};

/// Quiz item types supported by the item bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    #[serde(rename = "multiple_choice")]
    Mcq,
    MultiSelect,
    Numeric,
    ShortAnswer,
}

impl ItemType {
    /// All types, in the order sufficiency is checked.
    pub const ALL: [ItemType; 4] = [
        Self::Mcq,
        Self::MultiSelect,
        Self::Numeric,
        Self::ShortAnswer,
    ];

    /// Identifier prefix for synthesized items (`mcq_1`, `num_3`, ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::MultiSelect => "ms",
            Self::Numeric => "num",
            Self::ShortAnswer => "sa",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Mcq => "multiple_choice",
            Self::MultiSelect => "multi_select",
            Self::Numeric => "numeric",
            Self::ShortAnswer => "short_answer",
        };
        f.write_str(s)
    }
}

/// Difficulty band for a quiz item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Correct answer, shaped per item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Single option for MCQ. Must appear in `options`.
    Choice(String),
    /// Option subset for multi-select. All must appear in `options`.
    Choices(Vec<String>),
    /// Numeric answer, compared within `tolerance`.
    Number(f64),
    /// Accepted keyword list for short answers. Must be non-empty.
    Keywords(Vec<String>),
}

/// A single quiz item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: String,
    pub item_type: ItemType,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct: Answer,
    /// Numeric items only; must be non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    pub points: f64,
    pub difficulty: Difficulty,
    pub explanation: String,
}

/// One quality band of a rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricCriterion {
    /// Ordinal band 1-4.
    pub level: u8,
    pub description: String,
}

/// Scoring rubric for an open-ended item.
///
/// Invariant: the set of criterion levels present must equal exactly
/// {1, 2, 3, 4}. Duplicates do not violate the presence check; levels
/// outside 1-4 are errors in their own right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub question_id: String,
    pub criteria: Vec<RubricCriterion>,
}
