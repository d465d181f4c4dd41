//! Item bank — aggregate view over a quiz item collection.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::quiz::{Difficulty, ItemType, QuizItem};

/// Quality metrics evaluated against fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityMetric {
    Clarity,
    Relevance,
    DifficultyDistribution,
    ContentCoverage,
}

impl QualityMetric {
    pub const ALL: [QualityMetric; 4] = [
        Self::Clarity,
        Self::Relevance,
        Self::DifficultyDistribution,
        Self::ContentCoverage,
    ];
}

impl std::fmt::Display for QualityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Clarity => "clarity",
            Self::Relevance => "relevance",
            Self::DifficultyDistribution => "difficulty_distribution",
            Self::ContentCoverage => "content_coverage",
        };
        f.write_str(s)
    }
}

/// Topic coverage score in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CoverageScore {
    pub score: f64,
}

/// Aggregate view over a quiz item collection, evaluated for sufficiency.
///
/// Counts and duplicates can be derived from the items themselves via
/// [`ItemBank::from_items`]; coverage, quality metrics, and bias findings
/// are supplied by the upstream analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ItemBank {
    pub item_counts: FxHashMap<ItemType, usize>,
    pub difficulty_distribution: FxHashMap<Difficulty, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_coverage: Option<CoverageScore>,
    pub quality_metrics: FxHashMap<QualityMetric, f64>,
    /// Ids of items flagged as duplicates.
    pub duplicate_items: Vec<String>,
    /// Ids of items flagged as potentially biased.
    pub biased_items: Vec<String>,
}

impl ItemBank {
    /// Build the derivable parts of the aggregate from a collection.
    ///
    /// Duplicates are detected by exact question-text equality after
    /// whitespace trimming; the later item of each pair is recorded.
    pub fn from_items(items: &[QuizItem]) -> Self {
        let mut item_counts: FxHashMap<ItemType, usize> = FxHashMap::default();
        let mut difficulty_distribution: FxHashMap<Difficulty, usize> = FxHashMap::default();
        let mut seen_questions: FxHashSet<String> = FxHashSet::default();
        let mut duplicate_items = Vec::new();

        for item in items {
            *item_counts.entry(item.item_type).or_insert(0) += 1;
            *difficulty_distribution.entry(item.difficulty).or_insert(0) += 1;

            if !seen_questions.insert(item.question.trim().to_string()) {
                duplicate_items.push(item.id.clone());
            }
        }

        Self {
            item_counts,
            difficulty_distribution,
            duplicate_items,
            ..Default::default()
        }
    }

    /// Count of items of the given type (0 when absent).
    pub fn count_of(&self, item_type: ItemType) -> usize {
        self.item_counts.get(&item_type).copied().unwrap_or(0)
    }

    /// Count of items at the given difficulty (0 when absent).
    pub fn count_at(&self, difficulty: Difficulty) -> usize {
        self.difficulty_distribution
            .get(&difficulty)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quiz::Answer;

    fn item(id: &str, item_type: ItemType, question: &str) -> QuizItem {
        QuizItem {
            id: id.to_string(),
            item_type,
            question: question.to_string(),
            options: vec![],
            correct: Answer::Number(1.0),
            tolerance: Some(0.0),
            points: 1.0,
            difficulty: Difficulty::Medium,
            explanation: String::new(),
        }
    }

    #[test]
    fn from_items_counts_types_and_difficulties() {
        let items = vec![
            item("a", ItemType::Numeric, "q1"),
            item("b", ItemType::Numeric, "q2"),
            item("c", ItemType::Mcq, "q3"),
        ];
        let bank = ItemBank::from_items(&items);
        assert_eq!(bank.count_of(ItemType::Numeric), 2);
        assert_eq!(bank.count_of(ItemType::Mcq), 1);
        assert_eq!(bank.count_of(ItemType::ShortAnswer), 0);
        assert_eq!(bank.count_at(Difficulty::Medium), 3);
    }

    #[test]
    fn from_items_flags_duplicate_questions() {
        let items = vec![
            item("a", ItemType::Numeric, "same question"),
            item("b", ItemType::Mcq, "same question "),
        ];
        let bank = ItemBank::from_items(&items);
        assert_eq!(bank.duplicate_items, vec!["b".to_string()]);
    }
}
