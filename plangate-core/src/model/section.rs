//! Lesson sections — ordered, minute-timed blocks of a lesson.

use serde::{Deserialize, Serialize};

/// Section priority, used for proportional time allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Allocation weight: high=3, medium=2, low=1.
    pub fn weight(&self) -> i64 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// A single timed block of a lesson.
///
/// Created by the generation stage; durations are mutated only by the
/// time allocator. `duration_minutes` is signed because the
/// last-section-absorbs-remainder rule can produce a negative value when
/// the budget is smaller than the number of sections — the allocator
/// preserves the exact-sum contract and leaves infeasibility reporting
/// to budget validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub priority: Priority,
    pub materials: Vec<String>,
    pub formative_check: String,
    pub transition: String,
    /// Duration before the last rebalance, for auditability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_duration: Option<i32>,
    /// `new - original` after a rebalance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<i32>,
    /// Titles of the sections merged into this one, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_from: Option<Vec<String>>,
    /// Characters saved by transition optimization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_savings: Option<usize>,
}

impl Section {
    /// Minimal constructor used by tests and fixtures.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            ..Default::default()
        }
    }

    /// Constructor with an explicit duration.
    pub fn timed(title: impl Into<String>, priority: Priority, duration_minutes: i32) -> Self {
        Self {
            title: title.into(),
            priority,
            duration_minutes,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_weights() {
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}
