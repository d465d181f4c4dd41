//! Shape validation for individual quiz items and rubrics.

use plangate_core::model::{Answer, ItemType, QuizItem, Rubric};
use rustc_hash::FxHashSet;

use super::ItemBankGate;

impl ItemBankGate {
    /// Validate a quiz item's points and type-specific shape. Returns
    /// one error string per violation; empty means valid.
    pub fn validate_item(&self, item: &QuizItem) -> Vec<String> {
        let mut errors = Vec::new();

        if item.points <= 0.0 {
            errors.push("Points must be greater than 0".to_string());
        }

        match item.item_type {
            ItemType::Mcq => {
                if item.options.len() < 3 {
                    errors.push("MCQ items must have at least 3 choices".to_string());
                } else {
                    match &item.correct {
                        Answer::Choice(choice) => {
                            if !item.options.contains(choice) {
                                errors.push("Correct answer must be in options".to_string());
                            }
                        }
                        _ => errors.push("MCQ correct answer must be a single choice".to_string()),
                    }
                }
            }
            ItemType::MultiSelect => {
                if item.options.len() < 3 {
                    errors.push("Multi-select items must have at least 3 choices".to_string());
                } else {
                    match &item.correct {
                        Answer::Choices(choices) => {
                            if !choices.iter().all(|c| item.options.contains(c)) {
                                errors.push("All correct answers must be in options".to_string());
                            }
                        }
                        _ => errors
                            .push("Multi-select correct answer must be a list".to_string()),
                    }
                }
            }
            ItemType::Numeric => match item.tolerance {
                None => errors.push("Numeric items must have tolerance".to_string()),
                Some(tolerance) if tolerance < 0.0 => {
                    errors.push("Tolerance must be non-negative".to_string());
                }
                Some(_) => {}
            },
            ItemType::ShortAnswer => match &item.correct {
                Answer::Keywords(keywords) => {
                    if keywords.is_empty() {
                        errors.push(
                            "Short answer must have at least one correct answer".to_string(),
                        );
                    }
                }
                _ => errors.push("Short answer correct answer must be a list".to_string()),
            },
        }

        errors
    }

    /// Validate a rubric: non-empty criteria, in-range levels, and the
    /// full level set {1, 2, 3, 4} present. Duplicate levels are not an
    /// absence error.
    pub fn validate_rubric(&self, rubric: &Rubric) -> Vec<String> {
        if rubric.criteria.is_empty() {
            return vec!["Criteria must be a non-empty list".to_string()];
        }

        let mut errors = Vec::new();
        let mut levels: FxHashSet<u8> = FxHashSet::default();

        for criterion in &rubric.criteria {
            if criterion.level < 1 || criterion.level > 4 {
                errors.push("Levels must be 1-4".to_string());
            } else {
                levels.insert(criterion.level);
            }
            if criterion.description.is_empty() {
                errors.push("Each criterion must have a description".to_string());
            }
        }

        if levels.len() != 4 {
            errors.push("Rubric must include all levels 1-4".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use plangate_core::config::ItemBankConfig;
    use plangate_core::model::{
        Answer, Difficulty, ItemType, QuizItem, Rubric, RubricCriterion,
    };

    use crate::item_bank::ItemBankGate;

    fn gate() -> ItemBankGate {
        ItemBankGate::new(ItemBankConfig::default())
    }

    fn mcq(options: &[&str], correct: &str) -> QuizItem {
        QuizItem {
            id: "q1".to_string(),
            item_type: ItemType::Mcq,
            question: "Which source is renewable?".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct: Answer::Choice(correct.to_string()),
            tolerance: None,
            points: 2.0,
            difficulty: Difficulty::Easy,
            explanation: "Solar energy renews daily".to_string(),
        }
    }

    fn rubric(levels: &[u8]) -> Rubric {
        Rubric {
            question_id: "q4".to_string(),
            criteria: levels
                .iter()
                .map(|&level| RubricCriterion {
                    level,
                    description: format!("Level {level} work"),
                })
                .collect(),
        }
    }

    #[test]
    fn valid_mcq_passes() {
        let item = mcq(&["Solar", "Coal", "Gas"], "Solar");
        assert!(gate().validate_item(&item).is_empty());
    }

    #[test]
    fn mcq_answer_must_be_among_options() {
        let item = mcq(&["Solar", "Coal", "Gas"], "Wind");
        assert_eq!(
            gate().validate_item(&item),
            vec!["Correct answer must be in options".to_string()]
        );
    }

    #[test]
    fn option_comparison_is_case_sensitive() {
        let item = mcq(&["Solar", "Coal", "Gas"], "solar");
        assert!(!gate().validate_item(&item).is_empty());
    }

    #[test]
    fn mcq_needs_three_choices_and_positive_points() {
        let mut item = mcq(&["Solar", "Coal"], "Solar");
        item.points = 0.0;
        let errors = gate().validate_item(&item);
        assert!(errors.contains(&"Points must be greater than 0".to_string()));
        assert!(errors.contains(&"MCQ items must have at least 3 choices".to_string()));
    }

    #[test]
    fn numeric_requires_non_negative_tolerance() {
        let mut item = mcq(&[], "");
        item.item_type = ItemType::Numeric;
        item.options = vec![];
        item.correct = Answer::Number(42.0);
        item.tolerance = None;
        assert_eq!(
            gate().validate_item(&item),
            vec!["Numeric items must have tolerance".to_string()]
        );

        item.tolerance = Some(-0.1);
        assert_eq!(
            gate().validate_item(&item),
            vec!["Tolerance must be non-negative".to_string()]
        );
    }

    #[test]
    fn rubric_with_all_levels_passes() {
        assert!(gate().validate_rubric(&rubric(&[1, 2, 3, 4])).is_empty());
    }

    #[test]
    fn duplicate_levels_still_fail_the_presence_check() {
        let errors = gate().validate_rubric(&rubric(&[1, 2, 2, 3]));
        assert_eq!(
            errors,
            vec!["Rubric must include all levels 1-4".to_string()]
        );
    }

    #[test]
    fn out_of_range_level_is_its_own_error() {
        let errors = gate().validate_rubric(&rubric(&[1, 2, 3, 5]));
        assert!(errors.contains(&"Levels must be 1-4".to_string()));
        assert!(errors.contains(&"Rubric must include all levels 1-4".to_string()));
    }

    #[test]
    fn empty_criteria_short_circuits() {
        let empty = Rubric {
            question_id: "q4".to_string(),
            criteria: vec![],
        };
        assert_eq!(
            gate().validate_rubric(&empty),
            vec!["Criteria must be a non-empty list".to_string()]
        );
    }
}
