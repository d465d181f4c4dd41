//! Canonical item synthesis and blueprint selection.

use plangate_core::model::{Answer, Difficulty, ItemType, QuizItem};

use super::ItemBankGate;

impl ItemBankGate {
    /// Pad a collection up to `target_count` items of the given type
    /// with sequentially numbered canonical items. Already-sufficient
    /// collections are returned unchanged.
    pub fn increase_generator_count(
        &self,
        item_type: ItemType,
        target_count: usize,
        current: &[QuizItem],
    ) -> Vec<QuizItem> {
        let mut items = current.to_vec();
        let needed = target_count.saturating_sub(current.len());
        for i in 1..=needed {
            items.push(Self::canonical_item(item_type, i));
        }
        items
    }

    fn canonical_item(item_type: ItemType, n: usize) -> QuizItem {
        let options = match item_type {
            ItemType::Mcq | ItemType::MultiSelect => vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            _ => Vec::new(),
        };

        let correct = match item_type {
            ItemType::Mcq => Answer::Choice("Option A".to_string()),
            ItemType::MultiSelect => {
                Answer::Choices(vec!["Option A".to_string(), "Option B".to_string()])
            }
            ItemType::Numeric => Answer::Number(42.0),
            ItemType::ShortAnswer => {
                Answer::Keywords(vec!["sample".to_string(), "answer".to_string()])
            }
        };

        QuizItem {
            id: format!("{}_{n}", item_type.id_prefix()),
            item_type,
            question: format!("Sample {item_type} question {n}"),
            options,
            correct,
            tolerance: match item_type {
                ItemType::Numeric => Some(0.1),
                _ => None,
            },
            points: 1.0,
            difficulty: Difficulty::Medium,
            explanation: format!("Explanation for question {n}"),
        }
    }

    /// Select items per blueprint entry: up to `target` items of each
    /// difficulty, in original item order, concatenated in blueprint
    /// order.
    pub fn filter_by_difficulty_blueprint(
        &self,
        items: &[QuizItem],
        blueprint: &[(Difficulty, usize)],
    ) -> Vec<QuizItem> {
        let mut selected = Vec::new();
        for &(difficulty, target) in blueprint {
            selected.extend(
                items
                    .iter()
                    .filter(|item| item.difficulty == difficulty)
                    .take(target)
                    .cloned(),
            );
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use plangate_core::config::ItemBankConfig;
    use plangate_core::model::{Answer, Difficulty, ItemType, QuizItem};

    use crate::item_bank::ItemBankGate;

    fn gate() -> ItemBankGate {
        ItemBankGate::new(ItemBankConfig::default())
    }

    fn numeric_item(id: &str, difficulty: Difficulty) -> QuizItem {
        QuizItem {
            id: id.to_string(),
            item_type: ItemType::Numeric,
            question: format!("Question {id}"),
            options: vec![],
            correct: Answer::Number(1.0),
            tolerance: Some(0.0),
            points: 1.0,
            difficulty,
            explanation: String::new(),
        }
    }

    #[test]
    fn synthesis_pads_with_numbered_items() {
        let out = gate().increase_generator_count(ItemType::Numeric, 5, &[]);
        let ids: Vec<_> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["num_1", "num_2", "num_3", "num_4", "num_5"]);
        assert!(out
            .iter()
            .all(|i| i.tolerance == Some(0.1) && matches!(i.correct, Answer::Number(_))));
    }

    #[test]
    fn synthesis_is_a_no_op_when_sufficient() {
        let current = vec![
            numeric_item("a", Difficulty::Easy),
            numeric_item("b", Difficulty::Hard),
        ];
        let out = gate().increase_generator_count(ItemType::Numeric, 2, &current);
        assert_eq!(out, current);
    }

    #[test]
    fn synthesized_mcq_has_one_correct_of_four() {
        let out = gate().increase_generator_count(ItemType::Mcq, 1, &[]);
        assert_eq!(out[0].options.len(), 4);
        assert_eq!(out[0].correct, Answer::Choice("Option A".to_string()));
    }

    #[test]
    fn blueprint_selects_in_entry_order() {
        let items = vec![
            numeric_item("e1", Difficulty::Easy),
            numeric_item("h1", Difficulty::Hard),
            numeric_item("e2", Difficulty::Easy),
            numeric_item("m1", Difficulty::Medium),
            numeric_item("e3", Difficulty::Easy),
        ];
        let blueprint = [(Difficulty::Hard, 1), (Difficulty::Easy, 2)];
        let out = gate().filter_by_difficulty_blueprint(&items, &blueprint);
        let ids: Vec<_> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "e1", "e2"]);
    }
}
