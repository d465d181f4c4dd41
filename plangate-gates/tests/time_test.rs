//! Tests for time allocation and budget validation.

use plangate_core::config::TimeConfig;
use plangate_core::model::{Priority, Section};
use plangate_gates::time::{BudgetStatus, TimeAllocator};
use proptest::prelude::*;

fn allocator() -> TimeAllocator {
    TimeAllocator::new(TimeConfig::default()).unwrap()
}

#[test]
fn last_section_absorbs_remainder() {
    // Weights 3, 3, 2 over 60 minutes: the first two get floor(3/8 * 60)
    // = 22 each, the last gets the remainder rather than its weighted
    // share.
    let sections = vec![
        Section::new("Core A", Priority::High),
        Section::new("Core B", Priority::High),
        Section::new("Practice", Priority::Medium),
    ];
    let out = allocator().allocate(&sections, 60);
    assert_eq!(out[0].duration_minutes, 22);
    assert_eq!(out[1].duration_minutes, 22);
    assert_eq!(out[2].duration_minutes, 16);
}

#[test]
fn budget_boundaries() {
    let allocator = allocator();
    let section = |d| {
        let mut s = Section::new("Main", Priority::Medium);
        s.duration_minutes = d;
        vec![s]
    };

    // Exactly 80% of the budget is valid.
    assert_eq!(
        allocator.validate_budget(&section(40), 50).status,
        BudgetStatus::Valid
    );
    // One minute below 80% is an underrun.
    assert_eq!(
        allocator.validate_budget(&section(39), 50).status,
        BudgetStatus::Underrun
    );
    // One minute over is an overrun, and the message names the amount.
    let check = allocator.validate_budget(&section(51), 50);
    assert_eq!(check.status, BudgetStatus::Overrun);
    assert!(check.message.contains('1'));
}

#[test]
fn combine_merges_low_priority_neighbors_only() {
    let sections = vec![
        Section::timed("Intro", Priority::Low, 5),
        Section::timed("Warm-up", Priority::Low, 5),
        Section::timed("Main", Priority::High, 25),
    ];
    let out = allocator().combine_sections(&sections);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].title, "Intro & Warm-up");
    assert_eq!(out[0].priority, Priority::Medium);
    assert_eq!(out[1].title, "Main");
    assert_eq!(out[1].priority, Priority::High);
}

proptest! {
    #[test]
    fn allocation_always_sums_to_total(
        priorities in prop::collection::vec(
            prop::sample::select(vec![Priority::Low, Priority::Medium, Priority::High]),
            1..12,
        ),
        total_time in 0i32..600,
    ) {
        let sections: Vec<Section> = priorities
            .into_iter()
            .enumerate()
            .map(|(i, p)| Section::new(format!("S{i}"), p))
            .collect();
        let out = allocator().allocate(&sections, total_time);
        let sum: i32 = out.iter().map(|s| s.duration_minutes).sum();
        prop_assert_eq!(sum, total_time);
        prop_assert_eq!(out.len(), sections.len());
    }
}
