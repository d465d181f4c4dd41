//! End-to-end certification over the fixture lesson.

use plangate_core::config::PlangateConfig;
use plangate_core::fixtures;
use plangate_core::provider::{ContentProvider, FixtureContentProvider};
use plangate_core::report::{GateId, IssueKind};
use plangate_gates::safety::SafetyGate;
use plangate_gates::Pipeline;

#[test]
fn fixture_draft_blocks_until_safety_is_completed() {
    let config = PlangateConfig::default();
    let pipeline = Pipeline::new(&config).unwrap();

    let brief = fixtures::sample_brief();
    let draft = FixtureContentProvider.generate(&brief).unwrap();

    // The fixture activity ships without safety documentation.
    let before = pipeline.certify(&draft);
    assert!(before.block_export);
    assert!(!before.report_for(GateId::Safety).unwrap().passed());

    // Time and UDL are clean in the fixture.
    assert!(before.report_for(GateId::TimeBudget).unwrap().passed());
    assert!(before.report_for(GateId::Udl).unwrap().passed());

    // One item per type is below the sufficiency minimum.
    let item_bank = before.report_for(GateId::ItemBank).unwrap();
    assert_eq!(item_bank.issues.len(), 4);
    assert!(item_bank
        .issues
        .iter()
        .all(|i| matches!(i.kind, IssueKind::InsufficientItems { .. })));

    // Completing safety documentation unblocks export.
    let safety = SafetyGate::new(config.safety.clone()).unwrap();
    let mut repaired = draft.clone();
    repaired.activity = safety.auto_complete(&draft.activity);

    let after = pipeline.certify(&repaired);
    assert!(!after.block_export);
    assert!(after.report_for(GateId::Safety).unwrap().passed());
}

#[test]
fn fixture_draft_fills_its_own_budget() {
    let brief = fixtures::sample_brief();
    let draft = FixtureContentProvider.generate(&brief).unwrap();
    assert_eq!(draft.allocated_minutes(), draft.total_minutes);
}
