//! Tests for the Plangate configuration system.

use std::sync::Mutex;

use plangate_core::config::PlangateConfig;
use plangate_core::errors::ConfigError;
use plangate_core::model::QualityMetric;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_plangate_env_vars() {
    for key in [
        "PLANGATE_TIME_UNDERRUN_FACTOR",
        "PLANGATE_TIME_REBALANCE_BUFFER",
        "PLANGATE_UDL_MIN_COVERAGE_SCORE",
        "PLANGATE_UDL_MAX_GRADE_LEVEL",
        "PLANGATE_ITEM_BANK_MIN_ITEMS_PER_TYPE",
        "PLANGATE_SAFETY_MODERATE_HAZARD_LIMIT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_match_spec_thresholds() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_plangate_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = PlangateConfig::load(dir.path()).unwrap();

    assert_eq!(config.time.effective_underrun_factor(), 0.8);
    assert_eq!(config.time.effective_rebalance_buffer(), 0.9);
    assert_eq!(config.udl.effective_min_coverage_score(), 70.0);
    assert_eq!(config.udl.effective_max_grade_level(), 8);
    assert_eq!(config.item_bank.effective_min_items_per_type(), 3);
    assert_eq!(
        config.item_bank.quality_threshold(QualityMetric::Relevance),
        0.9
    );
    assert!(config
        .safety
        .effective_high_risk_keywords()
        .contains(&"flame".to_string()));
}

#[test]
fn project_file_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_plangate_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("plangate.toml"),
        r#"
[udl]
min_coverage_score = 80.0

[safety]
high_risk_keywords = ["lava"]
"#,
    )
    .unwrap();

    let config = PlangateConfig::load(dir.path()).unwrap();
    assert_eq!(config.udl.effective_min_coverage_score(), 80.0);
    assert_eq!(
        config.safety.effective_high_risk_keywords(),
        vec!["lava".to_string()]
    );
    // Untouched tables keep compiled defaults.
    assert!(config
        .safety
        .effective_medium_risk_keywords()
        .contains(&"scissors".to_string()));
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_plangate_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("plangate.toml"),
        "[udl]\nmin_coverage_score = 60.0\n",
    )
    .unwrap();
    std::env::set_var("PLANGATE_UDL_MIN_COVERAGE_SCORE", "75");

    let config = PlangateConfig::load(dir.path()).unwrap();
    assert_eq!(config.udl.effective_min_coverage_score(), 75.0);

    clear_plangate_env_vars();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_plangate_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("plangate.toml"), "not valid toml {{{{").unwrap();

    match PlangateConfig::load(dir.path()) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[test]
fn out_of_range_values_fail_validation() {
    let result = PlangateConfig::from_toml("[time]\nunderrun_factor = 1.5\n");
    match result {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "time.underrun_factor");
        }
        other => panic!("Expected ValidationFailed, got: {other:?}"),
    }
}

#[test]
fn config_roundtrips_through_toml() {
    let config = PlangateConfig::from_toml("[item_bank]\nmin_items_per_type = 5\n").unwrap();
    let toml = config.to_toml().unwrap();
    let back = PlangateConfig::from_toml(&toml).unwrap();
    assert_eq!(back.item_bank.effective_min_items_per_type(), 5);
}
