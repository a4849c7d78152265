use cyclegraph_planner::{load_config, save_config, GeneratorConfig, PlanError};
use std::fs;

#[test]
fn save_and_load_roundtrip() {
    let path = "tests/tmp_planner_config.json";
    let _ = fs::remove_file(path);

    let cfg = GeneratorConfig {
        warmup_minutes: 20,
        cooldown_cadence_rpm: 75,
        ..GeneratorConfig::default()
    };

    save_config(&cfg, path).expect("save_config feilet");
    let loaded = load_config(path).expect("load_config feilet");
    assert_eq!(loaded, cfg);

    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_gives_defaults() {
    let loaded = load_config("tests/finnes_ikke.json").unwrap();
    assert_eq!(loaded, GeneratorConfig::default());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = GeneratorConfig::from_json(r#"{ "activation_minutes": 12 }"#).unwrap();
    assert_eq!(cfg.activation_minutes, 12);
    assert_eq!(cfg.warmup_minutes, 15);
    assert_eq!(cfg.cooldown_ease_factor, 0.8);
}

#[test]
fn bad_field_type_reports_path() {
    let err = GeneratorConfig::from_json(r#"{ "warmup_minutes": "lang" }"#).unwrap_err();
    match err {
        PlanError::Parse { path, .. } => assert_eq!(path, "warmup_minutes"),
        other => panic!("forventet Parse, fikk {other:?}"),
    }
}

#[test]
fn out_of_range_values_fail_validation() {
    assert!(matches!(
        GeneratorConfig::from_json(r#"{ "cooldown_ease_factor": 1.5 }"#),
        Err(PlanError::InvalidConfig(_))
    ));
    assert!(matches!(
        GeneratorConfig::from_json(r#"{ "rest_cadence_rpm": 0 }"#),
        Err(PlanError::InvalidConfig(_))
    ));
}

#[test]
fn oversized_minutes_are_rejected() {
    assert!(matches!(
        GeneratorConfig::from_json(r#"{ "warmup_minutes": 4294967295 }"#),
        Err(PlanError::InvalidConfig(_))
    ));
    assert!(matches!(
        GeneratorConfig::from_json(r#"{ "duration_tolerance_minutes": 100000 }"#),
        Err(PlanError::InvalidConfig(_))
    ));
    // ett døgn er fortsatt lov
    assert!(GeneratorConfig::from_json(r#"{ "endurance_minutes": 1440 }"#).is_ok());
}

#[test]
fn oversized_config_fails_generation_cleanly() {
    let req = r#"{ "ftp_watts": 320, "session_type": "vo2max", "duration_minutes": 60 }"#;
    let cfg = r#"{ "warmup_minutes": 4294967295 }"#;
    assert!(matches!(
        cyclegraph_planner::generate_plan_json(req, Some(cfg)),
        Err(PlanError::InvalidConfig(_))
    ));
}
