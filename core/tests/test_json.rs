use cyclegraph_planner::*;
use serde_json::{json, Value};

#[test]
fn smoke_reference_request() {
    let req = json!({
        "ftp_watts": 320,
        "session_type": "vo2max",
        "level": "intermediate",
        "repetitions": 5,
        "work_minutes": 4
    });

    let out = generate_plan_json(&req.to_string(), None).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["plan"]["session_type"], "vo2_max");
    assert_eq!(v["plan"]["total_duration_minutes"], 75);
    assert_eq!(v["plan"]["estimated_tss"], 72);
    assert_eq!(v["plan"]["blocks"][2]["block"], "series");
    assert_eq!(v["plan"]["blocks"][2]["repetitions"], 5);
    assert_eq!(v["plan"]["blocks"][2]["work"]["power"]["min_watts"], 339);
    assert!(v["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn aliases_and_config_are_accepted() {
    let req = json!({ "ftp_watts": 280, "workout_type": "seuil", "athlete_level": "advanced" });
    let cfg = json!({ "warmup_minutes": 20, "cooldown_minutes": 10 });

    let out = generate_plan_json(&req.to_string(), Some(&cfg.to_string())).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["plan"]["session_type"], "threshold");
    assert_eq!(v["plan"]["level"], "advanced");
    assert_eq!(v["plan"]["blocks"][0]["duration_minutes"], 20);
}

#[test]
fn missing_field_is_reported_with_path() {
    let err = generate_plan_json(r#"{ "session_type": "vo2max" }"#, None).unwrap_err();
    assert!(matches!(err, PlanError::Parse { .. }), "{err:?}");
}

#[test]
fn wrong_type_reports_field_path() {
    let err = generate_plan_json(r#"{ "ftp_watts": "mye", "session_type": "vo2max" }"#, None).unwrap_err();
    match err {
        PlanError::Parse { path, .. } => assert_eq!(path, "ftp_watts"),
        other => panic!("forventet Parse, fikk {other:?}"),
    }
}

#[test]
fn report_entry_point_renders_markdown() {
    let req = json!({ "ftp_watts": 320, "session_type": "vo2max", "repetitions": 5 });
    let md = render_report_json(&req.to_string(), None).unwrap();
    assert!(md.contains("**Série 1: 5 répétitions**"));
}

#[test]
fn tables_pass_self_check() {
    assert_eq!(self_check(), Ok(()));
}

#[test]
fn huge_work_minutes_return_typed_error() {
    let req = json!({
        "ftp_watts": 320,
        "session_type": "vo2max",
        "work_minutes": 4_000_000_000u32,
        "duration_minutes": 60
    });
    let err = generate_plan_json(&req.to_string(), None).unwrap_err();
    assert!(matches!(err, PlanError::InvalidWorkDuration { .. }), "{err:?}");
}
