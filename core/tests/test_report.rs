use chrono::NaiveDate;

use cyclegraph_planner::report::{render_markdown, title};
use cyclegraph_planner::{generate, GeneratorConfig, Level, SessionType, WorkoutRequest};

fn reference_plan() -> cyclegraph_planner::SessionPlan {
    let mut req = WorkoutRequest::new(320, SessionType::Vo2Max, Level::Intermediate);
    req.repetitions = Some(5);
    generate(&req, &GeneratorConfig::default()).expect("plan")
}

#[test]
fn report_reflects_plan_fields() {
    let plan = reference_plan();
    let at = NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|d| d.and_hms_opt(7, 30, 0))
        .expect("gyldig dato");
    let md = render_markdown(&plan, at);

    assert!(md.starts_with("# VO2max Optimisé 5×4min\n"));
    assert!(md.contains("**Type:** VO2MAX"));
    assert!(md.contains("**Durée:** 75 minutes"));
    assert!(md.contains("**TSS Estimé:** 72"));
    assert!(md.contains("**FTP:** 320W"));
    assert!(md.contains("**Généré le:** 14/03/2025 à 07:30"));
    assert!(md.contains("**Série 1: 5 répétitions**"));
    assert!(md.contains("- **Travail:** 4min à 339-384W (106-120% FTP)"));
    assert!(md.contains("- **Repos:** 3min à 179-240W (56-75% FTP)"));
    assert!(md.contains("1. **Warmup** - 15min"));
    assert!(md.contains("2. **SteadyState** - 10min"));
    assert!(md.contains("3. **Cooldown** - 15min"));
    assert!(md.contains("5 répétitions (max 5)"));
    assert!(md.contains("## Conseils Pratiques"));
}

#[test]
fn same_timestamp_gives_same_report() {
    let plan = reference_plan();
    let at = NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("gyldig dato");
    assert_eq!(render_markdown(&plan, at), render_markdown(&plan, at));
}

#[test]
fn continuous_sessions_are_titled_by_duration() {
    let req = WorkoutRequest::new(250, SessionType::Endurance, Level::Advanced);
    let plan = generate(&req, &GeneratorConfig::default()).unwrap();
    assert_eq!(title(&plan), "Endurance 90min");

    let req = WorkoutRequest::new(250, SessionType::Recovery, Level::Advanced);
    let plan = generate(&req, &GeneratorConfig::default()).unwrap();
    assert_eq!(title(&plan), "Recovery 45min");
}
