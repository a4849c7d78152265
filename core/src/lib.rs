pub mod checks;
pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod plan;
pub mod policy;
pub mod rationale;
pub mod report;
pub mod rounding;
pub mod segment;
pub mod series;
pub mod types;
pub mod zones;

#[cfg(feature = "python")]
mod py;

use serde::Serialize;

pub use config::{load_config, save_config, GeneratorConfig};
pub use error::PlanError;
pub use generator::generate;
pub use models::{AthleteProfile, Level, SegmentKind, SessionType, WorkoutRequest};
pub use plan::assemble;
pub use policy::{adapt, LevelPolicy};
pub use segment::build_segment;
pub use series::{build_series, SeriesSpec};
pub use types::{IntervalSeries, PlanBlock, PowerRange, SessionPlan, Segment};
pub use zones::{canonical_zones, zone_for, Zone, ZoneTable};

/// Oppstartssjekk av de faste tabellene (soner + nivåtilpasning).
pub fn self_check() -> Result<(), PlanError> {
    canonical_zones()?;
    policy::validate_policy_table()
}

#[derive(Serialize)]
struct PlanResponse<'a> {
    plan: &'a SessionPlan,
    warnings: Vec<String>,
}

fn parse_inputs(request_json: &str, cfg_json: Option<&str>) -> Result<(WorkoutRequest, GeneratorConfig), PlanError> {
    let mut de = serde_json::Deserializer::from_str(request_json);
    let request: WorkoutRequest = serde_path_to_error::deserialize(&mut de).map_err(PlanError::parse)?;
    let cfg = match cfg_json {
        Some(txt) => GeneratorConfig::from_json(txt)?,
        None => GeneratorConfig::default(),
    };
    Ok((request, cfg))
}

/// JSON inn (WorkoutRequest + valgfri config), JSON ut: `{ "plan": ..., "warnings": [...] }`.
pub fn generate_plan_json(request_json: &str, cfg_json: Option<&str>) -> Result<String, PlanError> {
    let (request, cfg) = parse_inputs(request_json, cfg_json)?;
    let plan = generate(&request, &cfg)?;
    let warnings = checks::review(&plan, request.duration_minutes, &cfg);
    serde_json::to_string(&PlanResponse { plan: &plan, warnings }).map_err(|e| PlanError::Parse {
        path: "response".into(),
        message: e.to_string(),
    })
}

/// Som `generate_plan_json`, men returnerer Markdown-rapporten (med nåtidsstempel).
pub fn render_report_json(request_json: &str, cfg_json: Option<&str>) -> Result<String, PlanError> {
    let (request, cfg) = parse_inputs(request_json, cfg_json)?;
    let plan = generate(&request, &cfg)?;
    Ok(report::render_markdown_now(&plan))
}
