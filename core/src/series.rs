use log::{debug, warn};

use crate::error::PlanError;
use crate::models::{SegmentKind, SessionType};
use crate::policy::LevelPolicy;
use crate::rationale::series_rationale;
use crate::segment::build_segment;
use crate::types::IntervalSeries;
use crate::zones::Zone;

/// Ønsket serie før nivåtilpasning. Hvilevarighet utledes fra policyens ratio.
#[derive(Debug, Clone)]
pub struct SeriesSpec<'a> {
    pub stimulus: SessionType,
    pub work_zone: &'a Zone,
    pub work_minutes: u32,
    pub rest_zone: &'a Zone,
    pub rest_cadence_rpm: u32,
    pub repetitions: u32,
}

pub fn build_series(
    spec: &SeriesSpec<'_>,
    policy: &LevelPolicy,
    ftp_watts: u32,
) -> Result<IntervalSeries, PlanError> {
    if policy.stimulus != spec.stimulus {
        return Err(PlanError::UnsupportedStimulusType(format!(
            "{} (policy is for {})",
            spec.stimulus, policy.stimulus
        )));
    }

    // Utenfor området feiler; ingen stille kapping av arbeidsdraget.
    let (min, max) = policy.work_range_minutes()?;
    if spec.work_minutes < min || spec.work_minutes > max {
        return Err(PlanError::InvalidWorkDuration {
            stimulus: spec.stimulus,
            minutes: spec.work_minutes,
            min,
            max,
        });
    }

    let clamp = policy.clamp_repetitions(spec.repetitions)?;
    if clamp.clamped() {
        warn!(
            "{} {}: {} repetitions requested, clamped to {}",
            spec.stimulus, policy.level, clamp.requested, clamp.applied
        );
    }

    let rest_minutes = policy.rest_minutes(spec.work_minutes);
    let work = build_segment(
        SegmentKind::Work,
        spec.work_zone,
        spec.work_minutes,
        policy.cadence_target,
        ftp_watts,
    )?;
    let rest = build_segment(
        SegmentKind::Rest,
        spec.rest_zone,
        rest_minutes,
        spec.rest_cadence_rpm,
        ftp_watts,
    )?;

    let series = IntervalSeries {
        stimulus: spec.stimulus,
        repetitions: clamp.applied,
        requested_repetitions: clamp.requested,
        max_repetitions: clamp.max,
        recovery_ratio: policy.recovery_ratio,
        rationale: series_rationale(
            spec.stimulus.label(),
            clamp.applied,
            spec.work_minutes,
            policy.level.as_str(),
        ),
        work,
        rest,
    };

    debug!(
        "series {}x({}+{})min = {}min",
        series.repetitions,
        spec.work_minutes,
        rest_minutes,
        series.total_minutes()
    );
    Ok(series)
}
