use log::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::PlanError;
use crate::models::{AthleteProfile, Level, SegmentKind, SessionType, WorkoutRequest};
use crate::plan::assemble_with_threshold;
use crate::policy::adapt;
use crate::segment::build_segment;
use crate::series::{build_series, SeriesSpec};
use crate::types::{PlanBlock, SessionPlan};
use crate::zones::{canonical_zones, Zone, ZoneTable};

/// Arbeidssone, standard arbeidsdrag (min) og standard antall drag per intervallstimulus.
fn interval_defaults(stimulus: SessionType) -> Result<(&'static str, u32, u32), PlanError> {
    match stimulus {
        SessionType::Vo2Max => Ok(("Z5", 4, 5)),
        SessionType::Threshold => Ok(("Z4", 20, 2)),
        SessionType::Tempo => Ok(("Z3", 20, 2)),
        SessionType::Endurance | SessionType::Recovery => {
            Err(PlanError::UnsupportedStimulusType(stimulus.to_string()))
        }
    }
}

/// Bygger en komplett økt fra forespørselen. Samme input gir alltid identisk plan.
pub fn generate(request: &WorkoutRequest, cfg: &GeneratorConfig) -> Result<SessionPlan, PlanError> {
    cfg.validate()?;
    let session_type: SessionType = request.session_type.parse()?;
    let level: Level = request.level.parse()?;
    let profile = AthleteProfile::new(request.ftp_watts)?;
    let zones = canonical_zones()?;

    debug!(
        "generate {session_type} ({level}) FTP {}W duration={:?} reps={:?} work={:?}",
        profile.ftp_watts, request.duration_minutes, request.repetitions, request.work_minutes
    );

    let blocks = match session_type {
        SessionType::Vo2Max | SessionType::Threshold | SessionType::Tempo => {
            interval_blocks(session_type, level, request, cfg, zones, profile.ftp_watts)?
        }
        SessionType::Endurance => {
            ignore_interval_fields(request, session_type);
            endurance_blocks(request, cfg, zones, profile.ftp_watts)?
        }
        SessionType::Recovery => {
            ignore_interval_fields(request, session_type);
            recovery_blocks(request, cfg, zones, profile.ftp_watts)?
        }
    };

    assemble_with_threshold(&profile, session_type, level, blocks, cfg.high_intensity_pct)
}

fn ignore_interval_fields(request: &WorkoutRequest, session_type: SessionType) {
    if request.repetitions.is_some() || request.work_minutes.is_some() {
        warn!("{session_type} has no interval series; repetitions/work_minutes ignored");
    }
}

fn interval_blocks(
    stimulus: SessionType,
    level: Level,
    request: &WorkoutRequest,
    cfg: &GeneratorConfig,
    zones: &ZoneTable,
    ftp_watts: u32,
) -> Result<Vec<PlanBlock>, PlanError> {
    let policy = adapt(level, stimulus)?;
    let (work_zone_name, default_work, default_reps) = interval_defaults(stimulus)?;

    let z1 = zones.get("Z1")?;
    let z2 = zones.get("Z2")?;
    let work_zone = zones.get(work_zone_name)?;

    let (min_work, max_work) = policy.work_range_minutes()?;
    let work_minutes = request
        .work_minutes
        .unwrap_or_else(|| default_work.min(max_work).max(min_work));
    // Sjekkes før hvile- og tidsregning slik at ekstreme verdier gir feil, ikke overflyt
    if work_minutes < min_work || work_minutes > max_work {
        return Err(PlanError::InvalidWorkDuration {
            stimulus,
            minutes: work_minutes,
            min: min_work,
            max: max_work,
        });
    }
    let rest_minutes = policy.rest_minutes(work_minutes);

    let with_activation = stimulus == SessionType::Vo2Max;
    let fixed_minutes = cfg.warmup_minutes
        + cfg.cooldown_minutes
        + if with_activation { cfg.activation_minutes } else { 0 };

    // Eksplisitt antall vinner og kappes i serien (med notat). Utledet antall holdes
    // innenfor nivåets tak allerede her.
    let repetitions = match (request.repetitions, request.duration_minutes) {
        (Some(reps), _) => reps,
        (None, Some(duration)) => {
            let per_rep = (work_minutes + rest_minutes).max(1);
            (duration.saturating_sub(fixed_minutes) / per_rep).clamp(1, policy.max_repetitions)
        }
        (None, None) => default_reps.min(policy.max_repetitions),
    };

    let warmup_zone = if with_activation {
        Zone::ramp(z1, z2)?
    } else {
        Zone::span(z1, z2)?
    };
    let cooldown_zone = Zone::eased(z1, cfg.cooldown_ease_factor)?;

    let mut blocks = Vec::with_capacity(4);
    blocks.push(PlanBlock::Segment(build_segment(
        SegmentKind::Warmup,
        &warmup_zone,
        cfg.warmup_minutes,
        cfg.warmup_cadence_rpm,
        ftp_watts,
    )?));
    if with_activation {
        blocks.push(PlanBlock::Segment(build_segment(
            SegmentKind::SteadyState,
            z2,
            cfg.activation_minutes,
            cfg.activation_cadence_rpm,
            ftp_watts,
        )?));
    }
    let spec = SeriesSpec {
        stimulus,
        work_zone,
        work_minutes,
        rest_zone: z2,
        rest_cadence_rpm: cfg.rest_cadence_rpm,
        repetitions,
    };
    blocks.push(PlanBlock::Series(build_series(&spec, &policy, ftp_watts)?));
    blocks.push(PlanBlock::Segment(build_segment(
        SegmentKind::Cooldown,
        &cooldown_zone,
        cfg.cooldown_minutes,
        cfg.cooldown_cadence_rpm,
        ftp_watts,
    )?));
    Ok(blocks)
}

fn endurance_blocks(
    request: &WorkoutRequest,
    cfg: &GeneratorConfig,
    zones: &ZoneTable,
    ftp_watts: u32,
) -> Result<Vec<PlanBlock>, PlanError> {
    let z1 = zones.get("Z1")?;
    let z2 = zones.get("Z2")?;

    let duration = request.duration_minutes.unwrap_or(cfg.endurance_minutes);
    let warmup = cfg.warmup_minutes.min(duration / 6);
    let cooldown = cfg.cooldown_minutes.min(duration / 6);
    let main = duration.saturating_sub(warmup + cooldown);

    Ok(vec![
        PlanBlock::Segment(build_segment(
            SegmentKind::Warmup,
            &Zone::ramp(z1, z2)?,
            warmup,
            cfg.warmup_cadence_rpm,
            ftp_watts,
        )?),
        PlanBlock::Segment(build_segment(
            SegmentKind::SteadyState,
            z2,
            main,
            cfg.activation_cadence_rpm,
            ftp_watts,
        )?),
        PlanBlock::Segment(build_segment(
            SegmentKind::Cooldown,
            &Zone::eased(z1, cfg.cooldown_ease_factor)?,
            cooldown,
            cfg.cooldown_cadence_rpm,
            ftp_watts,
        )?),
    ])
}

fn recovery_blocks(
    request: &WorkoutRequest,
    cfg: &GeneratorConfig,
    zones: &ZoneTable,
    ftp_watts: u32,
) -> Result<Vec<PlanBlock>, PlanError> {
    let z1 = zones.get("Z1")?;
    let duration = request.duration_minutes.unwrap_or(cfg.recovery_minutes);
    Ok(vec![PlanBlock::Segment(build_segment(
        SegmentKind::SteadyState,
        &Zone::scaled(z1, cfg.recovery_scale)?,
        duration,
        cfg.warmup_cadence_rpm,
        ftp_watts,
    )?)])
}
