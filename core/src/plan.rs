use log::info;

use crate::error::PlanError;
use crate::metrics::{estimate_tss, high_intensity_minutes, intensity_factor, recovery_window};
use crate::models::{AthleteProfile, Level, SessionType};
use crate::types::{IntervalSeries, PlanBlock, SessionPlan};

/// Z4-bunnen; tid over dette telles som høyintensitet.
pub const HIGH_INTENSITY_PCT: f64 = 91.0;

/// Tilpasningsnotat for en serie, f.eks. "Adapté pour intermediate: 5 répétitions (max 5), ...".
pub fn adaptation_note(level: Level, series: &IntervalSeries) -> String {
    let mut note = format!(
        "Adapté pour {level}: {} répétitions (max {}), récupération ratio {}, cadence {} rpm",
        series.repetitions, series.max_repetitions, series.recovery_ratio, series.work.cadence_rpm
    );
    if series.was_clamped() {
        note.push_str(&format!(
            "; demandé {}, ramené à {}",
            series.requested_repetitions, series.repetitions
        ));
    }
    note
}

pub fn assemble(
    profile: &AthleteProfile,
    session_type: SessionType,
    level: Level,
    blocks: Vec<PlanBlock>,
) -> Result<SessionPlan, PlanError> {
    assemble_with_threshold(profile, session_type, level, blocks, HIGH_INTENSITY_PCT)
}

pub fn assemble_with_threshold(
    profile: &AthleteProfile,
    session_type: SessionType,
    level: Level,
    blocks: Vec<PlanBlock>,
    high_intensity_pct: f64,
) -> Result<SessionPlan, PlanError> {
    if blocks.is_empty() {
        return Err(PlanError::EmptyPlan);
    }
    if profile.ftp_watts == 0 {
        return Err(PlanError::InvalidFtp(profile.ftp_watts));
    }

    let total_duration_minutes: u32 = blocks.iter().map(PlanBlock::duration_minutes).sum();
    let estimated_tss = estimate_tss(&blocks);
    let adaptation_notes = blocks
        .iter()
        .filter_map(|b| match b {
            PlanBlock::Series(s) => Some(adaptation_note(level, s)),
            PlanBlock::Segment(_) => None,
        })
        .collect();

    let plan = SessionPlan {
        session_type,
        level,
        ftp_watts: profile.ftp_watts,
        total_duration_minutes,
        estimated_tss,
        intensity_factor: intensity_factor(&blocks),
        high_intensity_minutes: high_intensity_minutes(&blocks, high_intensity_pct),
        recovery_window: recovery_window(estimated_tss, level),
        adaptation_notes,
        blocks,
    };

    info!(
        "plan {} ({level}) FTP {}W: {} blocks, {}min, TSS {}",
        plan.session_type,
        plan.ftp_watts,
        plan.blocks.len(),
        plan.total_duration_minutes,
        plan.estimated_tss
    );
    Ok(plan)
}
