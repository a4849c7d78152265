use crate::models::Level;
use crate::rounding::{round_to_u32, RoundTo};
use crate::types::{PlanBlock, RecoveryWindow, Segment};

/// (minutter, midtpunkt %FTP) for hvert tidsstykke i økten, serier foldet ut i arbeid + hvile.
fn weighted_parts(blocks: &[PlanBlock]) -> Vec<(f64, f64)> {
    let mut parts = Vec::with_capacity(blocks.len() * 2);
    for b in blocks {
        match b {
            PlanBlock::Segment(s) => parts.push((s.duration_minutes as f64, s.zone.midpoint_pct())),
            PlanBlock::Series(s) => {
                let reps = s.repetitions as f64;
                parts.push((reps * s.work.duration_minutes as f64, s.work.zone.midpoint_pct()));
                parts.push((reps * s.rest.duration_minutes as f64, s.rest.zone.midpoint_pct()));
            }
        }
    }
    parts
}

/// Stressbidrag for ett stykke: timer * IF² * 100, IF = midtpunkt/100.
#[inline]
pub fn stress(minutes: f64, midpoint_pct: f64) -> f64 {
    let intensity = midpoint_pct / 100.0;
    minutes / 60.0 * intensity * intensity * 100.0
}

pub fn segment_stress(segment: &Segment) -> f64 {
    stress(segment.duration_minutes as f64, segment.zone.midpoint_pct())
}

/// TSS (IF²-vektet), avrundes én gang til slutt.
pub fn estimate_tss(blocks: &[PlanBlock]) -> u32 {
    let raw: f64 = weighted_parts(blocks)
        .into_iter()
        .map(|(min, pct)| stress(min, pct))
        .sum();
    round_to_u32(raw)
}

/// Varighetsvektet snitt-IF for økten, 3 desimaler.
pub fn intensity_factor(blocks: &[PlanBlock]) -> f64 {
    let parts = weighted_parts(blocks);
    let total: f64 = parts.iter().map(|(m, _)| m).sum();
    if total <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = parts.iter().map(|(m, pct)| m * pct / 100.0).sum();
    (weighted / total).round_to(3)
}

/// Minutter der bunnen av sonen ligger på/over terskelen (default Z4+).
pub fn high_intensity_minutes(blocks: &[PlanBlock], threshold_pct: f64) -> u32 {
    blocks
        .iter()
        .map(|b| match b {
            PlanBlock::Segment(s) if s.zone.min_pct >= threshold_pct => s.duration_minutes,
            PlanBlock::Series(s) if s.work.zone.min_pct >= threshold_pct => {
                s.repetitions * s.work.duration_minutes
            }
            _ => 0,
        })
        .sum()
}

fn recovery_factor(level: Level) -> f64 {
    match level {
        Level::Beginner => 1.3,
        Level::Intermediate => 1.0,
        Level::Advanced => 0.8,
        Level::Elite => 0.6,
    }
}

/// Anbefalt restitusjon (timer) fra TSS justert for nivå.
pub fn recovery_window(tss: u32, level: Level) -> RecoveryWindow {
    let adjusted = tss as f64 * recovery_factor(level);
    let (min_hours, max_hours) = match adjusted {
        a if a < 40.0 => (12, 18),
        a if a < 60.0 => (18, 24),
        a if a < 80.0 => (24, 36),
        a if a < 120.0 => (36, 48),
        _ => (48, 72),
    };
    RecoveryWindow { min_hours, max_hours }
}
