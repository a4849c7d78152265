use log::warn;

use crate::config::GeneratorConfig;
use crate::models::SegmentKind;
use crate::types::{PlanBlock, SessionPlan};

/// Økter lengre enn dette bør ha både oppvarming og nedtrapping.
const STRUCTURED_SESSION_MIN: u32 = 30;

/// Strukturelle advarsler for en ferdig plan. Tom liste = ingen anmerkninger.
pub fn review(plan: &SessionPlan, requested_duration: Option<u32>, cfg: &GeneratorConfig) -> Vec<String> {
    let mut issues = Vec::new();

    if let Some(requested) = requested_duration {
        let diff = plan.total_duration_minutes.abs_diff(requested);
        if diff > cfg.duration_tolerance_minutes {
            issues.push(format!(
                "Durée incohérente: calculée {}min vs demandée {}min",
                plan.total_duration_minutes, requested
            ));
        }
    }

    let has_kind = |kind: SegmentKind| plan.segments().any(|s| s.kind == kind);
    if plan.total_duration_minutes > STRUCTURED_SESSION_MIN {
        // Rene restitusjonsøkter (ett jevnt segment) har ingen oppvarming
        let continuous_easy = matches!(
            plan.blocks.as_slice(),
            [PlanBlock::Segment(s)] if s.kind == SegmentKind::SteadyState
        );
        if !has_kind(SegmentKind::Warmup) && !continuous_easy {
            issues.push("Échauffement recommandé pour séances > 30min".to_string());
        }
        if !has_kind(SegmentKind::Cooldown) && !continuous_easy {
            issues.push("Retour au calme recommandé pour séances > 30min".to_string());
        }
    }

    for block in &plan.blocks {
        if let PlanBlock::Series(s) = block {
            if s.work.zone.min_pct < 40.0 {
                issues.push(format!(
                    "Zone de travail invalide: {}-{}% FTP",
                    s.work.zone.min_pct, s.work.zone.max_pct
                ));
            }
            if s.rest.zone.max_pct > 100.0 {
                issues.push(format!(
                    "Zone de repos invalide: {}-{}% FTP",
                    s.rest.zone.min_pct, s.rest.zone.max_pct
                ));
            }
        }
    }

    for issue in &issues {
        warn!("plan review: {issue}");
    }
    issues
}
