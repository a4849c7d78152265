use chrono::{Local, NaiveDateTime};

use crate::models::SessionType;
use crate::types::{PlanBlock, Segment, SessionPlan};

/// Tittel utledet fra planen, f.eks. "VO2max Optimisé 5×4min".
pub fn title(plan: &SessionPlan) -> String {
    match plan.series().next() {
        Some(s) => {
            let prefix = match plan.session_type {
                SessionType::Vo2Max => "VO2max Optimisé",
                SessionType::Threshold => "Threshold",
                SessionType::Tempo => "Tempo",
                SessionType::Endurance => "Endurance",
                SessionType::Recovery => "Recovery",
            };
            format!("{prefix} {}×{}min", s.repetitions, s.work.duration_minutes)
        }
        None => {
            let prefix = match plan.session_type {
                SessionType::Recovery => "Recovery",
                _ => "Endurance",
            };
            format!("{prefix} {}min", plan.total_duration_minutes)
        }
    }
}

fn objective(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Vo2Max => "Amélioration de la Puissance Maximale Aérobie (PMA) et de la consommation maximale d'oxygène (VO2max) à travers des intervalles spécifiques de 3-4 minutes à 106-120% FTP",
        SessionType::Threshold => "Amélioration du seuil lactique (FTP) et de la capacité à maintenir des efforts soutenus à l'intensité critique",
        SessionType::Tempo => "Développement de l'endurance musculaire et de la capacité aérobie par des efforts soutenus en Zone 3",
        SessionType::Endurance => "Développement de l'endurance fondamentale, amélioration de l'efficacité cardiaque et du métabolisme des graisses",
        SessionType::Recovery => "Favoriser la récupération par maintien d'une circulation sanguine optimale et élimination des déchets métaboliques",
    }
}

fn coaching_tips(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Vo2Max => "Maintenez une cadence élevée (95-105 rpm), respirez profondément, acceptez l'inconfort en fin d'intervalle. Focus sur la régularité plutôt que les pics de puissance.",
        SessionType::Threshold => "Effort 'comfortablement dur' - limite de conversation. Maintenez une puissance stable, respirez de façon contrôlée, restez aérodynamique.",
        SessionType::Tempo => "Rythme soutenu mais gérable, maintenir une respiration contrôlée. Idéal pour préparation aux courses longues.",
        SessionType::Endurance => "Maintenez une conversation possible, cadence fluide 85-95 rpm, respiration nasale si possible. Hydratez-vous régulièrement.",
        SessionType::Recovery => "Pédalage très décontracté, cadence naturelle, respiration profonde. L'objectif est la récupération, pas l'entraînement.",
    }
}

fn power_line(seg: &Segment) -> String {
    format!(
        "{}-{}W ({:.0}-{:.0}% FTP)",
        seg.power.min_watts, seg.power.max_watts, seg.zone.min_pct, seg.zone.max_pct
    )
}

/// Markdown-rapport. Tidsstempelet er eneste ikke-deterministiske input og sendes inn.
pub fn render_markdown(plan: &SessionPlan, generated_at: NaiveDateTime) -> String {
    let mut out = format!("# {}\n\n", title(plan));
    out.push_str(&format!("**Type:** {}\n", plan.session_type.label()));
    out.push_str(&format!("**Niveau:** {}\n", plan.level));
    out.push_str(&format!("**Durée:** {} minutes\n", plan.total_duration_minutes));
    out.push_str(&format!("**TSS Estimé:** {}\n", plan.estimated_tss));
    out.push_str(&format!("**IF:** {:.2}\n", plan.intensity_factor));
    out.push_str(&format!("**FTP:** {}W\n", plan.ftp_watts));
    out.push_str(&format!(
        "**Généré le:** {}\n\n",
        generated_at.format("%d/%m/%Y à %H:%M")
    ));

    out.push_str(&format!(
        "## Objectif Scientifique\n\n{}\n\n",
        objective(plan.session_type)
    ));
    out.push_str("## Structure de la Séance\n\n");

    let mut seg_no = 0;
    let mut series_no = 0;
    for block in &plan.blocks {
        match block {
            PlanBlock::Segment(seg) => {
                seg_no += 1;
                out.push_str(&segment_section(seg_no, seg));
            }
            PlanBlock::Series(s) => {
                series_no += 1;
                out.push_str(&format!(
                    "**Série {series_no}: {} répétitions**\n\n",
                    s.repetitions
                ));
                for (label, seg) in [("Travail", &s.work), ("Repos", &s.rest)] {
                    out.push_str(&format!(
                        "- **{label}:** {}min à {}\n",
                        seg.duration_minutes,
                        power_line(seg)
                    ));
                    out.push_str(&format!("  - Cadence: {} rpm\n", seg.cadence_rpm));
                    out.push_str(&format!("  - Description: {}\n", seg.description));
                }
                out.push_str(&format!("- **Justification:** {}\n\n", s.rationale));
            }
        }
    }

    if !plan.adaptation_notes.is_empty() {
        out.push_str("## Notes d'Adaptation\n\n");
        for note in &plan.adaptation_notes {
            out.push_str(&format!("- {note}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "## Récupération\n\n{}-{} heures (temps à haute intensité: {}min)\n\n",
        plan.recovery_window.min_hours, plan.recovery_window.max_hours, plan.high_intensity_minutes
    ));

    out.push_str(&format!(
        "## Conseils de Coaching\n\n{}\n\n",
        coaching_tips(plan.session_type)
    ));
    out.push_str(PRACTICAL_TIPS);
    out
}

fn segment_section(no: usize, seg: &Segment) -> String {
    format!(
        "{no}. **{}** - {}min\n   - Puissance: {}\n   - Cadence: {} rpm\n   - Description: {}\n   - Justification: {}\n\n",
        seg.kind,
        seg.duration_minutes,
        power_line(seg),
        seg.cadence_rpm,
        seg.description,
        seg.rationale
    )
}

pub fn render_markdown_now(plan: &SessionPlan) -> String {
    render_markdown(plan, Local::now().naive_local())
}

const PRACTICAL_TIPS: &str = "## Conseils Pratiques

### Avant la séance
- Échauffement de 10-15 minutes
- Hydratation optimale
- Vérifier matériel (capteur puissance, fréquence cardiaque)

### Pendant la séance
- Respecter les zones de puissance
- Maintenir cadence recommandée
- Écouter son corps

### Après la séance
- Retour au calme de 10-15 minutes
- Réhydratation
- Récupération active selon planning
";
