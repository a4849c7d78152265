use crate::models::SegmentKind;
use crate::zones::Zone;

/// Beskrivelse + begrunnelse for et segment. Ren data, nøklet på (type, primærsone).
pub fn segment_text(kind: SegmentKind, zone: &Zone) -> (&'static str, &'static str) {
    match (kind, zone.primary()) {
        (SegmentKind::Warmup, _) => (
            "Échauffement progressif avec activation cardiovasculaire",
            "Préparation du système cardiovasculaire et augmentation graduelle du flux sanguin musculaire",
        ),
        (SegmentKind::SteadyState, "Z1") => (
            "Récupération active - pédalage très fluide",
            "Maintien circulation sanguine pour élimination déchets métaboliques et favoriser la récupération",
        ),
        (SegmentKind::SteadyState, "Z2") => (
            "Endurance aérobie stable - conversation possible",
            "Activation des voies métaboliques aérobies, adaptations mitochondriales et métabolisme des graisses",
        ),
        (SegmentKind::SteadyState, _) => (
            "Effort soutenu régulier",
            "Développement de l'endurance musculaire à intensité contrôlée",
        ),
        (SegmentKind::Work, "Z5") => (
            "VO2max Z5 - Puissance maximale aérobie",
            "Stimulation de la consommation maximale d'oxygène par des efforts de 3-4 minutes à 106-120% FTP",
        ),
        (SegmentKind::Work, "Z4") => (
            "Bloc seuil - Maintenir FTP stable",
            "Travail au seuil lactique (91-105% FTP) pour améliorer la capacité à métaboliser le lactate",
        ),
        (SegmentKind::Work, "Z3") => (
            "Bloc tempo - Rythme soutenu",
            "Effort en Zone 3 pour développer l'endurance musculaire sans fatigue excessive",
        ),
        (SegmentKind::Work, _) => (
            "Effort intense",
            "Sollicitation ciblée de la zone de travail demandée",
        ),
        (SegmentKind::Rest, _) => (
            "Récupération active Z2 - Maintien flux sanguin",
            "Récupération incomplète qui maintient la consommation d'oxygène élevée entre les efforts",
        ),
        (SegmentKind::Cooldown, _) => (
            "Retour au calme actif pour élimination lactate",
            "Maintien circulation sanguine pour élimination déchets métaboliques",
        ),
    }
}

pub fn series_rationale(stimulus_label: &str, repetitions: u32, work_minutes: u32, level: &str) -> String {
    format!(
        "Intervalles {repetitions}×{work_minutes}min {stimulus_label} optimisés pour le stimulus visé sans fatigue excessive pour niveau {level}"
    )
}
