use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Utøverens referanseverdier. Eies av kalleren, uendret gjennom en generering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub ftp_watts: u32,
}

impl AthleteProfile {
    pub fn new(ftp_watts: u32) -> Result<Self, PlanError> {
        if ftp_watts == 0 {
            return Err(PlanError::InvalidFtp(ftp_watts));
        }
        Ok(Self { ftp_watts })
    }
}

/// Erfaringsnivå, ordnet fra lavest til høyest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Elite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Elite => "elite",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "débutant" | "debutant" => Ok(Level::Beginner),
            "intermediate" | "intermédiaire" | "intermediaire" => Ok(Level::Intermediate),
            "advanced" | "avancé" | "avance" => Ok(Level::Advanced),
            "elite" | "élite" => Ok(Level::Elite),
            _ => Err(PlanError::UnsupportedLevel(s.to_string())),
        }
    }
}

/// Treningsstimulus / økttype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Vo2Max,
    Threshold,
    Tempo,
    Endurance,
    Recovery,
}

impl SessionType {
    pub const INTERVALS: [SessionType; 3] = [
        SessionType::Vo2Max,
        SessionType::Threshold,
        SessionType::Tempo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Vo2Max => "VO2MAX",
            SessionType::Threshold => "THRESHOLD",
            SessionType::Tempo => "TEMPO",
            SessionType::Endurance => "ENDURANCE",
            SessionType::Recovery => "RECOVERY",
        }
    }

    /// Økter bygget rundt en arbeid/hvile-serie.
    pub fn is_interval(&self) -> bool {
        matches!(
            self,
            SessionType::Vo2Max | SessionType::Threshold | SessionType::Tempo
        )
    }

    /// Fysiologisk gyldig arbeidsvarighet (min) per drag. None for kontinuerlige økter.
    pub fn work_range_minutes(&self) -> Option<(u32, u32)> {
        match self {
            SessionType::Vo2Max => Some((3, 4)),
            SessionType::Threshold => Some((8, 40)),
            SessionType::Tempo => Some((10, 40)),
            SessionType::Endurance | SessionType::Recovery => None,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SessionType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vo2max" | "vo2" | "pma" => Ok(SessionType::Vo2Max),
            "threshold" | "seuil" | "ftp" => Ok(SessionType::Threshold),
            "tempo" | "z3" => Ok(SessionType::Tempo),
            "endurance" | "z2" | "base" => Ok(SessionType::Endurance),
            "recovery" | "recuperation" | "récupération" | "z1" => Ok(SessionType::Recovery),
            _ => Err(PlanError::UnsupportedStimulusType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Warmup,
    SteadyState,
    Work,
    Rest,
    Cooldown,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegmentKind::Warmup => "Warmup",
            SegmentKind::SteadyState => "SteadyState",
            SegmentKind::Work => "Work",
            SegmentKind::Rest => "Rest",
            SegmentKind::Cooldown => "Cooldown",
        };
        f.write_str(s)
    }
}

/// Forespørsel om én økt. Tekstfelt parses sent slik at ukjente verdier gir riktige feil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRequest {
    pub ftp_watts: u32,
    #[serde(alias = "workout_type", alias = "stimulus")]
    pub session_type: String,
    #[serde(default = "default_level", alias = "athlete_level")]
    pub level: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub repetitions: Option<u32>,
    #[serde(default)]
    pub work_minutes: Option<u32>,
}

fn default_level() -> String {
    Level::Intermediate.as_str().to_string()
}

impl WorkoutRequest {
    pub fn new(ftp_watts: u32, session_type: SessionType, level: Level) -> Self {
        Self {
            ftp_watts,
            session_type: session_type.label().to_lowercase(),
            level: level.as_str().to_string(),
            duration_minutes: None,
            repetitions: None,
            work_minutes: None,
        }
    }
}
