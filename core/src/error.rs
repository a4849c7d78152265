use thiserror::Error;

use crate::models::{SegmentKind, SessionType};

/// Alle feil fra planleggeren. Alt valideres ved konstruksjon; ingen delvise planer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("no zone covers {0}")]
    UnknownZone(String),

    #[error("invalid zone bounds for {name}: {min_pct}-{max_pct}% FTP")]
    InvalidZoneBounds { name: String, min_pct: f64, max_pct: f64 },

    #[error("invalid duration for {kind} segment: {minutes} min")]
    InvalidDuration { kind: SegmentKind, minutes: u32 },

    #[error("invalid cadence for {kind} segment: {rpm} rpm")]
    InvalidCadence { kind: SegmentKind, rpm: u32 },

    #[error("invalid work duration for {stimulus}: {minutes} min (valid {min}-{max} min)")]
    InvalidWorkDuration {
        stimulus: SessionType,
        minutes: u32,
        min: u32,
        max: u32,
    },

    #[error("invalid repetitions: {0} (need at least 1)")]
    InvalidRepetitions(u32),

    #[error("plan has no segments")]
    EmptyPlan,

    #[error("unsupported athlete level: {0}")]
    UnsupportedLevel(String),

    #[error("unsupported stimulus type: {0}")]
    UnsupportedStimulusType(String),

    #[error("invalid FTP: {0} W")]
    InvalidFtp(u32),

    #[error("inconsistent adaptation table: {0}")]
    InvalidPolicyTable(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config io error at {path}: {message}")]
    ConfigIo { path: String, message: String },

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },
}

impl PlanError {
    pub(crate) fn parse<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> Self {
        PlanError::Parse {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}
