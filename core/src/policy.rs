use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::{Level, SessionType};
use crate::rounding::round_to_u32;

/// Nivåtilpasning for én (nivå, stimulus).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPolicy {
    pub level: Level,
    pub stimulus: SessionType,
    pub max_repetitions: u32,
    pub recovery_ratio: f64,
    pub cadence_target: u32,
    pub max_work_minutes: u32,
}

/// Resultat av repetisjonsbegrensning; `applied < requested` betyr at vi kappet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionClamp {
    pub requested: u32,
    pub applied: u32,
    pub max: u32,
}

impl RepetitionClamp {
    pub fn clamped(&self) -> bool {
        self.applied < self.requested
    }
}

impl LevelPolicy {
    pub fn clamp_repetitions(&self, requested: u32) -> Result<RepetitionClamp, PlanError> {
        if requested == 0 {
            return Err(PlanError::InvalidRepetitions(requested));
        }
        Ok(RepetitionClamp {
            requested,
            applied: requested.min(self.max_repetitions),
            max: self.max_repetitions,
        })
    }

    pub fn rest_minutes(&self, work_minutes: u32) -> u32 {
        round_to_u32(work_minutes as f64 * self.recovery_ratio)
    }

    /// Gyldig arbeidsvarighet: stimulusets område, kappet av nivåets tak.
    pub fn work_range_minutes(&self) -> Result<(u32, u32), PlanError> {
        let (min, max) = self
            .stimulus
            .work_range_minutes()
            .ok_or_else(|| PlanError::UnsupportedStimulusType(self.stimulus.to_string()))?;
        Ok((min, max.min(self.max_work_minutes)))
    }
}

const fn row(
    level: Level,
    stimulus: SessionType,
    max_repetitions: u32,
    recovery_ratio: f64,
    cadence_target: u32,
    max_work_minutes: u32,
) -> LevelPolicy {
    LevelPolicy {
        level,
        stimulus,
        max_repetitions,
        recovery_ratio,
        cadence_target,
        max_work_minutes,
    }
}

use Level::{Advanced, Beginner, Elite, Intermediate};
use SessionType::{Tempo, Threshold, Vo2Max};

pub static POLICY_TABLE: [LevelPolicy; 12] = [
    row(Beginner, Vo2Max, 3, 1.0, 95, 3),
    row(Intermediate, Vo2Max, 5, 0.75, 100, 5),
    row(Advanced, Vo2Max, 6, 0.5, 105, 8),
    row(Elite, Vo2Max, 8, 0.5, 110, 8),
    row(Beginner, Threshold, 2, 0.5, 90, 15),
    row(Intermediate, Threshold, 3, 0.25, 95, 25),
    row(Advanced, Threshold, 4, 0.25, 95, 40),
    row(Elite, Threshold, 5, 0.2, 100, 60),
    row(Beginner, Tempo, 1, 0.25, 85, 15),
    row(Intermediate, Tempo, 2, 0.25, 90, 20),
    row(Advanced, Tempo, 3, 0.25, 90, 30),
    row(Elite, Tempo, 4, 0.2, 95, 40),
];

pub fn adapt(level: Level, stimulus: SessionType) -> Result<LevelPolicy, PlanError> {
    if !stimulus.is_interval() {
        return Err(PlanError::UnsupportedStimulusType(stimulus.to_string()));
    }
    POLICY_TABLE
        .iter()
        .find(|p| p.level == level && p.stimulus == stimulus)
        .copied()
        .ok_or_else(|| PlanError::UnsupportedLevel(level.to_string()))
}

/// Sjekker tabellen: full dekning, monotoni per stimulus og ulike tupler per nivå.
pub fn validate_policy_table() -> Result<(), PlanError> {
    for stimulus in SessionType::INTERVALS {
        let mut rows = Vec::with_capacity(Level::ALL.len());
        for level in Level::ALL {
            let p = adapt(level, stimulus).map_err(|_| {
                PlanError::InvalidPolicyTable(format!("missing row {level}/{stimulus}"))
            })?;
            if p.max_repetitions == 0 || p.cadence_target == 0 || p.max_work_minutes == 0 {
                return Err(PlanError::InvalidPolicyTable(format!(
                    "zero limit in {level}/{stimulus}"
                )));
            }
            if !(p.recovery_ratio > 0.0 && p.recovery_ratio.is_finite()) {
                return Err(PlanError::InvalidPolicyTable(format!(
                    "recovery ratio {} in {level}/{stimulus}",
                    p.recovery_ratio
                )));
            }
            rows.push(p);
        }
        for pair in rows.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if hi.max_repetitions < lo.max_repetitions
                || hi.recovery_ratio > lo.recovery_ratio
                || hi.cadence_target < lo.cadence_target
            {
                return Err(PlanError::InvalidPolicyTable(format!(
                    "{} is not ordered above {} for {stimulus}",
                    hi.level, lo.level
                )));
            }
            if hi.max_repetitions == lo.max_repetitions
                && hi.recovery_ratio == lo.recovery_ratio
                && hi.cadence_target == lo.cadence_target
            {
                return Err(PlanError::InvalidPolicyTable(format!(
                    "{} and {} share the same adaptation for {stimulus}",
                    lo.level, hi.level
                )));
            }
        }
    }
    Ok(())
}
