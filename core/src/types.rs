use serde::{Deserialize, Serialize};

use crate::models::{Level, SegmentKind, SessionType};
use crate::zones::Zone;

/// Wattgrenser, avrundet til nærmeste hele watt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerRange {
    pub min_watts: u32,
    pub max_watts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub duration_minutes: u32,
    pub zone: Zone,
    pub cadence_rpm: u32,
    pub power: PowerRange,
    pub description: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSeries {
    pub stimulus: SessionType,
    pub repetitions: u32,
    pub requested_repetitions: u32,
    pub max_repetitions: u32,
    pub recovery_ratio: f64,
    pub work: Segment,
    pub rest: Segment,
    pub rationale: String,
}

impl IntervalSeries {
    pub fn total_minutes(&self) -> u32 {
        self.repetitions * (self.work.duration_minutes + self.rest.duration_minutes)
    }

    pub fn was_clamped(&self) -> bool {
        self.repetitions < self.requested_repetitions
    }
}

/// Ett steg i økten; rekkefølgen i planen er gjennomføringsrekkefølgen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum PlanBlock {
    Segment(Segment),
    Series(IntervalSeries),
}

impl PlanBlock {
    pub fn duration_minutes(&self) -> u32 {
        match self {
            PlanBlock::Segment(s) => s.duration_minutes,
            PlanBlock::Series(s) => s.total_minutes(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryWindow {
    pub min_hours: u32,
    pub max_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub session_type: SessionType,
    pub level: Level,
    pub ftp_watts: u32,
    pub blocks: Vec<PlanBlock>,
    pub total_duration_minutes: u32,
    pub estimated_tss: u32,
    pub intensity_factor: f64,
    pub high_intensity_minutes: u32,
    pub recovery_window: RecoveryWindow,
    pub adaptation_notes: Vec<String>,
}

impl SessionPlan {
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.blocks.iter().filter_map(|b| match b {
            PlanBlock::Segment(s) => Some(s),
            PlanBlock::Series(_) => None,
        })
    }

    pub fn series(&self) -> impl Iterator<Item = &IntervalSeries> {
        self.blocks.iter().filter_map(|b| match b {
            PlanBlock::Series(s) => Some(s),
            PlanBlock::Segment(_) => None,
        })
    }
}
