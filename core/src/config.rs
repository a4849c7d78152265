use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Øvre grense for varigheter i konfig (ett døgn).
const MAX_MINUTES: u32 = 24 * 60;
const MAX_CADENCE_RPM: u32 = 200;

/// Faste økt-parametre. Alle felt har default slik at delvis JSON holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub warmup_minutes: u32,
    pub activation_minutes: u32,
    pub cooldown_minutes: u32,
    pub warmup_cadence_rpm: u32,
    pub activation_cadence_rpm: u32,
    pub rest_cadence_rpm: u32,
    pub cooldown_cadence_rpm: u32,
    /// Nedtrapping starter på `Z1.min * faktor`.
    pub cooldown_ease_factor: f64,
    /// Restitusjonsøkt: Z1 skalert med denne.
    pub recovery_scale: f64,
    pub endurance_minutes: u32,
    pub recovery_minutes: u32,
    pub duration_tolerance_minutes: u32,
    pub high_intensity_pct: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            warmup_minutes: 15,
            activation_minutes: 10,
            cooldown_minutes: 15,
            warmup_cadence_rpm: 85,
            activation_cadence_rpm: 90,
            rest_cadence_rpm: 85,
            cooldown_cadence_rpm: 80,
            cooldown_ease_factor: 0.8,
            recovery_scale: 0.9,
            endurance_minutes: 90,
            recovery_minutes: 45,
            duration_tolerance_minutes: 5,
            high_intensity_pct: 91.0,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), PlanError> {
        let minutes = [
            ("warmup_minutes", self.warmup_minutes),
            ("activation_minutes", self.activation_minutes),
            ("cooldown_minutes", self.cooldown_minutes),
            ("endurance_minutes", self.endurance_minutes),
            ("recovery_minutes", self.recovery_minutes),
        ];
        for (name, v) in minutes {
            if v == 0 || v > MAX_MINUTES {
                return Err(PlanError::InvalidConfig(format!(
                    "{name} must be in 1..={MAX_MINUTES}, got {v}"
                )));
            }
        }
        let cadences = [
            ("warmup_cadence_rpm", self.warmup_cadence_rpm),
            ("activation_cadence_rpm", self.activation_cadence_rpm),
            ("rest_cadence_rpm", self.rest_cadence_rpm),
            ("cooldown_cadence_rpm", self.cooldown_cadence_rpm),
        ];
        for (name, v) in cadences {
            if v == 0 || v > MAX_CADENCE_RPM {
                return Err(PlanError::InvalidConfig(format!(
                    "{name} must be in 1..={MAX_CADENCE_RPM}, got {v}"
                )));
            }
        }
        if self.duration_tolerance_minutes > MAX_MINUTES {
            return Err(PlanError::InvalidConfig(format!(
                "duration_tolerance_minutes must be <= {MAX_MINUTES}, got {}",
                self.duration_tolerance_minutes
            )));
        }
        for (name, f) in [
            ("cooldown_ease_factor", self.cooldown_ease_factor),
            ("recovery_scale", self.recovery_scale),
        ] {
            if !(f > 0.0 && f <= 1.0) {
                return Err(PlanError::InvalidConfig(format!("{name} must be in (0, 1], got {f}")));
            }
        }
        if !(self.high_intensity_pct.is_finite() && self.high_intensity_pct > 0.0) {
            return Err(PlanError::InvalidConfig(format!(
                "high_intensity_pct must be > 0, got {}",
                self.high_intensity_pct
            )));
        }
        Ok(())
    }

    pub fn from_json(json_in: &str) -> Result<Self, PlanError> {
        let mut de = serde_json::Deserializer::from_str(json_in);
        let cfg: GeneratorConfig =
            serde_path_to_error::deserialize(&mut de).map_err(PlanError::parse)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Leser konfig fra disk (JSON). Mangler filen, brukes default.
pub fn load_config(path: &str) -> Result<GeneratorConfig, PlanError> {
    if !Path::new(path).exists() {
        warn!("config not found at {path}, using defaults");
        return Ok(GeneratorConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| PlanError::ConfigIo {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    let cfg = GeneratorConfig::from_json(&contents)?;
    info!("config loaded from {path}");
    Ok(cfg)
}

/// Lagrer konfig som JSON (pretty-print).
pub fn save_config(cfg: &GeneratorConfig, path: &str) -> Result<(), PlanError> {
    let io_err = |message: String| PlanError::ConfigIo {
        path: path.to_string(),
        message,
    };
    let json = serde_json::to_string_pretty(cfg).map_err(|e| io_err(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| io_err(e.to_string()))?;
    info!("config saved to {path}");
    Ok(())
}
