use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Kraftsone i %FTP. Grensene er inklusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub label: String,
    pub min_pct: f64,
    pub max_pct: f64,
}

impl Zone {
    pub fn new(name: &str, label: &str, min_pct: f64, max_pct: f64) -> Result<Self, PlanError> {
        if !(min_pct.is_finite() && max_pct.is_finite()) || min_pct <= 0.0 || min_pct >= max_pct {
            return Err(PlanError::InvalidZoneBounds {
                name: name.to_string(),
                min_pct,
                max_pct,
            });
        }
        Ok(Self {
            name: name.to_string(),
            label: label.to_string(),
            min_pct,
            max_pct,
        })
    }

    /// Midtpunkt i %FTP (grunnlag for IF/TSS).
    pub fn midpoint_pct(&self) -> f64 {
        (self.min_pct + self.max_pct) / 2.0
    }

    pub fn contains(&self, pct_ftp: f64) -> bool {
        pct_ftp >= self.min_pct && pct_ftp <= self.max_pct
    }

    /// Primærsonen ("Z1" for både "Z1" og "Z1-Z2").
    pub fn primary(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }

    /// Progressiv oppvarming: fra bunnen av `from` til bunnen av `to`.
    pub fn ramp(from: &Zone, to: &Zone) -> Result<Zone, PlanError> {
        Zone::new(
            &format!("{}-{}", from.name, to.name),
            &format!("{} → {}", from.label, to.label),
            from.min_pct,
            to.min_pct,
        )
    }

    /// Hele spennet fra bunnen av `from` til toppen av `to`.
    pub fn span(from: &Zone, to: &Zone) -> Result<Zone, PlanError> {
        Zone::new(
            &format!("{}-{}", from.name, to.name),
            &format!("{} → {}", from.label, to.label),
            from.min_pct,
            to.max_pct,
        )
    }

    /// Senker bare bunnen (nedtrapping som starter lettere enn sonen).
    pub fn eased(zone: &Zone, factor: f64) -> Result<Zone, PlanError> {
        Zone::new(&zone.name, &zone.label, zone.min_pct * factor, zone.max_pct)
    }

    /// Skalerer begge grensene.
    pub fn scaled(zone: &Zone, factor: f64) -> Result<Zone, PlanError> {
        Zone::new(
            &zone.name,
            &zone.label,
            zone.min_pct * factor,
            zone.max_pct * factor,
        )
    }
}

/// Ordnet sonetabell. Hull er lovlige og betyr "ingen sone".
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    pub fn from_zones(zones: Vec<Zone>) -> Result<Self, PlanError> {
        let table = Self { zones };
        table.validate()?;
        Ok(table)
    }

    /// Coggan 7-soner.
    pub fn coggan() -> Result<Self, PlanError> {
        Self::from_zones(vec![
            Zone::new("Z1", "Récupération Active", 45.0, 55.0)?,
            Zone::new("Z2", "Endurance Aérobie", 56.0, 75.0)?,
            Zone::new("Z3", "Tempo", 76.0, 90.0)?,
            Zone::new("Z4", "Seuil Lactique (FTP)", 91.0, 105.0)?,
            Zone::new("Z5", "VO2max (PMA)", 106.0, 120.0)?,
            Zone::new("Z6", "Capacité Anaérobie", 121.0, 150.0)?,
            Zone::new("Z7", "Puissance Neuromusculaire", 151.0, 300.0)?,
        ])
    }

    /// Stigende og ikke-overlappende.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.zones.is_empty() {
            return Err(PlanError::UnknownZone("empty zone table".into()));
        }
        for z in &self.zones {
            if z.min_pct <= 0.0 || z.min_pct >= z.max_pct {
                return Err(PlanError::InvalidZoneBounds {
                    name: z.name.clone(),
                    min_pct: z.min_pct,
                    max_pct: z.max_pct,
                });
            }
        }
        for pair in self.zones.windows(2) {
            if pair[1].min_pct <= pair[0].max_pct {
                return Err(PlanError::InvalidZoneBounds {
                    name: format!("{}/{}", pair[0].name, pair[1].name),
                    min_pct: pair[1].min_pct,
                    max_pct: pair[0].max_pct,
                });
            }
        }
        Ok(())
    }

    pub fn zone_for(&self, pct_ftp: f64) -> Result<&Zone, PlanError> {
        self.zones
            .iter()
            .find(|z| z.contains(pct_ftp))
            .ok_or_else(|| PlanError::UnknownZone(format!("{pct_ftp}% FTP")))
    }

    pub fn get(&self, name: &str) -> Result<&Zone, PlanError> {
        self.zones
            .iter()
            .find(|z| z.name == name)
            .ok_or_else(|| PlanError::UnknownZone(name.to_string()))
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }
}

static CANONICAL: OnceCell<ZoneTable> = OnceCell::new();

/// Prosessvid, skrivebeskyttet tabell; valideres ved første bruk.
pub fn canonical_zones() -> Result<&'static ZoneTable, PlanError> {
    CANONICAL.get_or_try_init(ZoneTable::coggan)
}

/// Kortform for oppslag i den kanoniske tabellen.
pub fn zone_for(pct_ftp: f64) -> Result<&'static Zone, PlanError> {
    canonical_zones()?.zone_for(pct_ftp)
}
