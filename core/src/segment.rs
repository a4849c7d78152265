use log::debug;

use crate::error::PlanError;
use crate::models::SegmentKind;
use crate::rationale::segment_text;
use crate::rounding::watts_for_pct;
use crate::types::{PowerRange, Segment};
use crate::zones::Zone;

/// Wattgrenser for en sone ved gitt FTP (samme avrunding som TSS-grunnlaget).
pub fn power_range(zone: &Zone, ftp_watts: u32) -> PowerRange {
    PowerRange {
        min_watts: watts_for_pct(zone.min_pct, ftp_watts),
        max_watts: watts_for_pct(zone.max_pct, ftp_watts),
    }
}

pub fn build_segment(
    kind: SegmentKind,
    zone: &Zone,
    duration_minutes: u32,
    cadence_rpm: u32,
    ftp_watts: u32,
) -> Result<Segment, PlanError> {
    if duration_minutes == 0 {
        return Err(PlanError::InvalidDuration {
            kind,
            minutes: duration_minutes,
        });
    }
    if cadence_rpm == 0 {
        return Err(PlanError::InvalidCadence {
            kind,
            rpm: cadence_rpm,
        });
    }
    if ftp_watts == 0 {
        return Err(PlanError::InvalidFtp(ftp_watts));
    }

    let power = power_range(zone, ftp_watts);
    let (description, rationale) = segment_text(kind, zone);

    debug!(
        "segment {kind} {duration_minutes}min {}: {}-{}W @ {cadence_rpm}rpm",
        zone.name, power.min_watts, power.max_watts
    );

    Ok(Segment {
        kind,
        duration_minutes,
        zone: zone.clone(),
        cadence_rpm,
        power,
        description: description.to_string(),
        rationale: rationale.to_string(),
    })
}
