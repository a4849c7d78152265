// Eneste sted for avrunding: watt-grenser og TSS skal aldri drive fra hverandre.

pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return round_half_up(self);
        }
        let factor = 10_f64.powi(dp as i32);
        round_half_up(self * factor) / factor
    }
}

/// Nærmeste heltall, halvveis rundes opp (0.5 -> 1).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Avrundet ikke-negativ verdi som heltall. Negative/ikke-finite gir 0.
#[inline]
pub fn round_to_u32(x: f64) -> u32 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    round_half_up(x) as u32
}

/// Watt for en %FTP-verdi, med samme avrunding overalt.
#[inline]
pub fn watts_for_pct(pct_ftp: f64, ftp_watts: u32) -> u32 {
    round_to_u32(pct_ftp / 100.0 * ftp_watts as f64)
}
