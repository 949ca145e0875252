//! Token amount formatting and per-period arithmetic.
//!
//! All values produced here are for display. Nothing in this module is
//! suitable for settlement math.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Widest rate string shown before truncation.
pub const DISPLAY_WIDTH: usize = 10;

/// Appended to a truncated rate.
pub const ELLIPSIS: &str = "...";

/// Fixed scale of a stream contract's stored `amountPerSec`, independent of
/// the token's own decimals.
pub const RATE_DECIMALS: u8 = 20;

/// Exact decimal rendering of `raw / 10^decimals`.
///
/// Trailing fractional zeros are dropped, so `1e18` at 18 decimals is `"1"`
/// and `5e17` is `"0.5"`. Works for every `u8` decimals value, including
/// those where `10^decimals` does not fit a `U256`.
pub fn format_units(raw: &U256, decimals: u8) -> String {
    let digits = raw.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac}")
    }
}

/// `raw / 10^decimals` as a float.
pub fn rate_per_sec_f64(raw: &U256, decimals: u8) -> f64 {
    format_units(raw, decimals).parse().unwrap_or(f64::NAN)
}

/// Bound a rendered amount to [`DISPLAY_WIDTH`] characters plus [`ELLIPSIS`].
pub fn truncate_display(rendered: &str) -> String {
    if rendered.chars().count() <= DISPLAY_WIDTH {
        return rendered.to_string();
    }
    let head: String = rendered.chars().take(DISPLAY_WIDTH).collect();
    format!("{head}{ELLIPSIS}")
}

// ─── Period ───────────────────────────────────────────────────────────────────

/// Billing periods a per-second rate can be projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Hour,
    Day,
    Week,
    Biweek,
    /// 30 days.
    Month,
    /// 365 days.
    Year,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::Hour,
        Period::Day,
        Period::Week,
        Period::Biweek,
        Period::Month,
        Period::Year,
    ];

    pub fn seconds(&self) -> u64 {
        match self {
            Self::Hour => 60 * 60,
            Self::Day => 24 * 60 * 60,
            Self::Week => 7 * 24 * 60 * 60,
            Self::Biweek => 2 * 7 * 24 * 60 * 60,
            Self::Month => 30 * 24 * 60 * 60,
            Self::Year => 365 * 24 * 60 * 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Biweek => "biweek",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| format!("unknown period '{s}'"))
    }
}

/// Token amount streamed over one `period` at the given raw rate, read at
/// the contract's [`RATE_DECIMALS`] scale.
pub fn amount_per_period(raw: &U256, period: Period) -> f64 {
    rate_per_sec_f64(raw, RATE_DECIMALS) * period.seconds() as f64
}

/// Render a projected amount with at most five fractional digits.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{value:.5}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
