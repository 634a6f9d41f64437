//! Display formatting for surface text.
//!
//! All functions are pure and locale-insensitive: grouping is always `,`
//! every three digits and the decimal separator is always `.`. Rounding is
//! half away from zero at the displayed precision.

use ratatui::style::Color;
use serde::Serialize;

use crate::theme::{TREND_ALERT, TREND_POSITIVE};

/// Upper bound of the progress bar slot.
pub const PROGRESS_MAX: u64 = 100;

/// Arrow drawn next to the trend value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendGlyph {
    ArrowUp,
    ArrowDown,
}

impl TrendGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::ArrowUp => "▲",
            Self::ArrowDown => "▼",
        }
    }
}

/// `"USD 1,234.50"`. Negative amounts keep the code first: `"USD -3.00"`.
///
/// Non-finite values render as zero.
pub fn currency(value: f64, code: &str) -> String {
    if !value.is_finite() {
        return format!("{code} 0.00");
    }

    let rounded = round_to(value, 2);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{code} {sign}{}.{fraction}", group_digits(whole))
}

/// Thousands-grouped integer, e.g. `12345` → `"12,345"`.
pub fn count(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_digits(&value.unsigned_abs().to_string()))
}

/// One decimal with an explicit sign: `"+0.0%"`, `"+12.3%"`, `"-3.3%"`.
///
/// The sign follows the raw value, so tiny negatives print as `-0.0%`.
pub fn percent_with_sign(value: f64) -> String {
    if !value.is_finite() {
        return "+0.0%".to_string();
    }
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{sign}{:.1}%", round_to(value, 1).abs())
}

/// Spending going up is an alert, going down is positive.
pub fn trend_color(is_up: bool) -> Color {
    if is_up {
        TREND_ALERT
    } else {
        TREND_POSITIVE
    }
}

pub fn trend_glyph(is_up: bool) -> TrendGlyph {
    if is_up {
        TrendGlyph::ArrowUp
    } else {
        TrendGlyph::ArrowDown
    }
}

/// `round(current / target * 100)`, never negative and not bounded above.
///
/// Targets below 1 (including 0 and negatives) are floored to 1 before
/// dividing, so a missing target never divides by zero.
pub fn progress_percent(current: f64, target: f64) -> u64 {
    let target = target.max(1.0);
    let percent = (current / target * 100.0).round();
    if percent.is_nan() || percent <= 0.0 {
        0
    } else {
        // saturating float-to-int cast
        percent as u64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
