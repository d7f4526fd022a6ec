//! Elapsed-time arithmetic and display of time spans.

use super::formatter::ClockFormat;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display mode of time spans in summaries and pick-lists.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimeSpanFormat {
    /// Clock duration, e.g. `01:30`.
    HoursAndMinutes,
    /// `45 m` below one hour, decimal hours above.
    MinutesOrHours,
    /// Decimal hours, e.g. `1.50 h`.
    #[default]
    DecimalHours,
    /// Clock duration and decimal hours, e.g. `01:30 = 1.50 h`.
    Both,
}

impl TimeSpanFormat {
    pub fn all() -> [TimeSpanFormat; 4] {
        [
            TimeSpanFormat::HoursAndMinutes,
            TimeSpanFormat::MinutesOrHours,
            TimeSpanFormat::DecimalHours,
            TimeSpanFormat::Both,
        ]
    }
}

impl fmt::Display for TimeSpanFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TimeSpanFormat::HoursAndMinutes => "hoursAndMinutes",
            TimeSpanFormat::MinutesOrHours => "minutesOrHours",
            TimeSpanFormat::DecimalHours => "decimalHours",
            TimeSpanFormat::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// Whole minutes elapsed from `start` to `end`.
///
/// An `end` before `start` is taken to be on the following day. The result is
/// never below one minute.
pub fn time_span_minutes(end: NaiveDateTime, start: NaiveDateTime) -> i64 {
    let mut minutes = end.signed_duration_since(start).num_minutes();
    if minutes < 0 {
        minutes = (end + Duration::days(1)).signed_duration_since(start).num_minutes();
    }
    if minutes <= 0 {
        minutes = 1;
    }
    minutes
}

/// Rounds `minutes` to the nearest multiple of `step`, halves rounding up.
///
/// A `step` of 0 or 1 leaves the value unchanged.
pub fn round_minutes(minutes: i64, step: u32) -> i64 {
    let step = step as i64;
    if step > 1 && minutes > 0 {
        let remainder = minutes % step;
        let up = if remainder * 2 >= step { step } else { 0 };
        return minutes - remainder + up;
    }
    minutes
}

/// Renders a span of minutes according to `mode`, after rounding to `step`.
///
/// Below one rounded hour, `MinutesOrHours` prints the exact minutes.
pub fn time_span_to_string(span_minutes: i64, mode: TimeSpanFormat, step: u32, fixed_decimal: bool, clock: &ClockFormat) -> String {
    let minutes = round_minutes(span_minutes, step);

    match mode {
        TimeSpanFormat::HoursAndMinutes => clock.format_duration(minutes),
        TimeSpanFormat::MinutesOrHours if minutes < 60 => format!("{} m", span_minutes),
        TimeSpanFormat::Both => format!("{} = {}", clock.format_duration(minutes), decimal_hours(minutes, fixed_decimal)),
        TimeSpanFormat::MinutesOrHours | TimeSpanFormat::DecimalHours => decimal_hours(minutes, fixed_decimal),
    }
}

fn decimal_hours(minutes: i64, fixed_decimal: bool) -> String {
    let hours = (minutes as f64 / 60.0 * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", hours);
    if fixed_decimal {
        return format!("{} h", fixed);
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} h", trimmed)
}
