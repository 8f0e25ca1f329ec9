//! Playback clock formatting for log review and chart axes.
//!
//! Durations arrive as `Option<f64>` milliseconds; `None` means the player
//! has nothing loaded yet. The second "total" argument of the clock helpers
//! is only checked for presence, never for its value.

use super::format::Formatter;
use super::labels::{ZERO_RESEARCH_TIME, ZERO_TIME};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;

/// A non-negative duration split into clock fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl ClockParts {
    pub fn from_millis(total: u64) -> Self {
        Self {
            hours: total / MS_PER_HOUR,
            minutes: (total % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (total % MS_PER_MINUTE) / MS_PER_SECOND,
            millis: total % MS_PER_SECOND,
        }
    }

    /// `HH:MM:SS`; hours widen past two digits instead of wrapping.
    pub fn hms(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    /// `HH:MM:SS:mmm`
    pub fn hms_millis(&self) -> String {
        format!("{}:{:03}", self.hms(), self.millis)
    }
}

/// Resolve the clock for `milliseconds`, or `None` when either input is
/// missing. NaN and infinities count as missing; negatives clamp to zero.
/// Finite values past `u64::MAX` ms saturate to `u64::MAX`.
fn clock(milliseconds: Option<f64>, total_milliseconds: Option<f64>) -> Option<ClockParts> {
    let ms = milliseconds?;
    let total = total_milliseconds?;
    if !ms.is_finite() || !total.is_finite() {
        tracing::trace!(ms, total, "non-finite duration treated as missing");
        return None;
    }
    let ms = if ms < 0.0 {
        tracing::trace!(ms, "negative duration clamped to zero");
        0.0
    } else {
        ms
    };
    Some(ClockParts::from_millis(ms.round() as u64))
}

pub fn format_time_without_ms(
    milliseconds: Option<f64>,
    total_milliseconds: Option<f64>,
) -> String {
    clock(milliseconds, total_milliseconds)
        .map(|parts| parts.hms())
        .unwrap_or_else(|| ZERO_TIME.to_string())
}

pub fn format_research_time(
    milliseconds: Option<f64>,
    total_milliseconds: Option<f64>,
) -> String {
    clock(milliseconds, total_milliseconds)
        .map(|parts| parts.hms_millis())
        .unwrap_or_else(|| ZERO_RESEARCH_TIME.to_string())
}

/// `current / total` for the player bar. A missing total blanks both marks.
pub fn format_current_and_total_time(current_ms: Option<f64>, total_ms: Option<f64>) -> String {
    format!(
        "{} / {}",
        format_time_without_ms(current_ms, total_ms),
        format_time_without_ms(total_ms, total_ms)
    )
}

pub fn format_graph_time(milliseconds: f64) -> String {
    Formatter::standard().format_graph_time(milliseconds)
}

impl Formatter {
    /// Whole seconds for chart ticks, ties rounded away from zero.
    pub fn format_graph_time(&self, milliseconds: f64) -> String {
        let seconds = milliseconds / MS_PER_SECOND as f64 + 0.0; // -0.0 prints as 0
        let seconds = if seconds.is_finite() { seconds.round() } else { 0.0 };
        format!("{seconds:.0}{}", self.labels().second_suffix)
    }
}
