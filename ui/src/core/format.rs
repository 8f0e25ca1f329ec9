//! Formatting helpers for presenting head-tilt readings.

use once_cell::sync::Lazy;

use super::labels::Labels;

static STANDARD: Lazy<Formatter> = Lazy::new(Formatter::default);

/// Where the readings on screen are coming from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceState {
    /// A device is attached and streaming.
    pub connected: bool,
    /// The UI is reviewing a recorded log instead of the live stream.
    pub log_mode: bool,
    /// A log file finished loading.
    pub log_loaded: bool,
}

impl SourceState {
    pub fn new(connected: bool, log_mode: bool, log_loaded: bool) -> Self {
        Self {
            connected,
            log_mode,
            log_loaded,
        }
    }

    pub fn live() -> Self {
        Self::new(true, false, false)
    }

    pub fn reviewing_log(loaded: bool) -> Self {
        Self::new(false, true, loaded)
    }

    /// Angular speed is only meaningful from a settled source: a live device
    /// that is not being overridden by log review, or a fully loaded log.
    pub fn allows_speed(&self, has_data: bool) -> bool {
        has_data && ((self.connected && !self.log_mode) || (self.log_mode && self.log_loaded))
    }
}

/// Formats readings with a fixed set of [`Labels`].
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    labels: Labels,
}

impl Formatter {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    /// The shared formatter with the built-in labels.
    pub fn standard() -> &'static Formatter {
        &STANDARD
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Angle in degrees, one decimal.
    pub fn format_value(&self, value: f64, has_data: bool) -> String {
        self.reading(value, has_data, &self.labels.degree_suffix)
    }

    /// Angular speed in degrees per second, one decimal.
    pub fn format_speed(&self, value: f64, has_data: bool) -> String {
        self.reading(value, has_data, &self.labels.degree_per_second_suffix)
    }

    pub fn formatted_speed(&self, speed: f64, source: SourceState, has_data: bool) -> String {
        if source.allows_speed(has_data) {
            self.format_speed(speed, true)
        } else {
            self.labels.no_data.clone()
        }
    }

    fn reading(&self, value: f64, has_data: bool, suffix: &str) -> String {
        if !has_data {
            return self.labels.no_data.clone();
        }
        if !value.is_finite() {
            tracing::trace!(value, "non-finite reading shown as no data");
            return self.labels.no_data.clone();
        }
        format!("{}{suffix}", one_decimal(value))
    }
}

/// One decimal of the exact value, ties away from zero.
///
/// `{:.1}` already rounds the exact binary value, but it breaks ties to
/// even. A tie needs a fraction of .25 or .75, i.e. `value * 4` is an odd
/// integer (exact, since scaling by 4 only moves the exponent), so those are
/// rounded here in integer tenths.
fn one_decimal(value: f64) -> String {
    let value = value + 0.0; // -0.0 prints as 0.0
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let quarters = quarters as i64;
        let tenths = (5 * quarters + quarters.signum()) / 2;
        let sign = if tenths < 0 { "-" } else { "" };
        let tenths = tenths.unsigned_abs();
        return format!("{sign}{}.{}", tenths / 10, tenths % 10);
    }
    format!("{value:.1}")
}

pub fn format_value(value: f64, has_data: bool) -> String {
    Formatter::standard().format_value(value, has_data)
}

pub fn format_speed(value: f64, has_data: bool) -> String {
    Formatter::standard().format_speed(value, has_data)
}

pub fn can_display_angular_speed(
    connected: bool,
    log_mode: bool,
    log_loaded: bool,
    has_data: bool,
) -> bool {
    SourceState::new(connected, log_mode, log_loaded).allows_speed(has_data)
}

pub fn formatted_speed(
    speed: f64,
    connected: bool,
    log_mode: bool,
    log_loaded: bool,
    has_data: bool,
) -> String {
    Formatter::standard().formatted_speed(
        speed,
        SourceState::new(connected, log_mode, log_loaded),
        has_data,
    )
}
