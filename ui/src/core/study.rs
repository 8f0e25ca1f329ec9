//! Study descriptor parsing.
//!
//! Recorded logs open with a few `#` header lines describing the study. The
//! loader joins them into one `|`-delimited descriptor
//! ([`collect_study_header`]), and the header bar shows a compact summary of
//! it ([`format_study_info`]): the study number segment and the date-time
//! segment, when present.
//!
//! ```text
//! # Исследование №42            ┐
//! # 2024-01-02 03:04:05          ├─> "Исследование №42 | 2024-01-02 03:04:05"
//! ##########                     ┘      -> "Исследование №42 [2024-01-02 03:04:05]"
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use time::{macros::format_description, PrimitiveDateTime};

use super::format::Formatter;

/// Header lines are only looked for at the top of a log.
const HEADER_LINES: usize = 5;
const SEGMENT_SEPARATOR: char = '|';
const HEADER_JOINER: &str = " | ";

static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}")
        .expect("date-time pattern compiles")
});

/// The pieces of a study descriptor the header bar cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudySummary {
    /// Last segment carrying the study number marker.
    pub number: Option<String>,
    /// Last segment containing a `YYYY-MM-DD hh:mm:ss` literal.
    pub date: Option<String>,
    /// Descriptor with `#` removed and outer whitespace trimmed.
    pub cleaned: String,
}

impl StudySummary {
    pub fn parse(raw: &str, number_marker: &str) -> Self {
        let cleaned = raw.replace('#', "").trim().to_string();

        let mut number = None;
        let mut date = None;
        for segment in cleaned
            .split(SEGMENT_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
        {
            if segment.contains(number_marker) {
                number = Some(segment.to_string());
            }
            if DATE_TIME.is_match(segment) {
                date = Some(segment.to_string());
            }
        }

        tracing::trace!(?number, ?date, "parsed study descriptor");
        Self {
            number,
            date,
            cleaned,
        }
    }

    /// The date-time literal of the date segment, parsed.
    pub fn recorded_at(&self) -> Option<PrimitiveDateTime> {
        let segment = self.date.as_deref()?;
        let literal = DATE_TIME.find(segment)?.as_str();
        PrimitiveDateTime::parse(
            literal,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
        .ok()
    }
}

impl Formatter {
    pub fn format_study_info(&self, study_info: Option<&str>) -> String {
        let labels = self.labels();
        let Some(raw) = study_info.filter(|raw| !raw.is_empty()) else {
            return labels.study_not_loaded.clone();
        };

        let summary = StudySummary::parse(raw, &labels.study_number_marker);
        match (summary.number, summary.date) {
            (Some(number), Some(date)) => format!("{number} [{date}]"),
            (Some(number), None) => number,
            (None, Some(date)) => format!("{} [{date}]", labels.study_label),
            (None, None) if !summary.cleaned.is_empty() => summary.cleaned,
            (None, None) => labels.study_not_loaded.clone(),
        }
    }

    /// Build a descriptor from the `#` lines among the first few lines of a
    /// log file.
    pub fn collect_study_header(&self, log_text: &str) -> String {
        let lines = log_text
            .lines()
            .take(HEADER_LINES)
            .filter_map(|line| line.trim().strip_prefix('#'))
            .map(str::trim)
            .collect::<Vec<_>>();

        if lines.is_empty() {
            tracing::debug!("log has no study header lines");
            return self.labels().study_header_missing.clone();
        }
        lines.join(HEADER_JOINER)
    }
}

pub fn format_study_info(study_info: Option<&str>) -> String {
    Formatter::standard().format_study_info(study_info)
}

pub fn collect_study_header(log_text: &str) -> String {
    Formatter::standard().collect_study_header(log_text)
}
