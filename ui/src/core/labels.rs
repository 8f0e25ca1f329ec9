//! Display literals used by the formatters.
//!
//! Every string the readout panel shows lives here so the numeric logic in
//! [`format`](super::format), [`timing`](super::timing) and
//! [`study`](super::study) never embeds display text. The defaults are the
//! Russian strings the monitoring UI ships with.
//!
//! A host can swap the whole set by deserializing a [`Labels`] document and
//! handing it to [`Formatter::new`](super::format::Formatter::new):
//! ```ignore
//! let labels = Labels::from_json(include_str!("../../labels/en-US.json"))?;
//! let fmt = Formatter::new(labels);
//! assert_eq!(fmt.format_value(0.0, false), "no data");
//! ```
//! Missing keys fall back to the defaults, so a partial document is fine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown in place of a reading when no data is available.
pub const NO_DATA: &str = "нет данных";
/// Suffix for angles.
pub const DEGREE_SUFFIX: &str = "°";
/// Suffix for angular speed.
pub const DEGREE_PER_SECOND_SUFFIX: &str = "°/с";
/// Suffix for whole seconds on chart axes.
pub const SECOND_SUFFIX: &str = "с";
/// Shown when no study descriptor is available.
pub const STUDY_NOT_LOADED: &str = "Исследование не загружено";
/// Generic study label used when only a date could be found.
pub const STUDY_LABEL: &str = "Исследование";
/// Substring that marks the segment carrying the study number.
pub const STUDY_NUMBER_MARKER: &str = "Исследование №";
/// Descriptor produced when a log file carries no header lines.
pub const STUDY_HEADER_MISSING: &str = "Информация об исследовании не найдена";

/// Zero-duration placeholders. Not localized.
pub const ZERO_TIME: &str = "00:00:00";
pub const ZERO_RESEARCH_TIME: &str = "00:00:00:000";

#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("invalid label document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Replaceable display text.
///
/// `study_number_marker` must match the text the recorder writes into log
/// headers, not the UI language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub no_data: String,
    pub degree_suffix: String,
    pub degree_per_second_suffix: String,
    pub second_suffix: String,
    pub study_not_loaded: String,
    pub study_label: String,
    pub study_number_marker: String,
    pub study_header_missing: String,
}

impl Labels {
    pub fn from_json(raw: &str) -> Result<Self, LabelsError> {
        serde_json::from_str(raw).map_err(|err| {
            tracing::debug!(%err, "rejecting label document");
            LabelsError::from(err)
        })
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            no_data: NO_DATA.to_string(),
            degree_suffix: DEGREE_SUFFIX.to_string(),
            degree_per_second_suffix: DEGREE_PER_SECOND_SUFFIX.to_string(),
            second_suffix: SECOND_SUFFIX.to_string(),
            study_not_loaded: STUDY_NOT_LOADED.to_string(),
            study_label: STUDY_LABEL.to_string(),
            study_number_marker: STUDY_NUMBER_MARKER.to_string(),
            study_header_missing: STUDY_HEADER_MISSING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_document_keeps_defaults() {
        let raw = json!({ "no_data": "—" }).to_string();
        let labels = Labels::from_json(&raw).unwrap();
        assert_eq!(labels.no_data, "—");
        assert_eq!(labels.degree_suffix, DEGREE_SUFFIX);
        assert_eq!(labels.study_number_marker, STUDY_NUMBER_MARKER);
    }

    #[test]
    fn empty_document_is_the_default_set() {
        assert_eq!(Labels::from_json("{}").unwrap(), Labels::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = Labels::from_json("{\"no_data\": 5}").unwrap_err();
        assert!(matches!(err, LabelsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid label document"));
    }
}
