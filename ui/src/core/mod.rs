//! Pure formatting helpers shared by every readout view.

pub mod format;
pub mod labels;
pub mod study;
pub mod timing;

pub use format::{
    can_display_angular_speed, format_speed, format_value, formatted_speed, Formatter, SourceState,
};
pub use labels::{Labels, LabelsError};
pub use study::{collect_study_header, format_study_info, StudySummary};
pub use timing::{
    format_current_and_total_time, format_graph_time, format_research_time,
    format_time_without_ms, ClockParts,
};
