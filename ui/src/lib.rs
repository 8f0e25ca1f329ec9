//! Presentation helpers for the head-tilt monitor. Turns angle and speed
//! readings, playback durations and study descriptors into display strings.

pub mod core;

pub use crate::core::*;
