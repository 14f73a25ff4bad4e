//! Key estimation
//!
//! Matches a pitch-class profile against rotated Krumhansl-Schmuckler
//! templates to estimate key and mode.

pub mod detector;
pub mod templates;

pub use detector::{estimate_key, NO_SIGNAL_CONFIDENCE};
pub use templates::{rotated_profile, MAJOR_PROFILE, MINOR_PROFILE};
