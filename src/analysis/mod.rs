//! Analysis result types
//!
//! Aggregate output assembled once per audio file:
//! - Key estimate with confidence
//! - Per-instrument step grids and their notation strings
//! - Drum style label
//! - Chord progression

pub mod result;
