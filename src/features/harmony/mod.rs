//! Chord segmentation
//!
//! Splits a harmonic signal's chroma-over-time matrix into equal-width
//! windows and fits the best-matching chord template per window.

pub mod segmenter;
pub mod templates;

use serde::{Deserialize, Serialize};

use crate::analysis::result::NOTE_NAMES;

pub use segmenter::segment_chords;
pub use templates::{rotated_template, CHORD_TEMPLATES};

/// Chord quality from the fixed template set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    /// Major triad
    Major,
    /// Minor triad
    Minor,
    /// Dominant seventh
    Dominant7,
    /// Minor seventh
    Minor7,
    /// Diminished triad
    Diminished,
}

impl ChordQuality {
    /// Notation suffix appended to the root name
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Diminished => "dim",
        }
    }
}

/// One fitted chord over one segment of the analysed duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordSegment {
    /// Segment ordinal, 0-based in time order
    pub index: usize,

    /// Root pitch class (0 = C .. 11 = B)
    pub root: u8,

    /// Fitted chord quality
    pub quality: ChordQuality,

    /// Correlation score of the winning (root, quality) template
    pub score: f32,
}

impl ChordSegment {
    /// Chord name in notation (e.g., "C", "Am", "G7", "Dm7", "Bdim")
    pub fn name(&self) -> String {
        format!(
            "{}{}",
            NOTE_NAMES[self.root as usize % 12],
            self.quality.suffix()
        )
    }
}
