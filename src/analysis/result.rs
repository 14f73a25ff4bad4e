//! Analysis result types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::features::harmony::ChordSegment;
use crate::pattern::grid::StepGrid;

/// Pitch class names indexed 0 = C .. 11 = B
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Major (Ionian) mode
    Major,
    /// Minor (Aeolian) mode
    Minor,
}

/// Estimated key of a signal
///
/// Produced once per signal and immutable after creation. `confidence`
/// is the winning template correlation in [-1, 1], or
/// [`NO_SIGNAL_CONFIDENCE`](crate::features::key::NO_SIGNAL_CONFIDENCE)
/// when the source profile carried no energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Tonic pitch class (0 = C, 1 = C#, ..., 11 = B)
    pub pitch_class: u8,

    /// Major or minor mode
    pub mode: Mode,

    /// Correlation score of the winning (tonic, mode) candidate
    pub confidence: f32,
}

impl KeyEstimate {
    /// Key name in musical notation (e.g., "C", "F#", "Am", "C#m")
    ///
    /// # Example
    ///
    /// ```
    /// use groove_dsp::analysis::result::{KeyEstimate, Mode};
    ///
    /// let key = KeyEstimate { pitch_class: 9, mode: Mode::Minor, confidence: 0.8 };
    /// assert_eq!(key.name(), "Am");
    /// ```
    pub fn name(&self) -> String {
        let note = NOTE_NAMES[self.pitch_class as usize % 12];
        match self.mode {
            Mode::Major => note.to_string(),
            Mode::Minor => format!("{}m", note),
        }
    }
}

/// Drum style label from the closed classification set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrumStyle {
    /// Four-on-the-floor kick with busy hi-hats
    House,
    /// Four-on-the-floor kick with backbeat snare
    Disco,
    /// Backbeat snare without four-on-the-floor kick
    Rock,
    /// Sparse kick and snare
    Minimal,
    /// Dense sixteenth-note hi-hats
    Dnb,
    /// Default when no other rule matches
    Breakbeat,
}

impl DrumStyle {
    /// Lowercase label as used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            DrumStyle::House => "house",
            DrumStyle::Disco => "disco",
            DrumStyle::Rock => "rock",
            DrumStyle::Minimal => "minimal",
            DrumStyle::Dnb => "dnb",
            DrumStyle::Breakbeat => "breakbeat",
        }
    }
}

impl std::fmt::Display for DrumStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

/// Complete analysis result
///
/// Composed once per audio file and handed to an external serializer;
/// never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Externally detected tempo in BPM
    pub tempo_bpm: f32,

    /// Estimated key
    pub key: KeyEstimate,

    /// Refined step grid per instrument ("kick", "snare", "hihat")
    pub grids: BTreeMap<String, StepGrid>,

    /// Drum style label
    pub style: DrumStyle,

    /// Chord progression, in segment order
    pub progression: Vec<ChordSegment>,

    /// Notation string per instrument; silent instruments are omitted
    pub notation: BTreeMap<String, String>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}
