//! Configuration parameters for music extraction

use crate::features::onset::DrumVoice;

/// A named frequency band used to isolate one drum voice.
///
/// The band covers `[low_hz, high_hz)`. `threshold` applies to the
/// band's energy envelope after normalization to its own maximum, so it
/// is always in (0, 1).
#[derive(Debug, Clone)]
pub struct BandSpec {
    /// Drum voice this band isolates
    pub voice: DrumVoice,

    /// Inclusive lower edge in Hz
    pub low_hz: f32,

    /// Exclusive upper edge in Hz
    pub high_hz: f32,

    /// Onset threshold on the normalized energy envelope
    pub threshold: f32,
}

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // STFT parameters
    /// Frame size for STFT (default: 2048)
    pub frame_size: usize,

    /// Hop size for STFT (default: 512)
    pub hop_size: usize,

    // Rhythm extraction
    /// Steps per extracted bar, sixteenth-note resolution (default: 16)
    pub grid_steps: usize,

    /// Minimum gap between accepted onsets in one band, in milliseconds
    /// (default: 50.0). Suppresses double-triggers.
    pub min_onset_gap_ms: f32,

    /// Frequency bands for drum onset detection.
    ///
    /// Defaults to kick 30-120 Hz at threshold 0.4, snare 200-400 Hz
    /// at 0.5, hi-hat 6-16 kHz at 0.3.
    pub bands: Vec<BandSpec>,

    // Harmony extraction
    /// Number of equal-width chord segments over the analysed duration
    /// (default: 4)
    pub chord_segments: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            hop_size: 512,
            grid_steps: 16,
            min_onset_gap_ms: 50.0,
            bands: vec![
                BandSpec {
                    voice: DrumVoice::Kick,
                    low_hz: 30.0,
                    high_hz: 120.0,
                    threshold: 0.4,
                },
                BandSpec {
                    voice: DrumVoice::Snare,
                    low_hz: 200.0,
                    high_hz: 400.0,
                    threshold: 0.5,
                },
                BandSpec {
                    voice: DrumVoice::Hihat,
                    low_hz: 6000.0,
                    high_hz: 16000.0,
                    threshold: 0.3,
                },
            ],
            chord_segments: 4,
        }
    }
}
