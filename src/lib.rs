//! # Groove DSP
//!
//! Turns pre-separated audio content into a compact symbolic music
//! description: key/mode, per-drum rhythm grids, a drum style label,
//! a chord progression, and compact pattern-notation strings.
//!
//! ## Features
//!
//! - **Key Estimation**: Krumhansl-Schmuckler template matching over a
//!   pitch-class profile
//! - **Drum Extraction**: band-split onset detection, sixteenth-note
//!   grid quantization, and heuristic pattern refinement
//! - **Style Classification**: rule-based genre labelling of the
//!   kick/snare/hi-hat grid triple
//! - **Notation Encoding**: canonical shorthands, Euclidean-rhythm
//!   recognition, and run-length fallback
//! - **Chord Segmentation**: per-window chord template fitting
//!
//! ## Quick Start
//!
//! ```no_run
//! use groove_dsp::{analyze, AnalysisConfig};
//!
//! // Percussive samples (mono, f32, normalized) from an external
//! // separation step, plus a chroma matrix of the harmonic content
//! // and an externally detected tempo.
//! let percussive: Vec<f32> = vec![];
//! let chroma_frames: Vec<Vec<f32>> = vec![];
//!
//! let result = analyze(&percussive, 22050, 120.0, &chroma_frames, &AnalysisConfig::default())?;
//!
//! println!("Key: {} (confidence {:.2})", result.key.name(), result.key.confidence);
//! println!("Style: {}", result.style);
//! for (instrument, notation) in &result.notation {
//!     println!("{}: {}", instrument, notation);
//! }
//! # Ok::<(), groove_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The extraction pipeline follows this flow:
//!
//! ```text
//! Percussive Input → Spectrogram → Band Onsets → Quantize → Refine → Style/Notation
//! Harmonic Chroma  → Profile → Key Estimate
//!                  → Segments → Chord Progression
//! ```
//!
//! Every component is a pure function over immutable inputs; there is
//! no shared mutable state and no internal I/O. Degenerate inputs
//! (silence, empty onset lists) produce explicit neutral outputs, not
//! errors; parameter violations fail fast with [`AnalysisError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod notation;
pub mod pattern;

use std::collections::BTreeMap;

// Re-export main types
pub use analysis::result::{AnalysisMetadata, AnalysisResult, DrumStyle, KeyEstimate, Mode};
pub use config::{AnalysisConfig, BandSpec};
pub use error::AnalysisError;
pub use features::chroma::PitchClassProfile;
pub use features::harmony::{segment_chords, ChordQuality, ChordSegment};
pub use features::key::estimate_key;
pub use features::onset::{detect_band_onsets, detect_drum_onsets, DrumVoice, Onset};
pub use notation::encode_pattern;
pub use pattern::{classify_style, quantize, refine, StepGrid};

/// Main extraction function
///
/// Runs the full pipeline over one audio file's pre-separated content:
/// band-split drum onset detection, grid quantization and refinement,
/// style classification, notation encoding, key estimation, and chord
/// segmentation.
///
/// # Arguments
///
/// * `percussive` - Percussive-content samples (mono, normalized)
/// * `sample_rate` - Sample rate in Hz
/// * `tempo_bpm` - Externally detected tempo in BPM
/// * `chroma_frames` - Chroma matrix of the harmonic content, one
///   12-element vector per frame; empty when the source has no
///   harmonic content (key falls back to the no-signal sentinel and
///   the progression is empty)
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// An [`AnalysisResult`] ready for external serialization.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on empty samples, zero sample
/// rate, non-positive tempo, or a chroma matrix narrower than the
/// configured segment count.
pub fn analyze(
    percussive: &[f32],
    sample_rate: u32,
    tempo_bpm: f32,
    chroma_frames: &[Vec<f32>],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting analysis: {} samples at {} Hz, tempo {:.1} BPM",
        percussive.len(),
        sample_rate,
        tempo_bpm
    );

    if percussive.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }

    if !(tempo_bpm.is_finite() && tempo_bpm > 0.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Tempo must be a positive finite BPM, got {}",
            tempo_bpm
        )));
    }

    // Drum extraction: spectrogram -> band onsets -> grids
    let magnitudes =
        features::spectrum::magnitude_spectrogram(percussive, config.frame_size, config.hop_size)?;
    let bin_freqs = features::spectrum::bin_frequencies(sample_rate, config.frame_size);

    let per_voice = detect_drum_onsets(
        &magnitudes,
        &bin_freqs,
        &config.bands,
        sample_rate,
        config.hop_size,
        config.min_onset_gap_ms,
    )?;

    let mut grids: BTreeMap<String, StepGrid> = BTreeMap::new();
    let mut notation: BTreeMap<String, String> = BTreeMap::new();

    for (voice, onsets) in &per_voice {
        let times: Vec<f32> = onsets.iter().map(|o| o.time_seconds).collect();
        let raw = quantize(&times, tempo_bpm, config.grid_steps)?;
        let refined = refine(&raw, *voice);

        let encoded = encode_pattern(&refined, voice.token());
        if !encoded.is_empty() {
            notation.insert(voice.name().to_string(), encoded);
        }
        grids.insert(voice.name().to_string(), refined);
    }

    let fallback = StepGrid::empty(config.grid_steps);
    let grid_for = |voice: DrumVoice| grids.get(voice.name()).unwrap_or(&fallback);
    let style = classify_style(
        grid_for(DrumVoice::Kick),
        grid_for(DrumVoice::Snare),
        grid_for(DrumVoice::Hihat),
    );

    // Harmony extraction: profile -> key, segments -> progression
    let (key, progression) = if chroma_frames.is_empty() {
        log::debug!("No harmonic content supplied, skipping key and chord analysis");
        let silent = PitchClassProfile::new([0.0; 12])?;
        (estimate_key(&silent), Vec::new())
    } else {
        let profile = PitchClassProfile::from_chroma_frames(chroma_frames)?;
        let key = estimate_key(&profile);
        let progression = segment_chords(chroma_frames, config.chord_segments)?;
        (key, progression)
    };

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    Ok(AnalysisResult {
        tempo_bpm,
        key,
        grids,
        style,
        progression,
        notation,
        metadata: AnalysisMetadata {
            duration_seconds: percussive.len() as f32 / sample_rate as f32,
            sample_rate,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
