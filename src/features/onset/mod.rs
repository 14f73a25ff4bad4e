//! Band-split drum onset detection
//!
//! Isolates frequency sub-bands of a percussive signal's magnitude
//! spectrogram and finds transient attack times within each band's
//! energy envelope:
//! - Band energy envelopes
//! - Normalized-envelope peak picking with a refractory gap
//! - Spectral-centroid voice classification (for unseparated input)

pub mod centroid;
pub mod envelope;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BandSpec;
use crate::error::AnalysisError;

pub use centroid::classify_by_centroid;
pub use envelope::{band_energy_envelope, detect_envelope_onsets};

/// Drum voice assignment for a detected onset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrumVoice {
    /// Low-frequency kick drum
    Kick,
    /// Mid-frequency snare drum
    Snare,
    /// High-frequency hi-hat
    Hihat,
    /// Could not be assigned to a band
    Unclassified,
}

impl DrumVoice {
    /// Instrument name used as a map key in analysis results
    pub fn name(&self) -> &'static str {
        match self {
            DrumVoice::Kick => "kick",
            DrumVoice::Snare => "snare",
            DrumVoice::Hihat => "hihat",
            DrumVoice::Unclassified => "perc",
        }
    }

    /// Sample token used in pattern notation
    pub fn token(&self) -> &'static str {
        match self {
            DrumVoice::Kick => "bd",
            DrumVoice::Snare => "sd",
            DrumVoice::Hihat => "hh",
            DrumVoice::Unclassified => "perc",
        }
    }
}

/// A detected transient attack
///
/// Onsets for one voice are produced in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Onset {
    /// Attack time in seconds from the start of the signal
    pub time_seconds: f32,

    /// Drum voice this onset belongs to
    pub voice: DrumVoice,
}

/// Detect onsets within a single frequency band
///
/// Sums spectral magnitude across the band's bins per frame, normalizes
/// the resulting envelope to its own maximum, and peak-picks with the
/// band's threshold and the given refractory gap.
///
/// # Arguments
///
/// * `magnitudes` - Magnitude spectrogram, one bin vector per frame
/// * `bin_freqs` - Center frequency of each bin in Hz
/// * `band` - Band range, threshold, and voice assignment
/// * `sample_rate` - Sample rate in Hz
/// * `hop_size` - Hop size the spectrogram was computed with
/// * `min_gap_ms` - Refractory gap between accepted onsets
///
/// # Returns
///
/// Chronologically ordered onsets tagged with the band's voice. A band
/// with no energy yields no onsets.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on zero sample rate or hop
/// size, a non-positive threshold, an inverted band range, or frames
/// inconsistent with `bin_freqs`.
pub fn detect_band_onsets(
    magnitudes: &[Vec<f32>],
    bin_freqs: &[f32],
    band: &BandSpec,
    sample_rate: u32,
    hop_size: usize,
    min_gap_ms: f32,
) -> Result<Vec<Onset>, AnalysisError> {
    let env = band_energy_envelope(magnitudes, bin_freqs, band.low_hz, band.high_hz)?;
    let times = detect_envelope_onsets(&env, band.threshold, sample_rate, hop_size, min_gap_ms)?;

    log::debug!(
        "Band {:?} [{:.0}, {:.0}) Hz: {} onsets",
        band.voice,
        band.low_hz,
        band.high_hz,
        times.len()
    );

    Ok(times
        .into_iter()
        .map(|time_seconds| Onset {
            time_seconds,
            voice: band.voice,
        })
        .collect())
}

/// Detect onsets for every configured band
///
/// Bands have no data dependency on each other, so they are processed
/// in parallel. Results preserve the order of `bands`.
///
/// # Errors
///
/// Propagates the first `AnalysisError` from any band.
pub fn detect_drum_onsets(
    magnitudes: &[Vec<f32>],
    bin_freqs: &[f32],
    bands: &[BandSpec],
    sample_rate: u32,
    hop_size: usize,
    min_gap_ms: f32,
) -> Result<Vec<(DrumVoice, Vec<Onset>)>, AnalysisError> {
    bands
        .par_iter()
        .map(|band| {
            detect_band_onsets(magnitudes, bin_freqs, band, sample_rate, hop_size, min_gap_ms)
                .map(|onsets| (band.voice, onsets))
        })
        .collect()
}
