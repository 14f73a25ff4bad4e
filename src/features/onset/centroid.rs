//! Spectral-centroid voice classification
//!
//! Alternative to band splitting for raw (unseparated) drum signals:
//! classify each detected onset by the energy-weighted mean frequency
//! of its frame's spectrum.

use super::DrumVoice;

/// Centroid below this is a kick (Hz)
const KICK_CENTROID_HZ: f32 = 200.0;

/// Centroid below this (and above the kick bound) is a snare (Hz)
const SNARE_CENTROID_HZ: f32 = 2000.0;

/// Classify a drum onset by the spectral centroid of its frame
///
/// Computes the energy-weighted mean frequency of the spectrum column
/// and assigns: kick below 200 Hz, snare below 2000 Hz, hi-hat above.
///
/// # Arguments
///
/// * `spectrum` - One frame's magnitude spectrum
/// * `bin_freqs` - Center frequency of each bin in Hz
///
/// # Returns
///
/// The assigned voice, or `DrumVoice::Unclassified` when the frame
/// carries no energy (the centroid is undefined there).
pub fn classify_by_centroid(spectrum: &[f32], bin_freqs: &[f32]) -> DrumVoice {
    debug_assert_eq!(spectrum.len(), bin_freqs.len());

    let total: f32 = spectrum.iter().sum();
    if total <= 1e-10 {
        return DrumVoice::Unclassified;
    }

    let weighted: f32 = spectrum
        .iter()
        .zip(bin_freqs.iter())
        .map(|(&s, &f)| s * f)
        .sum();
    let centroid = weighted / total;

    if centroid < KICK_CENTROID_HZ {
        DrumVoice::Kick
    } else if centroid < SNARE_CENTROID_HZ {
        DrumVoice::Snare
    } else {
        DrumVoice::Hihat
    }
}
