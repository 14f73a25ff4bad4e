//! Key estimation algorithm
//!
//! Scans all 24 (tonic, mode) candidates, correlating the input profile
//! against rotated Krumhansl-Schmuckler templates, and keeps the single
//! best-scoring candidate.

use super::templates::{rotated_profile, MAJOR_PROFILE, MINOR_PROFILE};
use crate::analysis::result::{KeyEstimate, Mode};
use crate::features::chroma::PitchClassProfile;
use crate::features::pearson_correlation;

/// Confidence sentinel for profiles with no energy
///
/// Correlation scores live in [-1, 1]; this value is deliberately
/// outside that range so "no signal" is distinguishable from a genuine
/// worst-case correlation.
pub const NO_SIGNAL_CONFIDENCE: f32 = -2.0;

/// Estimate key and mode from a pitch-class profile
///
/// For each of the 12 candidate tonics, rotates the major and minor
/// Krumhansl-Schmuckler templates to that tonic, L1-normalizes them,
/// and computes the Pearson correlation with the input profile. The
/// best-scoring (tonic, mode) pair wins; ties keep the first maximum in
/// scan order (tonic ascending, major before minor).
///
/// # Arguments
///
/// * `profile` - Normalized pitch-class energy distribution
///
/// # Returns
///
/// The winning tonic, mode, and correlation score. A silent profile
/// (zero energy) returns the nominal default of C major with
/// [`NO_SIGNAL_CONFIDENCE`] rather than a numeric error.
///
/// # Example
///
/// ```
/// use groove_dsp::features::chroma::PitchClassProfile;
/// use groove_dsp::features::key::{estimate_key, MAJOR_PROFILE, rotated_profile};
/// use groove_dsp::analysis::result::Mode;
///
/// let profile = PitchClassProfile::new(rotated_profile(&MAJOR_PROFILE, 7)).unwrap();
/// let estimate = estimate_key(&profile);
/// assert_eq!(estimate.pitch_class, 7);
/// assert_eq!(estimate.mode, Mode::Major);
/// ```
pub fn estimate_key(profile: &PitchClassProfile) -> KeyEstimate {
    if profile.is_silent() {
        log::debug!("Silent profile, returning nominal C major with no-signal confidence");
        return KeyEstimate {
            pitch_class: 0,
            mode: Mode::Major,
            confidence: NO_SIGNAL_CONFIDENCE,
        };
    }

    let mut best_pitch_class = 0u8;
    let mut best_mode = Mode::Major;
    let mut best_corr = f32::NEG_INFINITY;

    for tonic in 0..12usize {
        let major = rotated_profile(&MAJOR_PROFILE, tonic);
        let major_corr = pearson_correlation(profile.values(), &major);
        if major_corr > best_corr {
            best_corr = major_corr;
            best_pitch_class = tonic as u8;
            best_mode = Mode::Major;
        }

        let minor = rotated_profile(&MINOR_PROFILE, tonic);
        let minor_corr = pearson_correlation(profile.values(), &minor);
        if minor_corr > best_corr {
            best_corr = minor_corr;
            best_pitch_class = tonic as u8;
            best_mode = Mode::Minor;
        }
    }

    log::debug!(
        "Key estimate: pitch_class={}, mode={:?}, confidence={:.3}",
        best_pitch_class,
        best_mode,
        best_corr
    );

    KeyEstimate {
        pitch_class: best_pitch_class,
        mode: best_mode,
        confidence: best_corr,
    }
}
