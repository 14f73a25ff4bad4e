//! Pitch-class profiles
//!
//! A pitch-class profile folds a chroma-over-time matrix into a single
//! 12-bin energy distribution, L1-normalized so the bins sum to 1. A
//! zero-energy source (silence, percussion-only content) yields the
//! degenerate all-zero profile, which callers must handle explicitly.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::features::spectrum::EPSILON;

/// 12-bin pitch-class energy distribution (index 0 = C .. 11 = B)
///
/// Invariant: all values are non-negative and sum to 1, unless the
/// source had zero energy, in which case all values are 0 and
/// [`is_silent`](Self::is_silent) returns true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchClassProfile {
    values: [f32; 12],
}

impl PitchClassProfile {
    /// Build a profile from raw per-pitch-class energies
    ///
    /// Normalizes the values to sum to 1. Zero total energy produces
    /// the degenerate silent profile rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if any value is negative
    /// or non-finite.
    pub fn new(values: [f32; 12]) -> Result<Self, AnalysisError> {
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || v < 0.0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "Pitch class energy at index {} must be finite and non-negative, got {}",
                    i, v
                )));
            }
        }

        let sum: f32 = values.iter().sum();
        if sum <= EPSILON {
            log::debug!("Zero-energy pitch class profile (silent source)");
            return Ok(Self { values: [0.0; 12] });
        }

        let mut normalized = values;
        for v in normalized.iter_mut() {
            *v /= sum;
        }
        Ok(Self { values: normalized })
    }

    /// Build a profile by averaging a sequence of 12-element chroma frames
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `frames` is empty or
    /// any frame does not have exactly 12 elements.
    pub fn from_chroma_frames(frames: &[Vec<f32>]) -> Result<Self, AnalysisError> {
        if frames.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Empty chroma frames".to_string(),
            ));
        }

        let mut mean = [0.0f32; 12];
        for (i, frame) in frames.iter().enumerate() {
            if frame.len() != 12 {
                return Err(AnalysisError::InvalidInput(format!(
                    "Chroma frame at index {} has {} elements, expected 12",
                    i,
                    frame.len()
                )));
            }
            for (m, &v) in mean.iter_mut().zip(frame.iter()) {
                *m += v;
            }
        }
        for m in mean.iter_mut() {
            *m /= frames.len() as f32;
        }

        Self::new(mean)
    }

    /// Normalized per-pitch-class values
    pub fn values(&self) -> &[f32; 12] {
        &self.values
    }

    /// True if the source signal had no harmonic energy
    pub fn is_silent(&self) -> bool {
        self.values.iter().sum::<f32>() <= EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_normalizes_to_unit_sum() {
        let mut values = [0.0f32; 12];
        values[0] = 2.0;
        values[4] = 1.0;
        values[7] = 1.0;
        let profile = PitchClassProfile::new(values).unwrap();
        let sum: f32 = profile.values().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!((profile.values()[0] - 0.5).abs() < 1e-6);
        assert!(!profile.is_silent());
    }

    #[test]
    fn test_silent_profile() {
        let profile = PitchClassProfile::new([0.0; 12]).unwrap();
        assert!(profile.is_silent());
        assert_eq!(profile.values(), &[0.0; 12]);
    }

    #[test]
    fn test_negative_energy_rejected() {
        let mut values = [0.1f32; 12];
        values[3] = -0.5;
        assert!(PitchClassProfile::new(values).is_err());
    }

    #[test]
    fn test_from_chroma_frames_averages() {
        let mut a = vec![0.0f32; 12];
        let mut b = vec![0.0f32; 12];
        a[0] = 1.0;
        b[0] = 1.0;
        b[7] = 1.0;
        let profile = PitchClassProfile::from_chroma_frames(&[a, b]).unwrap();
        // Mean energies: C = 1.0, G = 0.5 -> normalized 2/3, 1/3
        assert!((profile.values()[0] - 2.0 / 3.0).abs() < 1e-6);
        assert!((profile.values()[7] - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_chroma_frames_validates_dimensions() {
        assert!(PitchClassProfile::from_chroma_frames(&[]).is_err());
        assert!(PitchClassProfile::from_chroma_frames(&[vec![0.0; 11]]).is_err());
    }
}
