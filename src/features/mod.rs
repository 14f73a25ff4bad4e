//! Feature extraction modules
//!
//! Pure, stateless computations over immutable inputs:
//! - STFT magnitude spectra
//! - Pitch-class profiles from chroma frames
//! - Key estimation (Krumhansl-Schmuckler template matching)
//! - Band-split drum onset detection
//! - Chord segmentation

pub mod chroma;
pub mod harmony;
pub mod key;
pub mod onset;
pub mod spectrum;

/// Pearson correlation coefficient between two equal-length sequences
///
/// Returns 0.0 when either sequence has zero variance (the correlation
/// is undefined there, and a neutral score keeps template scans total).
///
/// # Panics
///
/// Debug-asserts that `x` and `y` have the same length; callers in this
/// crate always pass 12-element vectors.
pub fn pearson_correlation(x: &[f32], y: &[f32]) -> f32 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n == 0 {
        return 0.0;
    }

    let mean_x = x.iter().sum::<f32>() / n as f32;
    let mean_y = y.iter().sum::<f32>() / n as f32;

    let mut cov = 0.0f32;
    let mut var_x = 0.0f32;
    let mut var_y = 0.0f32;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom <= 1e-10 {
        return 0.0;
    }
    cov / denom
}
