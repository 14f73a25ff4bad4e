//! Krumhansl-Schmuckler key templates
//!
//! Consonance weight per semitone distance from the tonic, one profile
//! for major and one for minor.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). Cognitive Foundations of Musical Pitch.
//! Oxford University Press.

/// Major key profile (tonic at index 0)
pub const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor key profile (tonic at index 0)
pub const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Rotate a template so position 0 aligns with `tonic`, then L1-normalize
///
/// `rotated[k] = template[(k - tonic) mod 12]`, scaled to sum to 1, so
/// the tonic weight lands on pitch class `tonic`.
pub fn rotated_profile(template: &[f32; 12], tonic: usize) -> [f32; 12] {
    let mut rotated = [0.0f32; 12];
    for (k, slot) in rotated.iter_mut().enumerate() {
        *slot = template[(k + 12 - tonic % 12) % 12];
    }

    let sum: f32 = rotated.iter().sum();
    // The Krumhansl-Schmuckler profiles are strictly positive
    for v in rotated.iter_mut() {
        *v /= sum;
    }
    rotated
}
