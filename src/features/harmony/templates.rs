//! Chord quality templates
//!
//! Binary pitch-class masks marking each chord's defining pitch classes
//! relative to its root.

use super::ChordQuality;

/// Chord templates in evaluation order, root at index 0
///
/// Intervals from the root: major {0,4,7}, minor {0,3,7}, dominant
/// seventh {0,4,7,10}, minor seventh {0,3,7,10}, diminished {0,3,6}.
pub const CHORD_TEMPLATES: [(ChordQuality, [f32; 12]); 5] = [
    (
        ChordQuality::Major,
        [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    ),
    (
        ChordQuality::Minor,
        [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    ),
    (
        ChordQuality::Dominant7,
        [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
    ),
    (
        ChordQuality::Minor7,
        [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
    ),
    (
        ChordQuality::Diminished,
        [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    ),
];

/// Rotate a chord template so its root lands on `root`
///
/// `rotated[k] = template[(k - root) mod 12]`, marking the chord's
/// pitch classes at `(root + interval) mod 12`.
pub fn rotated_template(template: &[f32; 12], root: usize) -> [f32; 12] {
    let mut rotated = [0.0f32; 12];
    for (k, slot) in rotated.iter_mut().enumerate() {
        *slot = template[(k + 12 - root % 12) % 12];
    }
    rotated
}
