//! Euclidean rhythm generation
//!
//! The canonical maximally-even distribution of `hits` onsets over
//! `steps` slots, generated by deterministic bucket accumulation.

use crate::error::AnalysisError;
use crate::pattern::grid::StepGrid;

/// Generate the canonical Euclidean rhythm of `hits` over `steps`
///
/// Walks the step indices accumulating `bucket += hits`; whenever the
/// bucket reaches `steps` the current step becomes a hit and the bucket
/// wraps. The result is deterministic and places exactly `hits` hits.
///
/// # Example
///
/// ```
/// use groove_dsp::notation::euclidean_pattern;
/// use groove_dsp::pattern::StepGrid;
///
/// let tresillo = euclidean_pattern(3, 8).unwrap();
/// assert_eq!(tresillo, StepGrid::from_bits(&[0, 0, 1, 0, 0, 1, 0, 1]));
/// ```
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `steps` is zero or `hits`
/// exceeds `steps`.
pub fn euclidean_pattern(hits: usize, steps: usize) -> Result<StepGrid, AnalysisError> {
    if steps == 0 {
        return Err(AnalysisError::InvalidInput(
            "Step count must be > 0".to_string(),
        ));
    }

    if hits > steps {
        return Err(AnalysisError::InvalidInput(format!(
            "Cannot place {} hits in {} steps",
            hits, steps
        )));
    }

    let mut grid = StepGrid::empty(steps);
    let mut bucket = 0usize;
    for i in 0..steps {
        bucket += hits;
        if bucket >= steps {
            bucket -= steps;
            grid.set_hit(i);
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_hit_counts_and_determinism() {
        // For all 0 < h < n <= 32, exactly h hits over n
        // steps, and regeneration is identical.
        for n in 2..=32usize {
            for h in 1..n {
                let grid = euclidean_pattern(h, n).unwrap();
                assert_eq!(grid.len(), n, "h={}, n={}", h, n);
                assert_eq!(grid.hit_count(), h, "h={}, n={}", h, n);
                assert_eq!(euclidean_pattern(h, n).unwrap(), grid, "h={}, n={}", h, n);
            }
        }
    }

    #[test]
    fn test_euclidean_known_patterns() {
        // Tresillo
        assert_eq!(
            euclidean_pattern(3, 8).unwrap(),
            StepGrid::from_bits(&[0, 0, 1, 0, 0, 1, 0, 1])
        );
        // Quarters over one bar
        assert_eq!(
            euclidean_pattern(4, 16).unwrap(),
            StepGrid::from_bits(&[0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1])
        );
        // Cinquillo
        assert_eq!(
            euclidean_pattern(5, 8).unwrap(),
            StepGrid::from_bits(&[0, 1, 0, 1, 1, 0, 1, 1])
        );
    }

    #[test]
    fn test_euclidean_degenerate_counts() {
        assert_eq!(euclidean_pattern(0, 8).unwrap(), StepGrid::empty(8));
        assert_eq!(euclidean_pattern(8, 8).unwrap().hit_count(), 8);
    }

    #[test]
    fn test_euclidean_invalid_parameters() {
        assert!(euclidean_pattern(1, 0).is_err());
        assert!(euclidean_pattern(9, 8).is_err());
    }
}
