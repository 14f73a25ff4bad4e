//! Fixed-length rhythmic step grid

use serde::{Deserialize, Serialize};

/// Number of steps in a one-bar, sixteenth-note resolution grid
pub const BAR_STEPS: usize = 16;

/// A fixed-length ordered sequence of boolean "hit" flags
///
/// Index 0 is the grid's first step (beat 1, sixteenth 1). The length
/// is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepGrid {
    steps: Vec<bool>,
}

impl StepGrid {
    /// All-rest grid of the given length
    pub fn empty(len: usize) -> Self {
        Self {
            steps: vec![false; len],
        }
    }

    /// Grid from explicit step flags
    pub fn from_steps(steps: Vec<bool>) -> Self {
        Self { steps }
    }

    /// Grid from 0/1 flags, for readable pattern literals
    ///
    /// # Example
    ///
    /// ```
    /// use groove_dsp::pattern::StepGrid;
    ///
    /// let grid = StepGrid::from_bits(&[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0]);
    /// assert_eq!(grid.hit_count(), 4);
    /// ```
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            steps: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the grid has zero steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the given step is a hit; out-of-range indices are rests
    pub fn is_hit(&self, index: usize) -> bool {
        self.steps.get(index).copied().unwrap_or(false)
    }

    /// Mark a step as a hit; marking twice is idempotent
    ///
    /// Out-of-range indices are ignored.
    pub fn set_hit(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            *step = true;
        }
    }

    /// Number of hit steps
    pub fn hit_count(&self) -> usize {
        self.steps.iter().filter(|&&h| h).count()
    }

    /// Step flags in order
    pub fn steps(&self) -> &[bool] {
        &self.steps
    }

    /// Canonical four-on-the-floor bar: hits at steps 0, 4, 8, 12
    pub fn four_on_floor() -> Self {
        Self::with_hits_every(4)
    }

    /// Canonical eighth-note bar: hits at every even step
    pub fn eighths() -> Self {
        Self::with_hits_every(2)
    }

    /// Canonical sixteenth-note bar: every step a hit
    pub fn sixteenths() -> Self {
        Self::with_hits_every(1)
    }

    /// Canonical backbeat bar: hits at steps 4 and 12 (beats 2 and 4)
    pub fn backbeat() -> Self {
        let mut grid = Self::empty(BAR_STEPS);
        grid.set_hit(4);
        grid.set_hit(12);
        grid
    }

    /// Canonical half-time bar: a single hit at step 8 (beat 3)
    pub fn half_time() -> Self {
        let mut grid = Self::empty(BAR_STEPS);
        grid.set_hit(8);
        grid
    }

    fn with_hits_every(interval: usize) -> Self {
        Self {
            steps: (0..BAR_STEPS).map(|i| i % interval == 0).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = StepGrid::empty(16);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.hit_count(), 0);
    }

    #[test]
    fn test_set_hit_idempotent() {
        let mut grid = StepGrid::empty(16);
        grid.set_hit(3);
        grid.set_hit(3);
        assert_eq!(grid.hit_count(), 1);
        assert!(grid.is_hit(3));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = StepGrid::empty(4);
        grid.set_hit(10);
        assert_eq!(grid.hit_count(), 0);
        assert!(!grid.is_hit(10));
    }

    #[test]
    fn test_canonical_grids() {
        assert_eq!(
            StepGrid::four_on_floor(),
            StepGrid::from_bits(&[1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0])
        );
        assert_eq!(
            StepGrid::backbeat(),
            StepGrid::from_bits(&[0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0])
        );
        assert_eq!(
            StepGrid::half_time(),
            StepGrid::from_bits(&[0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0])
        );
        assert_eq!(StepGrid::eighths().hit_count(), 8);
        assert_eq!(StepGrid::sixteenths().hit_count(), 16);
    }
}
