//! Heuristic grid refinement
//!
//! Snaps noisy quantized grids to a small set of canonical rhythmic
//! archetypes, trading fidelity for recognizability and downstream
//! encodability. Each instrument role carries an ordered list of
//! (predicate, replacement) rules; the first match wins and unmatched
//! grids pass through unchanged.

use super::grid::{StepGrid, BAR_STEPS};
use crate::features::onset::DrumVoice;

/// One refinement rule: if the predicate matches, replace the whole
/// grid with the canonical archetype.
type Rule = (fn(&StepGrid) -> bool, fn() -> StepGrid);

/// Kick: quarters present on every beat imply four-on-the-floor
const KICK_RULES: [Rule; 1] = [(has_four_on_floor, StepGrid::four_on_floor)];

/// Snare: backbeat first, then the lone half-time hit on beat 3
const SNARE_RULES: [Rule; 2] = [
    (has_backbeat, StepGrid::backbeat),
    (has_half_time_only, StepGrid::half_time),
];

/// Hi-hat: densest interpretation first
const HIHAT_RULES: [Rule; 3] = [
    (|g| g.hit_count() >= 12, StepGrid::sixteenths),
    (|g| g.hit_count() >= 6, StepGrid::eighths),
    (|g| g.hit_count() >= 3, StepGrid::four_on_floor),
];

/// Steps 0, 4, 8, 12 all hit
pub(crate) fn has_four_on_floor(grid: &StepGrid) -> bool {
    grid.is_hit(0) && grid.is_hit(4) && grid.is_hit(8) && grid.is_hit(12)
}

/// Steps 4 and 12 both hit
pub(crate) fn has_backbeat(grid: &StepGrid) -> bool {
    grid.is_hit(4) && grid.is_hit(12)
}

fn has_half_time_only(grid: &StepGrid) -> bool {
    grid.is_hit(8) && !grid.is_hit(4) && !grid.is_hit(12)
}

/// Clean a quantized grid using musical priors for its instrument role
///
/// Rules are evaluated in priority order; the first match replaces the
/// grid with its canonical archetype, otherwise the grid passes through
/// unchanged. Refinement is idempotent: applying it to its own output
/// returns the same grid.
///
/// The archetypes are defined on 16-step bars; grids of any other
/// length, and the `Unclassified` role, pass through unchanged.
pub fn refine(grid: &StepGrid, role: DrumVoice) -> StepGrid {
    if grid.len() != BAR_STEPS {
        return grid.clone();
    }

    let rules: &[Rule] = match role {
        DrumVoice::Kick => &KICK_RULES,
        DrumVoice::Snare => &SNARE_RULES,
        DrumVoice::Hihat => &HIHAT_RULES,
        DrumVoice::Unclassified => &[],
    };

    for (predicate, replacement) in rules {
        if predicate(grid) {
            return replacement();
        }
    }
    grid.clone()
}
