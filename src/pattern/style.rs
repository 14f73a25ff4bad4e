//! Rule-based drum style classification
//!
//! Labels a kick/snare/hi-hat grid triple with one genre tag from a
//! closed set, using an ordered match-first-wins decision table.

use super::grid::StepGrid;
use super::refine::{has_backbeat, has_four_on_floor};
use crate::analysis::result::DrumStyle;

/// Pattern features the decision table evaluates
struct StyleFeatures {
    four_on_floor: bool,
    backbeat: bool,
    kick_hits: usize,
    snare_hits: usize,
    hihat_hits: usize,
}

/// The decision table, top to bottom, first match wins
const STYLE_RULES: [(fn(&StyleFeatures) -> bool, DrumStyle); 5] = [
    (|f| f.four_on_floor && f.hihat_hits >= 8, DrumStyle::House),
    (|f| f.four_on_floor && f.backbeat, DrumStyle::Disco),
    (|f| f.backbeat && !f.four_on_floor, DrumStyle::Rock),
    (|f| f.kick_hits <= 3 && f.snare_hits <= 2, DrumStyle::Minimal),
    (|f| f.hihat_hits >= 12, DrumStyle::Dnb),
];

/// Classify the drum style of a kick/snare/hi-hat grid triple
///
/// Evaluates the decision table top to bottom and returns the first
/// matching label, or `Breakbeat` when no rule matches.
///
/// # Example
///
/// ```
/// use groove_dsp::pattern::{classify_style, StepGrid};
/// use groove_dsp::analysis::result::DrumStyle;
///
/// let style = classify_style(
///     &StepGrid::four_on_floor(),
///     &StepGrid::backbeat(),
///     &StepGrid::eighths(),
/// );
/// assert_eq!(style, DrumStyle::House);
/// ```
pub fn classify_style(kick: &StepGrid, snare: &StepGrid, hihat: &StepGrid) -> DrumStyle {
    let features = StyleFeatures {
        four_on_floor: has_four_on_floor(kick),
        backbeat: has_backbeat(snare),
        kick_hits: kick.hit_count(),
        snare_hits: snare.hit_count(),
        hihat_hits: hihat.hit_count(),
    };

    for (predicate, style) in STYLE_RULES {
        if predicate(&features) {
            log::debug!("Drum style: {}", style);
            return style;
        }
    }

    log::debug!("Drum style: {} (default)", DrumStyle::Breakbeat);
    DrumStyle::Breakbeat
}
