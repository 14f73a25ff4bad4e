//! Onset-to-grid quantization

use super::grid::StepGrid;
use crate::error::AnalysisError;

/// Snap onset times to a fixed-resolution rhythmic grid
///
/// Step duration is one sixteenth note, `(60 / tempo_bpm) / 4`. Each
/// onset inside the first bar (`t < grid_len * step`) sets
/// `grid[round(t / step) mod grid_len]`; onsets beyond the first bar
/// are ignored (multi-bar structure detection is out of scope).
/// Multiple onsets on one step are idempotent.
///
/// # Arguments
///
/// * `onset_times` - Onset times in seconds, chronological
/// * `tempo_bpm` - Tempo in beats per minute
/// * `grid_len` - Grid length in steps (16 = one bar of sixteenths)
///
/// # Returns
///
/// A `StepGrid` of length `grid_len`. An empty onset list yields an
/// all-rest grid.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `tempo_bpm` is not a
/// positive finite number or `grid_len` is zero.
pub fn quantize(
    onset_times: &[f32],
    tempo_bpm: f32,
    grid_len: usize,
) -> Result<StepGrid, AnalysisError> {
    if !(tempo_bpm.is_finite() && tempo_bpm > 0.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Tempo must be a positive finite BPM, got {}",
            tempo_bpm
        )));
    }

    if grid_len == 0 {
        return Err(AnalysisError::InvalidInput(
            "Grid length must be > 0".to_string(),
        ));
    }

    let step_duration = (60.0 / tempo_bpm) / 4.0;
    let bar_duration = grid_len as f32 * step_duration;

    let mut grid = StepGrid::empty(grid_len);
    for &t in onset_times {
        if (0.0..bar_duration).contains(&t) {
            let step = (t / step_duration).round() as usize % grid_len;
            grid.set_hit(step);
        }
    }

    log::debug!(
        "Quantized {} onsets at {:.1} BPM into {} of {} steps",
        onset_times.len(),
        tempo_bpm,
        grid.hit_count(),
        grid_len
    );

    Ok(grid)
}
