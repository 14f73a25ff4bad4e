//! Band energy envelopes and envelope peak picking
//!
//! An energy envelope is one value per analysis frame: the sum of
//! spectral magnitude over the bins inside a frequency band. Onsets are
//! strict local maxima of the max-normalized envelope that clear the
//! band threshold, separated by at least a refractory gap.

use crate::error::AnalysisError;
use crate::features::spectrum::{frame_to_seconds, EPSILON};

/// Sum spectral magnitude over a `[low_hz, high_hz)` band, per frame
///
/// # Arguments
///
/// * `magnitudes` - Magnitude spectrogram, one bin vector per frame
/// * `bin_freqs` - Center frequency of each bin in Hz
/// * `low_hz` - Inclusive lower band edge
/// * `high_hz` - Exclusive upper band edge
///
/// # Returns
///
/// One energy value per frame, in frame order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the band range is inverted
/// or any frame's bin count differs from `bin_freqs.len()`.
pub fn band_energy_envelope(
    magnitudes: &[Vec<f32>],
    bin_freqs: &[f32],
    low_hz: f32,
    high_hz: f32,
) -> Result<Vec<f32>, AnalysisError> {
    if !(low_hz >= 0.0 && high_hz > low_hz) {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid band range: [{}, {}) Hz",
            low_hz, high_hz
        )));
    }

    let band_bins: Vec<usize> = bin_freqs
        .iter()
        .enumerate()
        .filter(|(_, &f)| f >= low_hz && f < high_hz)
        .map(|(k, _)| k)
        .collect();

    let mut envelope = Vec::with_capacity(magnitudes.len());
    for (i, frame) in magnitudes.iter().enumerate() {
        if frame.len() != bin_freqs.len() {
            return Err(AnalysisError::InvalidInput(format!(
                "Frame {} has {} bins, expected {}",
                i,
                frame.len(),
                bin_freqs.len()
            )));
        }
        envelope.push(band_bins.iter().map(|&k| frame[k]).sum());
    }

    Ok(envelope)
}

/// Peak-pick onset times from an energy envelope
///
/// Normalizes the envelope to its own maximum, then accepts frame `i`
/// as an onset when the normalized energy exceeds `threshold`, is a
/// strict local maximum, and at least the refractory gap has elapsed
/// since the last accepted onset.
///
/// # Arguments
///
/// * `envelope` - Band energy envelope, one value per frame
/// * `threshold` - Threshold in (0, 1) on the normalized envelope
/// * `sample_rate` - Sample rate in Hz
/// * `hop_size` - Hop size the envelope's frames were computed with
/// * `min_gap_ms` - Refractory gap in milliseconds (typically 50)
///
/// # Returns
///
/// Onset times in seconds, chronologically ordered. An envelope with
/// no energy yields no onsets.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on zero sample rate or hop
/// size, a threshold outside (0, 1), or a negative gap.
pub fn detect_envelope_onsets(
    envelope: &[f32],
    threshold: f32,
    sample_rate: u32,
    hop_size: usize,
    min_gap_ms: f32,
) -> Result<Vec<f32>, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    if hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Hop size must be > 0".to_string(),
        ));
    }

    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Threshold must be in (0, 1), got {}",
            threshold
        )));
    }

    if min_gap_ms < 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Refractory gap must be non-negative, got {} ms",
            min_gap_ms
        )));
    }

    if envelope.len() < 3 {
        // A strict local maximum needs both neighbors
        return Ok(Vec::new());
    }

    let max_energy = envelope.iter().copied().fold(0.0f32, f32::max);
    if max_energy <= EPSILON {
        log::debug!("Band envelope has no energy, no onsets");
        return Ok(Vec::new());
    }

    let frames_per_second = sample_rate as f32 / hop_size as f32;
    let min_gap = (frames_per_second * min_gap_ms / 1000.0) as isize;

    let mut onsets = Vec::new();
    let mut last_peak: isize = -min_gap;

    for i in 1..envelope.len() - 1 {
        let energy = envelope[i] / max_energy;
        let prev = envelope[i - 1] / max_energy;
        let next = envelope[i + 1] / max_energy;

        if energy > threshold
            && energy > prev
            && energy > next
            && i as isize - last_peak >= min_gap
        {
            onsets.push(frame_to_seconds(i, sample_rate, hop_size));
            last_peak = i as isize;
        }
    }

    log::debug!(
        "Envelope peak picking: {} frames, threshold={:.2}, gap={} frames, {} onsets",
        envelope.len(),
        threshold,
        min_gap,
        onsets.len()
    );

    Ok(onsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_envelope_sums_in_band_bins() {
        let bin_freqs = vec![0.0, 50.0, 100.0, 150.0, 200.0];
        let magnitudes = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0]];
        // [50, 150): bins 1 and 2
        let env = band_energy_envelope(&magnitudes, &bin_freqs, 50.0, 150.0).unwrap();
        assert_eq!(env, vec![5.0]);
    }

    #[test]
    fn test_band_envelope_upper_edge_exclusive() {
        let bin_freqs = vec![0.0, 100.0, 200.0];
        let magnitudes = vec![vec![1.0, 1.0, 1.0]];
        let env = band_energy_envelope(&magnitudes, &bin_freqs, 0.0, 200.0).unwrap();
        assert_eq!(env, vec![2.0]); // bin at 200 Hz excluded
    }

    #[test]
    fn test_band_envelope_invalid_range() {
        let bin_freqs = vec![0.0, 100.0];
        let magnitudes = vec![vec![1.0, 1.0]];
        assert!(band_energy_envelope(&magnitudes, &bin_freqs, 200.0, 100.0).is_err());
    }

    #[test]
    fn test_detect_onsets_finds_peaks() {
        let mut envelope = vec![0.0f32; 50];
        envelope[10] = 1.0;
        envelope[30] = 0.8;
        let onsets = detect_envelope_onsets(&envelope, 0.4, 22050, 512, 50.0).unwrap();
        assert_eq!(onsets.len(), 2);
        assert!((onsets[0] - 10.0 * 512.0 / 22050.0).abs() < 1e-6);
    }

    #[test]
    fn test_detect_onsets_refractory_gap() {
        // Two peaks 2 frames apart; a 100 ms gap (4 frames at
        // 22050/512) keeps only the first.
        let mut envelope = vec![0.0f32; 20];
        envelope[5] = 1.0;
        envelope[7] = 0.9;
        let onsets = detect_envelope_onsets(&envelope, 0.3, 22050, 512, 100.0).unwrap();
        assert_eq!(onsets.len(), 1);

        // With no gap both survive
        let onsets = detect_envelope_onsets(&envelope, 0.3, 22050, 512, 0.0).unwrap();
        assert_eq!(onsets.len(), 2);
    }

    #[test]
    fn test_detect_onsets_below_threshold_ignored() {
        let mut envelope = vec![0.0f32; 20];
        envelope[5] = 1.0;
        envelope[12] = 0.2; // below 0.4 after normalization
        let onsets = detect_envelope_onsets(&envelope, 0.4, 22050, 512, 50.0).unwrap();
        assert_eq!(onsets.len(), 1);
    }

    #[test]
    fn test_detect_onsets_silent_envelope() {
        let envelope = vec![0.0f32; 100];
        let onsets = detect_envelope_onsets(&envelope, 0.4, 22050, 512, 50.0).unwrap();
        assert!(onsets.is_empty());
    }

    #[test]
    fn test_detect_onsets_invalid_parameters() {
        let envelope = vec![0.5f32; 10];
        assert!(detect_envelope_onsets(&envelope, 0.4, 0, 512, 50.0).is_err());
        assert!(detect_envelope_onsets(&envelope, 0.4, 22050, 0, 50.0).is_err());
        assert!(detect_envelope_onsets(&envelope, 0.0, 22050, 512, 50.0).is_err());
        assert!(detect_envelope_onsets(&envelope, 1.5, 22050, 512, 50.0).is_err());
        assert!(detect_envelope_onsets(&envelope, 0.4, 22050, 512, -1.0).is_err());
    }
}
