//! STFT magnitude spectra
//!
//! Time-frequency front end for the band splitter and centroid
//! classifier. Frames are Hann-windowed; each output frame holds
//! `frame_size / 2 + 1` magnitude bins.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::AnalysisError;

/// Numerical stability epsilon
pub(crate) const EPSILON: f32 = 1e-10;

/// Compute the magnitude spectrogram of a signal
///
/// Divides the signal into overlapping frames (`frame_size`,
/// `hop_size`), applies a Hann window, and returns per-frame magnitude
/// spectra over the non-negative frequency bins.
///
/// # Arguments
///
/// * `samples` - Audio samples (mono, normalized to [-1.0, 1.0])
/// * `frame_size` - Frame size for analysis (typically 2048)
/// * `hop_size` - Hop size between frames (typically 512)
///
/// # Returns
///
/// One `Vec<f32>` of `frame_size / 2 + 1` magnitudes per frame, in
/// chronological frame order. Signals shorter than one frame yield an
/// empty spectrogram.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `frame_size` or `hop_size`
/// is zero.
pub fn magnitude_spectrogram(
    samples: &[f32],
    frame_size: usize,
    hop_size: usize,
) -> Result<Vec<Vec<f32>>, AnalysisError> {
    if frame_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Frame size must be > 0".to_string(),
        ));
    }

    if hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Hop size must be > 0".to_string(),
        ));
    }

    if samples.len() < frame_size {
        log::warn!(
            "Signal ({} samples) shorter than one frame ({}), returning empty spectrogram",
            samples.len(),
            frame_size
        );
        return Ok(Vec::new());
    }

    let num_frames = (samples.len() - frame_size) / hop_size + 1;
    log::debug!(
        "Computing magnitude spectrogram: {} samples, frame={}, hop={}, {} frames",
        samples.len(),
        frame_size,
        hop_size,
        num_frames
    );

    // Hann window, precomputed once per call
    let window: Vec<f32> = (0..frame_size)
        .map(|i| {
            if frame_size > 1 {
                let t = 2.0 * std::f32::consts::PI * i as f32 / (frame_size - 1) as f32;
                0.5 * (1.0 - t.cos())
            } else {
                1.0
            }
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_size);

    let num_bins = frame_size / 2 + 1;
    let mut frames = Vec::with_capacity(num_frames);
    let mut buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); frame_size];

    for frame_idx in 0..num_frames {
        let start = frame_idx * hop_size;
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = Complex::new(samples[start + i] * window[i], 0.0);
        }

        fft.process(&mut buffer);

        let magnitudes: Vec<f32> = buffer[..num_bins].iter().map(|c| c.norm()).collect();
        frames.push(magnitudes);
    }

    Ok(frames)
}

/// Center frequency in Hz of each non-negative FFT bin
///
/// Bin `k` maps to `k * sample_rate / frame_size`, covering DC through
/// Nyquist inclusive (`frame_size / 2 + 1` values).
pub fn bin_frequencies(sample_rate: u32, frame_size: usize) -> Vec<f32> {
    if frame_size == 0 {
        return Vec::new();
    }
    (0..=frame_size / 2)
        .map(|k| k as f32 * sample_rate as f32 / frame_size as f32)
        .collect()
}

/// Convert an analysis frame index to seconds
pub fn frame_to_seconds(frame: usize, sample_rate: u32, hop_size: usize) -> f32 {
    frame as f32 * hop_size as f32 / sample_rate as f32
}
