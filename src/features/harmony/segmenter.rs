//! Per-segment chord fitting

use super::templates::{rotated_template, CHORD_TEMPLATES};
use super::ChordSegment;
use crate::error::AnalysisError;
use crate::features::pearson_correlation;

/// Fit one chord per equal-width segment of a chroma matrix
///
/// Partitions the chroma frames into `segments` contiguous ranges of
/// width `frames / segments` (trailing remainder frames are dropped),
/// averages each range into one 12-element vector, and correlates it
/// against every (root x quality) rotated template. The best-scoring
/// combination wins per segment; ties keep the first in scan order
/// (root ascending, qualities in template declaration order).
///
/// # Arguments
///
/// * `chroma_frames` - Chroma-over-time matrix, one 12-element vector
///   per frame in time order
/// * `segments` - Number of chord segments (typically 4)
///
/// # Returns
///
/// One `ChordSegment` per segment, in time order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `segments` is zero, there
/// are fewer frames than segments, or any frame is not 12 elements.
pub fn segment_chords(
    chroma_frames: &[Vec<f32>],
    segments: usize,
) -> Result<Vec<ChordSegment>, AnalysisError> {
    if segments == 0 {
        return Err(AnalysisError::InvalidInput(
            "Segment count must be > 0".to_string(),
        ));
    }

    let width = chroma_frames.len() / segments;
    if width == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Chroma matrix has {} frames, need at least {} for {} segments",
            chroma_frames.len(),
            segments,
            segments
        )));
    }

    for (i, frame) in chroma_frames.iter().enumerate() {
        if frame.len() != 12 {
            return Err(AnalysisError::InvalidInput(format!(
                "Chroma frame at index {} has {} elements, expected 12",
                i,
                frame.len()
            )));
        }
    }

    log::debug!(
        "Segmenting chords: {} frames, {} segments, width {}",
        chroma_frames.len(),
        segments,
        width
    );

    let mut progression = Vec::with_capacity(segments);

    for seg in 0..segments {
        let range = &chroma_frames[seg * width..(seg + 1) * width];

        let mut avg = [0.0f32; 12];
        for frame in range {
            for (a, &v) in avg.iter_mut().zip(frame.iter()) {
                *a += v;
            }
        }
        for a in avg.iter_mut() {
            *a /= width as f32;
        }

        let mut best = ChordSegment {
            index: seg,
            root: 0,
            quality: CHORD_TEMPLATES[0].0,
            score: f32::NEG_INFINITY,
        };

        for root in 0..12usize {
            for (quality, template) in CHORD_TEMPLATES.iter() {
                let rotated = rotated_template(template, root);
                let score = pearson_correlation(&avg, &rotated);
                if score > best.score {
                    best = ChordSegment {
                        index: seg,
                        root: root as u8,
                        quality: *quality,
                        score,
                    };
                }
            }
        }

        progression.push(best);
    }

    Ok(progression)
}
