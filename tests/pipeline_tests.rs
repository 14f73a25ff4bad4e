//! End-to-end pipeline tests over synthesized band-limited audio.
//!
//! Builds a short percussive signal from sine bursts placed on a
//! 120 BPM grid, feeds it through [`groove_dsp::analyze`] together
//! with a synthetic chroma matrix, and checks the symbolic output.

use groove_dsp::features::key::NO_SIGNAL_CONFIDENCE;
use groove_dsp::{analyze, AnalysisConfig, AnalysisResult, DrumStyle, Mode, StepGrid};

const SAMPLE_RATE: u32 = 22050;
const TEMPO_BPM: f32 = 120.0;

/// Add a short sine burst with a half-sine amplitude envelope.
///
/// The envelope keeps the spectral energy concentrated around `freq`
/// so bursts stay inside their intended detection band.
fn add_burst(buffer: &mut [f32], start_seconds: f32, freq: f32, amplitude: f32) {
    let duration_seconds = 0.05;
    let start = (start_seconds * SAMPLE_RATE as f32) as usize;
    let length = (duration_seconds * SAMPLE_RATE as f32) as usize;
    for k in 0..length {
        let i = start + k;
        if i >= buffer.len() {
            break;
        }
        let t = k as f32 / SAMPLE_RATE as f32;
        let envelope = (std::f32::consts::PI * k as f32 / length as f32).sin();
        buffer[i] += amplitude * envelope * (2.0 * std::f32::consts::PI * freq * t).sin();
    }
}

/// One bar of house drums at 120 BPM.
///
/// Beat duration is 0.5 s. Events are shifted 60 ms into the signal
/// so the first onset does not fall on the very first analysis frame,
/// while staying well within half a sixteenth step of its slot.
fn house_bar() -> Vec<f32> {
    let mut samples = vec![0.0f32; (2.2 * SAMPLE_RATE as f32) as usize];
    // Kick on every beat
    for beat in 0..4 {
        add_burst(&mut samples, 0.06 + 0.5 * beat as f32, 60.0, 1.0);
    }
    // Snare on beats 2 and 4
    add_burst(&mut samples, 0.56, 300.0, 0.8);
    add_burst(&mut samples, 1.56, 300.0, 0.8);
    // Hi-hat on every eighth
    for eighth in 0..8 {
        add_burst(&mut samples, 0.06 + 0.25 * eighth as f32, 8000.0, 0.5);
    }
    samples
}

/// Chroma matrix of a sustained C major triad (C, E, G).
fn c_major_chroma(num_frames: usize) -> Vec<Vec<f32>> {
    let mut frame = vec![0.0f32; 12];
    frame[0] = 1.0;
    frame[4] = 0.8;
    frame[7] = 0.9;
    vec![frame; num_frames]
}

#[test]
fn test_house_bar_full_pipeline() {
    let samples = house_bar();
    let chroma = c_major_chroma(40);
    let config = AnalysisConfig::default();

    let result = analyze(&samples, SAMPLE_RATE, TEMPO_BPM, &chroma, &config)
        .expect("analysis should succeed");

    assert!((result.tempo_bpm - TEMPO_BPM).abs() < f32::EPSILON);

    assert_eq!(result.grids["kick"], StepGrid::four_on_floor());
    assert_eq!(result.grids["snare"], StepGrid::backbeat());
    assert_eq!(result.grids["hihat"], StepGrid::eighths());

    assert_eq!(result.style, DrumStyle::House);

    assert_eq!(result.notation["kick"], "bd*4");
    assert_eq!(result.notation["snare"], "~ sd ~ sd");
    assert_eq!(result.notation["hihat"], "hh*8");

    assert_eq!(result.key.name(), "C");
    assert_eq!(result.key.mode, Mode::Major);
    assert!(result.key.confidence > 0.0);

    assert_eq!(result.progression.len(), 4);
    for segment in &result.progression {
        assert_eq!(segment.name(), "C");
    }

    assert_eq!(result.metadata.sample_rate, SAMPLE_RATE);
    assert!((result.metadata.duration_seconds - 2.2).abs() < 0.01);
    assert!(!result.metadata.algorithm_version.is_empty());
}

#[test]
fn test_result_serializes_and_round_trips() {
    let samples = house_bar();
    let chroma = c_major_chroma(40);
    let config = AnalysisConfig::default();

    let result = analyze(&samples, SAMPLE_RATE, TEMPO_BPM, &chroma, &config)
        .expect("analysis should succeed");

    let json = serde_json::to_string(&result).expect("result should serialize");
    let restored: AnalysisResult = serde_json::from_str(&json).expect("result should deserialize");

    assert_eq!(restored.style, result.style);
    assert_eq!(restored.grids, result.grids);
    assert_eq!(restored.notation, result.notation);
    assert_eq!(restored.key.name(), result.key.name());
    assert_eq!(restored.progression.len(), result.progression.len());
}

#[test]
fn test_silence_yields_neutral_output() {
    let samples = vec![0.0f32; SAMPLE_RATE as usize];
    let config = AnalysisConfig::default();

    let result = analyze(&samples, SAMPLE_RATE, TEMPO_BPM, &[], &config)
        .expect("silence is valid input");

    for grid in result.grids.values() {
        assert_eq!(grid.hit_count(), 0);
    }
    assert!(result.notation.is_empty());
    assert_eq!(result.style, DrumStyle::Minimal);

    assert!((result.key.confidence - NO_SIGNAL_CONFIDENCE).abs() < f32::EPSILON);
    assert!(result.progression.is_empty());
}

#[test]
fn test_rejects_degenerate_parameters() {
    let config = AnalysisConfig::default();
    let samples = vec![0.0f32; 4096];

    assert!(analyze(&[], SAMPLE_RATE, TEMPO_BPM, &[], &config).is_err());
    assert!(analyze(&samples, 0, TEMPO_BPM, &[], &config).is_err());
    assert!(analyze(&samples, SAMPLE_RATE, 0.0, &[], &config).is_err());
    assert!(analyze(&samples, SAMPLE_RATE, f32::NAN, &[], &config).is_err());
}
