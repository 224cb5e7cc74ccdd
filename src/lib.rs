//! # Stratum Chords
//!
//! Chord recognition from 12-bin pitch-class energy vectors (chromagrams),
//! built for frame-by-frame use behind a spectral feature extractor.
//!
//! ## Features
//!
//! - **Template Matching**: 132 weighted templates (12 roots x 11 qualities) scored by Pearson correlation
//! - **Greedy Scan**: Common chord qualities are tried first, with early exit on a strong match
//! - **Temporal Smoothing**: Majority vote over the last 5 frames suppresses flicker
//! - **Segmentation**: Per-frame results grouped into time-stamped chord segments
//! - **Diagnostics**: Prominent notes and clarity for any chromagram
//!
//! ## Quick Start
//!
//! ```
//! use stratum_chords::{ChordRecogniser, Chromagram};
//!
//! let mut recogniser = ChordRecogniser::new();
//!
//! // One frame from your chroma extractor (C, E, G)
//! let frame = Chromagram::from_slice(&[1.0, 0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0])?;
//! let result = recogniser.recognise(&frame);
//!
//! println!("Chord: {:?} (confidence: {:.2})", result.label(), result.confidence);
//! # Ok::<(), stratum_chords::ChordError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Chromagram → Normalize → Priority Scan (early exit) → Threshold → History → Majority Vote → Output
//! ```
//!
//! Chromagram extraction, timestamps beyond frame order, and export formats
//! are left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;

// Re-export main types
pub use analysis::result::{ChordCandidate, ChordProgression, ChordSegment, RecognitionResult};
pub use analysis::segments::ChordSegmenter;
pub use config::RecognitionConfig;
pub use error::ChordError;
pub use features::chord::{ChordDatabase, ChordQuality, ChordRecogniser, ChordTemplate, RecognitionHistory};
pub use features::chroma::analysis::{analyze_chromagram, ChromagramAnalysis, ProminentNote};
pub use features::chroma::Chromagram;

/// Recognise the chord progression of a chromagram sequence
///
/// Runs a fresh recogniser over `frames` (frame `i` starts at
/// `i * frame_period_seconds`) and groups the results into segments.
///
/// # Arguments
///
/// * `frames` - Chromagrams in time order, one per analysis frame
/// * `frame_period_seconds` - Time between frames (e.g. 0.1)
/// * `config` - Recognition and segmentation parameters
///
/// # Returns
///
/// `ChordProgression` with merged, duration-filtered segments and frame counts
///
/// # Errors
///
/// Returns `ChordError` if `frames` is empty, the frame period is not a
/// positive finite number, or the configuration is invalid.
///
/// # Example
///
/// ```
/// use stratum_chords::{recognise_chromagrams, Chromagram, RecognitionConfig};
///
/// let c = Chromagram::new([1.0, 0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0]);
/// let frames = vec![c; 10];
/// let progression = recognise_chromagrams(&frames, 0.1, &RecognitionConfig::default())?;
/// assert_eq!(progression.labels(), vec!["C"]);
/// # Ok::<(), stratum_chords::ChordError>(())
/// ```
pub fn recognise_chromagrams(
    frames: &[Chromagram],
    frame_period_seconds: f32,
    config: &RecognitionConfig,
) -> Result<ChordProgression, ChordError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting chord recognition: {} frames at {:.3}s period",
        frames.len(),
        frame_period_seconds
    );

    if frames.is_empty() {
        return Err(ChordError::InvalidInput("Empty chromagram sequence".to_string()));
    }

    if !frame_period_seconds.is_finite() || frame_period_seconds <= 0.0 {
        return Err(ChordError::InvalidInput(format!(
            "Frame period must be positive, got {}",
            frame_period_seconds
        )));
    }

    let mut recogniser = ChordRecogniser::with_config(config.clone())?;
    let mut segmenter = ChordSegmenter::new(config);
    let mut frames_recognised = 0;

    for (i, frame) in frames.iter().enumerate() {
        let result = recogniser.recognise(frame);
        if result.is_some() {
            frames_recognised += 1;
        }
        segmenter.push(i as f32 * frame_period_seconds, &result)?;
    }

    let segments = segmenter.finish(frames.len() as f32 * frame_period_seconds)?;
    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Recognised {} of {} frames into {} segments in {:.2} ms",
        frames_recognised,
        frames.len(),
        segments.len(),
        processing_time_ms
    );

    Ok(ChordProgression {
        segments,
        frames_processed: frames.len(),
        frames_recognised,
        processing_time_ms,
    })
}
