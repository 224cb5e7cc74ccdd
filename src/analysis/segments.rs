//! Chord segmentation
//!
//! Groups time-stamped per-frame results into chord segments, then merges
//! same-chord segments split by short gaps and drops segments too short to
//! be a real chord change.

use super::result::{ChordSegment, RecognitionResult};
use crate::config::RecognitionConfig;
use crate::error::ChordError;
use crate::features::chord::ChordTemplate;

#[derive(Debug, Clone)]
struct OpenSegment {
    start_seconds: f32,
    template: ChordTemplate,
    confidence_sum: f32,
    frame_count: usize,
}

impl OpenSegment {
    fn close(self, end_seconds: f32) -> ChordSegment {
        ChordSegment {
            start_seconds: self.start_seconds,
            end_seconds,
            label: self.template.name(),
            root: self.template.root,
            quality: self.template.quality,
            confidence: self.confidence_sum / self.frame_count as f32,
            frame_count: self.frame_count,
        }
    }
}

/// Incremental builder of chord segments
///
/// Feed per-frame results with non-decreasing timestamps, then call
/// [`finish`](ChordSegmenter::finish).
#[derive(Debug, Clone)]
pub struct ChordSegmenter {
    merge_gap_seconds: f32,
    min_segment_seconds: f32,
    open: Option<OpenSegment>,
    closed: Vec<ChordSegment>,
    last_timestamp: Option<f32>,
}

impl ChordSegmenter {
    /// Create a segmenter using the merge gap and minimum duration from `config`
    pub fn new(config: &RecognitionConfig) -> Self {
        Self {
            merge_gap_seconds: config.merge_gap_seconds,
            min_segment_seconds: config.min_segment_seconds,
            open: None,
            closed: Vec::new(),
            last_timestamp: None,
        }
    }

    fn check_timestamp(&self, timestamp: f32) -> Result<(), ChordError> {
        if !timestamp.is_finite() {
            return Err(ChordError::InvalidTimestamp(format!(
                "timestamp must be finite, got {}",
                timestamp
            )));
        }
        if let Some(last) = self.last_timestamp {
            if timestamp < last {
                return Err(ChordError::InvalidTimestamp(format!(
                    "{:.3}s is earlier than previous frame at {:.3}s",
                    timestamp, last
                )));
            }
        }
        Ok(())
    }

    /// Add the result of the frame starting at `timestamp` seconds
    ///
    /// # Errors
    ///
    /// Returns `ChordError::InvalidTimestamp` if `timestamp` is not finite or
    /// is earlier than the previous frame.
    pub fn push(&mut self, timestamp: f32, result: &RecognitionResult) -> Result<(), ChordError> {
        self.check_timestamp(timestamp)?;
        self.last_timestamp = Some(timestamp);

        let extends_open = matches!(
            (&self.open, &result.chord),
            (Some(open), Some(chord)) if open.template.name() == chord.name()
        );

        if extends_open {
            if let Some(open) = self.open.as_mut() {
                open.confidence_sum += result.confidence;
                open.frame_count += 1;
            }
        } else {
            if let Some(open) = self.open.take() {
                self.closed.push(open.close(timestamp));
            }
            self.open = result.chord.map(|template| OpenSegment {
                start_seconds: timestamp,
                template,
                confidence_sum: result.confidence,
                frame_count: 1,
            });
        }

        Ok(())
    }

    /// Close the last segment at `end_seconds` and return the cleaned segments
    ///
    /// Leaves the segmenter empty and ready for a new source.
    ///
    /// # Errors
    ///
    /// Returns `ChordError::InvalidTimestamp` if `end_seconds` is not finite or
    /// precedes the last pushed frame.
    pub fn finish(&mut self, end_seconds: f32) -> Result<Vec<ChordSegment>, ChordError> {
        self.check_timestamp(end_seconds)?;

        if let Some(open) = self.open.take() {
            self.closed.push(open.close(end_seconds));
        }
        let raw = std::mem::take(&mut self.closed);
        self.last_timestamp = None;

        let raw_count = raw.len();
        let merged = merge_adjacent(raw, self.merge_gap_seconds);
        let merged_count = merged.len();
        let segments: Vec<ChordSegment> = merged
            .into_iter()
            .filter(|s| s.duration() >= self.min_segment_seconds)
            .collect();

        log::debug!(
            "Segmented {} raw chord spans -> {} after merging -> {} after duration filter",
            raw_count,
            merged_count,
            segments.len()
        );

        Ok(segments)
    }

    /// Discard all pending frames and segments
    pub fn reset(&mut self) {
        self.open = None;
        self.closed.clear();
        self.last_timestamp = None;
    }
}

/// Merge consecutive segments with the same label separated by at most `max_gap` seconds
fn merge_adjacent(segments: Vec<ChordSegment>, max_gap: f32) -> Vec<ChordSegment> {
    let mut merged: Vec<ChordSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(prev)
                if prev.label == segment.label
                    && segment.start_seconds - prev.end_seconds <= max_gap =>
            {
                let frames = prev.frame_count + segment.frame_count;
                prev.confidence = (prev.confidence * prev.frame_count as f32
                    + segment.confidence * segment.frame_count as f32)
                    / frames as f32;
                prev.frame_count = frames;
                prev.end_seconds = prev.end_seconds.max(segment.end_seconds);
            }
            _ => merged.push(segment),
        }
    }
    merged
}
