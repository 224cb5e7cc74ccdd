//! Recognition result types

use serde::{Deserialize, Serialize};

use crate::features::chord::{ChordQuality, ChordTemplate};

/// Per-frame recognition output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Smoothed chord for this frame (`None` = no chord)
    pub chord: Option<ChordTemplate>,

    /// Correlation of this frame's raw best match (0.0-1.0)
    ///
    /// This describes the raw best match, which may differ from `chord` when
    /// temporal smoothing overrides it.
    pub confidence: f32,
}

impl RecognitionResult {
    /// Result for a frame with no chord
    pub const NONE: RecognitionResult = RecognitionResult {
        chord: None,
        confidence: 0.0,
    };

    /// True if a chord was recognised
    pub fn is_some(&self) -> bool {
        self.chord.is_some()
    }

    /// Display name of the recognised chord
    pub fn label(&self) -> Option<String> {
        self.chord.map(|c| c.name())
    }
}

/// A template with its similarity to an input chromagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordCandidate {
    /// Candidate chord
    pub template: ChordTemplate,

    /// Pearson correlation with the input (-1.0 to 1.0)
    pub score: f32,
}

/// A time span over which one chord was recognised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordSegment {
    /// Segment start in seconds
    pub start_seconds: f32,

    /// Segment end in seconds
    pub end_seconds: f32,

    /// Chord display name ("C", "Am7", ...)
    pub label: String,

    /// Root pitch class (0 = C)
    pub root: u8,

    /// Chord quality
    pub quality: ChordQuality,

    /// Mean per-frame confidence (0.0-1.0)
    pub confidence: f32,

    /// Number of frames that formed this segment
    pub frame_count: usize,
}

impl ChordSegment {
    /// Segment length in seconds
    pub fn duration(&self) -> f32 {
        self.end_seconds - self.start_seconds
    }
}

/// Chord progression recognised over a sequence of frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordProgression {
    /// Time-ordered chord segments
    pub segments: Vec<ChordSegment>,

    /// Number of frames processed
    pub frames_processed: usize,

    /// Number of frames with a recognised chord
    pub frames_recognised: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,
}

impl ChordProgression {
    /// Segment labels in order
    pub fn labels(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.label.as_str()).collect()
    }
}
