//! Configuration parameters for chord recognition

use crate::error::ChordError;

/// Chord recognition configuration parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionConfig {
    // Gating
    /// Minimum summed chromagram energy for a frame to be considered (default: 0.1)
    /// Frames at or below this level yield "no chord"
    pub min_total_energy: f32,

    /// Minimum Pearson correlation for the best template to be accepted (default: 0.3)
    pub min_correlation: f32,

    // Greedy scan
    /// Correlation above which a high-priority template ends the scan early (default: 0.8)
    pub early_exit_correlation: f32,

    /// Minimum quality priority eligible for early exit (default: 8)
    /// With the default table this admits major, minor and dominant-7th chords
    pub early_exit_min_priority: u8,

    // Temporal smoothing
    /// Number of recent frames kept for majority voting (default: 5)
    pub history_length: usize,

    // Segmentation
    /// Adjacent segments with the same chord and a gap up to this many seconds
    /// are merged (default: 0.4)
    pub merge_gap_seconds: f32,

    /// Segments shorter than this many seconds are dropped (default: 0.3)
    pub min_segment_seconds: f32,
}

impl RecognitionConfig {
    /// Check that every parameter is in range
    ///
    /// # Errors
    ///
    /// Returns `ChordError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), ChordError> {
        if !self.min_total_energy.is_finite() || self.min_total_energy < 0.0 {
            return Err(ChordError::InvalidInput(format!(
                "min_total_energy must be finite and non-negative, got {}",
                self.min_total_energy
            )));
        }

        for (name, value) in [
            ("min_correlation", self.min_correlation),
            ("early_exit_correlation", self.early_exit_correlation),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ChordError::InvalidInput(format!(
                    "{} must be in [0.0, 1.0], got {}",
                    name, value
                )));
            }
        }

        if self.history_length == 0 {
            return Err(ChordError::InvalidInput(
                "history_length must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("merge_gap_seconds", self.merge_gap_seconds),
            ("min_segment_seconds", self.min_segment_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChordError::InvalidInput(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            min_total_energy: 0.1,
            min_correlation: 0.3,
            early_exit_correlation: 0.8,
            early_exit_min_priority: 8,
            history_length: 5,
            merge_gap_seconds: 0.4,
            min_segment_seconds: 0.3,
        }
    }
}
