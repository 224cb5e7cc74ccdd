//! Chord templates
//!
//! A template is an idealized chromagram for one (root, quality) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::quality::ChordQuality;
use crate::features::chroma::{note_name, NUM_PITCH_CLASSES};

/// Template weight for the root
const ROOT_WEIGHT: f32 = 1.0;
/// Template weight for a minor or major third
const THIRD_WEIGHT: f32 = 0.8;
/// Template weight for a perfect fifth
const FIFTH_WEIGHT: f32 = 0.6;
/// Template weight for any other chord tone (sevenths, suspensions, altered fifths)
const EXTENSION_WEIGHT: f32 = 0.4;

/// Weight of a chord tone by its semitone offset from the root
///
/// Thirds weigh more than fifths since they tell major from minor.
pub fn interval_weight(offset: u8) -> f32 {
    match offset {
        0 => ROOT_WEIGHT,
        3 | 4 => THIRD_WEIGHT,
        7 => FIFTH_WEIGHT,
        _ => EXTENSION_WEIGHT,
    }
}

/// A chord (root + quality) with its derived template vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordTemplate {
    /// Root pitch class (0 = C, ..., 11 = B)
    pub root: u8,

    /// Chord quality
    pub quality: ChordQuality,

    /// Expected pitch-class energy distribution
    pub vector: [f32; NUM_PITCH_CLASSES],
}

impl ChordTemplate {
    /// Build the template for a root and quality
    ///
    /// Roots above 11 wrap around the octave. If two chord tones land on the
    /// same pitch class, the later one's weight replaces the earlier one.
    ///
    /// # Example
    ///
    /// ```
    /// use stratum_chords::features::chord::{ChordQuality, ChordTemplate};
    ///
    /// let g7 = ChordTemplate::new(7, ChordQuality::Dominant7);
    /// assert_eq!(g7.name(), "G7");
    /// assert_eq!(g7.vector[7], 1.0);  // G (root)
    /// assert_eq!(g7.vector[11], 0.8); // B (third)
    /// assert_eq!(g7.vector[2], 0.6);  // D (fifth)
    /// assert_eq!(g7.vector[5], 0.4);  // F (seventh)
    /// ```
    pub fn new(root: u8, quality: ChordQuality) -> Self {
        let root = root % NUM_PITCH_CLASSES as u8;
        let mut vector = [0.0f32; NUM_PITCH_CLASSES];
        for &offset in quality.intervals() {
            let pc = (root as usize + offset as usize) % NUM_PITCH_CLASSES;
            vector[pc] = interval_weight(offset);
        }
        Self {
            root,
            quality,
            vector,
        }
    }

    /// Display name, e.g. "C", "F#m", "A#m7"
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Note name of the root
    pub fn root_name(&self) -> &'static str {
        note_name(self.root)
    }

    /// Match priority of this template's quality
    pub fn priority(&self) -> u8 {
        self.quality.priority()
    }
}

impl fmt::Display for ChordTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root_name(), self.quality.symbol())
    }
}
