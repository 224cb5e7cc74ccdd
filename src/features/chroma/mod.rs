//! Chroma modules
//!
//! Pitch-class energy vectors as produced by an upstream feature extractor:
//! - The `Chromagram` frame type
//! - Normalization
//! - Diagnostic analysis (prominent notes, clarity)

pub mod analysis;
pub mod normalization;

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;

/// Number of pitch classes (semitones per octave)
pub const NUM_PITCH_CLASSES: usize = 12;

/// Note names indexed by pitch class (0 = C), sharps only
pub const NOTE_NAMES: [&str; NUM_PITCH_CLASSES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Get the note name of a pitch class
///
/// Values above 11 wrap around the octave.
///
/// # Example
///
/// ```
/// use stratum_chords::features::chroma::note_name;
///
/// assert_eq!(note_name(0), "C");
/// assert_eq!(note_name(9), "A");
/// assert_eq!(note_name(13), "C#");
/// ```
pub fn note_name(pitch_class: u8) -> &'static str {
    NOTE_NAMES[pitch_class as usize % NUM_PITCH_CLASSES]
}

/// One frame of pitch-class energy
///
/// Exactly 12 bins, indexed by pitch class (0 = C). Magnitude is not assumed
/// to be normalized. The fixed-size array makes a wrong-length chromagram
/// unrepresentable; untyped data is checked once, in [`Chromagram::from_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromagram([f32; NUM_PITCH_CLASSES]);

impl Chromagram {
    /// Wrap a 12-bin array
    ///
    /// The bins are taken as given: the caller is trusted to supply finite,
    /// non-negative energies. Use [`Chromagram::from_slice`] for data that
    /// has not been checked.
    pub const fn new(bins: [f32; NUM_PITCH_CLASSES]) -> Self {
        Self(bins)
    }

    /// Build a chromagram from untyped data
    ///
    /// # Errors
    ///
    /// Returns `ChordError::InvalidInput` if the slice does not have exactly
    /// 12 elements or contains a negative or non-finite energy.
    pub fn from_slice(values: &[f32]) -> Result<Self, ChordError> {
        if values.len() != NUM_PITCH_CLASSES {
            log::warn!("Rejected chromagram with {} bins", values.len());
            return Err(ChordError::InvalidInput(format!(
                "Chromagram must have {} elements, got {}",
                NUM_PITCH_CLASSES,
                values.len()
            )));
        }

        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            log::warn!("Rejected chromagram with bin {} = {}", i, v);
            return Err(ChordError::InvalidInput(format!(
                "Chromagram bin {} must be finite and non-negative, got {}",
                i, v
            )));
        }

        let mut bins = [0.0f32; NUM_PITCH_CLASSES];
        bins.copy_from_slice(values);
        Ok(Self(bins))
    }

    /// Bins as a slice, indexed by pitch class
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Bins as a fixed-size array
    pub fn bins(&self) -> &[f32; NUM_PITCH_CLASSES] {
        &self.0
    }

    /// Sum of all bins
    pub fn total_energy(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Largest bin value
    pub fn peak(&self) -> f32 {
        self.0.iter().copied().fold(0.0f32, f32::max)
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f32 {
        normalization::l2_norm(&self.0)
    }

    /// Copy scaled to unit Euclidean length (unchanged when all bins are zero)
    pub fn normalized(&self) -> Self {
        Self(normalization::l2_normalize(&self.0))
    }
}

/// Unchecked, like [`Chromagram::new`]
impl From<[f32; NUM_PITCH_CLASSES]> for Chromagram {
    fn from(bins: [f32; NUM_PITCH_CLASSES]) -> Self {
        Self(bins)
    }
}

impl TryFrom<&[f32]> for Chromagram {
    type Error = ChordError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f32>> for Chromagram {
    type Error = ChordError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl Index<usize> for Chromagram {
    type Output = f32;

    fn index(&self, pitch_class: usize) -> &f32 {
        &self.0[pitch_class]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_wrong_length() {
        assert!(Chromagram::from_slice(&[1.0; 11]).is_err());
        assert!(Chromagram::from_slice(&[1.0; 13]).is_err());
        assert!(Chromagram::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_from_slice_rejects_negative_and_nan() {
        let mut values = [0.5f32; 12];
        values[3] = -0.1;
        assert!(Chromagram::from_slice(&values).is_err());

        values[3] = f32::NAN;
        assert!(Chromagram::from_slice(&values).is_err());
    }

    #[test]
    fn test_from_slice_valid() {
        let values = vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0];
        let chroma = Chromagram::try_from(values).unwrap();
        assert_eq!(chroma[1], 1.0);
        assert_eq!(chroma[7], 2.0);
        assert_eq!(chroma.total_energy(), 3.0);
        assert_eq!(chroma.peak(), 2.0);
    }

    #[test]
    fn test_normalized_unit_length() {
        let chroma = Chromagram::new([3.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let n = chroma.normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[4] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_new_keeps_bins_unchecked() {
        let mut bins = [0.25f32; 12];
        bins[5] = -1.0;
        let chroma = Chromagram::new(bins);
        assert_eq!(chroma.bins(), &bins);
        assert_eq!(Chromagram::from(bins), chroma);
        assert!(Chromagram::from_slice(chroma.as_slice()).is_err());
    }

    #[test]
    fn test_large_energy_normalizes() {
        let chroma = Chromagram::from_slice(&[2e19, 0.0, 0.0, 0.0, 1.6e19, 0.0, 0.0, 1.2e19, 0.0, 0.0, 0.0, 0.0])
            .unwrap();
        assert!(chroma.magnitude().is_finite());
        let n = chroma.normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n[7] / n[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_zero_unchanged() {
        let chroma = Chromagram::default();
        assert_eq!(chroma.normalized(), chroma);
    }

    #[test]
    fn test_note_names() {
        assert_eq!(note_name(0), "C");
        assert_eq!(note_name(6), "F#");
        assert_eq!(note_name(11), "B");
    }
}
