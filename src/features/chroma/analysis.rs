//! Chromagram diagnostics
//!
//! Summarizes a single frame independently of chord matching: which notes
//! stand out, how peaked the distribution is, and whether it looks like a
//! clear harmonic signal.

use serde::{Deserialize, Serialize};

use super::{note_name, Chromagram};

/// A note is prominent when its energy exceeds this fraction of the frame peak
pub const PROMINENCE_RATIO: f32 = 0.3;

/// Minimum clarity (std-dev of bins) for a frame to count as harmonic
const MIN_HARMONIC_CLARITY: f32 = 0.1;

/// Minimum total energy for a frame to count as harmonic
const MIN_HARMONIC_ENERGY: f32 = 0.1;

/// A harmonic frame has between 2 and 6 prominent notes
const HARMONIC_NOTE_RANGE: std::ops::RangeInclusive<usize> = 2..=6;

/// A pitch class standing out in a chromagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProminentNote {
    /// Pitch class (0 = C)
    pub pitch_class: u8,

    /// Note name ("C", "C#", ...)
    pub name: String,

    /// Energy of this bin
    pub energy: f32,
}

/// Diagnostic summary of one chromagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromagramAnalysis {
    /// Notes above 30% of the peak energy, strongest first
    pub prominent_notes: Vec<ProminentNote>,

    /// Population standard deviation of the 12 bins
    ///
    /// Flat (noisy) frames score near zero; peaked frames score high.
    pub clarity: f32,

    /// Sum of the 12 bins
    pub total_energy: f32,

    /// True when the frame looks like a clear chord: enough energy, a peaked
    /// distribution, and 2-6 prominent notes
    pub is_harmonic: bool,
}

/// Analyze a chromagram
///
/// Stateless and independent of recognition thresholds.
///
/// # Example
///
/// ```
/// use stratum_chords::features::chroma::{analysis::analyze_chromagram, Chromagram};
///
/// let chroma = Chromagram::new([1.0, 0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0]);
/// let analysis = analyze_chromagram(&chroma);
/// assert_eq!(analysis.prominent_notes[0].name, "C");
/// assert!(analysis.is_harmonic);
/// ```
pub fn analyze_chromagram(chroma: &Chromagram) -> ChromagramAnalysis {
    let bins = chroma.as_slice();
    let total_energy = chroma.total_energy();
    let peak = chroma.peak();
    let threshold = peak * PROMINENCE_RATIO;

    let mut prominent_notes: Vec<ProminentNote> = bins
        .iter()
        .enumerate()
        .filter(|(_, &energy)| peak > 0.0 && energy > threshold)
        .map(|(pc, &energy)| ProminentNote {
            pitch_class: pc as u8,
            name: note_name(pc as u8).to_string(),
            energy,
        })
        .collect();
    // Stable: equal energies keep ascending pitch-class order
    prominent_notes.sort_by(|a, b| {
        b.energy
            .partial_cmp(&a.energy)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let clarity = population_std_dev(bins);

    let is_harmonic = total_energy > MIN_HARMONIC_ENERGY
        && clarity > MIN_HARMONIC_CLARITY
        && HARMONIC_NOTE_RANGE.contains(&prominent_notes.len());

    log::trace!(
        "Chromagram analysis: {} prominent notes, clarity {:.3}, energy {:.3}, harmonic={}",
        prominent_notes.len(),
        clarity,
        total_energy,
        is_harmonic
    );

    ChromagramAnalysis {
        prominent_notes,
        clarity,
        total_energy,
        is_harmonic,
    }
}

fn population_std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n;
    variance.sqrt()
}
