//! Chord recognition engine
//!
//! Correlates each chromagram frame against the template database, gates the
//! result on energy and correlation thresholds, then smooths the label over a
//! short history of recent frames.
//!
//! The matching math ([`scan_best_match`], [`rank_candidates`]) is pure; only
//! [`ChordRecogniser::recognise`] touches the history.

use super::correlation::pearson_correlation;
use super::database::ChordDatabase;
use super::smoothing::RecognitionHistory;
use super::templates::ChordTemplate;
use crate::analysis::result::{ChordCandidate, RecognitionResult};
use crate::config::RecognitionConfig;
use crate::error::ChordError;
use crate::features::chroma::analysis::{analyze_chromagram, ChromagramAnalysis};
use crate::features::chroma::Chromagram;

/// Default number of candidates returned by [`ChordRecogniser::top_candidates`]
pub const DEFAULT_CANDIDATE_COUNT: usize = 5;

/// Greedy scan for the best-matching template
///
/// Walks `templates` in the given order, tracking the highest correlation.
/// The scan stops at the first template whose correlation exceeds
/// `config.early_exit_correlation` and whose quality priority is at least
/// `config.early_exit_min_priority`, even if a later template would score
/// higher. Pass the database's priority view for recognition behaviour.
///
/// # Arguments
///
/// * `normalized` - Unit-length input chromagram
/// * `templates` - Templates in scan order
/// * `config` - Early-exit thresholds
///
/// # Returns
///
/// Best candidate found, or `None` if `templates` is empty
pub fn scan_best_match(
    normalized: &Chromagram,
    templates: &[ChordTemplate],
    config: &RecognitionConfig,
) -> Option<ChordCandidate> {
    let mut best: Option<ChordCandidate> = None;

    for (scanned, template) in templates.iter().enumerate() {
        let score = pearson_correlation(normalized.as_slice(), &template.vector);
        if best.map_or(true, |b| score > b.score) {
            best = Some(ChordCandidate {
                template: *template,
                score,
            });
        }

        if score > config.early_exit_correlation
            && template.priority() >= config.early_exit_min_priority
        {
            log::trace!(
                "Early exit on {} (r={:.3}) after {} of {} templates",
                template,
                score,
                scanned + 1,
                templates.len()
            );
            break;
        }
    }

    best
}

/// Score every template and rank by correlation, highest first
///
/// No priority ordering, early exit or thresholds. Equal scores keep the
/// order of `templates`.
pub fn rank_candidates(normalized: &Chromagram, templates: &[ChordTemplate]) -> Vec<ChordCandidate> {
    let mut candidates: Vec<ChordCandidate> = templates
        .iter()
        .map(|template| ChordCandidate {
            template: *template,
            score: pearson_correlation(normalized.as_slice(), &template.vector),
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Stateful chord recogniser
///
/// Holds the template database and the recognition history. `recognise`
/// mutates the history, so calls on one instance must be serialized and
/// frames supplied in time order. Call [`reset`](ChordRecogniser::reset)
/// when switching to a new source or after a seek.
///
/// # Example
///
/// ```
/// use stratum_chords::{ChordRecogniser, Chromagram};
///
/// let mut recogniser = ChordRecogniser::new();
/// let frame = Chromagram::new([1.0, 0.0, 0.0, 0.0, 0.8, 0.0, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0]);
/// let result = recogniser.recognise(&frame);
/// assert_eq!(result.label().as_deref(), Some("C"));
/// assert!(result.confidence > 0.3);
/// ```
#[derive(Debug, Clone)]
pub struct ChordRecogniser {
    database: ChordDatabase,
    history: RecognitionHistory,
    config: RecognitionConfig,
}

impl ChordRecogniser {
    /// Create a recogniser with default thresholds
    pub fn new() -> Self {
        Self::from_valid_config(RecognitionConfig::default())
    }

    /// Create a recogniser with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `ChordError::InvalidInput` if the configuration is out of range.
    pub fn with_config(config: RecognitionConfig) -> Result<Self, ChordError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RecognitionConfig) -> Self {
        Self {
            database: ChordDatabase::new(),
            history: RecognitionHistory::new(config.history_length),
            config,
        }
    }

    /// Recognise the chord in one frame
    ///
    /// Returns the smoothed chord and the correlation of this frame's raw
    /// best match. The confidence is not recomputed when smoothing picks a
    /// different chord. Frames with too little energy or no template
    /// correlating above the threshold yield [`RecognitionResult::NONE`] and
    /// record an empty entry in the history.
    pub fn recognise(&mut self, chroma: &Chromagram) -> RecognitionResult {
        let total_energy = chroma.total_energy();
        if total_energy <= self.config.min_total_energy {
            log::trace!("Frame below energy threshold ({:.4})", total_energy);
            self.history.push(None);
            return RecognitionResult::NONE;
        }

        let normalized = chroma.normalized();
        let best = match scan_best_match(&normalized, self.database.by_priority(), &self.config) {
            Some(best) if best.score > self.config.min_correlation => best,
            other => {
                log::trace!(
                    "No template above correlation threshold (best r={:.3})",
                    other.map_or(0.0, |c| c.score)
                );
                self.history.push(None);
                return RecognitionResult::NONE;
            }
        };

        self.history.push(Some(best.template));

        let smoothed = match self.history.majority() {
            Some(majority) => *majority,
            None => best.template,
        };

        if smoothed != best.template {
            log::trace!(
                "Smoothing holds {} over raw match {} (r={:.3})",
                smoothed,
                best.template,
                best.score
            );
        }

        RecognitionResult {
            chord: Some(smoothed),
            confidence: best.score.clamp(0.0, 1.0),
        }
    }

    /// Rank the whole database against a frame
    ///
    /// Stateless: ignores history, priority and thresholds. Returns at most
    /// `count` candidates, highest correlation first.
    pub fn top_candidates(&self, chroma: &Chromagram, count: usize) -> Vec<ChordCandidate> {
        let normalized = chroma.normalized();
        let mut candidates = rank_candidates(&normalized, self.database.templates());
        candidates.truncate(count);
        candidates
    }

    /// Diagnostic summary of a frame (independent of recognition)
    pub fn analyze_chromagram(&self, chroma: &Chromagram) -> ChromagramAnalysis {
        analyze_chromagram(chroma)
    }

    /// Forget all previous frames
    pub fn reset(&mut self) {
        log::debug!("Resetting recognition history ({} frames)", self.history.len());
        self.history.clear();
    }

    /// Recent detections, oldest first
    pub fn history(&self) -> &RecognitionHistory {
        &self.history
    }

    /// Template database
    pub fn database(&self) -> &ChordDatabase {
        &self.database
    }

    /// Active configuration
    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }
}

impl Default for ChordRecogniser {
    fn default() -> Self {
        Self::new()
    }
}
