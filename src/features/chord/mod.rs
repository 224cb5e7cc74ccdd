//! Chord recognition modules
//!
//! Recognise chords from chromagram frames using:
//! - A fixed table of 11 chord qualities
//! - Weighted templates for all 132 (root, quality) pairs
//! - Pearson correlation with a priority-ordered greedy scan
//! - Majority-vote temporal smoothing

pub mod correlation;
pub mod database;
pub mod quality;
pub mod recogniser;
pub mod smoothing;
pub mod templates;

pub use correlation::pearson_correlation;
pub use database::ChordDatabase;
pub use quality::ChordQuality;
pub use recogniser::{rank_candidates, scan_best_match, ChordRecogniser};
pub use smoothing::RecognitionHistory;
pub use templates::ChordTemplate;
