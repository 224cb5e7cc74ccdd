//! Temporal smoothing of chord detections
//!
//! A short rolling history of per-frame detections with majority voting,
//! used to suppress flicker between acoustically similar chords.

use std::collections::{HashMap, VecDeque};

use super::templates::ChordTemplate;

/// Default number of frames kept for voting
pub const DEFAULT_HISTORY_LENGTH: usize = 5;

/// Bounded FIFO of recent detections (`None` = no chord in that frame)
#[derive(Debug, Clone)]
pub struct RecognitionHistory {
    entries: VecDeque<Option<ChordTemplate>>,
    capacity: usize,
}

impl RecognitionHistory {
    /// Create an empty history holding at most `capacity` frames (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a detection, evicting the oldest once full
    pub fn push(&mut self, entry: Option<ChordTemplate>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of frames currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no frames are held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of frames held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every frame
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Option<ChordTemplate>> + '_ {
        self.entries.iter()
    }

    /// Most recent entry (`None` if empty or the last frame had no chord)
    pub fn latest(&self) -> Option<&ChordTemplate> {
        self.entries.back().and_then(|e| e.as_ref())
    }

    /// Majority chord among the held detections
    ///
    /// Counts non-empty entries by display name. Returns the most frequent
    /// chord if it occurs more than once. Equal counts go to the chord seen
    /// most recently, and the returned template is that latest occurrence.
    pub fn majority(&self) -> Option<&ChordTemplate> {
        // name -> (count, index of latest occurrence)
        let mut votes: HashMap<String, (usize, usize)> = HashMap::new();
        for (idx, template) in self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|t| (i, t)))
        {
            let vote = votes.entry(template.name()).or_insert((0, idx));
            vote.0 += 1;
            vote.1 = idx;
        }

        let (count, latest_idx) = votes.into_values().max()?;
        if count > 1 {
            self.entries[latest_idx].as_ref()
        } else {
            None
        }
    }
}

impl Default for RecognitionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::chord::quality::ChordQuality;

    fn chord(root: u8, quality: ChordQuality) -> Option<ChordTemplate> {
        Some(ChordTemplate::new(root, quality))
    }

    #[test]
    fn test_bounded_length() {
        let mut history = RecognitionHistory::default();
        for i in 0..12 {
            history.push(chord(i, ChordQuality::Major));
            assert!(history.len() <= 5);
        }
        assert_eq!(history.len(), 5);
        // Oldest evicted first: roots 7..=11 remain
        let roots: Vec<u8> = history.iter().map(|e| e.unwrap().root).collect();
        assert_eq!(roots, vec![7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_latest() {
        let mut history = RecognitionHistory::new(3);
        assert!(history.latest().is_none());
        history.push(chord(0, ChordQuality::Major));
        assert_eq!(history.latest().unwrap().name(), "C");
        history.push(None);
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_majority_requires_repeat() {
        let mut history = RecognitionHistory::default();
        history.push(chord(0, ChordQuality::Major));
        history.push(chord(7, ChordQuality::Major));
        history.push(None);
        assert!(history.majority().is_none());

        history.push(chord(7, ChordQuality::Major));
        assert_eq!(history.majority().unwrap().name(), "G");
    }

    #[test]
    fn test_majority_ignores_empty_frames() {
        let mut history = RecognitionHistory::default();
        history.push(None);
        history.push(None);
        history.push(None);
        history.push(chord(2, ChordQuality::Minor));
        assert!(history.majority().is_none());
    }

    #[test]
    fn test_majority_tie_prefers_most_recent() {
        let mut history = RecognitionHistory::default();
        history.push(chord(0, ChordQuality::Major));
        history.push(chord(9, ChordQuality::Minor));
        history.push(chord(0, ChordQuality::Major));
        history.push(chord(9, ChordQuality::Minor));
        assert_eq!(history.majority().unwrap().name(), "Am");

        history.push(None);
        assert_eq!(history.majority().unwrap().name(), "Am");

        // Evicts the first C: [Am, C, Am, None, C] -> 2 each, C seen last
        history.push(chord(0, ChordQuality::Major));
        assert_eq!(history.majority().unwrap().name(), "C");
    }

    #[test]
    fn test_clear() {
        let mut history = RecognitionHistory::default();
        history.push(chord(0, ChordQuality::Major));
        history.push(chord(0, ChordQuality::Major));
        history.clear();
        assert!(history.is_empty());
        assert!(history.majority().is_none());
        assert_eq!(history.capacity(), 5);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut history = RecognitionHistory::new(0);
        history.push(None);
        history.push(None);
        assert_eq!(history.len(), 1);
    }
}
