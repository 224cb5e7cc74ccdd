//! Chord quality table
//!
//! Interval pattern, display symbol and match priority for each of the 11
//! supported chord qualities. All per-quality data lives in one static table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    /// Major triad (C-E-G)
    Major,
    /// Minor triad (C-Eb-G)
    Minor,
    /// Diminished triad (C-Eb-Gb)
    Diminished,
    /// Augmented triad (C-E-G#)
    Augmented,
    /// Dominant seventh (C-E-G-Bb)
    Dominant7,
    /// Major seventh (C-E-G-B)
    Major7,
    /// Minor seventh (C-Eb-G-Bb)
    Minor7,
    /// Half-diminished seventh (C-Eb-Gb-Bb)
    HalfDiminished7,
    /// Diminished seventh (C-Eb-Gb-A)
    Diminished7,
    /// Suspended second (C-D-G)
    Sus2,
    /// Suspended fourth (C-F-G)
    Sus4,
}

struct QualityInfo {
    intervals: &'static [u8],
    symbol: &'static str,
    name: &'static str,
    priority: u8,
}

// Indexed by `ChordQuality as usize`; must follow the declaration order above.
// Priority: higher = more common, scanned first.
static QUALITY_TABLE: [QualityInfo; ChordQuality::COUNT] = [
    QualityInfo { intervals: &[0, 4, 7], symbol: "", name: "major", priority: 10 },
    QualityInfo { intervals: &[0, 3, 7], symbol: "m", name: "minor", priority: 9 },
    QualityInfo { intervals: &[0, 3, 6], symbol: "dim", name: "diminished", priority: 4 },
    QualityInfo { intervals: &[0, 4, 8], symbol: "aug", name: "augmented", priority: 3 },
    QualityInfo { intervals: &[0, 4, 7, 10], symbol: "7", name: "dominant 7th", priority: 8 },
    QualityInfo { intervals: &[0, 4, 7, 11], symbol: "maj7", name: "major 7th", priority: 6 },
    QualityInfo { intervals: &[0, 3, 7, 10], symbol: "m7", name: "minor 7th", priority: 7 },
    QualityInfo { intervals: &[0, 3, 6, 10], symbol: "m7b5", name: "half-diminished 7th", priority: 3 },
    QualityInfo { intervals: &[0, 3, 6, 9], symbol: "dim7", name: "diminished 7th", priority: 2 },
    QualityInfo { intervals: &[0, 2, 7], symbol: "sus2", name: "suspended 2nd", priority: 4 },
    QualityInfo { intervals: &[0, 5, 7], symbol: "sus4", name: "suspended 4th", priority: 5 },
];

impl ChordQuality {
    /// Number of qualities
    pub const COUNT: usize = 11;

    /// Every quality in declaration order
    ///
    /// This order drives template generation, so it must stay stable.
    pub const ALL: [ChordQuality; Self::COUNT] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Dominant7,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::HalfDiminished7,
        ChordQuality::Diminished7,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
    ];

    fn info(self) -> &'static QualityInfo {
        &QUALITY_TABLE[self as usize]
    }

    /// Semitone offsets from the root, starting with 0
    pub fn intervals(self) -> &'static [u8] {
        self.info().intervals
    }

    /// Display symbol appended to the root name ("" for major, "m7" for minor 7th, ...)
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Human-readable name ("major", "minor 7th", ...)
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Match priority (higher = tried first)
    pub fn priority(self) -> u8 {
        self.info().priority
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
