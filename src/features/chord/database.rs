//! Chord template database
//!
//! All 12 roots x 11 qualities, generated once, held in natural and
//! priority order.

use super::quality::ChordQuality;
use super::templates::ChordTemplate;
use crate::features::chroma::NUM_PITCH_CLASSES;

/// Number of templates in the database
pub const NUM_TEMPLATES: usize = NUM_PITCH_CLASSES * ChordQuality::COUNT;

/// Read-only collection of every chord template
#[derive(Debug, Clone)]
pub struct ChordDatabase {
    /// Roots outer, qualities inner (declaration order)
    templates: Vec<ChordTemplate>,

    /// Descending priority, ties by ascending root
    by_priority: Vec<ChordTemplate>,
}

impl ChordDatabase {
    /// Generate the full template set
    pub fn new() -> Self {
        let mut templates = Vec::with_capacity(NUM_TEMPLATES);
        for root in 0..NUM_PITCH_CLASSES as u8 {
            for quality in ChordQuality::ALL {
                templates.push(ChordTemplate::new(root, quality));
            }
        }

        // sort_by is stable: equal (priority, root) keeps generation order
        let mut by_priority = templates.clone();
        by_priority.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.root.cmp(&b.root))
        });

        log::debug!("Generated chord database with {} templates", templates.len());

        Self {
            templates,
            by_priority,
        }
    }

    /// Templates in generation order
    pub fn templates(&self) -> &[ChordTemplate] {
        &self.templates
    }

    /// Templates in scan order: highest priority first, then ascending root
    pub fn by_priority(&self) -> &[ChordTemplate] {
        &self.by_priority
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if the database holds no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template by root and quality
    pub fn find(&self, root: u8, quality: ChordQuality) -> Option<&ChordTemplate> {
        let root = root as usize % NUM_PITCH_CLASSES;
        let quality_idx = quality as usize;
        self.templates.get(root * ChordQuality::COUNT + quality_idx)
    }

    /// Look up a template by display name ("C", "F#m7", ...)
    pub fn find_by_name(&self, name: &str) -> Option<&ChordTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }
}

impl Default for ChordDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_database_size() {
        let db = ChordDatabase::new();
        assert_eq!(db.len(), 132);
        assert_eq!(db.by_priority().len(), 132);
        assert!(!db.is_empty());
    }

    #[test]
    fn test_templates_distinct() {
        let db = ChordDatabase::new();
        let names: HashSet<String> = db.templates().iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 132);
    }

    #[test]
    fn test_generation_order() {
        let db = ChordDatabase::new();
        let first = db.templates()[0];
        assert_eq!((first.root, first.quality), (0, ChordQuality::Major));
        let second = db.templates()[1];
        assert_eq!((second.root, second.quality), (0, ChordQuality::Minor));
        let twelfth = db.templates()[11];
        assert_eq!((twelfth.root, twelfth.quality), (1, ChordQuality::Major));
        let last = db.templates()[131];
        assert_eq!((last.root, last.quality), (11, ChordQuality::Sus4));
    }

    #[test]
    fn test_priority_order() {
        let db = ChordDatabase::new();
        let scan = db.by_priority();
        for pair in scan.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.priority() > b.priority()
                    || (a.priority() == b.priority() && a.root <= b.root)
            );
        }
        // All 12 majors first, C major leading
        assert_eq!(scan[0].name(), "C");
        assert!(scan[..12].iter().all(|t| t.quality == ChordQuality::Major));
        assert_eq!(scan[12].name(), "Cm");
    }

    #[test]
    fn test_equal_priority_keeps_declaration_order() {
        // Diminished and Sus2 share a priority; for each root, Diminished is declared first
        let db = ChordDatabase::new();
        let scan = db.by_priority();
        let dim_c = scan.iter().position(|t| t.name() == "Cdim").unwrap();
        let sus2_c = scan.iter().position(|t| t.name() == "Csus2").unwrap();
        assert_eq!(sus2_c, dim_c + 1);
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = ChordDatabase::new();
        let b = ChordDatabase::new();
        assert_eq!(a.templates(), b.templates());
        assert_eq!(a.by_priority(), b.by_priority());
    }

    #[test]
    fn test_find() {
        let db = ChordDatabase::new();
        let t = db.find(9, ChordQuality::Minor7).unwrap();
        assert_eq!(t.name(), "Am7");
        assert_eq!(db.find_by_name("Am7"), Some(t));
        assert!(db.find_by_name("H").is_none());
    }
}
