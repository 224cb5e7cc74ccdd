//! Feature modules
//!
//! - Chroma: frame type, normalization, diagnostics
//! - Chord: quality table, templates, matching and smoothing

pub mod chord;
pub mod chroma;
