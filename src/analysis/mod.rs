//! Result aggregation modules
//!
//! Turns per-frame recognition into consumable output:
//! - Result types
//! - Time-stamped chord segments

pub mod result;
pub mod segments;
