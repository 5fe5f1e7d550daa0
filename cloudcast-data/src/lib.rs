//! Synthetic data for the Cloudcast prototype.
//!
//! Everything here stands in for real forecast pipelines: a seeded
//! pseudo-random solar series regenerated on every map click, and the
//! trigonometric cloud drift used by the animated map variant. The
//! deterministic parts are pure functions of the location identifier; all
//! randomness comes through an explicitly injected generator so tests can
//! pin it.

pub mod drift;
pub mod seed;
pub mod series;
