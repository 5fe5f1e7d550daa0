//! Core types for the Cloudcast visualization prototype.
//!
//! This crate holds everything that is independent of the UI runtime:
//! - `event`: location events emitted when the map is clicked
//! - `bus`: same-thread publish/subscribe used to wire widgets together
//! - `click`: policy for turning a raw map click into exactly one event
//! - `geo`: cloud polygon model and its GeoJSON serialization
//! - `clouds` / `city`: the fixed demo data sets

pub mod bus;
pub mod city;
pub mod click;
pub mod clouds;
pub mod error;
pub mod event;
pub mod geo;
