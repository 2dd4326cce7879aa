//! Data models for molecules and their feature representations.
//!
//! This module contains the immutable value types produced by one load pass:
//! atoms with their bond descriptors, per-molecule feature payloads (element
//! histograms, coarse matrices, orbital-expanded matrices), and the molecule
//! set that aggregates everything together with its reference-data caches.

pub mod atom;
pub mod molecule;
pub mod set;
