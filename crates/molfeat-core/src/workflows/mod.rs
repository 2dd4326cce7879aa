//! # Workflows Module
//!
//! This module provides the high-level entry points that tie the core scanner,
//! the feature builders, and the reference lookups together into complete load
//! pipelines.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of molfeat. The load workflow
//! consumes one structure file in a single sequential pass, routes every
//! molecule block through the feature builders selected by the configuration,
//! and returns the assembled [`MoleculeSet`](crate::core::models::set::MoleculeSet)
//! together with the reference-data caches populated along the way.
//!
//! ## Key Capabilities
//!
//! - **End-to-end loading** from a structure file to a molecule set
//! - **Builder selection** through a single [`config::FeatureConfig`] value
//! - **Fail-fast error propagation** with no partially loaded molecules

pub mod config;
pub mod load;
