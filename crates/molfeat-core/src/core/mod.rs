//! # Core Module
//!
//! This module provides the fundamental building blocks for molecular feature
//! extraction in molfeat, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures, file parsing, and feature
//! construction algorithms required to turn a structure file into the numeric
//! representations used by partial-charge estimation methods. It provides a
//! complete framework for scanning molecule blocks, aggregating bond records,
//! and building atom-level and orbital-level feature matrices.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the pipeline:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms,
//!   molecules, element histograms, and molecule sets
//! - **File I/O** ([`io`]) - The fixed-column structure-file scanner
//! - **Feature Builders** ([`features`]) - Bond aggregation, matrix builders,
//!   and the hybridization-state assignment rule table
//! - **Reference Data** ([`reference`]) - Element and valence-state table
//!   lookups backed by comma-delimited reference files
//! - **Estimator Parameters** ([`params`]) - The electronegativity-equalization
//!   parameter file consumed by downstream charge estimators
//!
//! ## Key Capabilities
//!
//! - **One-pass structure-file scanning** with fail-fast, line-numbered errors
//! - **Per-atom bond-order aggregation** with file-faithful atom ordering
//! - **Three combinable feature representations** selected by configuration
//! - **Orbital expansion** with heuristic hybridization-state labeling and
//!   per-orbital property columns
//! - **Parse-once reference tables** with defined soft-miss behavior

pub mod features;
pub mod io;
pub mod models;
pub mod params;
pub mod reference;
