//! Provides input functionality for molecular structure files.
//!
//! This module contains the scanner for the fixed-column, block-delimited
//! structure-file format consumed by the feature builders. Parsing is strict:
//! any malformed numeric field or truncated block fails the whole load with a
//! line-numbered error, and no partial molecule is ever produced.

pub mod sdf;
