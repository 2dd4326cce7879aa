//! Reference-data lookups backed by comma-delimited tables.
//!
//! Two read-only, idempotent query contracts live here. The element table
//! maps a symbol to its atomic number, valence orbital groups, and
//! electronegativity; an unknown element is fatal. The valence-state table
//! maps an (element, hybridization-state multiset) pair to electronegativity
//! and hardness; a miss is a defined soft-miss that yields neutral zero
//! values. Each backing file is parsed exactly once, on first use, into an
//! in-memory map that serves all subsequent queries.

pub mod elements;
pub mod states;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid record in '{path}': {reason}")]
    InvalidRecord { path: String, reason: String },
    #[error("Element '{symbol}' is not present in the element reference table")]
    UnknownElement { symbol: String },
}

pub(crate) fn display_path(path: &PathBuf) -> String {
    path.to_string_lossy().to_string()
}
