//! Feature builders that turn one molecule block into its numeric
//! representations.
//!
//! The builders are combinable and all consume the per-atom bond totals
//! computed by [`bonds`]: the typed-atom builder ([`typed`]) classifies atoms
//! and accumulates an element histogram, the adjacency builder
//! ([`adjacency`]) produces the coarse atom-level matrices, and the orbital
//! expansion builder ([`orbital`]) produces the orbital-level matrices and
//! property columns using the hybridization-state rule table
//! ([`hybridization`]).

pub mod adjacency;
pub mod bonds;
pub mod hybridization;
pub mod orbital;
pub mod typed;

use crate::core::io::sdf::{MoleculeBlock, SdfError};
use crate::core::models::atom::{Atom, BondDescriptor};
use bonds::BondTotals;

/// Builds the molecule's atom entries from its bond totals, in ascending
/// atom-index order.
///
/// One entry is produced per bonded atom; atoms without bonds never appear.
/// The composite `max|total` descriptor is used when the adjacency builder is
/// active, and coordinates are parsed only when the typed-atom builder is.
pub fn atom_entries(
    block: &MoleculeBlock,
    totals: &BondTotals,
    composite: bool,
    with_coordinates: bool,
) -> Result<Vec<Atom>, SdfError> {
    let mut entries = Vec::with_capacity(totals.len());
    for (index, max, total) in totals.bonded_atoms() {
        let line = &block.atoms[index - 1];
        let bond = if composite {
            BondDescriptor::Composite { max, total }
        } else {
            BondDescriptor::Max(max)
        };
        let position = if with_coordinates {
            Some(line.position()?)
        } else {
            None
        };
        entries.push(Atom {
            index,
            element: line.element.clone(),
            bond,
            position,
        });
    }
    Ok(entries)
}
