use super::atom::{Atom, BondOrder};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;

/// Classification key for the element histogram of the typed-atom builder.
///
/// In type-sensitive mode the key pairs the element symbol with the atom's
/// maximum incident bond order; otherwise the bond order is absent and atoms
/// are counted by element alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementClass {
    pub symbol: String,
    pub max_order: Option<BondOrder>,
}

/// Histogram of atom classifications accumulated by the typed-atom builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementHistogram {
    counts: HashMap<ElementClass, usize>,
}

impl ElementHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one atom under the given classification.
    pub fn record(&mut self, symbol: &str, max_order: Option<BondOrder>) {
        let class = ElementClass {
            symbol: symbol.to_string(),
            max_order,
        };
        *self.counts.entry(class).or_insert(0) += 1;
    }

    /// Returns the count recorded for a classification, or zero.
    pub fn count(&self, symbol: &str, max_order: Option<BondOrder>) -> usize {
        let class = ElementClass {
            symbol: symbol.to_string(),
            max_order,
        };
        self.counts.get(&class).copied().unwrap_or(0)
    }

    /// Number of distinct classifications observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over all (classification, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementClass, usize)> {
        self.counts.iter().map(|(class, count)| (class, *count))
    }
}

/// Atom-level matrices produced by the adjacency (coarse) builder.
///
/// Both matrices are N x N for a declared atom count of N. The bond matrix is
/// the symmetric bond-order adjacency with a zero diagonal; the bond-count
/// matrix carries the same off-diagonal entries with the diagonal set to each
/// atom's total incident bond order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoarseFeatures {
    pub bond_matrix: DMatrix<f64>,
    pub count_bond_matrix: DMatrix<f64>,
}

/// Orbital-level matrices and property columns produced by the orbital
/// expansion builder.
///
/// All dimensions are M x M (or length M), where M is the sum of the valence
/// orbital counts of the molecule's atoms. The bond-count matrix mirrors the
/// bond matrix off the diagonal, with the diagonal replaced by each orbital
/// row's connection count.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalFeatures {
    pub bond_matrix: DMatrix<f64>,
    pub count_bond_matrix: DMatrix<f64>,
    pub electronegativity: DVector<f64>,
    pub hardness: DVector<f64>,
}

impl OrbitalFeatures {
    /// The expanded dimension M, i.e. the total number of orbital nodes.
    pub fn orbital_count(&self) -> usize {
        self.bond_matrix.nrows()
    }
}

/// One parsed molecule together with the feature payloads of the builders
/// that were active during the load.
///
/// `count_atoms` is the declared atom count of the block, except when the
/// orbital expansion builder is active: the expanded orbital count M is the
/// dimensionality of the representation actually produced, and overwrites the
/// declared count.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub count_atoms: usize,
    pub atoms: Vec<Atom>,
    pub element_counts: Option<ElementHistogram>,
    pub coarse: Option<CoarseFeatures>,
    pub orbital: Option<OrbitalFeatures>,
}

impl Molecule {
    /// Number of atom entries (bonded atoms) recorded for this molecule.
    pub fn atom_entries(&self) -> usize {
        self.atoms.len()
    }
}
