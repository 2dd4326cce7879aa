use crate::core::io::sdf::BondRecord;
use crate::core::models::atom::BondOrder;
use std::collections::BTreeMap;

/// Per-atom bond-order aggregates for one molecule block.
///
/// Both maps are keyed by 1-based atom index and iterate in ascending index
/// order, which keeps downstream atom lists file-faithful. Atoms with no
/// bonds are absent; a zero-bond atom is never synthesized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondTotals {
    max_order: BTreeMap<usize, BondOrder>,
    total_order: BTreeMap<usize, u32>,
}

impl BondTotals {
    /// Maximum incident bond order of an atom, if it has any bonds.
    pub fn max_order(&self, atom: usize) -> Option<BondOrder> {
        self.max_order.get(&atom).copied()
    }

    /// Total incident bond order of an atom, if it has any bonds.
    pub fn total_order(&self, atom: usize) -> Option<u32> {
        self.total_order.get(&atom).copied()
    }

    /// Number of bonded atoms.
    pub fn len(&self) -> usize {
        self.max_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_order.is_empty()
    }

    /// Iterates `(atom index, max order, total order)` in ascending index
    /// order.
    pub fn bonded_atoms(&self) -> impl Iterator<Item = (usize, BondOrder, u32)> + '_ {
        self.max_order
            .iter()
            .map(|(&atom, &max)| (atom, max, self.total_order[&atom]))
    }
}

/// Computes both per-atom aggregates in a single pass over the bond records.
pub fn aggregate(bonds: &[BondRecord]) -> BondTotals {
    let mut totals = BondTotals::default();
    for bond in bonds {
        for atom in [bond.first, bond.second] {
            totals
                .max_order
                .entry(atom)
                .and_modify(|order| *order = (*order).max(bond.order))
                .or_insert(bond.order);
            *totals.total_order.entry(atom).or_insert(0) += u32::from(bond.order.value());
        }
    }
    totals
}
