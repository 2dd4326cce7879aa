use super::bonds::BondTotals;
use crate::core::io::sdf::MoleculeBlock;
use crate::core::models::molecule::CoarseFeatures;
use nalgebra::DMatrix;

/// Builds the coarse (atom-level) matrices for one block.
///
/// The bond matrix holds the symmetric bond orders with a zero diagonal. The
/// bond-count matrix carries the same off-diagonal entries with each diagonal
/// element set to the atom's total incident bond order.
pub fn build(block: &MoleculeBlock, totals: &BondTotals) -> CoarseFeatures {
    let n = block.declared_atoms;
    let mut bond_matrix = DMatrix::zeros(n, n);
    for bond in &block.bonds {
        let (i, j) = (bond.first - 1, bond.second - 1);
        let order = f64::from(bond.order.value());
        bond_matrix[(i, j)] = order;
        bond_matrix[(j, i)] = order;
    }

    let mut count_bond_matrix = bond_matrix.clone();
    for (atom, _, total) in totals.bonded_atoms() {
        count_bond_matrix[(atom - 1, atom - 1)] = f64::from(total);
    }

    CoarseFeatures {
        bond_matrix,
        count_bond_matrix,
    }
}
