use super::bonds::BondTotals;
use super::hybridization::valence_state_labels;
use crate::core::io::sdf::MoleculeBlock;
use crate::core::models::molecule::OrbitalFeatures;
use crate::core::reference::ReferenceError;
use crate::core::reference::elements::ElementTable;
use crate::core::reference::states::{OrbitalProperties, ValenceStateTable};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OrbitalError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("Atom {atom} carries more incident bond order than bonding orbitals")]
    BondingOrbitalsExhausted { atom: usize },
}

/// Orbital slot layout of one molecule: each atom occupies a contiguous
/// block of rows sized by its valence-orbital count, starting at the prefix
/// sum of the counts of the atoms before it.
struct OrbitalLayout {
    offsets: Vec<usize>,
    counts: Vec<usize>,
    total: usize,
}

impl OrbitalLayout {
    fn new(block: &MoleculeBlock, elements: &ElementTable) -> Result<Self, ReferenceError> {
        let mut offsets = Vec::with_capacity(block.atoms.len());
        let mut counts = Vec::with_capacity(block.atoms.len());
        let mut total = 0;
        for line in &block.atoms {
            let record = elements.lookup(&line.element)?;
            offsets.push(total);
            let count = record.valence_orbital_count();
            counts.push(count);
            total += count;
        }
        Ok(Self {
            offsets,
            counts,
            total,
        })
    }
}

/// Builds the orbital-expanded representation of one block.
///
/// Endpoint resolution is two-pass: the aggregator's max-order map is already
/// known, and bonds are then scanned in file order; an endpoint resolves the
/// first time it sits on a bond of its maximal order, and never again within
/// the molecule. Resolved (element, state) property pulls go through `cache`,
/// which outlives the block.
pub fn build(
    block: &MoleculeBlock,
    totals: &BondTotals,
    elements: &ElementTable,
    states: &ValenceStateTable,
    cache: &mut HashMap<(String, String), OrbitalProperties>,
) -> Result<OrbitalFeatures, OrbitalError> {
    let layout = OrbitalLayout::new(block, elements)?;
    let n = block.atoms.len();
    let m = layout.total;

    let mut bond_matrix = DMatrix::zeros(m, m);
    let mut electronegativity = DVector::zeros(m);
    let mut hardness = DVector::zeros(m);

    // Per-molecule mutable state, discarded with the block.
    let mut resolved = vec![false; n];
    let mut cursor = vec![0usize; n];

    for bond in &block.bonds {
        for atom in [bond.first, bond.second] {
            let slot = atom - 1;
            if resolved[slot] || totals.max_order(atom) != Some(bond.order) {
                continue;
            }
            let element = &block.atoms[slot].element;
            let assignment = valence_state_labels(layout.counts[slot], bond.order.value());
            let key = assignment.state_key();
            let props = match cache.get(&(element.clone(), key.clone())) {
                Some(props) => *props,
                None => {
                    let props = states.lookup(element, &key)?.unwrap_or_else(|| {
                        debug!(%element, state = %key, "valence-state soft-miss, using zeros");
                        OrbitalProperties::default()
                    });
                    cache.insert((element.clone(), key), props);
                    props
                }
            };

            let mut row = layout.offsets[slot];
            for label in &assignment.labels {
                for _ in 0..label.width() {
                    electronegativity[row] = props.electronegativity;
                    hardness[row] = props.hardness;
                    row += 1;
                }
            }
            resolved[slot] = true;
        }

        for _ in 0..bond.order.value() {
            let (a, b) = (bond.first - 1, bond.second - 1);
            if cursor[a] >= layout.counts[a] {
                return Err(OrbitalError::BondingOrbitalsExhausted { atom: bond.first });
            }
            if cursor[b] >= layout.counts[b] {
                return Err(OrbitalError::BondingOrbitalsExhausted { atom: bond.second });
            }
            let i = layout.offsets[a] + cursor[a];
            let j = layout.offsets[b] + cursor[b];
            bond_matrix[(i, j)] = 1.0;
            bond_matrix[(j, i)] = 1.0;
            cursor[a] += 1;
            cursor[b] += 1;
        }
    }

    // Lone-pair closure: every remaining non-bonding orbital of an atom is
    // pairwise connected to the atom's other non-bonding orbitals.
    for atom in 0..n {
        let start = layout.offsets[atom] + cursor[atom];
        let end = layout.offsets[atom] + layout.counts[atom];
        for p in start..end {
            for q in start..end {
                if p != q {
                    bond_matrix[(p, q)] = 1.0;
                }
            }
        }
    }

    let mut count_bond_matrix = bond_matrix.clone();
    for row in 0..m {
        let degree = bond_matrix.row(row).iter().filter(|&&x| x == 1.0).count();
        count_bond_matrix[(row, row)] = degree as f64;
    }

    Ok(OrbitalFeatures {
        bond_matrix,
        count_bond_matrix,
        electronegativity,
        hardness,
    })
}
