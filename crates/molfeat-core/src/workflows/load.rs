use crate::core::features::orbital::OrbitalError;
use crate::core::features::{adjacency, atom_entries, bonds, orbital, typed};
use crate::core::io::sdf::{SdfError, SdfScanner};
use crate::core::models::molecule::Molecule;
use crate::core::models::set::MoleculeSet;
use crate::core::reference::ReferenceError;
use crate::core::reference::elements::ElementTable;
use crate::core::reference::states::ValenceStateTable;
use crate::workflows::config::FeatureConfig;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The two reference tables consulted during a load, shared read-only.
#[derive(Debug)]
pub struct ReferenceTables {
    pub elements: ElementTable,
    pub states: ValenceStateTable,
}

impl ReferenceTables {
    pub fn new(
        elements_path: impl Into<std::path::PathBuf>,
        states_path: impl Into<std::path::PathBuf>,
    ) -> Self {
        Self {
            elements: ElementTable::new(elements_path),
            states: ValenceStateTable::new(states_path),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Structure(#[from] SdfError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("Molecule '{molecule}': atom {atom} carries more incident bond order than bonding orbitals")]
    OrbitalOverflow { molecule: String, atom: usize },
}

/// Loads a structure file into a [`MoleculeSet`], running the feature
/// builders selected by `config` on every molecule block.
///
/// The scan is strictly sequential, one block at a time; any error aborts the
/// whole load and no partially assembled set is returned. Loading the same
/// file twice with the same configuration yields identical sets.
#[instrument(skip_all, name = "load_workflow")]
pub fn run<P: AsRef<Path>>(
    path: P,
    config: &FeatureConfig,
    tables: &ReferenceTables,
) -> Result<MoleculeSet, LoadError> {
    let path = path.as_ref();
    info!("Loading molecules from {}", path.display());

    let scanner = SdfScanner::from_path(path).map_err(LoadError::Structure)?;
    let mut set = MoleculeSet::new();

    for block in scanner {
        let block = block?;
        let totals = bonds::aggregate(&block.bonds);

        let atoms = atom_entries(&block, &totals, config.adjacency, config.typed_atoms)?;
        let element_counts = config
            .typed_atoms
            .then(|| typed::histogram(&block, &totals, config.type_sensitive));
        let coarse = config.adjacency.then(|| adjacency::build(&block, &totals));
        let orbital = if config.orbital {
            let features = orbital::build(
                &block,
                &totals,
                &tables.elements,
                &tables.states,
                set.valence_state_cache(),
            )
            .map_err(|e| match e {
                OrbitalError::Reference(source) => LoadError::Reference(source),
                OrbitalError::BondingOrbitalsExhausted { atom } => LoadError::OrbitalOverflow {
                    molecule: block.name.clone(),
                    atom,
                },
            })?;
            Some(features)
        } else {
            None
        };

        if config.needs_reference() {
            for line in &block.atoms {
                if set.electronegativity(&line.element).is_none() {
                    let record = tables.elements.lookup(&line.element)?;
                    set.cache_electronegativity(&line.element, record.electronegativity);
                }
            }
        }

        // With orbital expansion active, the expanded dimension is the
        // authoritative atom count of the representation.
        let count_atoms = orbital
            .as_ref()
            .map_or(block.declared_atoms, |features| features.orbital_count());

        debug!(
            molecule = %block.name,
            atoms = block.declared_atoms,
            bonds = block.declared_bonds,
            count_atoms,
            "molecule assembled"
        );

        set.push(Molecule {
            name: block.name,
            count_atoms,
            atoms,
            element_counts,
            coarse,
            orbital,
        });
    }

    info!(
        "Loaded {} molecule(s) from {}",
        set.len(),
        path.display()
    );
    Ok(set)
}
