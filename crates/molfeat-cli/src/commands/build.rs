use crate::cli::BuildArgs;
use crate::config;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use molfeat::core::models::molecule::Molecule;
use molfeat::core::params::EemParameterSet;
use molfeat::workflows::load::{self, ReferenceTables};
use std::time::Duration;
use tracing::info;

pub fn run(args: BuildArgs) -> Result<()> {
    let resolved = config::resolve_build(&args)?;
    info!(
        "Building features for '{}' (typed: {}, adjacency: {}, orbital: {})",
        args.input.display(),
        resolved.features.typed_atoms,
        resolved.features.adjacency,
        resolved.features.orbital,
    );

    if let Some(path) = &resolved.parameters {
        let params = EemParameterSet::load(path)?;
        info!(
            "Loaded parameters for {} element/bond entries from '{}' (kappa = {}, type-sensitive: {})",
            params.len(),
            path.display(),
            params.kappa,
            params.type_sensitive,
        );
    }

    let tables = ReferenceTables::new(resolved.elements, resolved.states);

    let spinner = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    spinner.set_message(format!("Loading molecules from {}", args.input.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let set = load::run(&args.input, &resolved.features, &tables);
    spinner.finish_and_clear();
    let set = set?;

    println!(
        "Loaded {} molecule(s) from {}",
        set.len(),
        args.input.display()
    );
    println!("{:<32} {:>8} {:>8} {:>10} {:>10}", "name", "atoms", "entries", "classes", "orbitals");
    for molecule in set.molecules() {
        println!("{}", summary_row(molecule));
    }
    Ok(())
}

fn summary_row(molecule: &Molecule) -> String {
    let classes = molecule
        .element_counts
        .as_ref()
        .map_or("-".to_string(), |histogram| histogram.len().to_string());
    let orbitals = molecule
        .orbital
        .as_ref()
        .map_or("-".to_string(), |features| {
            features.orbital_count().to_string()
        });
    format!(
        "{:<32} {:>8} {:>8} {:>10} {:>10}",
        molecule.name,
        molecule.count_atoms,
        molecule.atom_entries(),
        classes,
        orbitals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use molfeat::core::models::molecule::ElementHistogram;

    #[test]
    fn summary_row_renders_missing_payloads_as_dashes() {
        let molecule = Molecule {
            name: "water".to_string(),
            count_atoms: 3,
            atoms: Vec::new(),
            element_counts: None,
            coarse: None,
            orbital: None,
        };
        let row = summary_row(&molecule);
        assert!(row.starts_with("water"));
        assert!(row.contains('-'));
    }

    #[test]
    fn summary_row_includes_histogram_class_count() {
        let mut histogram = ElementHistogram::new();
        histogram.record("O", None);
        histogram.record("H", None);
        let molecule = Molecule {
            name: "water".to_string(),
            count_atoms: 3,
            atoms: Vec::new(),
            element_counts: Some(histogram),
            coarse: None,
            orbital: None,
        };
        let row = summary_row(&molecule);
        assert!(row.contains('2'));
    }
}
