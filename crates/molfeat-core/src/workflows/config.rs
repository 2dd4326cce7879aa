use serde::Deserialize;

/// Selects which feature builders run during a load, and how the typed-atom
/// histogram classifies atoms.
///
/// The builders are freely combinable. The default configuration runs the
/// typed-atom builder alone in type-sensitive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FeatureConfig {
    /// Build typed atom entries with coordinates and an element histogram.
    pub typed_atoms: bool,
    /// Build the coarse atom-level bond/bond-count matrices.
    pub adjacency: bool,
    /// Build the orbital-expanded matrices and property columns.
    pub orbital: bool,
    /// Key the element histogram by (element, max bond order) rather than by
    /// element alone.
    pub type_sensitive: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            typed_atoms: true,
            adjacency: false,
            orbital: false,
            type_sensitive: true,
        }
    }
}

impl FeatureConfig {
    /// True when at least one builder is enabled.
    pub fn any_builder(&self) -> bool {
        self.typed_atoms || self.adjacency || self.orbital
    }

    /// True when the load needs the element reference table.
    pub fn needs_reference(&self) -> bool {
        self.adjacency || self.orbital
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_typed_atoms_only() {
        let config = FeatureConfig::default();
        assert!(config.typed_atoms);
        assert!(!config.adjacency);
        assert!(!config.orbital);
        assert!(config.type_sensitive);
        assert!(config.any_builder());
        assert!(!config.needs_reference());
    }

    #[test]
    fn reference_tables_are_needed_for_matrix_builders() {
        let config = FeatureConfig {
            adjacency: true,
            ..Default::default()
        };
        assert!(config.needs_reference());

        let config = FeatureConfig {
            typed_atoms: false,
            orbital: true,
            ..Default::default()
        };
        assert!(config.needs_reference());
    }

    #[test]
    fn no_builder_combination_is_expressible() {
        let config = FeatureConfig {
            typed_atoms: false,
            adjacency: false,
            orbital: false,
            type_sensitive: true,
        };
        assert!(!config.any_builder());
        assert!(!config.needs_reference());
    }
}
