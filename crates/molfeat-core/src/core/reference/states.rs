use super::{ReferenceError, display_path};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Per-orbital properties attached to one (element, valence state) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitalProperties {
    pub electronegativity: f64,
    pub hardness: f64,
}

#[derive(Debug, Deserialize)]
struct StateRow {
    element: String,
    state: String,
    electronegativity: f64,
    hardness: f64,
}

/// Canonicalizes a state string into the lookup key form: label tokens
/// sorted lexicographically and joined with single spaces.
pub fn canonical_state_key(state: &str) -> String {
    let mut tokens: Vec<&str> = state.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// The valence-state property table, parsed once from its backing CSV file
/// on first query and served from memory afterwards.
///
/// Queries never fail on unmatched keys: an (element, state) pair absent
/// from the table is a soft-miss and resolves to `None`, which callers turn
/// into neutral zero properties.
#[derive(Debug)]
pub struct ValenceStateTable {
    path: PathBuf,
    cache: OnceLock<HashMap<(String, String), OrbitalProperties>>,
}

impl ValenceStateTable {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    /// Looks up the properties for an element in the given state multiset.
    /// `state_key` must already be in canonical form.
    pub fn lookup(
        &self,
        element: &str,
        state_key: &str,
    ) -> Result<Option<OrbitalProperties>, ReferenceError> {
        Ok(self
            .table()?
            .get(&(element.to_string(), state_key.to_string()))
            .copied())
    }

    /// Number of (element, state) entries in the table. Forces the initial
    /// parse.
    pub fn len(&self) -> Result<usize, ReferenceError> {
        Ok(self.table()?.len())
    }

    fn table(&self) -> Result<&HashMap<(String, String), OrbitalProperties>, ReferenceError> {
        if let Some(table) = self.cache.get() {
            return Ok(table);
        }
        let table = self.load()?;
        Ok(self.cache.get_or_init(|| table))
    }

    fn load(&self) -> Result<HashMap<(String, String), OrbitalProperties>, ReferenceError> {
        let path = display_path(&self.path);
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| ReferenceError::Csv {
            path: path.clone(),
            source: e,
        })?;

        let mut table = HashMap::new();
        for result in reader.deserialize::<StateRow>() {
            let row = result.map_err(|e| ReferenceError::Csv {
                path: path.clone(),
                source: e,
            })?;
            table.insert(
                (row.element, canonical_state_key(&row.state)),
                OrbitalProperties {
                    electronegativity: row.electronegativity,
                    hardness: row.hardness,
                },
            );
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_table(content: &str) -> (tempfile::TempDir, ValenceStateTable) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("valence-states.csv");
        fs::write(&path, content).unwrap();
        let table = ValenceStateTable::new(&path);
        (dir, table)
    }

    const HEADER: &str = "element,state,electronegativity,hardness\n";

    #[test]
    fn lookup_returns_row_properties() {
        let (_dir, table) = write_table(&format!("{}C,te te te te,7.98,13.27\n", HEADER));
        let props = table.lookup("C", "te te te te").unwrap().unwrap();
        assert_eq!(props.electronegativity, 7.98);
        assert_eq!(props.hardness, 13.27);
    }

    #[test]
    fn state_matching_is_order_insensitive() {
        let (_dir, table) = write_table(&format!("{}C,tr tr tr pi,8.79,13.67\n", HEADER));
        // Rows are canonicalized on load; queries use the canonical key.
        let key = canonical_state_key("tr pi tr tr");
        assert_eq!(key, "pi tr tr tr");
        let props = table.lookup("C", &key).unwrap().unwrap();
        assert_eq!(props.electronegativity, 8.79);
    }

    #[test]
    fn unmatched_pair_is_a_soft_miss() {
        let (_dir, table) = write_table(&format!("{}C,te te te te,7.98,13.27\n", HEADER));
        assert_eq!(table.lookup("C", "di di pi pi").unwrap(), None);
        assert_eq!(table.lookup("Zz", "te te te te").unwrap(), None);
    }

    #[test]
    fn missing_file_fails_on_first_use() {
        let dir = tempdir().unwrap();
        let table = ValenceStateTable::new(dir.path().join("nope.csv"));
        assert!(matches!(
            table.lookup("C", "te te te te"),
            Err(ReferenceError::Csv { .. })
        ));
    }

    #[test]
    fn canonical_key_agrees_with_assignment_keys() {
        use crate::core::features::hybridization::valence_state_labels;
        let assignment = valence_state_labels(6, 1);
        assert_eq!(
            canonical_state_key("te2 te te2 te"),
            assignment.state_key()
        );
    }

    #[test]
    fn repeated_lookups_reuse_the_parsed_table() {
        let (dir, table) = write_table(&format!("{}H,s,7.17,12.84\n", HEADER));
        assert!(table.lookup("H", "s").unwrap().is_some());
        fs::remove_file(dir.path().join("valence-states.csv")).unwrap();
        assert!(table.lookup("H", "s").unwrap().is_some());
    }
}
