use super::{ReferenceError, display_path};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Static per-element reference data.
///
/// The valence orbital groups are the ordered electron-group sizes the table
/// attributes to the element's bonding shell; their sum is the element's
/// valence-orbital count, which sizes the orbital expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub electronegativity: f64,
    pub valence_orbitals: Vec<u8>,
}

impl ElementRecord {
    /// Total number of valence orbitals attributed to the element.
    pub fn valence_orbital_count(&self) -> usize {
        self.valence_orbitals.iter().map(|&n| usize::from(n)).sum()
    }
}

#[derive(Debug, Deserialize)]
struct ElementRow {
    symbol: String,
    atomic_number: u32,
    electronegativity: f64,
    valence_orbitals: String,
}

/// The element reference table, parsed once from its backing CSV file on
/// first lookup and served from memory afterwards.
#[derive(Debug)]
pub struct ElementTable {
    path: PathBuf,
    cache: OnceLock<HashMap<String, ElementRecord>>,
}

impl ElementTable {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    /// Looks up an element symbol. An element entirely unknown to the table
    /// fails the whole load.
    pub fn lookup(&self, symbol: &str) -> Result<&ElementRecord, ReferenceError> {
        self.table()?
            .get(symbol)
            .ok_or_else(|| ReferenceError::UnknownElement {
                symbol: symbol.to_string(),
            })
    }

    /// Number of elements in the table. Forces the initial parse.
    pub fn len(&self) -> Result<usize, ReferenceError> {
        Ok(self.table()?.len())
    }

    fn table(&self) -> Result<&HashMap<String, ElementRecord>, ReferenceError> {
        if let Some(table) = self.cache.get() {
            return Ok(table);
        }
        let table = self.load()?;
        Ok(self.cache.get_or_init(|| table))
    }

    fn load(&self) -> Result<HashMap<String, ElementRecord>, ReferenceError> {
        let path = display_path(&self.path);
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| ReferenceError::Csv {
            path: path.clone(),
            source: e,
        })?;

        let mut table = HashMap::new();
        for result in reader.deserialize::<ElementRow>() {
            let row = result.map_err(|e| ReferenceError::Csv {
                path: path.clone(),
                source: e,
            })?;
            let record = ElementRecord {
                atomic_number: row.atomic_number,
                electronegativity: row.electronegativity,
                valence_orbitals: parse_orbital_groups(&row.valence_orbitals, &path, &row.symbol)?,
            };
            table.insert(row.symbol, record);
        }
        Ok(table)
    }
}

fn parse_orbital_groups(
    field: &str,
    path: &str,
    symbol: &str,
) -> Result<Vec<u8>, ReferenceError> {
    let groups: Result<Vec<u8>, _> = field
        .split_whitespace()
        .map(|token| token.parse::<u8>())
        .collect();
    match groups {
        Ok(groups) if !groups.is_empty() => Ok(groups),
        _ => Err(ReferenceError::InvalidRecord {
            path: path.to_string(),
            reason: format!("element '{}' has invalid valence orbital groups '{}'", symbol, field),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_table(content: &str) -> (tempfile::TempDir, ElementTable) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.csv");
        fs::write(&path, content).unwrap();
        let table = ElementTable::new(&path);
        (dir, table)
    }

    const HEADER: &str = "symbol,atomic_number,electronegativity,valence_orbitals\n";

    #[test]
    fn lookup_returns_parsed_record() {
        let (_dir, table) = write_table(&format!(
            "{}C,6,2.55,1 1 1 1\nH,1,2.20,1\n",
            HEADER
        ));

        let carbon = table.lookup("C").unwrap();
        assert_eq!(carbon.atomic_number, 6);
        assert_eq!(carbon.electronegativity, 2.55);
        assert_eq!(carbon.valence_orbitals, vec![1, 1, 1, 1]);
        assert_eq!(carbon.valence_orbital_count(), 4);

        let hydrogen = table.lookup("H").unwrap();
        assert_eq!(hydrogen.valence_orbital_count(), 1);
        assert_eq!(table.len().unwrap(), 2);
    }

    #[test]
    fn unknown_element_is_an_error() {
        let (_dir, table) = write_table(&format!("{}H,1,2.20,1\n", HEADER));
        let err = table.lookup("Xx").unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::UnknownElement { symbol } if symbol == "Xx"
        ));
    }

    #[test]
    fn missing_file_fails_on_first_use() {
        let dir = tempdir().unwrap();
        let table = ElementTable::new(dir.path().join("nope.csv"));
        assert!(matches!(
            table.lookup("C"),
            Err(ReferenceError::Csv { .. })
        ));
    }

    #[test]
    fn malformed_orbital_groups_are_rejected() {
        let (_dir, table) = write_table(&format!("{}C,6,2.55,one one\n", HEADER));
        assert!(matches!(
            table.lookup("C"),
            Err(ReferenceError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn repeated_lookups_reuse_the_parsed_table() {
        let (dir, table) = write_table(&format!("{}O,8,3.44,1 1 1 1 1 1\n", HEADER));
        assert_eq!(table.lookup("O").unwrap().valence_orbital_count(), 6);

        // Removing the backing file after the first use must not matter.
        fs::remove_file(dir.path().join("elements.csv")).unwrap();
        assert_eq!(table.lookup("O").unwrap().atomic_number, 8);
    }
}
