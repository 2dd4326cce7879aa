use crate::core::models::atom::BondOrder;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use thiserror::Error;

/// The (A, B) coefficient pair of one element/bond-type entry in an
/// electronegativity-equalization parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EemParams {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("Malformed parameter file '{path}' on line {line}: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },
}

/// One loaded parameter set: the global kappa constant plus per-element,
/// optionally bond-type-sensitive, (A, B) entries.
///
/// The backing file is a quasi-XML constants file scanned line by line; a
/// `Type` attribute on any `<Bond>` entry marks the whole set as
/// type-sensitive, and entries without one default to single bonds.
#[derive(Debug, Clone, PartialEq)]
pub struct EemParameterSet {
    pub kappa: f64,
    pub type_sensitive: bool,
    entries: HashMap<(String, BondOrder), EemParams>,
}

impl EemParameterSet {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParamError> {
        let path = path.as_ref();
        let display = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ParamError::Io {
            path: display.clone(),
            source: e,
        })?;

        let malformed = |line: usize, reason: String| ParamError::Malformed {
            path: display.clone(),
            line,
            reason,
        };

        let mut kappa = None;
        let mut type_sensitive = false;
        let mut current_element: Option<String> = None;
        let mut entries = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            if line.contains("Kappa=") {
                let value = attribute(line, "Kappa")
                    .ok_or_else(|| malformed(line_no, "unquoted Kappa value".into()))?;
                kappa = Some(value.parse::<f64>().map_err(|_| {
                    malformed(line_no, format!("invalid Kappa value '{}'", value))
                })?);
            }
            if line.contains("<Element") {
                let name = attribute(line, "Name")
                    .ok_or_else(|| malformed(line_no, "element entry without Name".into()))?;
                current_element = Some(name.to_string());
            }
            if line.contains("<Bond") {
                let element = current_element
                    .clone()
                    .ok_or_else(|| malformed(line_no, "bond entry before any element".into()))?;
                let order = match attribute(line, "Type") {
                    Some(value) => {
                        type_sensitive = true;
                        value.parse::<BondOrder>().map_err(|_| {
                            malformed(line_no, format!("invalid bond type '{}'", value))
                        })?
                    }
                    None => BondOrder::Single,
                };
                let a = parse_coefficient(line, "A", line_no, &malformed)?;
                let b = parse_coefficient(line, "B", line_no, &malformed)?;
                entries.insert((element, order), EemParams { a, b });
            }
        }

        let kappa = kappa.ok_or_else(|| {
            malformed(content.lines().count(), "missing Kappa constant".into())
        })?;
        Ok(Self {
            kappa,
            type_sensitive,
            entries,
        })
    }

    /// Returns the (A, B) pair for an element and bond order, if present.
    pub fn get(&self, element: &str, order: BondOrder) -> Option<&EemParams> {
        self.entries.get(&(element.to_string(), order))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_coefficient(
    line: &str,
    name: &str,
    line_no: usize,
    malformed: &impl Fn(usize, String) -> ParamError,
) -> Result<f64, ParamError> {
    let value = attribute(line, name)
        .ok_or_else(|| malformed(line_no, format!("bond entry without {} coefficient", name)))?;
    value
        .parse::<f64>()
        .map_err(|_| malformed(line_no, format!("invalid {} coefficient '{}'", name, value)))
}

/// Extracts the quoted value of `name="..."` from a raw line, if present.
fn attribute<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{}=\"", name);
    let start = line.find(&marker)? + marker.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = concat!(
        "<Parameters Kappa=\"0.44\">\n",
        "  <Element Name=\"H\">\n",
        "    <Bond Type=\"1\" A=\"2.396\" B=\"0.959\"/>\n",
        "  </Element>\n",
        "  <Element Name=\"C\">\n",
        "    <Bond Type=\"1\" A=\"2.459\" B=\"0.611\"/>\n",
        "    <Bond Type=\"2\" A=\"2.464\" B=\"0.565\"/>\n",
        "  </Element>\n",
        "</Parameters>\n",
    );

    fn write_params(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parameters.xml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_kappa_and_typed_entries() {
        let (_dir, path) = write_params(SAMPLE);
        let params = EemParameterSet::load(&path).unwrap();

        assert_eq!(params.kappa, 0.44);
        assert!(params.type_sensitive);
        assert_eq!(params.len(), 3);

        let carbon_double = params.get("C", BondOrder::Double).unwrap();
        assert_eq!(carbon_double.a, 2.464);
        assert_eq!(carbon_double.b, 0.565);
        assert!(params.get("C", BondOrder::Triple).is_none());
    }

    #[test]
    fn entries_without_bond_type_default_to_single() {
        let (_dir, path) = write_params(concat!(
            "<Parameters Kappa=\"0.20\">\n",
            "  <Element Name=\"O\">\n",
            "    <Bond A=\"3.001\" B=\"1.100\"/>\n",
            "  </Element>\n",
            "</Parameters>\n",
        ));
        let params = EemParameterSet::load(&path).unwrap();
        assert!(!params.type_sensitive);
        assert!(params.get("O", BondOrder::Single).is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = EemParameterSet::load(dir.path().join("nope.xml"));
        assert!(matches!(result, Err(ParamError::Io { .. })));
    }

    #[test]
    fn missing_kappa_is_malformed() {
        let (_dir, path) = write_params("<Parameters>\n</Parameters>\n");
        assert!(matches!(
            EemParameterSet::load(&path),
            Err(ParamError::Malformed { .. })
        ));
    }

    #[test]
    fn bond_before_element_is_malformed() {
        let (_dir, path) = write_params(concat!(
            "<Parameters Kappa=\"0.44\">\n",
            "  <Bond Type=\"1\" A=\"2.396\" B=\"0.959\"/>\n",
            "</Parameters>\n",
        ));
        let err = EemParameterSet::load(&path).unwrap_err();
        assert!(matches!(err, ParamError::Malformed { line: 2, .. }));
    }

    #[test]
    fn invalid_coefficient_is_malformed() {
        let (_dir, path) = write_params(concat!(
            "<Parameters Kappa=\"0.44\">\n",
            "  <Element Name=\"H\">\n",
            "    <Bond Type=\"1\" A=\"abc\" B=\"0.959\"/>\n",
            "  </Element>\n",
            "</Parameters>\n",
        ));
        let err = EemParameterSet::load(&path).unwrap_err();
        assert!(matches!(err, ParamError::Malformed { line: 3, .. }));
    }
}
