use crate::core::models::atom::BondOrder;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

/// Token terminating the trailer of every molecule block.
const BLOCK_SENTINEL: &str = "$$$$";

#[derive(Debug, Error)]
pub enum SdfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: SdfParseErrorKind },
    #[error("Unexpected end of file after line {line}: expected {expected}")]
    Truncated { line: usize, expected: &'static str },
}

#[derive(Debug, Error)]
pub enum SdfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Element symbol field in columns {columns} is empty")]
    MissingElement { columns: &'static str },
    #[error("Invalid bond order (value: '{value}')")]
    InvalidBondOrder { value: String },
    #[error("Bond atom index {index} outside 1..={atom_count}")]
    BondAtomOutOfRange { index: usize, atom_count: usize },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_int(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
    line_no: usize,
) -> Result<usize, SdfError> {
    let field = slice_and_trim(line, start, end);
    field.parse().map_err(|_| SdfError::Parse {
        line: line_no,
        kind: SdfParseErrorKind::InvalidInt {
            columns,
            value: field.into(),
        },
    })
}

fn parse_float(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
    line_no: usize,
) -> Result<f64, SdfError> {
    let field = slice_and_trim(line, start, end);
    field.parse().map_err(|_| SdfError::Parse {
        line: line_no,
        kind: SdfParseErrorKind::InvalidFloat {
            columns,
            value: field.into(),
        },
    })
}

/// One atom line of a block, with the element symbol parsed eagerly and the
/// coordinate fields left raw until a builder asks for them.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomLine {
    pub element: String,
    raw: String,
    line: usize,
}

impl AtomLine {
    /// Parses the three fixed-column coordinate fields of this atom line.
    pub fn position(&self) -> Result<Point3<f64>, SdfError> {
        let x = parse_float(&self.raw, 2, 10, "3-10", self.line)?;
        let y = parse_float(&self.raw, 12, 20, "13-20", self.line)?;
        let z = parse_float(&self.raw, 22, 30, "23-30", self.line)?;
        Ok(Point3::new(x, y, z))
    }
}

/// One bond record of a block. Atom indices are 1-based and validated to lie
/// within the block's declared atom range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRecord {
    pub first: usize,
    pub second: usize,
    pub order: BondOrder,
}

/// One raw molecule block as delimited by the `$$$$` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeBlock {
    pub name: String,
    pub declared_atoms: usize,
    pub declared_bonds: usize,
    pub atoms: Vec<AtomLine>,
    pub bonds: Vec<BondRecord>,
}

/// Lazily scans a structure file into a finite sequence of molecule blocks.
///
/// The scanner yields `Err` at most once: a malformed block poisons the rest
/// of the input and iteration stops, so no partial molecule escapes.
pub struct SdfScanner<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
    finished: bool,
}

impl SdfScanner<BufReader<File>> {
    /// Opens a structure file for scanning.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SdfError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SdfScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            finished: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, SdfError> {
        match self.lines.next() {
            None => Ok(None),
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line?))
            }
        }
    }

    fn require_line(&mut self, expected: &'static str) -> Result<String, SdfError> {
        self.next_line()?.ok_or(SdfError::Truncated {
            line: self.line_no,
            expected,
        })
    }

    fn read_block(&mut self) -> Result<Option<MoleculeBlock>, SdfError> {
        let name = match self.next_line()? {
            None => return Ok(None),
            Some(line) if line.is_empty() => return Ok(None),
            Some(line) => line.trim().to_string(),
        };

        for _ in 0..2 {
            self.require_line("comment line")?;
        }

        let counts = self.require_line("counts line")?;
        let declared_atoms = parse_int(&counts, 0, 3, "1-3", self.line_no)?;
        let declared_bonds = parse_int(&counts, 3, 6, "4-6", self.line_no)?;

        let mut atoms = Vec::with_capacity(declared_atoms);
        for _ in 0..declared_atoms {
            let raw = self.require_line("atom line")?;
            let element = slice_and_trim(&raw, 31, 33);
            if element.is_empty() {
                return Err(SdfError::Parse {
                    line: self.line_no,
                    kind: SdfParseErrorKind::MissingElement { columns: "32-33" },
                });
            }
            atoms.push(AtomLine {
                element: element.to_string(),
                raw,
                line: self.line_no,
            });
        }

        let mut bonds = Vec::with_capacity(declared_bonds);
        for _ in 0..declared_bonds {
            let raw = self.require_line("bond line")?;
            let first = parse_int(&raw, 1, 3, "2-3", self.line_no)?;
            let second = parse_int(&raw, 3, 6, "4-6", self.line_no)?;
            for index in [first, second] {
                if index < 1 || index > declared_atoms {
                    return Err(SdfError::Parse {
                        line: self.line_no,
                        kind: SdfParseErrorKind::BondAtomOutOfRange {
                            index,
                            atom_count: declared_atoms,
                        },
                    });
                }
            }
            let order_field = slice_and_trim(&raw, 8, 9);
            let order = order_field
                .parse::<BondOrder>()
                .map_err(|_| SdfError::Parse {
                    line: self.line_no,
                    kind: SdfParseErrorKind::InvalidBondOrder {
                        value: order_field.into(),
                    },
                })?;
            bonds.push(BondRecord {
                first,
                second,
                order,
            });
        }

        loop {
            let trailer = self.require_line("block terminator")?;
            if trailer.contains(BLOCK_SENTINEL) {
                break;
            }
        }

        Ok(Some(MoleculeBlock {
            name,
            declared_atoms,
            declared_bonds,
            atoms,
            bonds,
        }))
    }
}

impl<R: BufRead> Iterator for SdfScanner<R> {
    type Item = Result<MoleculeBlock, SdfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_block() {
            Ok(Some(block)) => Some(Ok(block)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
