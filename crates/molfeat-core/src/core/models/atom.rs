use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The integer strength of a covalent bond as recorded in a structure file.
///
/// Only single, double, and triple bonds occur in the supported block format;
/// there is no aromatic bond type at this level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondOrder {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl BondOrder {
    /// Returns the numeric bond order (1, 2, or 3).
    pub fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Single),
            "2" => Ok(Self::Double),
            "3" => Ok(Self::Triple),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The bond feature attached to an atom entry.
///
/// The typed-atom representation records only the maximum incident bond order;
/// the adjacency (coarse matrix) representation records the composite
/// `max|total` descriptor, where `total` is the sum of all incident bond
/// orders. The composite form renders as e.g. `"2|4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondDescriptor {
    /// Maximum incident bond order.
    Max(BondOrder),
    /// Maximum incident bond order paired with the total incident bond order.
    Composite { max: BondOrder, total: u32 },
}

impl fmt::Display for BondDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max(order) => write!(f, "{}", order),
            Self::Composite { max, total } => write!(f, "{}|{}", max, total),
        }
    }
}

/// One atom entry of a parsed molecule.
///
/// Atom indices are 1-based and contiguous within their molecule, in file
/// order. The coordinate is only populated when the typed-atom builder is
/// active; other builders leave it absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 1-based index of the atom within its molecule.
    pub index: usize,
    /// Element symbol as read from the structure file (e.g. "C", "Cl").
    pub element: String,
    /// Bond feature for this atom, shaped by the active builders.
    pub bond: BondDescriptor,
    /// 3-D coordinate in Angstroms, when the typed-atom builder is active.
    pub position: Option<Point3<f64>>,
}

impl Atom {
    /// Creates a new atom entry without a coordinate.
    pub fn new(index: usize, element: &str, bond: BondDescriptor) -> Self {
        Self {
            index,
            element: element.to_string(),
            bond,
            position: None,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.index, self.element, self.bond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_order_from_str_parses_valid_digits() {
        assert_eq!("1".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("3".parse::<BondOrder>().unwrap(), BondOrder::Triple);
        assert_eq!(" 2 ".parse::<BondOrder>().unwrap(), BondOrder::Double);
    }

    #[test]
    fn bond_order_from_str_rejects_invalid_strings() {
        assert!("".parse::<BondOrder>().is_err());
        assert!("0".parse::<BondOrder>().is_err());
        assert!("4".parse::<BondOrder>().is_err());
        assert!("ar".parse::<BondOrder>().is_err());
    }

    #[test]
    fn bond_order_ordering_follows_numeric_value() {
        assert!(BondOrder::Single < BondOrder::Double);
        assert!(BondOrder::Double < BondOrder::Triple);
        assert_eq!(BondOrder::Triple.value(), 3);
    }

    #[test]
    fn bond_descriptor_display_matches_file_conventions() {
        assert_eq!(BondDescriptor::Max(BondOrder::Double).to_string(), "2");
        assert_eq!(
            BondDescriptor::Composite {
                max: BondOrder::Double,
                total: 4
            }
            .to_string(),
            "2|4"
        );
    }

    #[test]
    fn new_atom_has_no_coordinate() {
        let atom = Atom::new(1, "C", BondDescriptor::Max(BondOrder::Single));
        assert_eq!(atom.index, 1);
        assert_eq!(atom.element, "C");
        assert_eq!(atom.position, None);
        assert_eq!(atom.to_string(), "1 C 1");
    }
}
