use super::bonds::BondTotals;
use crate::core::io::sdf::MoleculeBlock;
use crate::core::models::molecule::ElementHistogram;

/// Accumulates the element histogram for the typed-atom representation.
///
/// In type-sensitive mode atoms are classified by (element, max incident bond
/// order); otherwise by element alone. Only bonded atoms are counted.
pub fn histogram(
    block: &MoleculeBlock,
    totals: &BondTotals,
    type_sensitive: bool,
) -> ElementHistogram {
    let mut histogram = ElementHistogram::new();
    for (index, max, _) in totals.bonded_atoms() {
        let element = &block.atoms[index - 1].element;
        histogram.record(element, type_sensitive.then_some(max));
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::bonds;
    use crate::core::io::sdf::SdfScanner;
    use crate::core::models::atom::BondOrder;
    use std::io::Cursor;

    fn block(input: &str) -> MoleculeBlock {
        SdfScanner::new(Cursor::new(input.as_bytes().to_vec()))
            .next()
            .unwrap()
            .unwrap()
    }

    fn formaldehyde() -> MoleculeBlock {
        // C=O with two C-H bonds.
        block(concat!(
            "formaldehyde\n",
            "\n",
            "\n",
            "  4  3  0  0  0  0  0  0  0  0999 V2000\n",
            "    0.0000    0.0000    0.0000 C  0\n",
            "    1.2050    0.0000    0.0000 O  0\n",
            "   -0.6000    0.9400    0.0000 H  0\n",
            "   -0.6000   -0.9400    0.0000 H  0\n",
            "  1  2  2  0\n",
            "  1  3  1  0\n",
            "  1  4  1  0\n",
            "$$$$\n",
        ))
    }

    #[test]
    fn type_sensitive_histogram_keys_by_element_and_max_order() {
        let block = formaldehyde();
        let totals = bonds::aggregate(&block.bonds);
        let histogram = histogram(&block, &totals, true);

        assert_eq!(histogram.count("C", Some(BondOrder::Double)), 1);
        assert_eq!(histogram.count("O", Some(BondOrder::Double)), 1);
        assert_eq!(histogram.count("H", Some(BondOrder::Single)), 2);
        assert_eq!(histogram.count("C", Some(BondOrder::Single)), 0);
    }

    #[test]
    fn untyped_histogram_keys_by_element_alone() {
        let block = formaldehyde();
        let totals = bonds::aggregate(&block.bonds);
        let histogram = histogram(&block, &totals, false);

        assert_eq!(histogram.count("C", None), 1);
        assert_eq!(histogram.count("O", None), 1);
        assert_eq!(histogram.count("H", None), 2);
        assert_eq!(histogram.len(), 3);
    }
}
