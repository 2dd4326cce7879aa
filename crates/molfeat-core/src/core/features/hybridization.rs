use std::fmt;

/// Hybridization archetypes, ordered from unmixed `s` up the canonical
/// sp/sp2/sp3 ladder, plus the pure unmixed `pi` label used for the orbitals
/// consumed by multiple bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HybridArchetype {
    S,
    Di,
    Tr,
    Te,
    Pi,
}

impl HybridArchetype {
    fn token(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::Di => "di",
            Self::Tr => "tr",
            Self::Te => "te",
            Self::Pi => "pi",
        }
    }
}

/// The ordered archetype scale indexed by the state-assignment rules. The
/// ladder position equals the number of hybrid orbitals the archetype mixes.
pub const ARCHETYPE_SCALE: [HybridArchetype; 4] = [
    HybridArchetype::S,
    HybridArchetype::Di,
    HybridArchetype::Tr,
    HybridArchetype::Te,
];

/// One label of a state assignment. A doubly-occupied label covers two
/// consecutive orbital slots; a single label covers one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbitalLabel {
    pub archetype: HybridArchetype,
    pub doubly_occupied: bool,
}

impl OrbitalLabel {
    pub fn single(archetype: HybridArchetype) -> Self {
        Self {
            archetype,
            doubly_occupied: false,
        }
    }

    pub fn doubled(archetype: HybridArchetype) -> Self {
        Self {
            archetype,
            doubly_occupied: true,
        }
    }

    /// Number of orbital slots this label covers.
    pub fn width(self) -> usize {
        if self.doubly_occupied { 2 } else { 1 }
    }
}

impl fmt::Display for OrbitalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.archetype.token())?;
        if self.doubly_occupied {
            write!(f, "2")?;
        }
        Ok(())
    }
}

/// The ordered label sequence assigned to one atom at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateAssignment {
    pub labels: Vec<OrbitalLabel>,
    pub lone_pairs: usize,
}

impl StateAssignment {
    /// Total number of orbital slots the sequence covers. Always equals the
    /// atom's valence-orbital count.
    pub fn slot_width(&self) -> usize {
        self.labels.iter().map(|label| label.width()).sum()
    }

    /// Canonical lookup key for the label multiset: tokens sorted
    /// lexicographically and joined with single spaces.
    pub fn state_key(&self) -> String {
        let mut tokens: Vec<String> = self.labels.iter().map(|label| label.to_string()).collect();
        tokens.sort();
        tokens.join(" ")
    }
}

fn end_indexed(filled: usize) -> HybridArchetype {
    let top = ARCHETYPE_SCALE.len() - 1;
    ARCHETYPE_SCALE[top - filled.min(top)]
}

/// Assigns the ordered hybridization-state label sequence for an atom with
/// `valence_orbitals` orbitals being resolved through a bond of order
/// `bond_order`.
///
/// The rules, as a fixed table over `(v, b)`:
///
/// - `b <= 1`, `v <= 4`: every orbital takes the single archetype at ladder
///   position `v`.
/// - `b <= 1`, `v > 4`: orbitals are grouped in fours; each group folds into
///   two doubly-occupied top-of-scale labels and one lone pair; the leftover
///   orbitals are front-filled with single top-of-scale labels.
/// - `b > 1`: `b - 1` orbitals become trailing `pi` labels and count as
///   filled. If more than two orbitals are filled and at least one and a half
///   orbital pairs remain, the remaining orbitals pair up as doubly-occupied
///   labels at the archetype indexed from the end of the ladder by the filled
///   count; leftover orbitals are front-filled with the single archetype at
///   that same position.
///
/// The slot widths of the resulting sequence always total exactly `v`.
pub fn valence_state_labels(valence_orbitals: usize, bond_order: u8) -> StateAssignment {
    let v = valence_orbitals;
    let mut labels = Vec::new();
    let mut lone_pairs = 0;

    if bond_order <= 1 {
        if v == 0 {
            return StateAssignment { labels, lone_pairs };
        }
        if v <= ARCHETYPE_SCALE.len() {
            let archetype = ARCHETYPE_SCALE[v - 1];
            labels.extend(std::iter::repeat_n(OrbitalLabel::single(archetype), v));
        } else {
            let top = HybridArchetype::Te;
            let groups = v / 4;
            lone_pairs = groups;
            let leftover = v - 4 * groups;
            labels.extend(std::iter::repeat_n(OrbitalLabel::single(top), leftover));
            labels.extend(std::iter::repeat_n(OrbitalLabel::doubled(top), 2 * groups));
        }
    } else {
        let pi = usize::from(bond_order - 1);
        let filled = pi;
        let mut remaining = v.saturating_sub(pi);
        let archetype = end_indexed(filled);

        let mut paired = 0;
        if filled > 2 && remaining >= 3 {
            paired = remaining / 2;
            remaining -= 2 * paired;
        }
        labels.extend(std::iter::repeat_n(
            OrbitalLabel::single(archetype),
            remaining,
        ));
        labels.extend(std::iter::repeat_n(
            OrbitalLabel::doubled(archetype),
            paired,
        ));
        labels.extend(std::iter::repeat_n(
            OrbitalLabel::single(HybridArchetype::Pi),
            pi.min(v),
        ));
    }

    StateAssignment { labels, lone_pairs }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(assignment: &StateAssignment) -> Vec<String> {
        assignment
            .labels
            .iter()
            .map(|label| label.to_string())
            .collect()
    }

    #[test]
    fn single_bond_small_atoms_take_the_ladder_archetype() {
        assert_eq!(tokens(&valence_state_labels(1, 1)), ["s"]);
        assert_eq!(tokens(&valence_state_labels(2, 1)), ["di", "di"]);
        assert_eq!(tokens(&valence_state_labels(3, 1)), ["tr", "tr", "tr"]);
        assert_eq!(
            tokens(&valence_state_labels(4, 1)),
            ["te", "te", "te", "te"]
        );
    }

    #[test]
    fn single_bond_large_atoms_fold_groups_of_four_into_lone_pairs() {
        // Six orbitals: one group of four plus two leftovers.
        let assignment = valence_state_labels(6, 1);
        assert_eq!(tokens(&assignment), ["te", "te", "te2", "te2"]);
        assert_eq!(assignment.lone_pairs, 1);
        assert_eq!(assignment.slot_width(), 6);

        // Seven orbitals, e.g. halogens.
        let assignment = valence_state_labels(7, 1);
        assert_eq!(tokens(&assignment), ["te", "te", "te", "te2", "te2"]);
        assert_eq!(assignment.slot_width(), 7);
    }

    #[test]
    fn double_bond_consumes_one_pi_and_front_fills_trigonal() {
        let assignment = valence_state_labels(4, 2);
        assert_eq!(tokens(&assignment), ["tr", "tr", "tr", "pi"]);
        assert_eq!(assignment.lone_pairs, 0);
        assert_eq!(assignment.slot_width(), 4);

        let assignment = valence_state_labels(6, 2);
        assert_eq!(tokens(&assignment), ["tr", "tr", "tr", "tr", "tr", "pi"]);
    }

    #[test]
    fn triple_bond_consumes_two_pi_and_front_fills_digonal() {
        let assignment = valence_state_labels(4, 3);
        assert_eq!(tokens(&assignment), ["di", "di", "pi", "pi"]);

        let assignment = valence_state_labels(5, 3);
        assert_eq!(tokens(&assignment), ["di", "di", "di", "pi", "pi"]);
        assert_eq!(assignment.slot_width(), 5);
    }

    #[test]
    fn pair_grouping_branch_activates_past_two_filled_orbitals() {
        // Three filled orbitals with three remaining: one doubly-occupied
        // pair at the bottom of the ladder plus one front-filled single.
        let assignment = valence_state_labels(6, 4);
        assert_eq!(tokens(&assignment), ["s", "s2", "pi", "pi", "pi"]);
        assert_eq!(assignment.slot_width(), 6);

        // Two remaining orbitals keep the branch inactive.
        let assignment = valence_state_labels(5, 4);
        assert_eq!(tokens(&assignment), ["s", "s", "pi", "pi", "pi"]);
    }

    #[test]
    fn pi_labels_never_exceed_the_orbital_count() {
        let assignment = valence_state_labels(1, 3);
        assert_eq!(tokens(&assignment), ["pi"]);
        assert_eq!(assignment.slot_width(), 1);
    }

    #[test]
    fn slot_width_always_equals_the_valence_orbital_count() {
        for v in 1..=8 {
            for b in 1..=3 {
                let assignment = valence_state_labels(v, b);
                assert_eq!(assignment.slot_width(), v, "v={} b={}", v, b);
            }
        }
    }

    #[test]
    fn state_key_is_a_sorted_multiset_rendering() {
        let assignment = valence_state_labels(6, 1);
        assert_eq!(assignment.state_key(), "te te te2 te2");

        let assignment = valence_state_labels(4, 2);
        assert_eq!(assignment.state_key(), "pi tr tr tr");
    }

    #[test]
    fn zero_orbitals_yield_an_empty_assignment() {
        let assignment = valence_state_labels(0, 1);
        assert!(assignment.labels.is_empty());
        assert_eq!(assignment.slot_width(), 0);
    }
}
