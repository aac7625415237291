#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
    /// Dative bond (legacy molfile order code 9).
    Coordinate,
    /// Connectivity exists but the exact order is chemically ambiguous and
    /// intentionally unresolved, e.g. three-center two-electron bridges.
    Indeterminate,
}

impl BondOrder {
    /// Contribution to an atom's explicit valence sum.
    ///
    /// `None` for [`BondOrder::Indeterminate`]: an indeterminate bond
    /// forbids exact valence arithmetic on its endpoints.
    pub fn valence_contribution(self) -> Option<u8> {
        match self {
            BondOrder::Single | BondOrder::Aromatic => Some(1),
            BondOrder::Double => Some(2),
            BondOrder::Triple => Some(3),
            BondOrder::Coordinate => Some(0),
            BondOrder::Indeterminate => None,
        }
    }

    /// Order compatibility for structural comparison.
    ///
    /// An indeterminate order matches any concrete order on either side.
    pub fn matches(self, other: BondOrder) -> bool {
        self == BondOrder::Indeterminate || other == BondOrder::Indeterminate || self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self { order }
    }
}

/// Wedge direction from a molfile bond record's stereo column.
///
/// Kept as a decoder side channel; stereo perception is outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondStereo {
    Up,
    Down,
}
