//! The standardization rule catalog.
//!
//! Each rule is pure data: a predicate on a central atom, predicates on one
//! or more directly bonded neighbors, and the charge/radical/bond-order
//! assignment to apply when they all bind. Rules never read atom handles,
//! only local structure, so isomorphic inputs produce isomorphic rewrites
//! regardless of numbering.
//!
//! Catalog order is the tie-break among rules that could match the same
//! atom: the first matching rule wins for that atom in a scan pass. The
//! load-bearing orderings are commented at the rules they protect.

use crate::bond::BondOrder;
use crate::element::Element;
use crate::element::Element::{B, C, H, N, O, P, S};

/// Predicate on the central atom of a match.
#[derive(Debug, Clone, Copy)]
pub struct Center {
    /// Allowed elements; empty means any.
    pub elements: &'static [Element],
    pub charge: i8,
    pub is_radical: bool,
    /// Require the atom's total valence to fall outside the allowed set for
    /// its element/charge/radical state. Atoms with an indeterminate
    /// incident bond never satisfy this.
    pub abnormal_valence: bool,
}

/// Predicate on one bonded neighbor and the connecting bond.
#[derive(Debug, Clone, Copy)]
pub struct NeighborPattern {
    /// Allowed elements; empty means any.
    pub elements: &'static [Element],
    pub charge: Option<i8>,
    pub is_radical: Option<bool>,
    /// Allowed bond orders; empty means any.
    pub orders: &'static [BondOrder],
    pub min_degree: Option<u8>,
    pub max_degree: Option<u8>,
    pub min_hydrogens: Option<u8>,
}

/// Matches any neighbor over any bond.
pub const ANY: NeighborPattern = NeighborPattern {
    elements: &[],
    charge: None,
    is_radical: None,
    orders: &[],
    min_degree: None,
    max_degree: None,
    min_hydrogens: None,
};

/// Assignment applied to one bound neighbor and its bond.
#[derive(Debug, Clone, Copy)]
pub struct NeighborFix {
    /// Index into the rule's neighbor patterns.
    pub pattern: usize,
    pub charge: Option<i8>,
    pub radical: Option<bool>,
    pub order: Option<BondOrder>,
}

const KEEP: NeighborFix = NeighborFix {
    pattern: 0,
    charge: None,
    radical: None,
    order: None,
};

/// The rewrite half of a rule.
#[derive(Debug, Clone, Copy)]
pub struct Fix {
    pub center_charge: Option<i8>,
    pub center_radical: Option<bool>,
    pub neighbors: &'static [NeighborFix],
    /// Clear the stored hydrogen count of every matched atom so it
    /// re-derives from the rewritten charges and orders. Rules that only
    /// promote bonds to indeterminate keep stored counts: an indeterminate
    /// bond forbids the valence arithmetic a re-derivation needs.
    pub reset_hydrogens: bool,
}

const NO_FIX: Fix = Fix {
    center_charge: None,
    center_radical: None,
    neighbors: &[],
    reset_hydrogens: true,
};

/// One local rewrite rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub center: Center,
    pub neighbors: &'static [NeighborPattern],
    /// Require the center's degree to equal the pattern count; otherwise
    /// extra unconstrained neighbors are permitted.
    pub exact: bool,
    pub fix: Fix,
}

const SINGLE: &[BondOrder] = &[BondOrder::Single];
const DOUBLE: &[BondOrder] = &[BondOrder::Double];
const TRIPLE: &[BondOrder] = &[BondOrder::Triple];
const AROMATIC: &[BondOrder] = &[BondOrder::Aromatic];

const fn center(elements: &'static [Element], charge: i8) -> Center {
    Center {
        elements,
        charge,
        is_radical: false,
        abnormal_valence: false,
    }
}

/// Ordered rule catalog. See module docs for the tie-break contract.
pub static CATALOG: &[Rule] = &[
    // A hydrogen bonded to two borons is a three-center two-electron
    // bridge; no single/double assignment is defensible, so both bonds are
    // promoted to indeterminate.
    Rule {
        name: "boron hydride bridge",
        center: center(&[H], 0),
        neighbors: &[
            NeighborPattern { elements: &[B], charge: Some(0), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[B], charge: Some(0), orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, order: Some(BondOrder::Indeterminate), ..KEEP },
                NeighborFix { pattern: 1, order: Some(BondOrder::Indeterminate), ..KEEP },
            ],
            reset_hydrogens: false,
            ..NO_FIX
        },
    },
    // Borane adducts: a neutral N/O/S pushed over its allowed valence by a
    // bond to boron keeps that bond, but as indeterminate. Must precede the
    // ammonium rule so amine boranes are not turned into cations.
    Rule {
        name: "boron adduct",
        center: Center {
            abnormal_valence: true,
            ..center(&[N, O, S], 0)
        },
        neighbors: &[NeighborPattern {
            elements: &[B],
            charge: Some(0),
            orders: &[BondOrder::Single, BondOrder::Double],
            ..ANY
        }],
        exact: false,
        fix: Fix {
            neighbors: &[NeighborFix { pattern: 0, order: Some(BondOrder::Indeterminate), ..KEEP }],
            reset_hydrogens: false,
            ..NO_FIX
        },
    },
    // [B-]=[N+] drawn as an ylide collapses to the neutral single-bonded
    // amine borane.
    Rule {
        name: "borane amine ylide",
        center: center(&[B], -1),
        neighbors: &[NeighborPattern {
            elements: &[N],
            charge: Some(1),
            is_radical: Some(false),
            orders: DOUBLE,
            ..ANY
        }],
        exact: false,
        fix: Fix {
            center_charge: Some(0),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(0),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    Rule {
        name: "borate salt",
        center: center(&[B], 3),
        neighbors: &[
            NeighborPattern { elements: &[O], charge: Some(-1), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(-1), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(-1), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(-1), orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(-1),
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(0), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(0), ..KEEP },
                NeighborFix { pattern: 2, charge: Some(0), ..KEEP },
                NeighborFix { pattern: 3, charge: Some(0), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    Rule {
        name: "borate anion misplaced",
        center: center(&[B], 0),
        neighbors: &[
            NeighborPattern { elements: &[O], charge: Some(-1), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(-1),
            neighbors: &[NeighborFix { pattern: 0, charge: Some(0), ..KEEP }],
            ..NO_FIX
        },
    },
    Rule {
        name: "borate missing charge",
        center: center(&[B], 0),
        neighbors: &[
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
            NeighborPattern { elements: &[O], charge: Some(0), orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(-1),
            ..NO_FIX
        },
    },
    // Tetracoordinate neutral N/P drawn without its cation charge.
    Rule {
        name: "ammonium missing charge",
        center: center(&[N, P], 0),
        neighbors: &[
            NeighborPattern { orders: SINGLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            ..NO_FIX
        },
    },
    // Aminyl oxide drawn as a diradical pair collapses to the N-oxide
    // ylide with a double bond to the second radical site.
    Rule {
        name: "aminyl oxide diradical",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(true),
                orders: SINGLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[C, N],
                charge: Some(0),
                is_radical: Some(true),
                orders: SINGLE,
                ..ANY
            },
            ANY,
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(-1), radical: Some(false), ..KEEP },
                NeighborFix { pattern: 1, radical: Some(false), order: Some(BondOrder::Double), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // Sulfoxide/sulfone drawn with radical chalcogens instead of double
    // bonds.
    Rule {
        name: "chalcogen diradical",
        center: center(&[S], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O, S],
                charge: Some(0),
                is_radical: Some(true),
                orders: SINGLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[O, S],
                charge: Some(0),
                is_radical: Some(true),
                orders: SINGLE,
                max_degree: Some(1),
                ..ANY
            },
            ANY,
            ANY,
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, radical: Some(false), order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, radical: Some(false), order: Some(BondOrder::Double), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // Sulfimide tautomer: prefer S=O over S=N. Fires once per pass, so a
    // bis-imide with two hydroxyls converges over two passes.
    Rule {
        name: "sulfimide tautomer",
        center: center(&[S], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: SINGLE,
                max_degree: Some(1),
                min_hydrogens: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
        ],
        exact: false,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, order: Some(BondOrder::Single), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // aci-nitro: C=N(=O)OH tautomerizes to the nitro form. Must precede
    // "nitro oxide anion", which also matches this shape but would leave
    // the hydroxyl in place.
    Rule {
        name: "aci-nitro",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: SINGLE,
                max_degree: Some(1),
                min_hydrogens: Some(1),
                ..ANY
            },
            NeighborPattern { elements: &[C], orders: DOUBLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[
                NeighborFix { pattern: 1, charge: Some(-1), ..KEEP },
                NeighborFix { pattern: 2, order: Some(BondOrder::Single), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // Hypervalent neutral nitrogen with two double bonds, one to a
    // terminal oxygen: the oxygen takes the anion. Covers nitro groups,
    // nitramides, azoxy chains.
    Rule {
        name: "nitro oxide anion",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { orders: DOUBLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(-1),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // As above with no oxygen available: a lightly substituted doubly
    // bonded nitrogen takes the anion instead. The degree bound keeps the
    // charge off another hypervalent center in chained azo oxides.
    Rule {
        name: "nitro aza anion",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(2),
                ..ANY
            },
            NeighborPattern { orders: DOUBLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(-1),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    Rule {
        name: "amine oxide",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { orders: SINGLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
            NeighborPattern { orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(-1),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // Nitro drawn with aromatic bonds to both oxygens.
    Rule {
        name: "aromatic nitro",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: AROMATIC,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: AROMATIC,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[
                NeighborFix { pattern: 0, order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), order: Some(BondOrder::Single), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // O=[N-]=O: the anion belongs on an oxygen of the nitrite.
    Rule {
        name: "nitrite anion shift",
        center: center(&[N], -1),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(0),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(-1),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // Charged aci form: both oxygens swap roles to reach the nitro form.
    Rule {
        name: "aci-nitro charged",
        center: center(&[N], 1),
        neighbors: &[
            NeighborPattern {
                elements: &[O],
                charge: Some(-1),
                is_radical: Some(false),
                orders: SINGLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: SINGLE,
                max_degree: Some(1),
                min_hydrogens: Some(1),
                ..ANY
            },
            NeighborPattern { orders: DOUBLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(0), order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), ..KEEP },
                NeighborFix { pattern: 2, order: Some(BondOrder::Single), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // [N-]-[N+](=O)R: the amide anion migrates onto the oxygen.
    Rule {
        name: "azo oxide shift",
        center: center(&[N], 1),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(-1),
                is_radical: Some(false),
                orders: SINGLE,
                ..ANY
            },
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
            ANY,
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(0), order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), order: Some(BondOrder::Single), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // Diazonium with a misplaced anion neighbor relaxes to the diazo/azide
    // cumulene.
    Rule {
        name: "diazonium ylide",
        center: center(&[N], 1),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: TRIPLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { charge: Some(-1), is_radical: Some(false), orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(-1), order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(0), order: Some(BondOrder::Double), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // R-[N+]#N=[N-]: the cation belongs on the central azide nitrogen.
    Rule {
        name: "azide charge shift",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(1),
                is_radical: Some(false),
                orders: TRIPLE,
                ..ANY
            },
            NeighborPattern {
                elements: &[N],
                charge: Some(-1),
                is_radical: Some(false),
                orders: DOUBLE,
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(0),
                order: Some(BondOrder::Double),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // X=N#N drawn with a neutral triple: canonical charge separation.
    Rule {
        name: "azide from triple",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: TRIPLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { orders: DOUBLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 0,
                charge: Some(-1),
                order: Some(BondOrder::Double),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // [N-]#N=X keeps its anion; only the cation placement moves.
    Rule {
        name: "azide anion triple",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(-1),
                is_radical: Some(false),
                orders: TRIPLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { orders: DOUBLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix { pattern: 0, order: Some(BondOrder::Double), ..KEEP }],
            ..NO_FIX
        },
    },
    // R-N=N=N cumulene: charge-separate onto the terminal nitrogen.
    Rule {
        name: "azide cumulene",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { elements: &[N], charge: Some(0), orders: DOUBLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix { pattern: 0, charge: Some(-1), ..KEEP }],
            ..NO_FIX
        },
    },
    // R-NH-N#N hydrazoic chain: both bonds relax to the azide cumulene.
    Rule {
        name: "hydrazoic chain",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: SINGLE,
                min_hydrogens: Some(1),
                ..ANY
            },
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: TRIPLE,
                max_degree: Some(1),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[
                NeighborFix { pattern: 0, order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), order: Some(BondOrder::Double), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // C#N=N with a terminal nitrogen: demote the triple, keep the double
    // (diazo form). With a substituted nitrogen the triple survives and the
    // double is demoted instead (nitrilimine form) — the ordering of these
    // two rules plus the degree bounds is the documented tie-break.
    Rule {
        name: "nitrile ylide terminal",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern { elements: &[C], charge: Some(0), is_radical: Some(false), orders: TRIPLE, ..ANY },
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[
                NeighborFix { pattern: 0, order: Some(BondOrder::Double), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    Rule {
        name: "nitrile ylide substituted",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern { elements: &[C], charge: Some(0), is_radical: Some(false), orders: TRIPLE, ..ANY },
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                min_degree: Some(2),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 1,
                charge: Some(-1),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // C#N=O nitrile oxide: the oxygen always takes a single-bonded anion.
    Rule {
        name: "nitrile oxide",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern { elements: &[C], charge: Some(0), is_radical: Some(false), orders: TRIPLE, ..ANY },
            NeighborPattern {
                elements: &[O],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix {
                pattern: 1,
                charge: Some(-1),
                order: Some(BondOrder::Single),
                ..KEEP
            }],
            ..NO_FIX
        },
    },
    // R(N,O,S)-N#C: the heteroatom donor takes the anion and the carbon
    // stays neutral. Must precede the plain isocyanide rule, which would
    // put the anion on a terminal carbide instead.
    Rule {
        name: "isocyanide donor",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[N, O, S],
                charge: Some(0),
                is_radical: Some(false),
                orders: SINGLE,
                min_hydrogens: Some(1),
                ..ANY
            },
            NeighborPattern { elements: &[C], charge: Some(0), is_radical: Some(false), orders: TRIPLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix { pattern: 0, charge: Some(-1), ..KEEP }],
            ..NO_FIX
        },
    },
    Rule {
        name: "isocyanide",
        center: center(&[N], 0),
        neighbors: &[
            NeighborPattern {
                elements: &[C],
                charge: Some(0),
                is_radical: Some(false),
                orders: TRIPLE,
                max_degree: Some(1),
                ..ANY
            },
            NeighborPattern { orders: SINGLE, ..ANY },
        ],
        exact: true,
        fix: Fix {
            center_charge: Some(1),
            neighbors: &[NeighborFix { pattern: 0, charge: Some(-1), ..KEEP }],
            ..NO_FIX
        },
    },
    // R(N,O,S)-[N+]#[C-]: carbide anion migrates to the donor heteroatom.
    Rule {
        name: "isocyanide donor charged",
        center: center(&[N], 1),
        neighbors: &[
            NeighborPattern { elements: &[C], charge: Some(-1), is_radical: Some(false), orders: TRIPLE, ..ANY },
            NeighborPattern {
                elements: &[N, O, S],
                charge: Some(0),
                is_radical: Some(false),
                orders: SINGLE,
                min_hydrogens: Some(1),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(0), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), ..KEEP },
            ],
            ..NO_FIX
        },
    },
    // [C-]=[N+]=N diazo with the anion on carbon: move it to the terminal
    // nitrogen.
    Rule {
        name: "diazo anion shift",
        center: center(&[N], 1),
        neighbors: &[
            NeighborPattern { elements: &[C], charge: Some(-1), is_radical: Some(false), orders: DOUBLE, ..ANY },
            NeighborPattern {
                elements: &[N],
                charge: Some(0),
                is_radical: Some(false),
                orders: DOUBLE,
                max_degree: Some(1),
                ..ANY
            },
        ],
        exact: true,
        fix: Fix {
            neighbors: &[
                NeighborFix { pattern: 0, charge: Some(0), ..KEEP },
                NeighborFix { pattern: 1, charge: Some(-1), ..KEEP },
            ],
            ..NO_FIX
        },
    },
];
