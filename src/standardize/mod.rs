//! Fixed-point functional group standardization.
//!
//! Repeatedly scans the molecule in ascending atom order and applies the
//! first catalog rule that matches at each atom, mutating in place before
//! the scan continues. A pass with no applications means the molecule is at
//! a fixed point; a catalog that keeps rewriting past [`PASS_LIMIT`] passes
//! is reported as non-convergent instead of looping.

use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::hydrogen::implicit_hydrogens;
use crate::mol::Mol;
use crate::valence::abnormal_valence;

pub mod rules;

pub use rules::{Center, Fix, NeighborFix, NeighborPattern, Rule, CATALOG};

/// Upper bound on rewrite passes before giving up.
pub const PASS_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardizeError {
    /// The rule set kept rewriting for [`PASS_LIMIT`] passes without
    /// reaching a fixed point.
    NonConvergent { passes: usize },
}

impl fmt::Display for StandardizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StandardizeError::NonConvergent { passes } => {
                write!(f, "standardization did not converge after {} passes", passes)
            }
        }
    }
}

impl std::error::Error for StandardizeError {}

/// One rule application, for callers that want a transformation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub pass: usize,
    pub atom: NodeIndex,
    pub rule: &'static str,
}

/// Rewrites `mol` to its standard form under the built-in catalog.
pub fn standardize(mol: &mut Mol) -> Result<Vec<Applied>, StandardizeError> {
    standardize_with(mol, CATALOG)
}

/// As [`standardize`], with a caller-supplied rule set.
pub fn standardize_with(mol: &mut Mol, rules: &[Rule]) -> Result<Vec<Applied>, StandardizeError> {
    let mut log = Vec::new();
    for pass in 0..PASS_LIMIT {
        let mut applied = false;
        // Rewrites never add or remove atoms, so the index snapshot stays
        // valid while the pass mutates charges and orders.
        let atoms: Vec<NodeIndex> = mol.atoms().collect();
        for idx in atoms {
            for rule in rules {
                if let Some(binding) = bind(mol, idx, rule) {
                    apply(mol, idx, rule, &binding);
                    log.push(Applied {
                        pass,
                        atom: idx,
                        rule: rule.name,
                    });
                    applied = true;
                    break;
                }
            }
        }
        if !applied {
            return Ok(log);
        }
    }
    Err(StandardizeError::NonConvergent { passes: PASS_LIMIT })
}

/// Tries to bind `rule` at `center`, returning one matched neighbor (and
/// connecting bond) per pattern. Patterns bind injectively: two patterns
/// never share a neighbor.
fn bind(mol: &Mol, center: NodeIndex, rule: &Rule) -> Option<Vec<(NodeIndex, EdgeIndex)>> {
    let atom = mol.atom(center);
    let c = &rule.center;
    if !c.elements.is_empty() && !c.elements.contains(&atom.element) {
        return None;
    }
    if atom.charge != c.charge || atom.is_radical != c.is_radical {
        return None;
    }
    let degree = mol.degree(center);
    if rule.exact {
        if degree != rule.neighbors.len() {
            return None;
        }
    } else if degree < rule.neighbors.len() {
        return None;
    }
    if c.abnormal_valence && !abnormal_valence(mol, center) {
        return None;
    }

    // Candidates scan in ascending atom order so a pattern that several
    // neighbors satisfy always binds the lowest-numbered one.
    let mut candidates: Vec<(NodeIndex, EdgeIndex)> = mol.adjacency(center).collect();
    candidates.sort_by_key(|&(node, _)| node.index());
    let mut chosen = vec![usize::MAX; rule.neighbors.len()];
    let mut used = vec![false; candidates.len()];
    if assign(mol, rule.neighbors, &candidates, &mut chosen, &mut used, 0) {
        Some(chosen.iter().map(|&i| candidates[i]).collect())
    } else {
        None
    }
}

fn assign(
    mol: &Mol,
    patterns: &[NeighborPattern],
    candidates: &[(NodeIndex, EdgeIndex)],
    chosen: &mut [usize],
    used: &mut [bool],
    depth: usize,
) -> bool {
    if depth == patterns.len() {
        return true;
    }
    for (i, &(node, edge)) in candidates.iter().enumerate() {
        if used[i] || !neighbor_matches(mol, &patterns[depth], node, edge) {
            continue;
        }
        used[i] = true;
        chosen[depth] = i;
        if assign(mol, patterns, candidates, chosen, used, depth + 1) {
            return true;
        }
        used[i] = false;
    }
    false
}

fn neighbor_matches(mol: &Mol, pat: &NeighborPattern, node: NodeIndex, edge: EdgeIndex) -> bool {
    let atom = mol.atom(node);
    if !pat.elements.is_empty() && !pat.elements.contains(&atom.element) {
        return false;
    }
    if let Some(charge) = pat.charge {
        if atom.charge != charge {
            return false;
        }
    }
    if let Some(radical) = pat.is_radical {
        if atom.is_radical != radical {
            return false;
        }
    }
    let order = mol.bond(edge).order;
    if !pat.orders.is_empty() && !pat.orders.contains(&order) {
        return false;
    }
    let degree = mol.degree(node);
    if let Some(min) = pat.min_degree {
        if degree < min as usize {
            return false;
        }
    }
    if let Some(max) = pat.max_degree {
        if degree > max as usize {
            return false;
        }
    }
    if let Some(min) = pat.min_hydrogens {
        if implicit_hydrogens(mol, node) < min {
            return false;
        }
    }
    true
}

fn apply(mol: &mut Mol, center: NodeIndex, rule: &Rule, binding: &[(NodeIndex, EdgeIndex)]) {
    if let Some(charge) = rule.fix.center_charge {
        mol.atom_mut(center).charge = charge;
    }
    if let Some(radical) = rule.fix.center_radical {
        mol.atom_mut(center).is_radical = radical;
    }
    for fix in rule.fix.neighbors {
        let (node, edge) = binding[fix.pattern];
        if let Some(charge) = fix.charge {
            mol.atom_mut(node).charge = charge;
        }
        if let Some(radical) = fix.radical {
            mol.atom_mut(node).is_radical = radical;
        }
        if let Some(order) = fix.order {
            mol.bond_mut(edge).order = order;
        }
    }
    if rule.fix.reset_hydrogens {
        mol.atom_mut(center).hydrogens = None;
        for &(node, _) in binding {
            mol.atom_mut(node).hydrogens = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};
    use crate::element::Element;
    use crate::hydrogen::saturate;

    fn atom(mol: &mut Mol, element: Element, charge: i8) -> NodeIndex {
        let mut a = Atom::new(element);
        a.charge = charge;
        mol.add_atom(a)
    }

    #[test]
    fn empty_molecule_is_a_fixed_point() {
        let mut mol = Mol::new();
        let log = standardize(&mut mol).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn tetramethylammonium_gains_its_charge() {
        let mut mol = Mol::new();
        let n = atom(&mut mol, Element::N, 0);
        for _ in 0..4 {
            let c = atom(&mut mol, Element::C, 0);
            mol.add_bond(n, c, Bond::new(BondOrder::Single)).unwrap();
        }
        saturate(&mut mol);
        let log = standardize(&mut mol).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].rule, "ammonium missing charge");
        assert_eq!(log[0].pass, 0);
        assert_eq!(mol.atom(n).charge, 1);
        assert_eq!(implicit_hydrogens(&mol, n), 0);
    }

    #[test]
    fn trimethylamine_is_left_alone() {
        let mut mol = Mol::new();
        let n = atom(&mut mol, Element::N, 0);
        for _ in 0..3 {
            let c = atom(&mut mol, Element::C, 0);
            mol.add_bond(n, c, Bond::new(BondOrder::Single)).unwrap();
        }
        saturate(&mut mol);
        let log = standardize(&mut mol).unwrap();
        assert!(log.is_empty());
        assert_eq!(mol.atom(n).charge, 0);
    }

    #[test]
    fn patterns_bind_distinct_neighbors() {
        // A two-pattern exact rule must not bind both patterns to the same
        // neighbor of a degree-2 center.
        let mut mol = Mol::new();
        let h = atom(&mut mol, Element::H, 0);
        let b = atom(&mut mol, Element::B, 0);
        let c = atom(&mut mol, Element::C, 0);
        mol.add_bond(h, b, Bond::new(BondOrder::Single)).unwrap();
        mol.add_bond(h, c, Bond::new(BondOrder::Single)).unwrap();
        assert!(bind(&mol, h, &CATALOG[0]).is_none());
    }

    #[test]
    fn flip_flop_catalog_is_non_convergent() {
        static FLIP: &[Rule] = &[
            Rule {
                name: "up",
                center: Center {
                    elements: &[Element::N],
                    charge: 0,
                    is_radical: false,
                    abnormal_valence: false,
                },
                neighbors: &[NeighborPattern {
                    orders: &[BondOrder::Single],
                    ..rules::ANY
                }],
                exact: false,
                fix: Fix {
                    center_charge: Some(1),
                    center_radical: None,
                    neighbors: &[],
                    reset_hydrogens: true,
                },
            },
            Rule {
                name: "down",
                center: Center {
                    elements: &[Element::N],
                    charge: 1,
                    is_radical: false,
                    abnormal_valence: false,
                },
                neighbors: &[NeighborPattern {
                    orders: &[BondOrder::Single],
                    ..rules::ANY
                }],
                exact: false,
                fix: Fix {
                    center_charge: Some(0),
                    center_radical: None,
                    neighbors: &[],
                    reset_hydrogens: true,
                },
            },
        ];
        let mut mol = Mol::new();
        let n = atom(&mut mol, Element::N, 0);
        let c = atom(&mut mol, Element::C, 0);
        mol.add_bond(n, c, Bond::new(BondOrder::Single)).unwrap();
        saturate(&mut mol);
        let err = standardize_with(&mut mol, FLIP).unwrap_err();
        assert_eq!(err, StandardizeError::NonConvergent { passes: PASS_LIMIT });
    }
}
