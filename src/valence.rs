use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Sum of incident bond-order contributions, excluding implicit hydrogens.
///
/// `None` when any incident bond is indeterminate: exact valence checks are
/// forbidden on such atoms.
pub fn explicit_valence(mol: &Mol, idx: NodeIndex) -> Option<u8> {
    let mut sum = 0u8;
    for ei in mol.bonds_of(idx) {
        sum += mol.bond(ei).order.valence_contribution()?;
    }
    Some(sum)
}

/// Explicit valence plus the atom's implicit hydrogen count.
pub fn total_valence(mol: &Mol, idx: NodeIndex) -> Option<u8> {
    explicit_valence(mol, idx).map(|v| v + crate::hydrogen::implicit_hydrogens(mol, idx))
}

/// Whether the atom's total valence is outside the allowed set for its
/// element, charge, and radical state.
///
/// Atoms with no valence model, or with an indeterminate incident bond,
/// are never reported abnormal.
pub fn abnormal_valence(mol: &Mol, idx: NodeIndex) -> bool {
    let atom = mol.atom(idx);
    let allowed = atom.element.valences(atom.charge, atom.is_radical);
    if allowed.is_empty() {
        return false;
    }
    match total_valence(mol, idx) {
        Some(v) => !allowed.contains(&v),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};
    use crate::element::Element;

    fn pair(order: BondOrder) -> (Mol, NodeIndex) {
        let mut mol = Mol::new();
        let a = mol.add_atom(Atom::new(Element::C));
        let b = mol.add_atom(Atom::new(Element::O));
        mol.add_bond(a, b, Bond::new(order)).unwrap();
        (mol, a)
    }

    #[test]
    fn sums_bond_orders() {
        let (mol, a) = pair(BondOrder::Double);
        assert_eq!(explicit_valence(&mol, a), Some(2));
    }

    #[test]
    fn indeterminate_is_a_sentinel() {
        let (mol, a) = pair(BondOrder::Indeterminate);
        assert_eq!(explicit_valence(&mol, a), None);
        assert_eq!(total_valence(&mol, a), None);
        assert!(!abnormal_valence(&mol, a));
    }

    #[test]
    fn coordinate_contributes_nothing() {
        let (mol, a) = pair(BondOrder::Coordinate);
        assert_eq!(explicit_valence(&mol, a), Some(0));
    }

    #[test]
    fn pentavalent_neutral_nitrogen_is_abnormal() {
        // C=N(=O)O drawn without charge separation.
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new(Element::C));
        let n = mol.add_atom(Atom::new(Element::N));
        let o1 = mol.add_atom(Atom::new(Element::O));
        let o2 = mol.add_atom(Atom::new(Element::O));
        mol.add_bond(c, n, Bond::new(BondOrder::Double)).unwrap();
        mol.add_bond(n, o1, Bond::new(BondOrder::Double)).unwrap();
        mol.add_bond(n, o2, Bond::new(BondOrder::Single)).unwrap();
        assert!(abnormal_valence(&mol, n));
        assert!(!abnormal_valence(&mol, c));
        assert!(!abnormal_valence(&mol, o2));
    }
}
