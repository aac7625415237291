//! Implicit hydrogen derivation.
//!
//! An atom's hydrogen count is either pinned by the source data (an
//! `MRV_IMPLICIT_H` override in a molfile) or derived here: the element's
//! common (lowest allowed) valence for its charge/radical state, minus the
//! explicit bonds. Higher valences in the allowed list are legal when drawn
//! explicitly but are never padded with hydrogens, so a sulfide with three
//! bonds stays at zero hydrogens instead of being promoted to S(IV). Atoms
//! with an indeterminate incident bond, explicit bonds already past the
//! common valence, or no valence model derive zero.

use petgraph::graph::NodeIndex;

use crate::mol::Mol;
use crate::valence::explicit_valence;

/// Effective hydrogen count of an atom: the stored override when present,
/// otherwise the derived count.
pub fn implicit_hydrogens(mol: &Mol, idx: NodeIndex) -> u8 {
    if let Some(h) = mol.atom(idx).hydrogens {
        return h;
    }
    derive(mol, idx)
}

/// Derived hydrogen count, ignoring any stored override.
pub fn derive(mol: &Mol, idx: NodeIndex) -> u8 {
    let atom = mol.atom(idx);
    let v = match explicit_valence(mol, idx) {
        Some(v) => v,
        None => return 0,
    };
    match atom.element.valences(atom.charge, atom.is_radical).first() {
        Some(&common) if common >= v => common - v,
        _ => 0,
    }
}

/// Pin every unset hydrogen count to its derived value.
///
/// Decoders call this once after the graph is built so that later structural
/// comparison sees stable counts. The standardization engine clears counts
/// on atoms it rewrites, after which they derive afresh.
pub fn saturate(mol: &mut Mol) {
    for idx in mol.atoms().collect::<Vec<_>>() {
        if mol.atom(idx).hydrogens.is_none() {
            let h = derive(mol, idx);
            mol.atom_mut(idx).hydrogens = Some(h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};
    use crate::element::Element;

    #[test]
    fn methane_carbon_derives_four() {
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new(Element::C));
        assert_eq!(implicit_hydrogens(&mol, c), 4);
    }

    #[test]
    fn charged_nitrogen_uses_charge_aware_valence() {
        let mut mol = Mol::new();
        let n = mol.add_atom(Atom {
            charge: 1,
            ..Atom::new(Element::N)
        });
        assert_eq!(implicit_hydrogens(&mol, n), 4);
        mol.atom_mut(n).charge = -1;
        assert_eq!(implicit_hydrogens(&mol, n), 2);
    }

    #[test]
    fn radical_oxygen_derives_none_when_bonded() {
        let mut mol = Mol::new();
        let o = mol.add_atom(Atom {
            is_radical: true,
            ..Atom::new(Element::O)
        });
        let c = mol.add_atom(Atom::new(Element::C));
        mol.add_bond(o, c, Bond::new(BondOrder::Single)).unwrap();
        assert_eq!(implicit_hydrogens(&mol, o), 0);
    }

    #[test]
    fn sulfur_fills_only_the_common_valence() {
        let mut mol = Mol::new();
        let s = mol.add_atom(Atom::new(Element::S));
        assert_eq!(implicit_hydrogens(&mol, s), 2);
        // Past the common valence of 2 nothing is padded, even though 4
        // and 6 are legal when drawn explicitly.
        let o1 = mol.add_atom(Atom::new(Element::O));
        let o2 = mol.add_atom(Atom::new(Element::O));
        mol.add_bond(s, o1, Bond::new(BondOrder::Double)).unwrap();
        assert_eq!(implicit_hydrogens(&mol, s), 0);
        mol.add_bond(s, o2, Bond::new(BondOrder::Double)).unwrap();
        assert_eq!(implicit_hydrogens(&mol, s), 0);
    }

    #[test]
    fn hypervalent_drawing_derives_zero() {
        let mut mol = Mol::new();
        let n = mol.add_atom(Atom::new(Element::N));
        let a = mol.add_atom(Atom::new(Element::O));
        let b = mol.add_atom(Atom::new(Element::O));
        let c = mol.add_atom(Atom::new(Element::C));
        mol.add_bond(n, a, Bond::new(BondOrder::Double)).unwrap();
        mol.add_bond(n, b, Bond::new(BondOrder::Double)).unwrap();
        mol.add_bond(n, c, Bond::new(BondOrder::Single)).unwrap();
        assert_eq!(implicit_hydrogens(&mol, n), 0);
    }

    #[test]
    fn override_wins_over_derivation() {
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom {
            hydrogens: Some(1),
            ..Atom::new(Element::C)
        });
        assert_eq!(implicit_hydrogens(&mol, c), 1);
    }

    #[test]
    fn saturate_pins_unset_counts() {
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom::new(Element::C));
        let n = mol.add_atom(Atom::new(Element::N));
        mol.add_bond(c, n, Bond::new(BondOrder::Single)).unwrap();
        saturate(&mut mol);
        assert_eq!(mol.atom(c).hydrogens, Some(3));
        assert_eq!(mol.atom(n).hydrogens, Some(2));
    }
}
