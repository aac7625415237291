use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::hydrogen::implicit_hydrogens;

/// Structural violation while building or mutating a molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A bond was added between an already-bonded atom pair.
    DuplicateBond(NodeIndex, NodeIndex),
    /// An atom handle does not exist in the graph.
    UnknownAtom(NodeIndex),
    /// A bond's two endpoints are the same atom.
    SelfBond(NodeIndex),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBond(a, b) => {
                write!(f, "atoms {} and {} are already bonded", a.index(), b.index())
            }
            Self::UnknownAtom(a) => write!(f, "unknown atom {}", a.index()),
            Self::SelfBond(a) => write!(f, "atom {} bonded to itself", a.index()),
        }
    }
}

impl std::error::Error for StructureError {}

/// Molecular graph: an undirected multigraph of [`Atom`]s and [`Bond`]s with
/// no parallel bonds between the same pair.
///
/// Atoms and bonds are referenced by stable petgraph handles; handles are
/// never renumbered by mutation, so rules can freely inspect and rewrite
/// neighbors without dangling references.
#[derive(Debug, Clone, Default)]
pub struct Mol {
    graph: UnGraph<Atom, Bond>,
}

impl Mol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, idx: NodeIndex) -> &Atom {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut Atom {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &Bond {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut Bond {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: Atom) -> NodeIndex {
        self.graph.add_node(atom)
    }

    /// Add a bond between two existing atoms.
    ///
    /// Fails if either endpoint is unknown, the endpoints coincide, or the
    /// pair is already bonded.
    pub fn add_bond(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        bond: Bond,
    ) -> Result<EdgeIndex, StructureError> {
        if self.graph.node_weight(a).is_none() {
            return Err(StructureError::UnknownAtom(a));
        }
        if self.graph.node_weight(b).is_none() {
            return Err(StructureError::UnknownAtom(b));
        }
        if a == b {
            return Err(StructureError::SelfBond(a));
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(StructureError::DuplicateBond(a, b));
        }
        Ok(self.graph.add_edge(a, b, bond))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Incident (neighbor, bond) pairs of an atom.
    pub fn adjacency(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, EdgeIndex)> + '_ {
        self.graph.edges(idx).map(move |e| {
            let other = if e.source() == idx { e.target() } else { e.source() };
            (other, e.id())
        })
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    /// Heavy-atom degree: number of explicit graph neighbors.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Index-aligned structural comparison.
    ///
    /// Compares element, charge, isotope, radical state, effective hydrogen
    /// count, and bond connectivity/order at identical indices. Bond orders
    /// compare via [`crate::bond::BondOrder::matches`], so an indeterminate
    /// bond on either
    /// side matches any concrete order. This is not an isomorphism test;
    /// callers needing relabeling-invariant equality supply their own
    /// canonical numbering.
    pub fn same_structure(&self, other: &Mol) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            let (a, b) = (self.atom(idx), other.atom(idx));
            if a.element != b.element
                || a.charge != b.charge
                || a.isotope != b.isotope
                || a.is_radical != b.is_radical
                || implicit_hydrogens(self, idx) != implicit_hydrogens(other, idx)
            {
                return false;
            }
        }
        for idx in self.bonds() {
            let (sa, sb) = match self.bond_endpoints(idx) {
                Some(e) => e,
                None => return false,
            };
            let (oa, ob) = match other.bond_endpoints(idx) {
                Some(e) => e,
                None => return false,
            };
            let endpoints_match =
                (sa == oa && sb == ob) || (sa == ob && sb == oa);
            if !endpoints_match || !self.bond(idx).order.matches(other.bond(idx).order) {
                return false;
            }
        }
        true
    }

    /// Sum of formal charges over all atoms.
    pub fn total_charge(&self) -> i32 {
        self.atoms().map(|idx| i32::from(self.atom(idx).charge)).sum()
    }
}
