pub mod atom;
pub mod bond;
pub mod element;
pub mod hydrogen;
pub mod mol;
pub mod molfile;
pub mod standardize;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder, BondStereo};
pub use element::Element;
pub use mol::{Mol, StructureError};
pub use molfile::{decode, decode_mol, MolRecord, MolfileError};
pub use standardize::{standardize, standardize_with, Applied, StandardizeError};

#[cfg(test)]
mod tests;
