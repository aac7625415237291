//! MDL CTAB (molfile) decoder, versions V2000 and V3000.
//!
//! The decoder produces a [`MolRecord`]: raw atom/bond records plus the
//! side channels the fixed-column format carries out of band (wedge stereo
//! hints, per-atom explicit-hydrogen overrides, and a diagnostics log for
//! lines that were understood well enough to ignore safely). Structural
//! violations abort the decode; no partial graph is ever handed onward.

mod error;
mod v2000;
mod v3000;

use std::collections::BTreeMap;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder, BondStereo};
use crate::element::Element;
use crate::hydrogen::saturate;
use crate::mol::Mol;

pub use error::MolfileError;

/// One parsed atom line, before graph construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub element: Element,
    pub charge: i8,
    pub isotope: Option<u16>,
    pub is_radical: bool,
    pub mapping: u32,
    pub position: [f64; 3],
}

/// One parsed bond line. Endpoints are 0-based atom indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRecord {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

/// Wedge direction hint from a bond record's stereo column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StereoHint {
    pub a: usize,
    pub b: usize,
    pub direction: BondStereo,
}

/// Decoded molfile contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MolRecord {
    pub title: Option<String>,
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
    pub stereo_hints: Vec<StereoHint>,
    /// 0-based atom index → explicit hydrogen count (`MRV_IMPLICIT_H`).
    pub hydrogen_overrides: BTreeMap<usize, u8>,
    /// Human-readable notes on ignored or degraded input.
    pub diagnostics: Vec<String>,
}

impl MolRecord {
    /// Build the molecular graph, applying hydrogen overrides and pinning
    /// every remaining hydrogen count to its derived value.
    pub fn to_mol(&self) -> Result<Mol, MolfileError> {
        let mut mol = Mol::new();
        let mut handles = Vec::with_capacity(self.atoms.len());
        for (i, rec) in self.atoms.iter().enumerate() {
            let idx = mol.add_atom(Atom {
                element: rec.element,
                charge: rec.charge,
                isotope: rec.isotope,
                is_radical: rec.is_radical,
                hydrogens: self.hydrogen_overrides.get(&i).copied(),
                position: Some(rec.position),
                mapping: rec.mapping,
            });
            handles.push(idx);
        }
        for bond in &self.bonds {
            let a = *handles
                .get(bond.a)
                .ok_or_else(|| MolfileError::Malformed(format!("bond endpoint {}", bond.a + 1)))?;
            let b = *handles
                .get(bond.b)
                .ok_or_else(|| MolfileError::Malformed(format!("bond endpoint {}", bond.b + 1)))?;
            mol.add_bond(a, b, Bond::new(bond.order))?;
        }
        saturate(&mut mol);
        Ok(mol)
    }
}

/// Decode a molfile, dispatching on the counts-line version tag.
///
/// An absent or unrecognized tag falls back to V2000, which is how legacy
/// writers behave in the wild.
pub fn decode(input: &str) -> Result<MolRecord, MolfileError> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() < 4 {
        return Err(MolfileError::Truncated);
    }
    let counts = lines[3];
    if field(counts, 33, 39).trim() == "V3000" {
        v3000::parse(&lines)
    } else {
        v2000::parse(&lines)
    }
}

/// Decode straight to a graph, returning the diagnostics log alongside.
pub fn decode_mol(input: &str) -> Result<(Mol, Vec<String>), MolfileError> {
    let record = decode(input)?;
    let mol = record.to_mol()?;
    Ok((mol, record.diagnostics))
}

/// Fixed-column field access tolerant of right-trimmed lines.
///
/// Column offsets are byte offsets. A multibyte character straddling a
/// column boundary clamps the slice to the nearest char boundary instead
/// of panicking; the garbled field then fails its parse like any other
/// malformed text.
pub(crate) fn field(line: &str, start: usize, end: usize) -> &str {
    let mut stop = end.min(line.len());
    if start >= stop || !line.is_char_boundary(start) {
        return "";
    }
    while !line.is_char_boundary(stop) {
        stop -= 1;
    }
    &line[start..stop]
}

pub(crate) fn parse_usize(s: &str, what: &str) -> Result<usize, MolfileError> {
    s.trim()
        .parse()
        .map_err(|_| MolfileError::Malformed(format!("{}: {:?}", what, s)))
}

pub(crate) fn parse_i16(s: &str, what: &str) -> Result<i16, MolfileError> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(0);
    }
    t.parse()
        .map_err(|_| MolfileError::Malformed(format!("{}: {:?}", what, s)))
}

pub(crate) fn parse_coord(s: &str, what: &str) -> Result<f64, MolfileError> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(0.0);
    }
    t.parse()
        .map_err(|_| MolfileError::Malformed(format!("{}: {:?}", what, s)))
}

/// Map a CTAB bond-order code shared by both versions.
///
/// Code 9 is a non-standard legacy encoding for a dative bond; it is
/// remapped to [`BondOrder::Coordinate`] with a diagnostics entry rather
/// than rejected. Query bond codes (5–7) are a hard failure.
pub(crate) fn bond_order_code(
    code: usize,
    line: &str,
    diagnostics: &mut Vec<String>,
) -> Result<BondOrder, MolfileError> {
    match code {
        1 => Ok(BondOrder::Single),
        2 => Ok(BondOrder::Double),
        3 => Ok(BondOrder::Triple),
        4 => Ok(BondOrder::Aromatic),
        8 => Ok(BondOrder::Indeterminate),
        9 => {
            diagnostics.push(format!("coordinate bond remapped from code 9: {}", line.trim_end()));
            Ok(BondOrder::Coordinate)
        }
        _ => Err(MolfileError::UnsupportedFeature(format!(
            "bond order code {}",
            code
        ))),
    }
}

/// Resolve an element symbol plus the V2000 isotope-delta column.
///
/// `D` maps to hydrogen with mass number 2 and must not carry its own
/// isotope delta; any other nonzero delta is added to the element's
/// standard-abundance mass number.
pub(crate) fn resolve_element(
    symbol: &str,
    iso_delta: i16,
) -> Result<(Element, Option<u16>), MolfileError> {
    if symbol == "A" || symbol == "L" || symbol == "Q" || symbol == "*" {
        return Err(MolfileError::UnsupportedFeature(format!(
            "query atom {:?}",
            symbol
        )));
    }
    if symbol == "D" {
        if iso_delta != 0 {
            return Err(MolfileError::Malformed(
                "isotope delta on deuterium atom".into(),
            ));
        }
        return Ok((Element::H, Some(2)));
    }
    let element = Element::from_symbol(symbol)
        .ok_or_else(|| MolfileError::Malformed(format!("unknown element {:?}", symbol)))?;
    let isotope = if iso_delta != 0 {
        let mass = i32::from(element.common_isotope()) + i32::from(iso_delta);
        if mass <= 0 {
            return Err(MolfileError::Malformed(format!(
                "isotope delta {} on {}",
                iso_delta,
                element.symbol()
            )));
        }
        Some(mass as u16)
    } else {
        None
    };
    Ok((element, isotope))
}
