//! V2000 connection-table parsing.
//!
//! Column offsets follow the published CTFile layout: the counts line is
//! line 4 (0-indexed), atom records carry three 10-char coordinates, a
//! 3-char element field at offset 31, a 2-char isotope delta, a 3-char
//! charge code, and a 3-char mapping number at offset 60; bond records are
//! four 3-char fields; `M  `-prefixed property records follow in 8-char
//! entry blocks until `M  END`.

use std::collections::BTreeMap;

use super::{
    bond_order_code, field, parse_coord, parse_i16, parse_usize, resolve_element, AtomRecord,
    BondRecord, MolRecord, MolfileError, StereoHint,
};
use crate::bond::BondStereo;

// Charge codes 0-7; code 4 is the doublet-radical marker and maps to
// charge zero.
const CHARGE_MAP: [i8; 8] = [0, 3, 2, 1, 0, -1, -2, -3];

// Atom and bond records are pure fixed-column data; byte offsets only line
// up with columns when the record is ASCII.
fn ascii_record(line: &str, what: &str) -> Result<(), MolfileError> {
    if line.is_ascii() {
        Ok(())
    } else {
        Err(MolfileError::Malformed(format!(
            "non-ASCII {} record: {}",
            what,
            line.trim_end()
        )))
    }
}

#[derive(Debug, Default)]
struct DataGroup {
    kind: Option<String>,
    atoms: Vec<usize>,
    value: String,
}

pub(super) fn parse(lines: &[&str]) -> Result<MolRecord, MolfileError> {
    let counts = lines[3];
    let atom_count = parse_usize(field(counts, 0, 3), "atom count")?;
    let bond_count = parse_usize(field(counts, 3, 6), "bond count")?;
    if atom_count == 0 {
        return Err(MolfileError::EmptyStructure);
    }
    if lines.len() < 4 + atom_count + bond_count {
        return Err(MolfileError::Truncated);
    }

    let mut record = MolRecord {
        title: Some(lines[1].trim().to_owned()).filter(|t| !t.is_empty()),
        ..MolRecord::default()
    };

    for (n, line) in lines[4..4 + atom_count].iter().enumerate() {
        ascii_record(line, "atom")?;
        let charge_field = field(line, 36, 39);
        let charge_code = if charge_field.trim().is_empty() {
            record
                .diagnostics
                .push(format!("missing charge code, assuming 0: {}", line.trim_end()));
            0
        } else {
            parse_usize(charge_field, "charge code")
                .ok()
                .filter(|&c| c < CHARGE_MAP.len())
                .ok_or(MolfileError::InvalidChargeCode { line: 4 + n })?
        };
        if charge_code == 4 {
            record
                .diagnostics
                .push(format!("doublet radical charge code: {}", line.trim_end()));
        }
        let iso_delta = parse_i16(field(line, 34, 36), "isotope delta")?;
        let (element, isotope) = resolve_element(field(line, 31, 34).trim(), iso_delta)?;
        let mapping_field = field(line, 60, 63).trim();
        let mapping = if mapping_field.is_empty() {
            0
        } else {
            parse_usize(mapping_field, "mapping number")? as u32
        };
        record.atoms.push(AtomRecord {
            element,
            charge: CHARGE_MAP[charge_code],
            isotope,
            is_radical: false,
            mapping,
            position: [
                parse_coord(field(line, 0, 10), "x coordinate")?,
                parse_coord(field(line, 10, 20), "y coordinate")?,
                parse_coord(field(line, 20, 30), "z coordinate")?,
            ],
        });
    }

    for line in &lines[4 + atom_count..4 + atom_count + bond_count] {
        ascii_record(line, "bond")?;
        let a = parse_usize(field(line, 0, 3), "bond atom 1")?;
        let b = parse_usize(field(line, 3, 6), "bond atom 2")?;
        if a == 0 || a > atom_count || b == 0 || b > atom_count {
            return Err(MolfileError::Malformed(format!(
                "bond endpoint out of range: {}",
                line.trim_end()
            )));
        }
        let (a, b) = (a - 1, b - 1);
        match parse_usize(field(line, 9, 12), "stereo code").unwrap_or(0) {
            0 => {}
            1 => record.stereo_hints.push(StereoHint {
                a,
                b,
                direction: BondStereo::Up,
            }),
            6 => record.stereo_hints.push(StereoHint {
                a,
                b,
                direction: BondStereo::Down,
            }),
            _ => record
                .diagnostics
                .push(format!("unsupported or invalid stereo: {}", line.trim_end())),
        }
        let code = parse_usize(field(line, 6, 9), "bond order")?;
        let order = bond_order_code(code, line, &mut record.diagnostics)?;
        record.bonds.push(BondRecord { a, b, order });
    }

    let mut groups: BTreeMap<usize, DataGroup> = BTreeMap::new();

    for line in &lines[4 + atom_count + bond_count..] {
        if line.starts_with("M  END") {
            break;
        } else if line.starts_with("M  ALS") {
            return Err(MolfileError::UnsupportedFeature("atom list (M  ALS)".into()));
        } else if line.starts_with("M  CHG") || line.starts_with("M  RAD") || line.starts_with("M  ISO") {
            let kind = &line[3..6];
            let entries = parse_usize(field(line, 6, 9), "property entry count")?;
            for i in 0..entries {
                let off = i * 8;
                let atom = parse_usize(field(line, 10 + off, 13 + off), "property atom index")?;
                if atom == 0 || atom > atom_count {
                    return Err(MolfileError::InvalidExtensionRecord(format!(
                        "atom index {} outside 1..={}",
                        atom, atom_count
                    )));
                }
                let value = parse_i16(field(line, 14 + off, 17 + off), "property value")?;
                let rec = &mut record.atoms[atom - 1];
                match kind {
                    "CHG" => rec.charge = value as i8,
                    "RAD" => rec.is_radical = value != 0,
                    "ISO" => rec.isotope = if value > 0 { Some(value as u16) } else { None },
                    _ => unreachable!(),
                }
            }
        } else if line.starts_with("M  STY") {
            let entries = parse_usize(field(line, 6, 9), "sgroup entry count")?;
            for i in 0..entries {
                let off = i * 8;
                let index = parse_usize(field(line, 10 + off, 13 + off), "sgroup index")?;
                match field(line, 14 + off, 17 + off).trim() {
                    "DAT" => {
                        groups.insert(index, DataGroup::default());
                    }
                    "SUP" => {
                        groups.insert(
                            index,
                            DataGroup {
                                kind: Some("mdl_sup".into()),
                                ..DataGroup::default()
                            },
                        );
                    }
                    _ => {}
                }
            }
        } else if line.starts_with("M  SAL") {
            let index = parse_usize(field(line, 7, 10), "sgroup index")?;
            if let Some(group) = groups.get_mut(&index) {
                let entries = parse_usize(field(line, 10, 13), "sgroup atom count")?;
                for i in 0..entries {
                    let off = i * 4;
                    let atom = parse_usize(field(line, 14 + off, 17 + off), "sgroup atom index")?;
                    if atom == 0 || atom > atom_count {
                        return Err(MolfileError::InvalidExtensionRecord(format!(
                            "sgroup atom index {} outside 1..={}",
                            atom, atom_count
                        )));
                    }
                    group.atoms.push(atom - 1);
                }
            }
        } else if line.starts_with("M  SDT") {
            let index = parse_usize(field(line, 7, 10), "sgroup index")?;
            if let Some(group) = groups.get_mut(&index) {
                group.kind = line
                    .split_whitespace()
                    .last()
                    .map(|t| t.to_ascii_lowercase());
            }
        } else if line.starts_with("M  SED") {
            let index = parse_usize(field(line, 7, 10), "sgroup index")?;
            if let Some(group) = groups.get_mut(&index) {
                group.value = field(line, 10, line.len())
                    .trim()
                    .replace('/', "")
                    .to_ascii_lowercase();
            }
        } else if line.starts_with("M  SMT") {
            let index = parse_usize(field(line, 7, 10), "sgroup index")?;
            if let Some(group) = groups.get_mut(&index) {
                group.value = field(line, 10, line.len()).trim().to_owned();
            }
        } else if !line.starts_with("M  SDD") {
            record
                .diagnostics
                .push(format!("ignored line: {}", line.trim_end()));
        }
    }

    for group in groups.values() {
        let kind = group.kind.as_deref().ok_or_else(|| {
            MolfileError::InvalidExtensionRecord("data group without a type".into())
        })?;
        if kind == "mrv_implicit_h" {
            let value = group.value.to_ascii_lowercase();
            let count = value.strip_prefix("impl_h").and_then(|v| v.parse::<u8>().ok());
            match (group.atoms.as_slice(), count) {
                ([atom], Some(h)) => {
                    record.hydrogen_overrides.insert(*atom, h);
                }
                _ => {
                    return Err(MolfileError::InvalidExtensionRecord(format!(
                        "bad MRV_IMPLICIT_H group: atoms {:?}, value {:?}",
                        group.atoms, group.value
                    )))
                }
            }
        } else {
            record
                .diagnostics
                .push(format!("ignored data group of type {:?}", kind));
        }
    }

    Ok(record)
}
