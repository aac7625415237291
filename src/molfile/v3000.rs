//! V3000 extended connection-table parsing.
//!
//! V3000 keeps the four-line header but moves everything else into
//! free-format `M  V30` lines: a `BEGIN CTAB`/`END CTAB` envelope holding a
//! `COUNTS` line and `ATOM`/`BOND` blocks. Fields are whitespace-separated
//! with `KEY=VALUE` options; a trailing `-` continues a logical line.

use std::collections::HashMap;

use super::{
    bond_order_code, AtomRecord, BondRecord, MolRecord, MolfileError, StereoHint,
};
use crate::bond::BondStereo;
use crate::element::Element;

pub(super) fn parse(lines: &[&str]) -> Result<MolRecord, MolfileError> {
    let mut record = MolRecord {
        title: Some(lines[1].trim().to_owned()).filter(|t| !t.is_empty()),
        ..MolRecord::default()
    };

    let logical = join_continuations(&lines[4..]);

    let mut atom_count = None;
    let mut bond_count = 0usize;
    // Declared V3000 atom index → position in record.atoms.
    let mut index_map: HashMap<usize, usize> = HashMap::new();
    let mut block = Block::Preamble;

    for line in &logical {
        if line.starts_with("M  END") {
            break;
        }
        let body = match line.strip_prefix("M  V30 ") {
            Some(body) => body.trim(),
            None => {
                record
                    .diagnostics
                    .push(format!("ignored line: {}", line.trim_end()));
                continue;
            }
        };
        match body {
            "BEGIN CTAB" | "END CTAB" => continue,
            "BEGIN ATOM" => {
                block = Block::Atom;
                continue;
            }
            "END ATOM" => {
                block = Block::Preamble;
                continue;
            }
            "BEGIN BOND" => {
                block = Block::Bond;
                continue;
            }
            "END BOND" => {
                block = Block::Preamble;
                continue;
            }
            _ => {}
        }
        if let Some(counts) = body.strip_prefix("COUNTS ") {
            let mut tokens = counts.split_whitespace();
            let na = parse_num(tokens.next(), "atom count")?;
            let nb = parse_num(tokens.next(), "bond count")?;
            if na == 0 {
                return Err(MolfileError::EmptyStructure);
            }
            atom_count = Some(na);
            bond_count = nb;
            continue;
        }
        match block {
            Block::Atom => parse_atom(body, &mut record, &mut index_map)?,
            Block::Bond => parse_bond(body, &mut record, &index_map)?,
            Block::Preamble => {
                if body.starts_with("BEGIN") || body.starts_with("END") {
                    record
                        .diagnostics
                        .push(format!("ignored block: {}", body));
                }
            }
        }
    }

    let atom_count = atom_count.ok_or(MolfileError::Truncated)?;
    if record.atoms.len() != atom_count || record.bonds.len() != bond_count {
        return Err(MolfileError::Truncated);
    }
    Ok(record)
}

enum Block {
    Preamble,
    Atom,
    Bond,
}

fn parse_atom(
    body: &str,
    record: &mut MolRecord,
    index_map: &mut HashMap<usize, usize>,
) -> Result<(), MolfileError> {
    let mut tokens = body.split_whitespace();
    let declared = parse_num(tokens.next(), "atom index")?;
    let symbol = tokens
        .next()
        .ok_or_else(|| MolfileError::Malformed(format!("atom line {:?}", body)))?;
    if symbol == "A" || symbol == "L" || symbol == "Q" || symbol == "*" || symbol.starts_with('[')
        || symbol.starts_with("NOT")
    {
        return Err(MolfileError::UnsupportedFeature(format!(
            "query atom {:?}",
            symbol
        )));
    }
    let x = parse_f64(tokens.next(), "x coordinate")?;
    let y = parse_f64(tokens.next(), "y coordinate")?;
    let z = parse_f64(tokens.next(), "z coordinate")?;
    let mapping = parse_num(tokens.next(), "mapping number")? as u32;

    let (element, mut isotope) = if symbol == "D" {
        (Element::H, Some(2))
    } else {
        let e = Element::from_symbol(symbol)
            .ok_or_else(|| MolfileError::Malformed(format!("unknown element {:?}", symbol)))?;
        (e, None)
    };
    let mut charge = 0i8;
    let mut is_radical = false;

    for option in tokens {
        let (key, value) = option
            .split_once('=')
            .ok_or_else(|| MolfileError::Malformed(format!("atom option {:?}", option)))?;
        match key {
            "CHG" => {
                charge = value
                    .parse()
                    .map_err(|_| MolfileError::Malformed(format!("CHG={}", value)))?;
            }
            "RAD" => {
                let rad: i32 = value
                    .parse()
                    .map_err(|_| MolfileError::Malformed(format!("RAD={}", value)))?;
                is_radical = rad != 0;
            }
            "MASS" => {
                // Absolute mass number, unlike the V2000 delta column.
                isotope = Some(
                    value
                        .parse()
                        .map_err(|_| MolfileError::Malformed(format!("MASS={}", value)))?,
                );
            }
            "HCOUNT" => {
                let h: i32 = value
                    .parse()
                    .map_err(|_| MolfileError::Malformed(format!("HCOUNT={}", value)))?;
                let count = if h < 0 { 0 } else { h as u8 };
                record.hydrogen_overrides.insert(record.atoms.len(), count);
            }
            _ => record
                .diagnostics
                .push(format!("ignored atom option: {}", option)),
        }
    }

    index_map.insert(declared, record.atoms.len());
    record.atoms.push(AtomRecord {
        element,
        charge,
        isotope,
        is_radical,
        mapping,
        position: [x, y, z],
    });
    Ok(())
}

fn parse_bond(
    body: &str,
    record: &mut MolRecord,
    index_map: &HashMap<usize, usize>,
) -> Result<(), MolfileError> {
    let mut tokens = body.split_whitespace();
    let _declared = parse_num(tokens.next(), "bond index")?;
    let code = parse_num(tokens.next(), "bond order")?;
    let a = resolve(index_map, parse_num(tokens.next(), "bond atom 1")?)?;
    let b = resolve(index_map, parse_num(tokens.next(), "bond atom 2")?)?;
    let order = bond_order_code(code, body, &mut record.diagnostics)?;

    for option in tokens {
        match option.split_once('=') {
            Some(("CFG", "1")) => record.stereo_hints.push(StereoHint {
                a,
                b,
                direction: BondStereo::Up,
            }),
            Some(("CFG", "3")) => record.stereo_hints.push(StereoHint {
                a,
                b,
                direction: BondStereo::Down,
            }),
            _ => record
                .diagnostics
                .push(format!("ignored bond option: {}", option)),
        }
    }

    record.bonds.push(BondRecord { a, b, order });
    Ok(())
}

fn resolve(index_map: &HashMap<usize, usize>, declared: usize) -> Result<usize, MolfileError> {
    index_map.get(&declared).copied().ok_or_else(|| {
        MolfileError::InvalidExtensionRecord(format!("bond references unknown atom {}", declared))
    })
}

fn parse_num(token: Option<&str>, what: &str) -> Result<usize, MolfileError> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| MolfileError::Malformed(format!("{}: {:?}", what, token)))
}

fn parse_f64(token: Option<&str>, what: &str) -> Result<f64, MolfileError> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| MolfileError::Malformed(format!("{}: {:?}", what, token)))
}

fn join_continuations(lines: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut pending: Option<String> = None;
    for line in lines {
        let mut text = match pending.take() {
            // A continuation replaces the next line's "M  V30 " prefix.
            Some(prefix) => format!("{}{}", prefix, line.strip_prefix("M  V30 ").unwrap_or(line)),
            None => (*line).to_owned(),
        };
        if text.starts_with("M  V30 ") && text.trim_end().ends_with('-') {
            let cut = text.trim_end().len() - 1;
            text.truncate(cut);
            pending = Some(text);
        } else {
            out.push(text);
        }
    }
    if let Some(rest) = pending {
        out.push(rest);
    }
    out
}
