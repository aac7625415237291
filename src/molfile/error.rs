use std::fmt;

use crate::mol::StructureError;

/// Errors produced when decoding an MDL CTAB (molfile) block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MolfileError {
    /// The counts line declares zero atoms: nothing to decode.
    EmptyStructure,
    /// An atom record's charge-code column holds a value outside the fixed
    /// eight-entry lookup table.
    InvalidChargeCode { line: usize },
    /// A malformed property record, or a property/data-group entry
    /// referencing an atom index outside the declared range.
    InvalidExtensionRecord(String),
    /// A legacy construct the decoder intentionally does not support
    /// (query atoms, atom lists, query bond types). Failing loudly here
    /// beats silently mis-standardizing downstream.
    UnsupportedFeature(String),
    /// The input ends before the declared atom/bond records.
    Truncated,
    /// A fixed-column numeric field could not be parsed.
    Malformed(String),
    /// The decoded records violate graph invariants (duplicate bond,
    /// out-of-range endpoint).
    Structure(StructureError),
}

impl fmt::Display for MolfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStructure => write!(f, "molfile declares zero atoms"),
            Self::InvalidChargeCode { line } => {
                write!(f, "invalid charge code on line {}", line)
            }
            Self::InvalidExtensionRecord(detail) => {
                write!(f, "invalid extension record: {}", detail)
            }
            Self::UnsupportedFeature(detail) => write!(f, "unsupported feature: {}", detail),
            Self::Truncated => write!(f, "molfile truncated before declared record count"),
            Self::Malformed(detail) => write!(f, "malformed record: {}", detail),
            Self::Structure(e) => write!(f, "structural violation: {}", e),
        }
    }
}

impl std::error::Error for MolfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Structure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructureError> for MolfileError {
    fn from(e: StructureError) -> Self {
        Self::Structure(e)
    }
}
