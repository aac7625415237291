use crate::element::Element;

/// Atom node of a molecular graph.
///
/// `Atom` stores intrinsic atomic properties — the things you would read off
/// a structural formula. Derived quantities (explicit valence, implicit
/// hydrogen counts) are computed by the [`valence`](crate::valence) and
/// [`hydrogen`](crate::hydrogen) modules.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    /// Formal charge in elementary charge units.
    pub charge: i8,
    /// Mass number. `None` means natural isotopic abundance (the common case).
    pub isotope: Option<u16>,
    /// Whether the atom carries an unpaired electron.
    pub is_radical: bool,
    /// Explicit hydrogen count.
    ///
    /// `Some` when the source data pinned the count (an `MRV_IMPLICIT_H`
    /// override, or a count fixed by an earlier computation); `None` means
    /// derive it from the valence tables on demand. The standardization
    /// engine clears this on atoms whose charge or bonding it rewrites.
    pub hydrogens: Option<u8>,
    /// 2-D/3-D coordinates from the source file. Opaque to the engine.
    pub position: Option<[f64; 3]>,
    /// Atom-to-atom mapping number. Opaque external identity tag, 0 = unset.
    pub mapping: u32,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            charge: 0,
            isotope: None,
            is_radical: false,
            hydrogens: None,
            position: None,
            mapping: 0,
        }
    }
}

impl Default for Atom {
    fn default() -> Self {
        Self::new(Element::C)
    }
}
