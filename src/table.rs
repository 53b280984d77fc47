//! Presentation forms for the supported logical characters.
//!
//! Each entry lists the glyphs from the Arabic Presentation Forms-A and -B
//! blocks that a renderer without script shaping needs in place of the
//! logical character.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::unicode::{
    ALEF, ALEF_WITH_HAMZA_ABOVE, ALEF_WITH_HAMZA_BELOW, ALEF_WITH_MADDA_ABOVE, DAL, HAMZA, LAM,
    REH, TEH_MARBUTA, THAL, WAW, WAW_WITH_HAMZA_ABOVE, ZAIN,
};

/// Position of a letter within a connected run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoiningForm {
    Isolated,
    Initial,
    Medial,
    Final,
}

/// Text that stands in for a character without positional variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Replacement {
    /// A single presentation code point.
    Glyph(char),
    /// Literal replacement text.
    Literal(&'static str),
}

impl Replacement {
    pub fn push_to(self, out: &mut String) {
        match self {
            Replacement::Glyph(ch) => out.push(ch),
            Replacement::Literal(s) => out.push_str(s),
        }
    }
}

/// The four positional forms of a joining letter, named after the OpenType
/// features that select them.
///
/// `init` and `medi` are `None` for letters that cannot join to a
/// following letter and have no glyph for those positions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Forms {
    pub isol: char,
    pub init: Option<char>,
    pub medi: Option<char>,
    pub fina: char,
}

impl Forms {
    const fn new(isol: u32, init: u32, medi: u32, fina: u32) -> Self {
        Forms {
            isol: to_char(isol),
            init: Some(to_char(init)),
            medi: Some(to_char(medi)),
            fina: to_char(fina),
        }
    }

    /// Returns the glyph for `form`.
    ///
    /// A missing initial form falls back to the isolated form and a missing
    /// medial form falls back to the final form.
    pub fn get(&self, form: JoiningForm) -> char {
        match form {
            JoiningForm::Isolated => self.isol,
            JoiningForm::Initial => self.init.unwrap_or(self.isol),
            JoiningForm::Medial => self.medi.unwrap_or(self.fina),
            JoiningForm::Final => self.fina,
        }
    }
}

/// Lam-Alef ligatures produced when an Alef variant follows Lam.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ligatures {
    /// Used when the Lam is joined to the letter before it.
    pub after_joining: char,
    /// Used when the Lam starts a run, either at the start of the text or
    /// after a letter that does not join forwards.
    pub after_non_joining: char,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeEntry {
    /// Always replaced with the same text regardless of position.
    Fixed(Replacement),
    /// A letter with positional forms.
    Positional(Forms),
    /// An Alef variant: positional forms plus the ligatures it makes with a
    /// preceding Lam.
    Alef(Forms, Ligatures),
}

impl ShapeEntry {
    pub fn forms(&self) -> Option<&Forms> {
        match self {
            ShapeEntry::Fixed(_) => None,
            ShapeEntry::Positional(forms) | ShapeEntry::Alef(forms, _) => Some(forms),
        }
    }

    pub fn ligatures(&self) -> Option<&Ligatures> {
        match self {
            ShapeEntry::Alef(_, ligatures) => Some(ligatures),
            _ => None,
        }
    }
}

// Every value passed in below is a valid scalar value in the presentation
// forms blocks.
const fn to_char(code: u32) -> char {
    match char::from_u32(code) {
        Some(ch) => ch,
        None => panic!("invalid presentation form"),
    }
}

const fn positional(isol: u32, init: u32, medi: u32, fina: u32) -> ShapeEntry {
    ShapeEntry::Positional(Forms::new(isol, init, medi, fina))
}

const fn alef(forms: [u32; 4], after_joining: u32, after_non_joining: u32) -> ShapeEntry {
    ShapeEntry::Alef(
        Forms::new(forms[0], forms[1], forms[2], forms[3]),
        Ligatures {
            after_joining: to_char(after_joining),
            after_non_joining: to_char(after_non_joining),
        },
    )
}

const fn glyph(code: u32) -> ShapeEntry {
    ShapeEntry::Fixed(Replacement::Glyph(to_char(code)))
}

const fn literal(text: &'static str) -> ShapeEntry {
    ShapeEntry::Fixed(Replacement::Literal(text))
}

#[rustfmt::skip]
const ENTRIES: &[(char, ShapeEntry)] = &[
    // Alef variants
    (ALEF,                  alef([0xFE8D, 0xFE8D, 0xFE8E, 0xFE8E], 0xFEFC, 0xFEFB)),
    (ALEF_WITH_HAMZA_ABOVE, alef([0xFE83, 0xFE83, 0xFE84, 0xFE84], 0xFEF8, 0xFEF7)),
    (ALEF_WITH_HAMZA_BELOW, alef([0xFE87, 0xFE87, 0xFE88, 0xFE88], 0xFEFA, 0xFEF9)),
    (ALEF_WITH_MADDA_ABOVE, alef([0xFE81, 0xFE81, 0xFE82, 0xFE82], 0xFEF6, 0xFEF5)),
    // Letters
    ('\u{0628}',            positional(0xFE8F, 0xFE91, 0xFE92, 0xFE90)), // Beh
    ('\u{067E}',            positional(0xFB56, 0xFB58, 0xFB59, 0xFB57)), // Peh
    ('\u{062A}',            positional(0xFE95, 0xFE97, 0xFE98, 0xFE96)), // Teh
    ('\u{062B}',            positional(0xFE99, 0xFE9B, 0xFE9C, 0xFE9A)), // Theh
    ('\u{062C}',            positional(0xFE9D, 0xFE9F, 0xFEA0, 0xFE9E)), // Jeem
    ('\u{0686}',            positional(0xFB7A, 0xFB7C, 0xFB7D, 0xFB7B)), // Tcheh
    ('\u{062D}',            positional(0xFEA1, 0xFEA3, 0xFEA4, 0xFEA2)), // Hah
    ('\u{062E}',            positional(0xFEA5, 0xFEA7, 0xFEA8, 0xFEA6)), // Khah
    (DAL,                   positional(0xFEA9, 0xFEA9, 0xFEAA, 0xFEAA)),
    (THAL,                  positional(0xFEAB, 0xFEAB, 0xFEAC, 0xFEAC)),
    (REH,                   positional(0xFEAD, 0xFEAD, 0xFEAE, 0xFEAE)),
    (ZAIN,                  positional(0xFEAF, 0xFEAF, 0xFEB0, 0xFEB0)),
    ('\u{0698}',            positional(0xFB8A, 0xFB8A, 0xFB8B, 0xFB8B)), // Jeh
    ('\u{0633}',            positional(0xFEB1, 0xFEB3, 0xFEB4, 0xFEB2)), // Seen
    ('\u{0634}',            positional(0xFEB5, 0xFEB7, 0xFEB8, 0xFEB6)), // Sheen
    ('\u{0635}',            positional(0xFEB9, 0xFEBB, 0xFEBC, 0xFEBA)), // Sad
    ('\u{0636}',            positional(0xFEBD, 0xFEBF, 0xFEC0, 0xFEBE)), // Dad
    ('\u{0637}',            positional(0xFEC1, 0xFEC3, 0xFEC4, 0xFEC2)), // Tah
    ('\u{0638}',            positional(0xFEC5, 0xFEC7, 0xFEC8, 0xFEC6)), // Zah
    ('\u{0639}',            positional(0xFEC9, 0xFECB, 0xFECC, 0xFECA)), // Ain
    ('\u{063A}',            positional(0xFECD, 0xFECF, 0xFED0, 0xFECE)), // Ghain
    ('\u{0641}',            positional(0xFED1, 0xFED3, 0xFED4, 0xFED2)), // Feh
    ('\u{0642}',            positional(0xFED5, 0xFED7, 0xFED8, 0xFED6)), // Qaf
    ('\u{0643}',            positional(0xFED9, 0xFEDB, 0xFEDC, 0xFEDA)), // Kaf
    ('\u{06A9}',            positional(0xFED9, 0xFEDB, 0xFEDC, 0xFEDA)), // Keheh
    ('\u{06AF}',            positional(0xFB92, 0xFB94, 0xFB95, 0xFB93)), // Gaf
    (LAM,                   positional(0xFEDD, 0xFEDF, 0xFEE0, 0xFEDE)),
    ('\u{0645}',            positional(0xFEE1, 0xFEE3, 0xFEE4, 0xFEE2)), // Meem
    ('\u{0646}',            positional(0xFEE5, 0xFEE7, 0xFEE8, 0xFEE6)), // Noon
    ('\u{0647}',            positional(0xFEE9, 0xFEEB, 0xFEEC, 0xFEEA)), // Heh
    (WAW,                   positional(0xFEED, 0xFEED, 0xFEEE, 0xFEEE)),
    (WAW_WITH_HAMZA_ABOVE,  positional(0xFE85, 0xFE85, 0xFE86, 0xFE86)),
    ('\u{06CC}',            positional(0xFEEF, 0xFEF3, 0xFEF4, 0xFEF0)), // Farsi Yeh
    ('\u{064A}',            positional(0xFEF1, 0xFEF3, 0xFEF4, 0xFEF2)), // Yeh
    ('\u{0626}',            positional(0xFE89, 0xFE8B, 0xFE8C, 0xFE8A)), // Yeh with Hamza above
    (TEH_MARBUTA, ShapeEntry::Positional(Forms {
        isol: '\u{FE93}',
        init: None,
        medi: None,
        fina: '\u{FE94}',
    })),
    (HAMZA,                 glyph(0xFE80)),
    // Extended Arabic-Indic digits
    ('\u{06F0}',            glyph(0x0660)),
    ('\u{06F1}',            literal("1")),
    ('\u{06F2}',            literal("2")),
    ('\u{06F3}',            literal("3")),
    ('\u{06F4}',            literal("4")),
    ('\u{06F5}',            literal("5")),
    ('\u{06F6}',            literal("6")),
    ('\u{06F7}',            literal("7")),
    ('\u{06F8}',            literal("8")),
    ('\u{06F9}',            literal("9")),
    // Punctuation
    ('?',                   glyph(0x061F)),
];

lazy_static! {
    static ref TABLE: FxHashMap<char, ShapeEntry> = ENTRIES.iter().copied().collect();
}

/// Look up the presentation forms of `ch`.
///
/// Returns `None` for characters that pass through shaping unchanged.
pub fn lookup(ch: char) -> Option<&'static ShapeEntry> {
    TABLE.get(&ch)
}

/// Returns `true` if shaping can change `ch`.
pub fn is_shapeable(ch: char) -> bool {
    TABLE.contains_key(&ch)
}
