//! Named code points and code point ranges used while shaping.

pub const HAMZA: char = '\u{0621}';
pub const ALEF_WITH_MADDA_ABOVE: char = '\u{0622}';
pub const ALEF_WITH_HAMZA_ABOVE: char = '\u{0623}';
pub const WAW_WITH_HAMZA_ABOVE: char = '\u{0624}';
pub const ALEF_WITH_HAMZA_BELOW: char = '\u{0625}';
pub const ALEF: char = '\u{0627}';
pub const TEH_MARBUTA: char = '\u{0629}';
pub const DAL: char = '\u{062F}';
pub const THAL: char = '\u{0630}';
pub const REH: char = '\u{0631}';
pub const ZAIN: char = '\u{0632}';
pub const LAM: char = '\u{0644}';
pub const WAW: char = '\u{0648}';

/// Lam-Alef ligatures, U+FEF5 to U+FEFC.
pub const LAM_ALEF_LIGATURES: [char; 8] = [
    '\u{FEF5}', // Lam with Alef with Madda above, isolated
    '\u{FEF6}', // Lam with Alef with Madda above, final
    '\u{FEF7}', // Lam with Alef with Hamza above, isolated
    '\u{FEF8}', // Lam with Alef with Hamza above, final
    '\u{FEF9}', // Lam with Alef with Hamza below, isolated
    '\u{FEFA}', // Lam with Alef with Hamza below, final
    '\u{FEFB}', // Lam with Alef, isolated
    '\u{FEFC}', // Lam with Alef, final
];

/// Returns `true` if `ch` is a letter, digit or presentation form that takes
/// part in joining.
///
/// The ranges cover Arabic letters from Alef with Madda to Ghain, Tatweel to
/// Yeh, the extended Persian letters from Peh to Farsi Yeh and the Arabic
/// Presentation Forms-B letters from Alef with Madda (final) to the Lam-Alef
/// ligatures.
pub fn is_persian_char(ch: char) -> bool {
    match ch as u32 {
        // Alef with Madda above .. Ghain
        0x0622..=0x063A => true,
        // Tatweel .. Yeh
        0x0640..=0x064A => true,
        // Peh .. Farsi Yeh
        0x067E..=0x06CC => true,
        // Alef with Madda above final form .. Lam with Alef final form
        0xFE82..=0xFEFC => true,
        _ => false,
    }
}

/// Returns `true` if `ch` only joins to the letter before it.
///
/// These letters never take an initial or medial form, so the letter that
/// follows them always starts a new connected run. The Lam-Alef ligatures
/// behave the same way once they have been substituted into the text.
pub fn is_right_joining_only(ch: char) -> bool {
    match ch {
        ALEF | ALEF_WITH_HAMZA_ABOVE | ALEF_WITH_HAMZA_BELOW | ALEF_WITH_MADDA_ABOVE => true,
        DAL | THAL | REH | ZAIN | WAW | WAW_WITH_HAMZA_ABOVE | HAMZA => true,
        '\u{FEF5}'..='\u{FEFC}' => true,
        _ => false,
    }
}

/// Returns `true` for the Alef variants that combine with a preceding Lam.
pub fn is_alef(ch: char) -> bool {
    matches!(
        ch,
        ALEF | ALEF_WITH_HAMZA_ABOVE | ALEF_WITH_HAMZA_BELOW | ALEF_WITH_MADDA_ABOVE
    )
}
