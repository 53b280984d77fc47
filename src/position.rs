//! Selection of the presentation form for one buffer position.

use crate::joining::{classify, classify_before, JoinClass};
use crate::table::{self, JoiningForm, Replacement, ShapeEntry};
use crate::unicode::{is_alef, HAMZA, LAM, TEH_MARBUTA};

/// Outcome of shaping a single position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    /// The character has no table entry and is kept as is.
    Unchanged(char),
    /// The character is always replaced with the same text.
    Fixed(Replacement),
    /// A positional form of a joining letter.
    Form(JoiningForm, char),
    /// A Lam-Alef ligature standing in for this position and the next one.
    Ligature(char),
}

/// Select the output for position `i` of `buffer`.
///
/// `i` must be in bounds.
pub fn select(buffer: &[char], i: usize) -> Selection {
    let ch = buffer[i];
    let forms = match table::lookup(ch) {
        None => return Selection::Unchanged(ch),
        Some(ShapeEntry::Fixed(replacement)) => return Selection::Fixed(*replacement),
        Some(ShapeEntry::Positional(forms)) | Some(ShapeEntry::Alef(forms, _)) => forms,
    };

    if let Some(ligature) = resolve_lam_alef(buffer, i) {
        return Selection::Ligature(ligature);
    }

    let form = joining_form(buffer, i);
    Selection::Form(form, forms.get(form))
}

/// Returns the ligature for a Lam at `i` followed by an Alef variant.
///
/// The connected form is only used when the letter before the Lam joins
/// forwards. A right-joining-only letter before the Lam and the start of the
/// text both give the isolated ligature.
pub fn resolve_lam_alef(buffer: &[char], i: usize) -> Option<char> {
    if buffer.get(i) != Some(&LAM) {
        return None;
    }
    let alef = *buffer.get(i + 1).filter(|&&ch| is_alef(ch))?;
    let ligatures = table::lookup(alef).and_then(ShapeEntry::ligatures)?;

    match classify_before(buffer, i) {
        JoinClass::Joining => Some(ligatures.after_joining),
        JoinClass::Special | JoinClass::NonJoining => Some(ligatures.after_non_joining),
    }
}

/// Positional form of the joining letter at `i`, from its own class and the
/// classes of its neighbours.
pub fn joining_form(buffer: &[char], i: usize) -> JoiningForm {
    let prev = classify_before(buffer, i);
    let next = classify(buffer, i + 1);

    match classify(buffer, i) {
        JoinClass::Special => match prev {
            JoinClass::Joining => JoiningForm::Final,
            JoinClass::Special | JoinClass::NonJoining => JoiningForm::Isolated,
        },
        JoinClass::Joining => match prev {
            JoinClass::Special | JoinClass::NonJoining => match next {
                JoinClass::NonJoining => JoiningForm::Isolated,
                JoinClass::Special | JoinClass::Joining => JoiningForm::Initial,
            },
            JoinClass::Joining => {
                if buffer[i] == TEH_MARBUTA || buffer.get(i + 1) == Some(&HAMZA) {
                    if buffer[i - 1] == TEH_MARBUTA {
                        JoiningForm::Isolated
                    } else {
                        JoiningForm::Final
                    }
                } else if next == JoinClass::NonJoining {
                    JoiningForm::Final
                } else {
                    JoiningForm::Medial
                }
            }
        },
        JoinClass::NonJoining => JoiningForm::Isolated,
    }
}
