//! Joining classification of buffer positions.

use crate::unicode::{is_persian_char, is_right_joining_only};

/// How the character at a position takes part in joining.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoinClass {
    /// Joins only to the letter before it.
    Special,
    /// Joins on both sides.
    Joining,
    /// Does not join. Positions outside the buffer are also `NonJoining`.
    NonJoining,
}

/// Classify the character at `i` in the current state of `buffer`.
pub fn classify(buffer: &[char], i: usize) -> JoinClass {
    match buffer.get(i) {
        None => JoinClass::NonJoining,
        Some(&ch) if is_right_joining_only(ch) => JoinClass::Special,
        Some(&ch) if is_persian_char(ch) => JoinClass::Joining,
        Some(_) => JoinClass::NonJoining,
    }
}

/// Classify the character before `i`, treating the start of the buffer as a
/// word boundary.
pub fn classify_before(buffer: &[char], i: usize) -> JoinClass {
    match i.checked_sub(1) {
        Some(prev) => classify(buffer, prev),
        None => JoinClass::NonJoining,
    }
}
