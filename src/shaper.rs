//! Shaping of logical text into presentation forms.

use std::fmt;

use log::{debug, trace};

use crate::error::ShapingError;
use crate::position::{select, Selection};
use crate::table::is_shapeable;

/// Shape `text` into presentation forms.
///
/// Returns an empty string for empty input.
pub fn shape_text(text: &str) -> String {
    let mut buffer: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut ligatures = 0;

    let mut i = 0;
    while i < buffer.len() {
        match select(&buffer, i) {
            Selection::Unchanged(ch) => out.push(ch),
            Selection::Fixed(replacement) => replacement.push_to(&mut out),
            Selection::Form(_, ch) => out.push(ch),
            Selection::Ligature(ch) => {
                trace!("lam-alef at {}: U+{:04X}", i, ch as u32);
                // Lam and Alef become a single character so that later
                // neighbour checks see the ligature.
                buffer[i] = ch;
                buffer.remove(i + 1);
                ligatures += 1;
                out.push(ch);
            }
        }
        i += 1;
    }

    debug!(
        "shaped {} chars into {} ({} ligatures)",
        buffer.len() + ligatures,
        buffer.len(),
        ligatures
    );
    out
}

/// Shapes a single piece of text.
///
/// The input is kept so that repeated calls to [`Shaper::shape`] always start
/// from the logical text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shaper {
    input: String,
    text: String,
}

impl Shaper {
    pub fn new(text: impl Into<String>) -> Result<Shaper, ShapingError> {
        let input = text.into();
        if input.is_empty() {
            return Err(ShapingError::EmptyInput);
        }
        Ok(Shaper {
            text: input.clone(),
            input,
        })
    }

    /// Construct from text that may be absent.
    pub fn new_opt(text: Option<&str>) -> Result<Shaper, ShapingError> {
        text.ok_or(ShapingError::EmptyInput)
            .and_then(|text| Shaper::new(text))
    }

    /// Shape the input and keep the result as the current text.
    pub fn shape(&mut self) -> &str {
        self.text = shape_text(&self.input);
        &self.text
    }

    /// The current text: the input until [`Shaper::shape`] is called, the
    /// shaped text after.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns `true` if shaping could change the input.
    pub fn needs_shaping(&self) -> bool {
        self.input.chars().any(is_shapeable)
    }
}

impl fmt::Display for Shaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
