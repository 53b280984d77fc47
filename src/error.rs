//! Error types

use std::fmt;

/// Error returned when constructing a `Shaper`
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ShapingError {
    /// The input text was empty or absent.
    EmptyInput,
}

impl fmt::Display for ShapingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapingError::EmptyInput => write!(f, "input is not specified"),
        }
    }
}

impl std::error::Error for ShapingError {}
