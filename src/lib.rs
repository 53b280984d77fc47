#![warn(rust_2018_idioms)]

//! Contextual shaping of Persian and Arabic text into presentation forms.
//!
//! Renderers that draw text glyph by glyph, without OpenType script shaping,
//! need Arabic-script letters supplied in their positional forms. This crate
//! replaces each logical letter with the isolated, initial, medial or final
//! presentation form dictated by its neighbours and combines Lam followed by
//! an Alef variant into a single ligature.
//!
//! ```
//! use persian_shaper::Shaper;
//!
//! let mut shaper = Shaper::new("\u{0644}\u{0627}").unwrap();
//! assert_eq!(shaper.shape(), "\u{FEFB}");
//! ```

pub mod error;
/// Joining classification.
pub mod joining;
pub mod position;
pub mod shaper;
/// Presentation form table.
pub mod table;
pub mod unicode;

pub use crate::error::ShapingError;
pub use crate::shaper::{shape_text, Shaper};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
