//! tscheck_core: Core utilities shared by every tscheck crate.
//!
//! Provides string interning, text positions, and the three-valued
//! `Tristate` used by lazily computed checker caches.

pub mod intern;
pub mod text;
pub mod tristate;

pub use intern::{InternedString, StringInterner};
pub use text::{TextRange, TextSpan};
pub use tristate::Tristate;
