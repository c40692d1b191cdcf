//! Terminal output formatting
//!
//! Share text and the glyph/keyboard helpers used by both front ends.

pub mod formatters;
pub mod share;

pub use share::{SHARE_TRAILER, encode_share, share_header};
