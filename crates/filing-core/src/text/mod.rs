//! Anchor location and windowing over the source text.

pub mod anchor;
pub mod window;

pub use anchor::{locate, locate_all, phrase_pattern, Anchor, AnchorMatch, Occurrence};
pub use window::{lines_until, prefix, suffix, window, Direction, Window};
