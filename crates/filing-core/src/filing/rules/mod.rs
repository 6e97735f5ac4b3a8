//! Field rules: the pattern registry, lookup tables and the line and
//! capture functions the strategies are parameterized with.

pub mod address;
pub mod dates;
pub mod jurisdiction;
pub mod name;
pub mod ownership;
pub mod patterns;
pub mod scale;
pub mod sections;
pub mod tables;

pub use scale::{resolve_scale, Scale};
