//! Core types shared by the byeol launch screen crates.

mod color;
mod options;

pub use color::parse_color;
pub use options::StarfieldOptions;
