//! Starfield background rendering for the byeol launch screen.
//!
//! A field of point stars drifts upward across the full drawn area, each
//! star wrapping back to the bottom edge in a fresh column when it leaves
//! the top. The field is regenerated from scratch whenever the drawn
//! area's dimensions change.

mod chars;
mod star;
mod state;

pub use star::Star;
pub use state::StarfieldState;
