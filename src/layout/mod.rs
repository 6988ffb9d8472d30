//! Row layout and viewport state.
//!
//! This module handles:
//! - Layout records (vertical offset + height) for every registered row
//! - Binary search for the rows intersecting the viewport
//! - Scroll offset clamping and fraction conversion

mod rows;
mod viewport;

pub use rows::{LayoutRecord, RowLayout};
pub use viewport::ViewportState;
