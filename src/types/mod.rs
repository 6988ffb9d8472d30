//! Data types for the grid: column schema, rows and cells.

mod column;
mod row;

pub use column::*;
pub use row::*;
