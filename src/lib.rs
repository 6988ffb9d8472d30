//! splitgrid - virtualized split-pane grid
//!
//! Renders very large tables inside a fixed viewport by materializing only
//! the rows that intersect it:
//! - Leading columns in a static pane, the rest in a floating pane, scrolled
//!   vertically in lockstep
//! - Custom scrollbar whose thumb reflects the true content height
//! - Fragment count bounded by the viewport, not the dataset
//! - Headless render target for tests, DOM target via WebAssembly
//!
//! # Usage (Rust)
//!
//! ```
//! use splitgrid::{ColumnDescriptor, GridConfig, RecordingPane, Row, ViewportEngine};
//!
//! let columns = vec![ColumnDescriptor::text("Name"), ColumnDescriptor::amount("Total")];
//! let config = GridConfig { static_columns: 1, ..GridConfig::default() };
//! let mut grid = ViewportEngine::new(columns, config, RecordingPane::new(), RecordingPane::new())?;
//! for i in 0..100_000 {
//!     grid.register_row(Row::new(vec![format!("Level-{i}").into(), (i as f64).into()]));
//! }
//! grid.refresh()?;
//! assert_eq!(grid.materialized_range(), 0..16);
//! # Ok::<(), splitgrid::GridError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SplitGrid } from 'splitgrid';
//! await init();
//! const grid = SplitGrid.create(columns, '#grid', { staticColumns: 4 });
//! rows.forEach(row => grid.registerRow(row));
//! grid.refresh();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod input;
pub mod layout;
pub mod numfmt;
pub mod render;
pub mod row_slot;
pub mod scrollbar;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::GridConfig;
pub use engine::{ReconcileStats, ScrollDebug, ViewportEngine};
pub use error::{GridError, Result};
pub use events::{EventChannel, ListenerId};
pub use input::{Axis, DeltaUnit, RawWheel, ScrollDelta};
pub use numfmt::{CurrencyFormatter, MoneyFormat};
pub use render::{RecordingPane, RenderPane};
pub use row_slot::{RowSlot, SlotState};
pub use scrollbar::{Scrollbar, ScrollbarEvent, ScrollbarState, TrackZone};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::SplitGrid;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
