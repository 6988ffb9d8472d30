//! Render pane trait for pluggable render targets.
//!
//! A pane is a surface that holds row fragments. The engine only ever asks
//! it to build, attach, detach and vertically translate fragments, so the
//! windowing logic can run without a real rendering surface.

use crate::error::Result;
use crate::types::CellContent;

pub trait RenderPane {
    /// Handle to one row's visual representation within this pane.
    type Fragment;

    /// Build a detached fragment holding `cells` in order.
    fn build_fragment(&mut self, cells: &[CellContent]) -> Result<Self::Fragment>;

    /// Attach a fragment to the pane.
    fn append(&mut self, fragment: &Self::Fragment) -> Result<()>;

    /// Detach a fragment from the pane.
    fn remove(&mut self, fragment: &Self::Fragment) -> Result<()>;

    /// Place an attached fragment `offset` pixels below the pane's top.
    fn set_translation(&mut self, fragment: &Self::Fragment, offset: f64) -> Result<()>;
}
