//! Shared helpers for grid integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::cell::Cell as FlagCell;
use std::rc::Rc;

use splitgrid::render::FragmentId;
use splitgrid::{
    Cell, CellContent, ColumnDescriptor, GridConfig, GridError, RecordingPane, RenderPane, Row,
    ViewportEngine,
};

pub const VIEWPORT_HEIGHT: f64 = 480.0;
pub const ROW_HEIGHT: f64 = 32.0;

/// One text column followed by `amounts` amount columns.
pub fn columns(amounts: usize) -> Vec<ColumnDescriptor> {
    let mut cols = vec![ColumnDescriptor::text("Hierarchy")];
    cols.extend((1..=amounts).map(|i| ColumnDescriptor::amount(format!("P{i}"))));
    cols
}

pub fn row(index: usize, amounts: usize) -> Row {
    std::iter::once(Cell::Text(format!("Hierarchy-Level-{}", index + 1)))
        .chain((1..=amounts).map(|p| Cell::Amount((index * 10 + p) as f64)))
        .collect()
}

/// Grid with the default 960x480 viewport, 4 static columns, `rows` rows of 32px.
pub fn create_test_grid(rows: usize) -> ViewportEngine<RecordingPane> {
    let mut grid = ViewportEngine::new(
        columns(7),
        GridConfig::default(),
        RecordingPane::new(),
        RecordingPane::new(),
    )
    .expect("valid grid");
    for i in 0..rows {
        grid.register_row(row(i, 7));
    }
    grid
}

/// Recording pane that can be told to reject appends.
#[derive(Default)]
pub struct FlakyPane {
    pub inner: RecordingPane,
    pub fail_appends: Rc<FlagCell<bool>>,
}

impl RenderPane for FlakyPane {
    type Fragment = FragmentId;

    fn build_fragment(&mut self, cells: &[CellContent]) -> splitgrid::Result<FragmentId> {
        self.inner.build_fragment(cells)
    }

    fn append(&mut self, fragment: &FragmentId) -> splitgrid::Result<()> {
        if self.fail_appends.get() {
            return Err(GridError::Render("append rejected".into()));
        }
        self.inner.append(fragment)
    }

    fn remove(&mut self, fragment: &FragmentId) -> splitgrid::Result<()> {
        self.inner.remove(fragment)
    }

    fn set_translation(&mut self, fragment: &FragmentId, offset: f64) -> splitgrid::Result<()> {
        self.inner.set_translation(fragment, offset)
    }
}
