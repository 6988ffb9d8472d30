//! Per-row render lifecycle.
//!
//! A slot lives as long as its row is registered. Its fragments come and go:
//! they are built when the row scrolls into view and dropped when it leaves.

use crate::error::{GridError, Result};
use crate::numfmt::CurrencyFormatter;
use crate::render::RenderPane;
use crate::types::{Row, Schema};

/// Render state of one row.
#[derive(Debug)]
pub enum SlotState<F> {
    Unmaterialized,
    Materialized {
        static_fragment: F,
        floating_fragment: F,
    },
}

#[derive(Debug)]
pub struct RowSlot<F> {
    row: Row,
    state: SlotState<F>,
}

impl<F> RowSlot<F> {
    pub fn new(row: Row) -> Self {
        Self {
            row,
            state: SlotState::Unmaterialized,
        }
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    pub fn state(&self) -> &SlotState<F> {
        &self.state
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.state, SlotState::Materialized { .. })
    }

    /// Build and attach both fragments, then place them at `translate`.
    ///
    /// On an already materialized slot this only repositions. Returns true
    /// if fragments were built.
    ///
    /// # Errors
    /// Propagates render target failures. Nothing stays attached when one
    /// pane rejects its fragment.
    pub fn materialize<P>(
        &mut self,
        schema: &Schema,
        formatter: &dyn CurrencyFormatter,
        static_pane: &mut P,
        floating_pane: &mut P,
        translate: f64,
    ) -> Result<bool>
    where
        P: RenderPane<Fragment = F>,
    {
        if self.is_materialized() {
            self.reposition(static_pane, floating_pane, translate)?;
            return Ok(false);
        }

        let (static_cells, floating_cells) = schema.partition(&self.row.cells, formatter);
        let static_fragment = static_pane.build_fragment(&static_cells)?;
        let floating_fragment = floating_pane.build_fragment(&floating_cells)?;

        static_pane.append(&static_fragment)?;
        if let Err(e) = floating_pane.append(&floating_fragment) {
            let _ = static_pane.remove(&static_fragment);
            return Err(e);
        }

        self.state = SlotState::Materialized {
            static_fragment,
            floating_fragment,
        };
        self.reposition(static_pane, floating_pane, translate)?;
        Ok(true)
    }

    /// Move both fragments to `translate` without rebuilding them.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidTransition`] if the slot is unmaterialized.
    pub fn reposition<P>(
        &self,
        static_pane: &mut P,
        floating_pane: &mut P,
        translate: f64,
    ) -> Result<()>
    where
        P: RenderPane<Fragment = F>,
    {
        match &self.state {
            SlotState::Materialized {
                static_fragment,
                floating_fragment,
            } => {
                static_pane.set_translation(static_fragment, translate)?;
                floating_pane.set_translation(floating_fragment, translate)
            }
            SlotState::Unmaterialized => Err(GridError::InvalidTransition(
                "reposition on an unmaterialized row",
            )),
        }
    }

    /// Detach and drop both fragments. A no-op on an unmaterialized slot;
    /// returns true if fragments were removed.
    ///
    /// # Errors
    /// Propagates render target failures. The slot is unmaterialized either way.
    pub fn retire<P>(&mut self, static_pane: &mut P, floating_pane: &mut P) -> Result<bool>
    where
        P: RenderPane<Fragment = F>,
    {
        match std::mem::replace(&mut self.state, SlotState::Unmaterialized) {
            SlotState::Materialized {
                static_fragment,
                floating_fragment,
            } => {
                let left = static_pane.remove(&static_fragment);
                let right = floating_pane.remove(&floating_fragment);
                left.and(right)?;
                Ok(true)
            }
            SlotState::Unmaterialized => Ok(false),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::numfmt::MoneyFormat;
    use crate::render::{FragmentId, RecordingPane};
    use crate::types::{Cell, CellContent, ColumnDescriptor};

    fn schema() -> Schema {
        let mut cols = vec![ColumnDescriptor::text("Name")];
        cols.extend((1..6).map(|i| ColumnDescriptor::amount(format!("C{i}"))));
        Schema::new(cols, 4).unwrap()
    }

    fn slot() -> RowSlot<FragmentId> {
        let mut cells = vec![Cell::Text("Hierarchy-Level-1".into())];
        cells.extend((1..6).map(|i| Cell::Amount(f64::from(i) * 1000.0)));
        RowSlot::new(Row::new(cells))
    }

    fn fragments(slot: &RowSlot<FragmentId>) -> (FragmentId, FragmentId) {
        match slot.state() {
            SlotState::Materialized {
                static_fragment,
                floating_fragment,
            } => (*static_fragment, *floating_fragment),
            SlotState::Unmaterialized => panic!("slot not materialized"),
        }
    }

    #[test]
    fn test_materialize_splits_cells() {
        let (mut left, mut right) = (RecordingPane::new(), RecordingPane::new());
        let mut slot = slot();
        let fmt = MoneyFormat::default();

        assert!(slot
            .materialize(&schema(), &fmt, &mut left, &mut right, 96.0)
            .unwrap());
        let (s, f) = fragments(&slot);
        let s = left.get(s).unwrap();
        let f = right.get(f).unwrap();
        assert_eq!(s.cells.len(), 4);
        assert_eq!(f.cells.len(), 2);
        assert_eq!(s.cells[0], CellContent::Label("Hierarchy-Level-1".into()));
        assert_eq!(s.cells[1], CellContent::Field("1,000.00".into()));
        assert_eq!(s.translation, 96.0);
        assert_eq!(f.translation, 96.0);
    }

    #[test]
    fn test_materialize_twice_only_repositions() {
        let (mut left, mut right) = (RecordingPane::new(), RecordingPane::new());
        let mut slot = slot();
        let fmt = MoneyFormat::default();
        slot.materialize(&schema(), &fmt, &mut left, &mut right, 0.0)
            .unwrap();
        let first = fragments(&slot);
        assert!(!slot
            .materialize(&schema(), &fmt, &mut left, &mut right, -12.0)
            .unwrap());
        assert_eq!(fragments(&slot), first);
        assert_eq!(left.stats().built, 1);
        assert_eq!(left.get(first.0).unwrap().translation, -12.0);
    }

    #[test]
    fn test_round_trip_builds_fresh_fragments() {
        let (mut left, mut right) = (RecordingPane::new(), RecordingPane::new());
        let mut slot = slot();
        let fmt = MoneyFormat::default();

        slot.materialize(&schema(), &fmt, &mut left, &mut right, 0.0)
            .unwrap();
        let first = fragments(&slot);
        assert!(slot.retire(&mut left, &mut right).unwrap());
        assert!(!slot.is_materialized());
        slot.materialize(&schema(), &fmt, &mut left, &mut right, 32.0)
            .unwrap();
        let second = fragments(&slot);

        assert_ne!(first, second);
        assert!(!left.contains(first.0));
        assert!(!right.contains(first.1));
        assert!(left.contains(second.0));
        assert!(right.contains(second.1));
        assert_eq!(left.attached_count(), 1);
        assert_eq!(right.attached_count(), 1);
    }

    #[test]
    fn test_retire_unmaterialized_is_noop() {
        let (mut left, mut right) = (RecordingPane::new(), RecordingPane::new());
        let mut slot = slot();
        assert!(!slot.retire(&mut left, &mut right).unwrap());
        assert_eq!(left.stats().removed, 0);
    }

    #[test]
    fn test_reposition_unmaterialized_is_error() {
        let (mut left, mut right) = (RecordingPane::new(), RecordingPane::new());
        let err = slot().reposition(&mut left, &mut right, 0.0).unwrap_err();
        assert!(matches!(err, GridError::InvalidTransition(_)));
    }
}
