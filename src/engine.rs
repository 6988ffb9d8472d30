//! The windowing engine.
//!
//! `ViewportEngine` owns the registered rows, the scroll offset and the
//! scrollbar. After every scroll input it recomputes which rows intersect the
//! viewport and reconciles the materialized set against it, so the number of
//! live fragments stays bounded by the viewport, not the dataset.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::Range;
use std::rc::Rc;

use log::{debug, trace};
use serde::Serialize;

use crate::config::GridConfig;
use crate::error::Result;
use crate::events::ListenerId;
use crate::input::{RawWheel, ScrollDelta};
use crate::layout::{LayoutRecord, RowLayout, ViewportState};
use crate::numfmt::{CurrencyFormatter, MoneyFormat};
use crate::render::RenderPane;
use crate::row_slot::RowSlot;
use crate::scrollbar::{Scrollbar, ScrollbarEvent, ScrollbarState, TrackZone};
use crate::types::{ColumnDescriptor, Row, Schema};

/// What one reconciliation pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub materialized: usize,
    pub retired: usize,
    pub repositioned: usize,
    pub visible_start: usize,
    pub visible_end: usize,
}

/// Scroll and scrollbar state for debugging and host introspection.
#[derive(Debug, Clone, Serialize)]
pub struct ScrollDebug {
    pub scroll_offset: f64,
    pub max_scroll: f64,
    pub content_height: f64,
    pub viewport_height: f64,
    pub row_count: usize,
    pub materialized_start: usize,
    pub materialized_end: usize,
    pub scrollbar: ScrollbarState,
}

pub struct ViewportEngine<P: RenderPane> {
    config: GridConfig,
    schema: Schema,
    formatter: Box<dyn CurrencyFormatter>,
    layout: RowLayout,
    slots: Vec<RowSlot<P::Fragment>>,
    viewport: ViewportState,
    scrollbar: Scrollbar,
    static_pane: P,
    floating_pane: P,
    /// Rows whose fragments are currently attached
    materialized: Range<usize>,
    /// Scrollbar notifications waiting to be applied
    pending: Rc<RefCell<VecDeque<ScrollbarEvent>>>,
}

impl<P: RenderPane> ViewportEngine<P> {
    /// Build an engine over two panes.
    ///
    /// # Errors
    /// Fails on an invalid config, an empty schema, or a static split past
    /// the last column.
    pub fn new(
        columns: Vec<ColumnDescriptor>,
        config: GridConfig,
        static_pane: P,
        floating_pane: P,
    ) -> Result<Self> {
        config.validate()?;
        let schema = Schema::new(columns, config.static_columns)?;

        let mut scrollbar = Scrollbar::new(config.track_length(), config.min_thumb_length);
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending);
        scrollbar.subscribe(move |event: &ScrollbarEvent| sink.borrow_mut().push_back(*event));

        debug!(
            "viewport engine: {}x{} viewport, {} columns ({} static), page {}px",
            config.viewport_width,
            config.viewport_height,
            schema.columns().len(),
            schema.static_columns(),
            config.page_size
        );

        Ok(Self {
            viewport: ViewportState::new(config.viewport_width, config.viewport_height),
            config,
            schema,
            formatter: Box::new(MoneyFormat::default()),
            layout: RowLayout::new(),
            slots: Vec::new(),
            scrollbar,
            static_pane,
            floating_pane,
            materialized: 0..0,
            pending,
        })
    }

    /// Replace the currency formatter used for amount cells.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl CurrencyFormatter + 'static) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// Replace the currency formatter. Rows already on screen keep their text
    /// until they are rebuilt.
    pub fn set_formatter(&mut self, formatter: impl CurrencyFormatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    /// Append a row with the configured default height.
    pub fn register_row(&mut self, row: Row) -> usize {
        let height = self.config.row_height;
        self.register_row_with_height(row, height)
    }

    /// Append a row below the current content. Returns its index.
    pub fn register_row_with_height(&mut self, row: Row, height: f64) -> usize {
        self.layout.push(height);
        self.viewport.set_content_height(self.layout.content_height());
        self.slots.push(RowSlot::new(row));
        self.slots.len() - 1
    }

    /// Scroll by `pixels`, clamped to the content, then redraw and resync
    /// the scrollbar.
    pub fn apply_scroll_delta(&mut self, pixels: f64) -> Result<ReconcileStats> {
        self.viewport.scroll_by(pixels);
        let stats = self.reconcile()?;
        self.sync_scrollbar();
        Ok(stats)
    }

    /// Jump to a fraction of the scrollable range and redraw.
    ///
    /// The scrollbar is not resynced: it is the one driving this call.
    pub fn scroll_to_fraction(&mut self, fraction: f64) -> Result<ReconcileStats> {
        self.viewport.scroll_to_fraction(fraction);
        self.reconcile()
    }

    /// Apply normalized wheel input. Only the vertical axis scrolls.
    pub fn handle_scroll(&mut self, delta: ScrollDelta) -> Result<Option<ReconcileStats>> {
        if !delta.is_vertical() {
            return Ok(None);
        }
        self.apply_scroll_delta(delta.pixels).map(Some)
    }

    pub fn handle_wheel(&mut self, raw: RawWheel) -> Result<Option<ReconcileStats>> {
        let delta = ScrollDelta::from_raw(raw, &self.config);
        self.handle_scroll(delta)
    }

    /// Materialize rows that entered the viewport, retire rows that left it,
    /// and reposition the rest.
    pub fn reconcile(&mut self) -> Result<ReconcileStats> {
        let old = self.materialized.clone();
        let new = self
            .layout
            .visible_range(self.viewport.scroll_offset(), self.viewport.height);
        let mut stats = ReconcileStats {
            visible_start: new.start,
            visible_end: new.end,
            ..ReconcileStats::default()
        };

        if let Err(e) = self.reconcile_ranges(&old, &new, &mut stats) {
            // Keep tracking everything that may still be attached
            self.materialized = if old.is_empty() {
                new
            } else if new.is_empty() {
                old
            } else {
                old.start.min(new.start)..old.end.max(new.end)
            };
            return Err(e);
        }
        self.materialized = new;

        trace!(
            "reconcile at {}: rows {}..{} (+{} -{} ~{})",
            self.viewport.scroll_offset(),
            stats.visible_start,
            stats.visible_end,
            stats.materialized,
            stats.retired,
            stats.repositioned
        );
        Ok(stats)
    }

    fn reconcile_ranges(
        &mut self,
        old: &Range<usize>,
        new: &Range<usize>,
        stats: &mut ReconcileStats,
    ) -> Result<()> {
        for index in old.clone() {
            if new.contains(&index) {
                continue;
            }
            if let Some(slot) = self.slots.get_mut(index) {
                if slot.retire(&mut self.static_pane, &mut self.floating_pane)? {
                    stats.retired += 1;
                }
            }
        }

        for index in new.clone() {
            let Some(record) = self.layout.get(index).copied() else {
                continue;
            };
            let translate = self.viewport.to_screen(record.offset);
            let Some(slot) = self.slots.get_mut(index) else {
                continue;
            };
            let built = slot.materialize(
                &self.schema,
                self.formatter.as_ref(),
                &mut self.static_pane,
                &mut self.floating_pane,
                translate,
            )?;
            if built {
                stats.materialized += 1;
            } else {
                stats.repositioned += 1;
            }
        }
        Ok(())
    }

    /// Push content size and scroll position into the scrollbar.
    pub fn sync_scrollbar(&mut self) {
        self.scrollbar.set_length(self.viewport.length_fraction());
        self.scrollbar.set_position(self.viewport.position_fraction());
    }

    /// Reconcile and resync the scrollbar.
    pub fn refresh(&mut self) -> Result<ReconcileStats> {
        let stats = self.reconcile()?;
        self.sync_scrollbar();
        Ok(stats)
    }

    /// Change the viewport size, keeping the scroll offset in range.
    ///
    /// # Errors
    /// Returns [`crate::GridError::InvalidConfig`] and leaves the grid untouched if
    /// the new size fails [`GridConfig::validate`]; otherwise propagates
    /// render failures.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<ReconcileStats> {
        let config = GridConfig {
            viewport_width: width,
            viewport_height: height,
            ..self.config.clone()
        };
        config.validate()?;

        debug!("resize viewport to {width}x{height}");
        self.config = config;
        self.viewport.resize(width, height);
        self.scrollbar.set_track_length(self.config.track_length());
        self.refresh()
    }

    /// Pointer pressed on the scrollbar track, `y` relative to the track top.
    pub fn scrollbar_pointer_down(&mut self, y: f64) -> Result<TrackZone> {
        let zone = self.scrollbar.pointer_down(y);
        self.dispatch_scrollbar_events()?;
        Ok(zone)
    }

    pub fn scrollbar_pointer_move(&mut self, y: f64) -> Result<()> {
        self.scrollbar.pointer_move(y);
        self.dispatch_scrollbar_events()
    }

    pub fn scrollbar_pointer_up(&mut self, y: f64) -> Result<()> {
        self.scrollbar.pointer_up(y);
        self.dispatch_scrollbar_events()
    }

    pub fn cancel_drag(&mut self) {
        self.scrollbar.cancel_drag();
    }

    fn dispatch_scrollbar_events(&mut self) -> Result<()> {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                return Ok(());
            };
            let result = match event {
                ScrollbarEvent::PageUp => self.apply_scroll_delta(-self.config.page_size),
                ScrollbarEvent::PageDown => self.apply_scroll_delta(self.config.page_size),
                ScrollbarEvent::ScrollTo(fraction) => self.scroll_to_fraction(fraction),
            };
            if let Err(e) = result {
                self.pending.borrow_mut().clear();
                return Err(e);
            }
        }
    }

    /// Observe scrollbar notifications.
    ///
    /// Listeners run while the scrollbar publishes, before the engine applies
    /// the event, so the scroll offset they see is the one before the gesture.
    pub fn subscribe_scrollbar(
        &mut self,
        listener: impl FnMut(&ScrollbarEvent) + 'static,
    ) -> ListenerId {
        self.scrollbar.subscribe(listener)
    }

    pub fn unsubscribe_scrollbar(&mut self, id: ListenerId) -> bool {
        self.scrollbar.unsubscribe(id)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset()
    }

    pub fn content_height(&self) -> f64 {
        self.viewport.content_height()
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn row_count(&self) -> usize {
        self.layout.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.slots.get(index).map(RowSlot::row)
    }

    pub fn layout_record(&self, index: usize) -> Option<LayoutRecord> {
        self.layout.get(index).copied()
    }

    pub fn is_materialized(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(RowSlot::is_materialized)
    }

    pub fn materialized_range(&self) -> Range<usize> {
        self.materialized.clone()
    }

    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    pub fn scrollbar_state(&self) -> ScrollbarState {
        self.scrollbar.state()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn static_pane(&self) -> &P {
        &self.static_pane
    }

    pub fn floating_pane(&self) -> &P {
        &self.floating_pane
    }

    pub fn scroll_debug(&self) -> ScrollDebug {
        ScrollDebug {
            scroll_offset: self.viewport.scroll_offset(),
            max_scroll: self.viewport.max_scroll(),
            content_height: self.viewport.content_height(),
            viewport_height: self.viewport.height,
            row_count: self.layout.len(),
            materialized_start: self.materialized.start,
            materialized_end: self.materialized.end,
            scrollbar: self.scrollbar.state(),
        }
    }
}
