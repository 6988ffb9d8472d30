//! Scrollbar interaction tests
//!
//! Thumb drags, track paging, and how scrollbar notifications reach the
//! viewport engine and host listeners.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{create_test_grid, VIEWPORT_HEIGHT};
use splitgrid::{ScrollbarEvent, TrackZone};

fn record_events<P: splitgrid::RenderPane>(
    grid: &mut splitgrid::ViewportEngine<P>,
) -> Rc<RefCell<Vec<ScrollbarEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    grid.subscribe_scrollbar(move |e: &ScrollbarEvent| sink.borrow_mut().push(*e));
    log
}

// =============================================================================
// THUMB DRAG
// =============================================================================

#[test]
fn test_drag_to_half_way() {
    let mut grid = create_test_grid(100_000);
    grid.refresh().unwrap();
    let events = record_events(&mut grid);

    let state = grid.scrollbar_state();
    assert_eq!(state.track_length, 478.0);
    assert_eq!(state.thumb_length, 40.0);
    assert_eq!(state.thumb_position, 0.0);

    assert_eq!(grid.scrollbar_pointer_down(20.0).unwrap(), TrackZone::Thumb);
    assert!(grid.scrollbar().is_dragging());
    for step in 1..10_u32 {
        grid.scrollbar_pointer_move(20.0 + 219.0 * f64::from(step) / 10.0)
            .unwrap();
    }
    grid.scrollbar_pointer_up(239.0).unwrap();
    assert!(!grid.scrollbar().is_dragging());

    let fractions: Vec<f64> = events
        .borrow()
        .iter()
        .map(|e| match e {
            ScrollbarEvent::ScrollTo(f) => *f,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(fractions.len(), 10);
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(fractions.last().copied(), Some(0.5));

    let max_scroll = 100_000.0 * 32.0 - VIEWPORT_HEIGHT;
    assert_eq!(grid.scroll_offset(), 0.5 * max_scroll);
    assert_eq!(grid.materialized_range(), 49_992..50_008);
}

#[test]
fn test_drag_clamps_past_track_ends() {
    let mut grid = create_test_grid(10_000);
    grid.refresh().unwrap();
    grid.scrollbar_pointer_down(5.0).unwrap();
    grid.scrollbar_pointer_move(10_000.0).unwrap();
    assert_eq!(grid.scroll_offset(), grid.viewport().max_scroll());
    grid.scrollbar_pointer_up(-10_000.0).unwrap();
    assert_eq!(grid.scroll_offset(), 0.0);
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut grid = create_test_grid(10_000);
    grid.refresh().unwrap();
    let events = record_events(&mut grid);
    grid.scrollbar_pointer_move(200.0).unwrap();
    grid.scrollbar_pointer_up(200.0).unwrap();
    assert!(events.borrow().is_empty());
    assert_eq!(grid.scroll_offset(), 0.0);
}

#[test]
fn test_cancelled_drag_stops_emitting() {
    let mut grid = create_test_grid(10_000);
    grid.refresh().unwrap();
    let events = record_events(&mut grid);
    grid.scrollbar_pointer_down(10.0).unwrap();
    grid.scrollbar_pointer_move(50.0).unwrap();
    grid.cancel_drag();
    grid.scrollbar_pointer_move(300.0).unwrap();
    assert_eq!(events.borrow().len(), 1);
}

// =============================================================================
// TRACK PAGING
// =============================================================================

#[test]
fn test_two_page_downs_clamp_at_bottom() {
    // 500 rows: 16000px of content, 15520px of scroll
    let mut grid = create_test_grid(500);
    grid.refresh().unwrap();
    let events = record_events(&mut grid);

    assert_eq!(grid.scrollbar_pointer_down(470.0).unwrap(), TrackZone::Below);
    assert_eq!(grid.scroll_offset(), 9_600.0);
    assert_eq!(grid.scrollbar_pointer_down(470.0).unwrap(), TrackZone::Below);
    assert_eq!(grid.scroll_offset(), 15_520.0);

    assert_eq!(
        *events.borrow(),
        vec![ScrollbarEvent::PageDown, ScrollbarEvent::PageDown]
    );
    assert_eq!(grid.scrollbar_state().position_fraction, 1.0);
    assert!(!grid.scrollbar().is_dragging());
}

#[test]
fn test_page_up_from_bottom() {
    let mut grid = create_test_grid(500);
    grid.refresh().unwrap();
    grid.apply_scroll_delta(1e9).unwrap();
    assert_eq!(grid.scrollbar_pointer_down(10.0).unwrap(), TrackZone::Above);
    assert_eq!(grid.scroll_offset(), 15_520.0 - 9_600.0);
}

#[test]
fn test_page_syncs_scrollbar_but_drag_path_does_not() {
    let mut grid = create_test_grid(1_000);
    grid.refresh().unwrap();

    grid.scroll_to_fraction(0.5).unwrap();
    assert_eq!(grid.scrollbar_state().position_fraction, 0.0);

    grid.apply_scroll_delta(0.0).unwrap();
    assert_eq!(grid.scrollbar_state().position_fraction, 0.5);
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let mut grid = create_test_grid(500);
    grid.refresh().unwrap();
    let log = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&log);
    let id = grid.subscribe_scrollbar(move |_: &ScrollbarEvent| *sink.borrow_mut() += 1);
    grid.scrollbar_pointer_down(470.0).unwrap();
    assert!(grid.unsubscribe_scrollbar(id));
    assert!(!grid.unsubscribe_scrollbar(id));
    grid.scrollbar_pointer_down(470.0).unwrap();
    assert_eq!(*log.borrow(), 1);
    // Engine still pages with the host listener gone
    assert_eq!(grid.scroll_offset(), 15_520.0);
}

#[test]
fn test_resize_shrinks_track() {
    let mut grid = create_test_grid(1_000);
    grid.refresh().unwrap();
    grid.resize(960.0, 240.0).unwrap();
    let state = grid.scrollbar_state();
    assert_eq!(state.track_length, 238.0);
    assert!(state.thumb_length >= 40.0);
    assert_eq!(grid.materialized_range(), 0..8);
}
