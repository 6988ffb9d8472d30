//! Custom scrollbar widget.
//!
//! Tracks thumb length and position as fractions of the track and turns
//! track-relative pointer gestures into [`ScrollbarEvent`]s. It never moves
//! content itself; the owner decides what a page or a drag means.

use serde::Serialize;

use crate::events::{EventChannel, ListenerId};

/// Notifications emitted by the scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollbarEvent {
    PageUp,
    PageDown,
    /// Thumb dragged to this fraction of the scrollable range
    ScrollTo(f64),
}

/// Where on the track a pointer landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackZone {
    Above,
    Thumb,
    Below,
}

/// Snapshot of the scrollbar geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollbarState {
    pub length_fraction: f64,
    pub position_fraction: f64,
    pub thumb_length: f64,
    pub thumb_position: f64,
    pub track_length: f64,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Pointer offset from the thumb's top edge at press time
    grip: f64,
}

#[derive(Debug)]
pub struct Scrollbar {
    track_length: f64,
    min_thumb_length: f64,
    thumb_length: f64,
    thumb_position: f64,
    position_fraction: f64,
    drag: Option<DragSession>,
    events: EventChannel<ScrollbarEvent>,
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Scrollbar {
    /// Create a scrollbar with a full-length thumb at the top.
    pub fn new(track_length: f64, min_thumb_length: f64) -> Self {
        let mut bar = Self {
            track_length: track_length.max(0.0),
            min_thumb_length: min_thumb_length.max(0.0),
            thumb_length: 0.0,
            thumb_position: 0.0,
            position_fraction: 0.0,
            drag: None,
            events: EventChannel::new(),
        };
        bar.set_length(1.0);
        bar.set_position(0.0);
        bar
    }

    /// Set thumb length as a fraction of the track, floored at the minimum.
    pub fn set_length(&mut self, fraction: f64) {
        let fraction = clamp_unit(fraction);
        self.thumb_length = (fraction * self.track_length).max(self.min_thumb_length);
        self.thumb_position = self.position_fraction * self.empty_track();
    }

    /// Move the thumb to a fraction of the empty track.
    pub fn set_position(&mut self, fraction: f64) {
        self.position_fraction = clamp_unit(fraction);
        self.thumb_position = self.position_fraction * self.empty_track();
    }

    /// Resize the track, keeping the thumb's fractional position.
    pub fn set_track_length(&mut self, track_length: f64) {
        let length = self.length_fraction();
        self.track_length = track_length.max(0.0);
        self.set_length(length);
    }

    pub fn length_fraction(&self) -> f64 {
        if self.track_length > 0.0 {
            clamp_unit(self.thumb_length / self.track_length)
        } else {
            1.0
        }
    }

    pub fn position_fraction(&self) -> f64 {
        self.position_fraction
    }

    pub fn thumb_length(&self) -> f64 {
        self.thumb_length
    }

    pub fn thumb_position(&self) -> f64 {
        self.thumb_position
    }

    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    pub fn state(&self) -> ScrollbarState {
        ScrollbarState {
            length_fraction: self.length_fraction(),
            position_fraction: self.position_fraction,
            thumb_length: self.thumb_length,
            thumb_position: self.thumb_position,
            track_length: self.track_length,
        }
    }

    fn empty_track(&self) -> f64 {
        (self.track_length - self.thumb_length).max(0.0)
    }

    /// Classify a track-relative y coordinate.
    pub fn zone_at(&self, y: f64) -> TrackZone {
        if y < self.thumb_position {
            TrackZone::Above
        } else if y > self.thumb_position + self.thumb_length {
            TrackZone::Below
        } else {
            TrackZone::Thumb
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollbarEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer pressed on the track. Starts a drag on the thumb, pages otherwise.
    pub fn pointer_down(&mut self, y: f64) -> TrackZone {
        let zone = self.zone_at(y);
        match zone {
            TrackZone::Thumb => {
                self.drag = Some(DragSession {
                    grip: y - self.thumb_position,
                });
            }
            TrackZone::Above => self.events.publish(&ScrollbarEvent::PageUp),
            TrackZone::Below => self.events.publish(&ScrollbarEvent::PageDown),
        }
        zone
    }

    /// Pointer moved during a drag. Returns the emitted fraction, if any.
    pub fn pointer_move(&mut self, y: f64) -> Option<f64> {
        let session = self.drag?;
        let empty = self.empty_track();
        if empty <= 0.0 {
            return None;
        }
        let fraction = clamp_unit((y - session.grip) / empty);
        self.set_position(fraction);
        self.events.publish(&ScrollbarEvent::ScrollTo(fraction));
        Some(fraction)
    }

    /// Pointer released. A drag gets one final move, then ends.
    pub fn pointer_up(&mut self, y: f64) -> Option<f64> {
        let fraction = self.pointer_move(y);
        self.drag = None;
        fraction
    }

    /// End a drag without emitting anything.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(bar: &mut Scrollbar) -> Rc<RefCell<Vec<ScrollbarEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        bar.subscribe(move |e| sink.borrow_mut().push(*e));
        log
    }

    #[test]
    fn test_initial_geometry() {
        let bar = Scrollbar::new(478.0, 40.0);
        assert_eq!(bar.thumb_length(), 478.0);
        assert_eq!(bar.thumb_position(), 0.0);
        assert_eq!(bar.length_fraction(), 1.0);
    }

    #[test]
    fn test_length_clamped_and_floored() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.set_length(0.5);
        assert_eq!(bar.thumb_length(), 200.0);
        bar.set_length(0.0001);
        assert_eq!(bar.thumb_length(), 40.0);
        assert_eq!(bar.length_fraction(), 0.1);
        bar.set_length(3.0);
        assert_eq!(bar.thumb_length(), 400.0);
        bar.set_length(f64::NAN);
        assert_eq!(bar.thumb_length(), 40.0);
    }

    #[test]
    fn test_position_uses_empty_track() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.set_length(0.25);
        bar.set_position(0.5);
        assert_eq!(bar.thumb_position(), 150.0);
        bar.set_position(-1.0);
        assert_eq!(bar.position_fraction(), 0.0);
        bar.set_position(2.0);
        assert_eq!(bar.thumb_position(), 300.0);
    }

    #[test]
    fn test_page_zones() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.set_length(0.25);
        bar.set_position(0.5);
        let log = recorded(&mut bar);

        assert_eq!(bar.pointer_down(10.0), TrackZone::Above);
        assert_eq!(bar.pointer_down(390.0), TrackZone::Below);
        assert!(!bar.is_dragging());
        assert_eq!(
            *log.borrow(),
            vec![ScrollbarEvent::PageUp, ScrollbarEvent::PageDown]
        );
    }

    #[test]
    fn test_drag_session() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.set_length(0.25);
        let log = recorded(&mut bar);

        assert_eq!(bar.pointer_down(20.0), TrackZone::Thumb);
        assert!(bar.is_dragging());
        assert_eq!(bar.pointer_move(170.0), Some(0.5));
        assert_eq!(bar.pointer_up(320.0), Some(1.0));
        assert!(!bar.is_dragging());

        // Moves after release are ignored
        assert_eq!(bar.pointer_move(20.0), None);
        assert_eq!(
            *log.borrow(),
            vec![ScrollbarEvent::ScrollTo(0.5), ScrollbarEvent::ScrollTo(1.0)]
        );
    }

    #[test]
    fn test_drag_overshoot_clamps() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.set_length(0.25);
        bar.pointer_down(50.0);
        assert_eq!(bar.pointer_move(-500.0), Some(0.0));
        assert_eq!(bar.pointer_move(5000.0), Some(1.0));
        assert_eq!(bar.thumb_position(), 300.0);
    }

    #[test]
    fn test_cancel_drag_emits_nothing() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.set_length(0.25);
        let log = recorded(&mut bar);
        bar.pointer_down(5.0);
        bar.cancel_drag();
        assert_eq!(bar.pointer_up(200.0), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_full_thumb_drag_is_inert() {
        let mut bar = Scrollbar::new(400.0, 40.0);
        bar.pointer_down(100.0);
        assert_eq!(bar.pointer_move(300.0), None);
    }
}
