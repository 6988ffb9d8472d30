//! Pointer handlers for the scrollbar track.
//!
//! A press on the thumb opens a [`DragSession`] that listens for moves and
//! the release on the document, so the drag survives the pointer leaving the
//! track. The session detaches its listeners on release and again on drop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlElement, MouseEvent};

use super::{SharedState, SplitGrid};
use crate::error::{GridError, Result};
use crate::render::dom::js_err;
use crate::scrollbar::TrackZone;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// Scoped move/release subscription for one thumb drag.
pub(crate) struct DragSession {
    target: EventTarget,
    on_move: MouseClosure,
    on_up: MouseClosure,
    attached: bool,
}

impl DragSession {
    fn start(state: &Rc<RefCell<SharedState>>, target: EventTarget) -> Result<Self> {
        let on_move = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                SplitGrid::internal_drag_move(&state, &event);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_up = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                SplitGrid::internal_drag_end(&state, &event);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        target
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .map_err(js_err)?;
        if let Err(e) =
            target.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
        {
            let _ = target.remove_event_listener_with_callback(
                "mousemove",
                on_move.as_ref().unchecked_ref(),
            );
            return Err(js_err(e));
        }

        Ok(Self {
            target,
            on_move,
            on_up,
            attached: true,
        })
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        let _ = self
            .target
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .target
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
        self.attached = false;
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.detach();
    }
}

fn track_y(track: &HtmlElement, event: &MouseEvent) -> f64 {
    let rect = track.get_bounding_client_rect();
    f64::from(event.client_y()) - rect.top()
}

impl SplitGrid {
    /// Attach the press handler to the track.
    pub(crate) fn wire_track(
        state: &Rc<RefCell<SharedState>>,
        track: &HtmlElement,
    ) -> Result<MouseClosure> {
        let closure = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                Self::internal_track_down(&state, &event);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        track
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(closure)
    }

    pub(crate) fn internal_track_down(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        let result = (|| -> Result<()> {
            let mut s = state.borrow_mut();
            // A press while a drag is open means the release was lost
            if let Some(mut stale) = s.drag.take() {
                stale.detach();
                s.engine.cancel_drag();
            }
            s.retired_drag = None;

            let y = track_y(&s.track, event);
            let zone = s.engine.scrollbar_pointer_down(y)?;
            if zone == TrackZone::Thumb {
                let document = web_sys::window()
                    .and_then(|window| window.document())
                    .ok_or(GridError::MissingRegion("document"))?;
                s.drag = Some(DragSession::start(state, document.into())?);
            }
            Self::paint_thumb(&s)
        })();
        if let Err(e) = result {
            log::warn!("scrollbar press failed: {e}");
        }
    }

    pub(crate) fn internal_drag_move(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        let result = (|| -> Result<()> {
            let mut s = state.borrow_mut();
            let y = track_y(&s.track, event);
            s.engine.scrollbar_pointer_move(y)?;
            Self::paint_thumb(&s)
        })();
        if let Err(e) = result {
            log::warn!("scrollbar drag failed: {e}");
        }
    }

    pub(crate) fn internal_drag_end(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        let result = (|| -> Result<()> {
            let mut s = state.borrow_mut();
            let y = track_y(&s.track, event);
            let outcome = s.engine.scrollbar_pointer_up(y);
            // Detach now; the closures themselves are freed on the next press
            if let Some(mut session) = s.drag.take() {
                session.detach();
                s.retired_drag = Some(session);
            }
            outcome?;
            Self::paint_thumb(&s)
        })();
        if let Err(e) = result {
            log::warn!("scrollbar release failed: {e}");
        }
    }
}
