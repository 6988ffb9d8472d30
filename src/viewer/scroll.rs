//! Wheel handlers for `SplitGrid`.
//!
//! Modern `wheel` events and Firefox's legacy `DOMMouseScroll` both end up as
//! a [`RawWheel`] and go through the engine's single normalization path.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, UiEvent, WheelEvent};

use super::{SharedState, SplitGrid};
use crate::error::Result;
use crate::input::{Axis, DeltaUnit, RawWheel};
use crate::render::dom::js_err;

/// `DOMMouseScroll.axis` value for the vertical axis.
const LEGACY_VERTICAL_AXIS: f64 = 2.0;

impl SplitGrid {
    pub(crate) fn wire_wheel(
        state: &Rc<RefCell<SharedState>>,
        container: &HtmlElement,
    ) -> Result<(Closure<dyn FnMut(WheelEvent)>, Closure<dyn FnMut(UiEvent)>)> {
        let wheel = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |event: WheelEvent| {
                let (axis, delta) = if event.delta_y() != 0.0 {
                    (Axis::Vertical, event.delta_y())
                } else {
                    (Axis::Horizontal, event.delta_x())
                };
                if axis == Axis::Vertical {
                    event.prevent_default();
                }
                let raw = RawWheel::Magnitude {
                    axis,
                    delta,
                    unit: DeltaUnit::from_dom(event.delta_mode()),
                };
                Self::internal_wheel(&state, raw);
            }) as Box<dyn FnMut(WheelEvent)>)
        };
        container
            .add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())
            .map_err(js_err)?;

        let legacy = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |event: UiEvent| {
                let axis_value = js_sys::Reflect::get(event.as_ref(), &JsValue::from_str("axis"))
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(LEGACY_VERTICAL_AXIS);
                let axis = if (axis_value - LEGACY_VERTICAL_AXIS).abs() < f64::EPSILON {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                if axis == Axis::Vertical {
                    event.prevent_default();
                }
                let raw = RawWheel::Ticks {
                    axis,
                    ticks: event.detail(),
                };
                Self::internal_wheel(&state, raw);
            }) as Box<dyn FnMut(UiEvent)>)
        };
        container
            .add_event_listener_with_callback("DOMMouseScroll", legacy.as_ref().unchecked_ref())
            .map_err(js_err)?;

        Ok((wheel, legacy))
    }

    pub(crate) fn internal_wheel(state: &Rc<RefCell<SharedState>>, raw: RawWheel) {
        let result = (|| -> Result<()> {
            let mut s = state.borrow_mut();
            if s.engine.handle_wheel(raw)?.is_some() {
                Self::paint_thumb(&s)?;
            }
            Ok(())
        })();
        if let Err(e) = result {
            log::warn!("wheel scroll failed: {e}");
        }
    }
}
