//! Main SplitGrid struct - the WASM entry point for the DOM grid.
//!
//! This module provides the `SplitGrid` struct exported to JavaScript that:
//! - Locates the scrollbar track and both panes under a mount point
//! - Sizes the panes and builds the scrollbar thumb
//! - Owns the `ViewportEngine` drawing into two `DomPane`s
//! - Wires pointer and wheel input (see `events` and `scroll`)

mod events;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, UiEvent, WheelEvent};

use crate::config::GridConfig;
use crate::engine::ViewportEngine;
use crate::error::{GridError, Result};
use crate::render::dom::js_err;
use crate::render::DomPane;
use crate::types::{ColumnDescriptor, Row};

use events::DragSession;

/// Shared state that can be accessed by event handlers
pub(crate) struct SharedState {
    pub(crate) engine: ViewportEngine<DomPane>,
    pub(crate) track: HtmlElement,
    pub(crate) thumb: HtmlElement,
    /// Live drag session, if the thumb is held
    pub(crate) drag: Option<DragSession>,
    /// Last finished session; its listeners are already detached
    pub(crate) retired_drag: Option<DragSession>,
}

/// Render-target regions found under the mount point.
struct Regions {
    container: HtmlElement,
    track: HtmlElement,
    static_pane: HtmlElement,
    static_surface: HtmlElement,
    floating_pane: HtmlElement,
    floating_surface: HtmlElement,
}

fn query(document: &Document, selector: &str, name: &'static str) -> Result<HtmlElement> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or(GridError::MissingRegion(name))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GridError::MissingRegion(name))
}

impl Regions {
    fn find(document: &Document, mount: &str) -> Result<Self> {
        Ok(Self {
            container: query(document, mount, "mount point")?,
            track: query(document, &format!("{mount} .scrolltrack"), "scroll track")?,
            static_pane: query(document, &format!("{mount} .staticpane"), "static pane")?,
            static_surface: query(
                document,
                &format!("{mount} .staticpane .canvas.body"),
                "static pane surface",
            )?,
            floating_pane: query(document, &format!("{mount} .floatingpane"), "floating pane")?,
            floating_surface: query(
                document,
                &format!("{mount} .floatingpane .canvas.body"),
                "floating pane surface",
            )?,
        })
    }
}

fn set_px(element: &HtmlElement, property: &str, value: f64) -> Result<()> {
    element
        .style()
        .set_property(property, &format!("{value}px"))
        .map_err(js_err)
}

/// Size the container, panes and track from the config; returns the thumb.
fn apply_geometry(
    document: &Document,
    regions: &Regions,
    config: &GridConfig,
) -> Result<HtmlElement> {
    let container_width = config.viewport_width - config.scrollbar_width;
    let floating_width = (container_width - config.static_pane_width - 5.0).max(0.0);

    set_px(&regions.container, "width", container_width)?;
    set_px(&regions.container, "height", config.viewport_height)?;
    set_px(&regions.static_pane, "width", config.static_pane_width)?;
    set_px(&regions.static_pane, "height", config.viewport_height)?;
    set_px(&regions.floating_pane, "width", floating_width)?;
    set_px(&regions.floating_pane, "height", config.viewport_height)?;
    set_px(&regions.track, "height", config.track_length())?;
    set_px(&regions.track, "width", config.track_width() - 2.0)?;
    regions
        .track
        .style()
        .set_property("position", "relative")
        .map_err(js_err)?;

    let thumb = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GridError::Render("thumb is not an HtmlElement".into()))?;
    thumb.set_class_name("scrollbar");
    thumb
        .style()
        .set_property("position", "absolute")
        .map_err(js_err)?;
    set_px(&thumb, "width", config.scrollbar_width - 2.0)?;
    set_px(&thumb, "left", config.scrollbar_margin)?;
    regions.track.append_child(&thumb).map_err(js_err)?;
    Ok(thumb)
}

/// The grid exported to JavaScript
#[wasm_bindgen]
pub struct SplitGrid {
    state: Rc<RefCell<SharedState>>,
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    wheel_closure: Closure<dyn FnMut(WheelEvent)>,
    #[allow(dead_code)]
    legacy_wheel_closure: Closure<dyn FnMut(UiEvent)>,
}

#[wasm_bindgen]
impl SplitGrid {
    /// Build a grid under the element matched by `mount`.
    ///
    /// `columns` is an array of `{label, fmt, rw}`; `config` is an optional
    /// partial `GridConfig`.
    ///
    /// # Errors
    /// Fails if any region is missing, the schema is empty, or the config
    /// is invalid. Nothing is wired up on failure.
    pub fn create(
        columns: JsValue,
        mount: &str,
        config: JsValue,
    ) -> std::result::Result<SplitGrid, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self::build(columns, mount, config)?)
    }

    /// Register a row (array of strings/numbers) with the default height.
    #[wasm_bindgen(js_name = "registerRow")]
    pub fn register_row(&mut self, row: JsValue) -> std::result::Result<usize, JsValue> {
        let row: Row = serde_wasm_bindgen::from_value(row).map_err(GridError::from)?;
        Ok(self.state.borrow_mut().engine.register_row(row))
    }

    /// Register a row with an explicit pixel height.
    #[wasm_bindgen(js_name = "registerRowWithHeight")]
    pub fn register_row_with_height(
        &mut self,
        row: JsValue,
        height: f64,
    ) -> std::result::Result<usize, JsValue> {
        let row: Row = serde_wasm_bindgen::from_value(row).map_err(GridError::from)?;
        Ok(self
            .state
            .borrow_mut()
            .engine
            .register_row_with_height(row, height))
    }

    /// Force a reconciliation and scrollbar sync.
    pub fn refresh(&mut self) -> std::result::Result<(), JsValue> {
        let mut s = self.state.borrow_mut();
        s.engine.refresh()?;
        Self::paint_thumb(&s)?;
        Ok(())
    }

    /// Scroll by a pixel delta (positive = down).
    #[wasm_bindgen(js_name = "scrollBy")]
    pub fn scroll_by(&mut self, pixels: f64) -> std::result::Result<(), JsValue> {
        let mut s = self.state.borrow_mut();
        s.engine.apply_scroll_delta(pixels)?;
        Self::paint_thumb(&s)?;
        Ok(())
    }

    /// Use a JS function `(number) => string` to format amount cells.
    #[wasm_bindgen(js_name = "setFormatter")]
    pub fn set_formatter(&mut self, formatter: Function) {
        self.state
            .borrow_mut()
            .engine
            .set_formatter(move |value: f64| {
                formatter
                    .call1(&JsValue::NULL, &JsValue::from_f64(value))
                    .ok()
                    .and_then(|text| text.as_string())
                    .unwrap_or_else(|| value.to_string())
            });
    }

    /// Scroll state for debugging.
    #[wasm_bindgen(js_name = "scrollDebug")]
    pub fn scroll_debug(&self) -> std::result::Result<JsValue, JsValue> {
        let debug = self.state.borrow().engine.scroll_debug();
        serde_wasm_bindgen::to_value(&debug)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = "rowCount")]
    pub fn row_count(&self) -> usize {
        self.state.borrow().engine.row_count()
    }
}

impl SplitGrid {
    fn build(columns: JsValue, mount: &str, config: JsValue) -> Result<SplitGrid> {
        let columns: Vec<ColumnDescriptor> = serde_wasm_bindgen::from_value(columns)?;
        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate()?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(GridError::MissingRegion("document"))?;
        let regions = Regions::find(&document, mount)?;

        let engine = ViewportEngine::new(
            columns,
            config,
            DomPane::new(document.clone(), regions.static_surface.clone()),
            DomPane::new(document.clone(), regions.floating_surface.clone()),
        )?;
        let thumb = apply_geometry(&document, &regions, engine.config())?;

        let state = Rc::new(RefCell::new(SharedState {
            engine,
            track: regions.track.clone(),
            thumb,
            drag: None,
            retired_drag: None,
        }));
        Self::paint_thumb(&state.borrow())?;

        let closures = vec![Self::wire_track(&state, &regions.track)?];
        let (wheel_closure, legacy_wheel_closure) = Self::wire_wheel(&state, &regions.container)?;

        log::debug!("split grid mounted at {mount}");
        Ok(SplitGrid {
            state,
            closures,
            wheel_closure,
            legacy_wheel_closure,
        })
    }

    /// Copy the scrollbar geometry onto the thumb element.
    pub(crate) fn paint_thumb(s: &SharedState) -> Result<()> {
        let bar = s.engine.scrollbar();
        set_px(&s.thumb, "height", bar.thumb_length())?;
        set_px(&s.thumb, "top", bar.thumb_position())
    }
}
