//! DOM render pane.
//!
//! Each row fragment is a `div.line.infi` absolutely positioned inside the
//! pane's content surface; labels are `span`s, editable cells are text inputs.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::RenderPane;
use crate::error::{GridError, Result};
use crate::types::CellContent;

pub(crate) fn js_err(e: JsValue) -> GridError {
    GridError::Render(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

pub struct DomPane {
    document: Document,
    surface: HtmlElement,
}

impl DomPane {
    pub fn new(document: Document, surface: HtmlElement) -> Self {
        Self { document, surface }
    }

    fn create(&self, tag: &str) -> Result<HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(js_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GridError::Render(format!("<{tag}> is not an HtmlElement")))
    }

    fn build_cell(&self, content: &CellContent) -> Result<HtmlElement> {
        let cell = self.create("div")?;
        let text = content.text();
        if content.is_editable() {
            cell.set_class_name("cell nospace other");
            let input = self
                .document
                .create_element("input")
                .map_err(js_err)?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| GridError::Render("<input> is not an HtmlInputElement".into()))?;
            input.set_type("text");
            input.set_value(text);
            cell.append_child(&input).map_err(js_err)?;
        } else {
            cell.set_class_name("cell nospace name");
            let span = self.create("span")?;
            span.set_text_content(Some(text));
            cell.append_child(&span).map_err(js_err)?;
        }
        Ok(cell)
    }
}

impl RenderPane for DomPane {
    type Fragment = HtmlElement;

    fn build_fragment(&mut self, cells: &[CellContent]) -> Result<HtmlElement> {
        let line = self.create("div")?;
        line.set_class_name("line infi");
        line.style()
            .set_property("position", "absolute")
            .map_err(js_err)?;
        for content in cells {
            let cell = self.build_cell(content)?;
            line.append_child(&cell).map_err(js_err)?;
        }
        Ok(line)
    }

    fn append(&mut self, fragment: &HtmlElement) -> Result<()> {
        self.surface.append_child(fragment).map_err(js_err)?;
        Ok(())
    }

    fn remove(&mut self, fragment: &HtmlElement) -> Result<()> {
        self.surface.remove_child(fragment).map_err(js_err)?;
        Ok(())
    }

    fn set_translation(&mut self, fragment: &HtmlElement, offset: f64) -> Result<()> {
        fragment
            .style()
            .set_property("top", &format!("{offset}px"))
            .map_err(js_err)
    }
}
