use scene::camera::Viewport;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::toolkit::js_error;
use crate::error::WidgetError;
use crate::host::Host;

/// `<script type="application/json" id="globe3d-config">` holding a widget config.
pub const CONFIG_ELEMENT_ID: &str = "globe3d-config";

#[derive(Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, WidgetError> {
        let window = web_sys::window().ok_or_else(|| WidgetError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::Dom("no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Text of the page config element, if the page has one.
    pub fn config_json(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
    }
}

impl Host for WebHost {
    type Element = HtmlElement;

    fn viewport(&self) -> Viewport {
        let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport::new(
            dim(self.window.inner_width()),
            dim(self.window.inner_height()),
        )
    }

    fn query_all(&self, selector: &str) -> Result<Vec<HtmlElement>, WidgetError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| WidgetError::Dom(js_error(&e)))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<(), WidgetError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| WidgetError::Dom(js_error(&e)))
    }

    fn stack_overlay(&self, element: &HtmlElement) -> Result<(), WidgetError> {
        let style = element.style();
        for (name, value) in [
            ("position", "absolute"),
            ("top", "0px"),
            ("pointer-events", "none"),
        ] {
            style
                .set_property(name, value)
                .map_err(|e| WidgetError::Dom(js_error(&e)))?;
        }
        Ok(())
    }
}
