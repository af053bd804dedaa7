//! [`Surface`] over a DOM element's inline style

use retro_desktop::{Rect, Size, Surface, Vec2};
use web_sys::HtmlElement;

/// A draggable DOM element.
///
/// Geometry comes from `getBoundingClientRect` and `innerWidth/innerHeight`.
/// Placement writes `left`/`top` in pixels and overrides `right`, `bottom` and
/// `transform`, so stylesheet offsets stop competing with them.
#[derive(Clone, Debug)]
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Surface for DomSurface {
    fn bounds(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    fn viewport(&self) -> Size {
        let Some(window) = web_sys::window() else {
            return Size::ZERO;
        };
        let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Size::new(dim(window.inner_width()), dim(window.inner_height()))
    }

    fn place(&mut self, origin: Vec2) {
        let style = self.element.style();
        let _ = style.set_property("left", &format!("{}px", origin.x));
        let _ = style.set_property("top", &format!("{}px", origin.y));
        for (prop, value) in [("right", "auto"), ("bottom", "auto"), ("transform", "none")] {
            let _ = style.set_property(prop, value);
        }
    }

    fn set_z_index(&mut self, z: i32) {
        let _ = self.element.style().set_property("z-index", &z.to_string());
    }
}
