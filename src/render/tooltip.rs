//! Container-scoped tooltip overlay.
//!
//! One tooltip per chart instance, created at setup and removed at
//! teardown, so multiple charts on a page never fight over it. Fades in
//! over 200ms and out over 500ms.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDivElement, HtmlElement, MouseEvent};

use crate::error::{Result, VizError};

const FADE_IN: &str = "opacity 200ms";
const FADE_OUT: &str = "opacity 500ms";

/// Offset of the tooltip from the pointer.
const POINTER_DX: f64 = 10.0;
const POINTER_DY: f64 = -28.0;

/// The floating tooltip element.
pub struct Tooltip {
    el: HtmlDivElement,
    container: HtmlElement,
}

impl Tooltip {
    /// Create the overlay inside `container`, absolutely positioned and
    /// initially transparent.
    pub fn mount(document: &Document, container: &HtmlElement) -> Result<Self> {
        let el: HtmlDivElement = document
            .create_element("div")
            .map_err(|_| VizError::Render("tooltip element creation failed".to_string()))?
            .dyn_into()
            .map_err(|_| VizError::Render("tooltip element is not a div".to_string()))?;

        el.set_class_name("radarviz-tooltip");
        let style = el.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("background-color", "rgba(0, 0, 0, 0.7)");
        let _ = style.set_property("color", "white");
        let _ = style.set_property("padding", "8px");
        let _ = style.set_property("border-radius", "4px");
        let _ = style.set_property("pointer-events", "none");
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("z-index", "1000");

        container
            .append_child(&el)
            .map_err(|_| VizError::Render("tooltip attach failed".to_string()))?;

        Ok(Self {
            el,
            container: container.clone(),
        })
    }

    /// Show `html` near the pointer. Position is container-relative, so the
    /// overlay tracks its own chart even when several are on the page.
    pub fn show(&self, html: &str, event: &MouseEvent) {
        let rect = self.container.get_bounding_client_rect();
        let left = f64::from(event.client_x()) - rect.left() + POINTER_DX;
        let top = f64::from(event.client_y()) - rect.top() + POINTER_DY;

        self.el.set_inner_html(html);
        let style = self.el.style();
        let _ = style.set_property("left", &format!("{left}px"));
        let _ = style.set_property("top", &format!("{top}px"));
        let _ = style.set_property("transition", FADE_IN);
        let _ = style.set_property("opacity", "0.9");
    }

    /// Fade the tooltip out.
    pub fn hide(&self) {
        let style = self.el.style();
        let _ = style.set_property("transition", FADE_OUT);
        let _ = style.set_property("opacity", "0");
    }

    /// Remove the overlay from the container.
    pub fn unmount(&self) {
        self.el.remove();
    }
}
