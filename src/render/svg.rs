//! SVG DOM surface.
//!
//! Owns an `<svg>` scoped to the host container with two persistent groups
//! (chart and legend) plus the tooltip overlay. Elements are retained in
//! per-layer key maps; persisting elements are updated in place so their
//! hover listeners survive incremental updates. Marker hover data lives in a
//! shared registry the listeners read at event time, which lets an update
//! rebind data without re-creating listeners.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, SvgGraphicsElement};

use crate::error::{Result, VizError};
use crate::layout::{LEGEND_RECT_SIZE, LEGEND_SPACING};
use crate::scene::{HoverData, Node, Shape};

use super::tooltip::Tooltip;
use super::{Layer, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The browser drawing surface.
pub struct SvgSurface {
    document: Document,
    svg: Element,
    chart_group: Element,
    legend_group: Element,
    layers: HashMap<Layer, HashMap<String, Element>>,
    hover: Rc<RefCell<HashMap<String, HoverData>>>,
    tooltip: Rc<Tooltip>,
    marker_listeners: HashMap<String, Vec<Closure<dyn FnMut(MouseEvent)>>>,
}

impl SvgSurface {
    /// Acquire the drawing surface inside `container`: percentage-sized
    /// `<svg>`, chart + legend groups, tooltip overlay.
    pub fn mount(container: &HtmlElement) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| VizError::Render("no document available".to_string()))?;

        // Tooltip offsets are container-relative.
        let _ = container.style().set_property("position", "relative");

        let svg = create_svg(&document, "svg")?;
        set_attr(&svg, "width", "100%")?;
        set_attr(&svg, "height", "100%")?;
        set_attr(&svg, "font-family", "Inter, sans-serif")?;

        let chart_group = create_svg(&document, "g")?;
        set_attr(&chart_group, "class", "chart-group")?;
        let legend_group = create_svg(&document, "g")?;
        set_attr(&legend_group, "class", "legend-group")?;

        append(&svg, &chart_group)?;
        append(&svg, &legend_group)?;
        append(container, &svg)?;

        let tooltip = Rc::new(Tooltip::mount(&document, container)?);

        Ok(Self {
            document,
            svg,
            chart_group,
            legend_group,
            layers: HashMap::new(),
            hover: Rc::new(RefCell::new(HashMap::new())),
            tooltip,
            marker_listeners: HashMap::new(),
        })
    }

    /// Remove the svg and tooltip from the container.
    pub fn unmount(&mut self) {
        self.svg.remove();
        self.tooltip.unmount();
        self.layers.clear();
        self.marker_listeners.clear();
        self.hover.borrow_mut().clear();
    }

    /// Create an element with its full initial styling, then run the update
    /// path so every dynamic attribute is set on creation too.
    fn enter_node(&mut self, parent: &Element, node: &Node) -> Result<Element> {
        let el = match &node.shape {
            Shape::GridCircle { .. } => {
                let el = create_svg(&self.document, "circle")?;
                set_attr(&el, "class", "grid-circle")?;
                set_attr(&el, "fill", "#CDCDCD")?;
                set_attr(&el, "stroke", "#CDCDCD")?;
                set_attr(&el, "fill-opacity", "0.1")?;
                el
            }
            Shape::AxisLine { .. } => {
                let el = create_svg(&self.document, "line")?;
                set_attr(&el, "class", "axis-line")?;
                set_attr(&el, "x1", "0")?;
                set_attr(&el, "y1", "0")?;
                set_attr(&el, "stroke", "black")?;
                set_attr(&el, "stroke-width", "1")?;
                el
            }
            Shape::AxisLabel { .. } => {
                let el = create_svg(&self.document, "text")?;
                set_attr(&el, "class", "axis-label")?;
                set_attr(&el, "text-anchor", "middle")?;
                set_attr(&el, "dy", "0.35em")?;
                set_attr(&el, "font-size", "12px")?;
                set_attr(&el, "fill", "black")?;
                el
            }
            Shape::Polygon { .. } => {
                let el = create_svg(&self.document, "path")?;
                set_attr(&el, "class", "radar-polygon")?;
                set_attr(&el, "fill-opacity", "0.4")?;
                set_attr(&el, "stroke-width", "2")?;
                el
            }
            Shape::Marker { .. } => {
                let el = create_svg(&self.document, "circle")?;
                set_attr(&el, "class", "radar-circle")?;
                set_attr(&el, "r", "5")?;
                set_attr(&el, "fill-opacity", "0.8")?;
                set_attr(&el, "stroke", "white")?;
                set_attr(&el, "stroke-width", "1")?;
                self.attach_marker_listeners(&el, &node.key)?;
                el
            }
            Shape::LegendItem { .. } => {
                let el = create_svg(&self.document, "g")?;
                set_attr(&el, "class", "legend-item")?;

                let swatch = create_svg(&self.document, "rect")?;
                set_attr(&swatch, "width", &format!("{LEGEND_RECT_SIZE}"))?;
                set_attr(&swatch, "height", &format!("{LEGEND_RECT_SIZE}"))?;
                set_attr(&swatch, "stroke", "black")?;
                set_attr(&swatch, "stroke-width", "1")?;

                let text = create_svg(&self.document, "text")?;
                set_attr(&text, "x", &format!("{}", LEGEND_RECT_SIZE + LEGEND_SPACING))?;
                set_attr(&text, "y", &format!("{}", LEGEND_RECT_SIZE / 2.0))?;
                set_attr(&text, "dy", "0.35em")?;
                set_attr(&text, "font-size", "12px")?;
                set_attr(&text, "fill", "black")?;

                append(&el, &swatch)?;
                append(&el, &text)?;
                el
            }
        };

        append(parent, &el)?;
        self.update_node(&node.key, &el, &node.shape)?;
        Ok(el)
    }

    /// Refresh only the attributes that can change between updates.
    fn update_node(&self, key: &str, el: &Element, shape: &Shape) -> Result<()> {
        match shape {
            Shape::GridCircle { r } => set_attr(el, "r", &format!("{r}")),
            Shape::AxisLine { x2, y2 } => {
                set_attr(el, "x2", &format!("{x2}"))?;
                set_attr(el, "y2", &format!("{y2}"))
            }
            Shape::AxisLabel {
                x,
                y,
                text,
                visible,
            } => {
                set_attr(el, "x", &format!("{x}"))?;
                set_attr(el, "y", &format!("{y}"))?;
                el.set_text_content(Some(text));
                set_attr(el, "opacity", if *visible { "1" } else { "0" })
            }
            Shape::Polygon { path, color } => {
                set_attr(el, "d", path)?;
                set_attr(el, "fill", color)?;
                set_attr(el, "stroke", color)
            }
            Shape::Marker {
                cx,
                cy,
                color,
                hover,
            } => {
                set_attr(el, "cx", &format!("{cx}"))?;
                set_attr(el, "cy", &format!("{cy}"))?;
                set_attr(el, "fill", color)?;
                // Rebind the datum the listeners read; the listeners
                // themselves persist with the element.
                self.hover.borrow_mut().insert(key.to_string(), hover.clone());
                Ok(())
            }
            Shape::LegendItem { color, label } => {
                if let Some(swatch) = el.first_element_child() {
                    set_attr(&swatch, "fill", color)?;
                }
                if let Some(text) = el.last_element_child() {
                    text.set_text_content(Some(label));
                }
                Ok(())
            }
        }
    }

    fn attach_marker_listeners(&mut self, el: &Element, key: &str) -> Result<()> {
        let over = {
            let hover = Rc::clone(&self.hover);
            let tooltip = Rc::clone(&self.tooltip);
            let key = key.to_string();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                if let Some(data) = hover.borrow().get(&key) {
                    tooltip.show(&data.tooltip_html(), &event);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let out = {
            let tooltip = Rc::clone(&self.tooltip);
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                tooltip.hide();
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        el.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())
            .map_err(|_| VizError::Render("failed to attach mouseover listener".to_string()))?;
        el.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())
            .map_err(|_| VizError::Render("failed to attach mouseout listener".to_string()))?;

        self.marker_listeners.insert(key.to_string(), vec![over, out]);
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn sync_layer(&mut self, layer: Layer, nodes: &[Node]) -> Result<()> {
        let parent = if layer == Layer::Legend {
            self.legend_group.clone()
        } else {
            self.chart_group.clone()
        };

        let mut existing = self.layers.remove(&layer).unwrap_or_default();

        let desired: HashSet<&str> = nodes.iter().map(|n| n.key.as_str()).collect();
        let stale: Vec<String> = existing
            .keys()
            .filter(|key| !desired.contains(key.as_str()))
            .cloned()
            .collect();
        for key in stale {
            if let Some(el) = existing.remove(&key) {
                el.remove();
            }
            self.marker_listeners.remove(&key);
            self.hover.borrow_mut().remove(&key);
        }

        for node in nodes {
            if let Some(el) = existing.get(&node.key) {
                self.update_node(&node.key, el, &node.shape)?;
            } else {
                let el = self.enter_node(&parent, node)?;
                existing.insert(node.key.clone(), el);
            }
        }

        self.layers.insert(layer, existing);
        Ok(())
    }

    fn set_chart_transform(&mut self, x: f64, y: f64) -> Result<()> {
        set_attr(&self.chart_group, "transform", &format!("translate({x}, {y})"))
    }

    fn set_legend_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            self.legend_group
                .remove_attribute("display")
                .map_err(|_| VizError::Render("failed to show legend".to_string()))
        } else {
            set_attr(&self.legend_group, "display", "none")
        }
    }

    fn legend_item_width(&self) -> Option<f64> {
        let first = self.legend_group.first_element_child()?;
        let graphics: &SvgGraphicsElement = first.dyn_ref()?;
        let bbox = graphics.get_b_box().ok()?;
        let width = f64::from(bbox.width());
        (width > 0.0).then_some(width)
    }

    fn place_legend(&mut self, offsets: &[(String, (f64, f64))]) -> Result<()> {
        if let Some(items) = self.layers.get(&Layer::Legend) {
            for (key, (x, y)) in offsets {
                if let Some(el) = items.get(key) {
                    set_attr(el, "transform", &format!("translate({x}, {y})"))?;
                }
            }
        }
        Ok(())
    }
}

fn create_svg(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|_| VizError::Render(format!("failed to create <{tag}>")))
}

fn set_attr(el: &Element, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value)
        .map_err(|_| VizError::Render(format!("failed to set attribute {name}")))
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| VizError::Render("failed to append element".to_string()))
}
