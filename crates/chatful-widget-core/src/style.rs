use crate::config::{WidgetConfig, WidgetPosition};

pub const WIDGET_Z_INDEX: &str = "2147483647";
pub const DEFAULT_FRAME_WIDTH: u32 = 320;
pub const DEFAULT_FRAME_HEIGHT: u32 = 420;
pub const DEFAULT_CORNER_OFFSET: u32 = 32;
pub const LAUNCHER_HOVER_TRANSFORM: &str = "scale(1.05)";
pub const LAUNCHER_REST_TRANSFORM: &str = "scale(1)";

pub const LAUNCHER_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"></path></svg>"#;

/// An inline-style plan for one element: property/value pairs applied in
/// order at construction time. Lifting the styles into data keeps the
/// "given config X, expect style Y" contract checkable without a DOM.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementStyles {
    pub properties: Vec<(&'static str, String)>,
}

impl ElementStyles {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(property, _)| *property == name)
            .map(|(_, value)| value.as_str())
    }

    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.properties.push((name, value.into()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub offset: u32,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
            offset: DEFAULT_CORNER_OFFSET,
        }
    }
}

#[must_use]
pub fn frame_geometry(config: &WidgetConfig) -> FrameGeometry {
    let defaults = FrameGeometry::default();
    FrameGeometry {
        width: config.frame_width.unwrap_or(defaults.width),
        height: config.frame_height.unwrap_or(defaults.height),
        offset: config.offset.unwrap_or(defaults.offset),
    }
}

/// Fixed-position corner anchor. Exactly one of `left`/`right` is set, and
/// the stack order is the highest available so host-page content never
/// covers the widget.
#[must_use]
pub fn root_styles(position: WidgetPosition, offset: u32) -> ElementStyles {
    let mut styles = ElementStyles::default();
    styles.push("position", "fixed");
    styles.push("bottom", format!("{offset}px"));
    styles.push("z-index", WIDGET_Z_INDEX);
    let corner = if position.is_right() { "right" } else { "left" };
    styles.push(corner, format!("{offset}px"));
    styles.push("display", "flex");
    styles.push("flex-direction", "column");
    styles.push(
        "align-items",
        if position.is_right() {
            "flex-end"
        } else {
            "flex-start"
        },
    );
    styles.push("gap", "12px");
    styles
}

#[must_use]
pub fn launcher_styles(primary_color: &str) -> ElementStyles {
    let mut styles = ElementStyles::default();
    styles.push("width", "56px");
    styles.push("height", "56px");
    styles.push("border-radius", "9999px");
    styles.push("border", "none");
    styles.push("cursor", "pointer");
    styles.push("display", "inline-flex");
    styles.push("align-items", "center");
    styles.push("justify-content", "center");
    styles.push("background", primary_color);
    styles.push("color", "#ffffff");
    styles.push("box-shadow", "0 10px 25px rgba(0,0,0,.18)");
    styles.push("transition", "transform 150ms ease");
    styles
}

/// The chat frame is constructed hidden; the toggle flips its `display`.
#[must_use]
pub fn frame_styles(geometry: FrameGeometry) -> ElementStyles {
    let mut styles = ElementStyles::default();
    styles.push("width", format!("{}px", geometry.width));
    styles.push("height", format!("{}px", geometry.height));
    styles.push("border", "1px solid rgba(226,232,240,1)");
    styles.push("display", frame_display(false));
    styles.push("border-radius", "16px");
    styles.push("overflow", "hidden");
    styles.push(
        "box-shadow",
        "0 20px 25px -5px rgba(15,23,42,.10), 0 8px 10px -6px rgba(15,23,42,.10)",
    );
    styles
}

#[must_use]
pub fn frame_display(open: bool) -> &'static str {
    if open { "block" } else { "none" }
}
