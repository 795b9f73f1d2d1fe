//! Positioned element descriptions built from design nodes.
//!
//! Each variant is resolved once from a node and its frame, then never
//! changes. Geometry and style live here as typed values; turning them into
//! source text is the job of a [`FragmentFormatter`].

use crate::classify::ElementKind;
use crate::error::{CodegenError, Result};
use crate::generators::{FragmentFormatter, TkinterFormatter};
use serde::Serialize;
use tkdesign_core::{
    apply_text_case, center_anchor, clamp_corner_radius, pixel_center_anchor, resolve_font_name,
    resolve_font_size, DesignError, Node,
};

/// Frame-relative placement. `x`/`y` is the variant's anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Anchored at the node's top-left corner.
    pub fn top_left(node: &Node<'_>, frame: &Node<'_>) -> Result<Self> {
        let (x, y) = node.position(frame)?;
        let (width, height) = node.size()?;
        Ok(Self::new(x, y, width, height))
    }

    /// Anchored at the node's center.
    pub fn centered(node: &Node<'_>, frame: &Node<'_>) -> Result<Self> {
        let size = node.size()?;
        let (x, y) = center_anchor(node.position(frame)?, size);
        Ok(Self::new(x, y, size.0, size.1))
    }

    /// Anchored at the node's center, half extents floored to whole pixels.
    pub fn pixel_centered(node: &Node<'_>, frame: &Node<'_>) -> Result<Self> {
        let size = node.size()?;
        let (x, y) = pixel_center_anchor(node.position(frame)?, size);
        Ok(Self::new(x, y, size.0, size.1))
    }
}

/// A filled rectangle drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectangleElement {
    pub geometry: Geometry,
    pub fill: String,
    pub corner_radius: f64,
}

impl RectangleElement {
    pub fn from_node(node: &Node<'_>, frame: &Node<'_>) -> Result<Self> {
        Ok(Self {
            geometry: Geometry::top_left(node, frame)?,
            fill: node.color()?,
            corner_radius: node.corner_radius(),
        })
    }
}

/// A text label drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub geometry: Geometry,
    /// Content with the case directive applied, not yet escaped.
    pub text: String,
    pub color: String,
    pub font: String,
    /// Whole points, positive.
    pub font_size: i64,
}

impl TextElement {
    pub fn from_node(node: &Node<'_>, frame: &Node<'_>) -> Result<Self> {
        let style = node.style()?;
        let text = apply_text_case(node.characters()?, style.text_case);
        let font = resolve_font_name(&style)
            .ok_or_else(|| DesignError::missing(node.label(), "style.fontFamily"))?;
        let font_size = style
            .font_size
            .map(resolve_font_size)
            .ok_or_else(|| DesignError::missing(node.label(), "style.fontSize"))?;

        Ok(Self {
            geometry: Geometry::top_left(node, frame)?,
            text,
            color: node.color()?,
            font,
            font_size,
        })
    }
}

/// A static image, anchored at its center snapped down to whole pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageElement {
    pub identifier: String,
    pub asset_path: String,
    pub geometry: Geometry,
}

impl ImageElement {
    pub fn from_node(
        node: &Node<'_>,
        frame: &Node<'_>,
        asset_path: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            identifier: identifier.into(),
            asset_path: asset_path.into(),
            geometry: Geometry::pixel_centered(node, frame)?,
        })
    }
}

/// A clickable image button, placed by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonElement {
    pub identifier: String,
    pub asset_path: String,
    pub geometry: Geometry,
}

impl ButtonElement {
    pub fn from_node(
        node: &Node<'_>,
        frame: &Node<'_>,
        asset_path: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            identifier: identifier.into(),
            asset_path: asset_path.into(),
            geometry: Geometry::top_left(node, frame)?,
        })
    }
}

/// An input widget over a background image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextEntryElement {
    /// Design node label, for diagnostics.
    pub node: String,
    pub identifier: String,
    pub asset_path: String,
    /// Background image, anchored at the node's center.
    pub background: Geometry,
    /// The widget's own placement, top-left anchored and inset by the radius.
    pub entry: Geometry,
    pub bg_color: String,
    pub corner_radius: f64,
    /// Name prefix the widget class was looked up with.
    pub prefix: String,
    /// Widget class from the input table; `None` when the prefix is unknown.
    pub widget: Option<String>,
}

impl TextEntryElement {
    pub fn from_node(
        node: &Node<'_>,
        frame: &Node<'_>,
        asset_path: impl Into<String>,
        identifier: impl Into<String>,
        widget: Option<&str>,
    ) -> Result<Self> {
        let (x, y) = node.position(frame)?;
        let (width, height) = node.size()?;
        let corner_radius = clamp_corner_radius(node.corner_radius(), height);

        Ok(Self {
            node: node.label(),
            identifier: identifier.into(),
            asset_path: asset_path.into(),
            background: Geometry::centered(node, frame)?,
            entry: Geometry::new(
                x + corner_radius,
                y,
                width - 2.0 * corner_radius,
                height - 2.0,
            ),
            bg_color: node.color()?,
            corner_radius,
            prefix: node.name_prefix().to_string(),
            widget: widget.map(str::to_string),
        })
    }

    /// The configured widget class, or a configuration error.
    pub fn widget_class(&self) -> Result<&str> {
        self.widget
            .as_deref()
            .ok_or_else(|| CodegenError::Configuration {
                node: self.node.clone(),
                prefix: self.prefix.clone(),
            })
    }
}

/// One renderable element of a generated program.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Element {
    Rectangle(RectangleElement),
    Button(ButtonElement),
    Text(TextElement),
    Image(ImageElement),
    TextEntry(TextEntryElement),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Rectangle(_) => ElementKind::Rectangle,
            Self::Button(_) => ElementKind::Button,
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::TextEntry(_) => ElementKind::TextEntry,
        }
    }

    /// Resolved placement; for a text entry, its background image.
    pub fn geometry(&self) -> Geometry {
        match self {
            Self::Rectangle(e) => e.geometry,
            Self::Button(e) => e.geometry,
            Self::Text(e) => e.geometry,
            Self::Image(e) => e.geometry,
            Self::TextEntry(e) => e.background,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Button(e) => Some(&e.identifier),
            Self::Image(e) => Some(&e.identifier),
            Self::TextEntry(e) => Some(&e.identifier),
            Self::Rectangle(_) | Self::Text(_) => None,
        }
    }

    pub fn asset_path(&self) -> Option<&str> {
        match self {
            Self::Button(e) => Some(&e.asset_path),
            Self::Image(e) => Some(&e.asset_path),
            Self::TextEntry(e) => Some(&e.asset_path),
            Self::Rectangle(_) | Self::Text(_) => None,
        }
    }

    /// Render to a Tkinter fragment.
    pub fn render(&self) -> Result<String> {
        TkinterFormatter::new().format(self)
    }
}
