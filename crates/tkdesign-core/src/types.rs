//! Typed records read out of raw design nodes.

use serde::{Deserialize, Serialize};

/// The declared kind of a design node (its `type` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Rectangle,
    Text,
    Vector,
    Line,
    Ellipse,
    Instance,
    Component,
    Other(String),
}

impl NodeKind {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "DOCUMENT" => Self::Document,
            "CANVAS" => Self::Canvas,
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "RECTANGLE" => Self::Rectangle,
            "TEXT" => Self::Text,
            "VECTOR" => Self::Vector,
            "LINE" => Self::Line,
            "ELLIPSE" => Self::Ellipse,
            "INSTANCE" => Self::Instance,
            "COMPONENT" => Self::Component,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Canvas => "CANVAS",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Rectangle => "RECTANGLE",
            Self::Text => "TEXT",
            Self::Vector => "VECTOR",
            Self::Line => "LINE",
            Self::Ellipse => "ELLIPSE",
            Self::Instance => "INSTANCE",
            Self::Component => "COMPONENT",
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node's bounding box in the document's global coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// A normalized color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to 8-bit channels, rounding each to the nearest step.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        fn channel(value: f64) -> u8 {
            (value * 255.0).round().clamp(0.0, 255.0) as u8
        }
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Convert to a lower-case `#rrggbb` token. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

/// Kind of a fill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    #[serde(other)]
    Other,
}

/// One entry of a node's `fills` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Option<Rgba>,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default = "visible")]
    pub visible: bool,
}

fn visible() -> bool {
    true
}

/// Case directive applied to text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    /// Small-caps and any future directives leave the content untouched.
    #[serde(other)]
    Unsupported,
}

/// Font and text properties from a TEXT node's `style`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_post_script_name: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub text_case: TextCase,
}
