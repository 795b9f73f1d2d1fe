//! Read-only adapter over one raw design node.

use crate::errors::{DesignError, Result};
use crate::resolve;
use crate::types::{BoundingBox, NodeKind, Paint, PaintKind, TypeStyle};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A borrowed view over one node of a design-file tree.
///
/// Lookups never fail for optional fields; the typed accessors return
/// [`DesignError::MissingField`] only when a caller asks for something the
/// node is required to carry.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    raw: &'a Value,
}

impl<'a> Node<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// The underlying JSON record.
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    /// Get a raw field, or `None` when absent or `null`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.raw.get(key).filter(|value| !value.is_null())
    }

    /// Get a raw field, or `default` when absent.
    pub fn get_or(&self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Deserialize an optional field.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| DesignError::invalid(self.label(), key, e.to_string())),
            None => Ok(None),
        }
    }

    /// Deserialize a field the caller requires.
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.field(key)?
            .ok_or_else(|| DesignError::missing(self.label(), key))
    }

    pub fn id(&self) -> &'a str {
        self.get("id").and_then(Value::as_str).unwrap_or("")
    }

    pub fn name(&self) -> &'a str {
        self.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// Human-readable handle for diagnostics: the name, else the id.
    pub fn label(&self) -> String {
        let name = self.name().trim();
        if name.is_empty() {
            self.id().to_string()
        } else {
            name.to_string()
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::parse(self.get("type").and_then(Value::as_str).unwrap_or(""))
    }

    /// Child nodes in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.get("children")
            .and_then(Value::as_array)
            .map(|children| children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(Node::new)
    }

    /// The trimmed name segment before the first `_`.
    pub fn name_prefix(&self) -> &'a str {
        self.name().split('_').next().unwrap_or("").trim()
    }

    /// The name segment between the first and second `_`, if the name has one.
    pub fn name_segment(&self) -> Option<&'a str> {
        self.name().trim().split('_').nth(1)
    }

    pub fn bounding_box(&self) -> Result<BoundingBox> {
        self.require("absoluteBoundingBox")
    }

    /// Position relative to `frame`'s origin.
    pub fn position(&self, frame: &Node<'_>) -> Result<(f64, f64)> {
        Ok(resolve::relative_position(
            &self.bounding_box()?,
            &frame.bounding_box()?,
        ))
    }

    pub fn size(&self) -> Result<(f64, f64)> {
        Ok(self.bounding_box()?.size())
    }

    /// The fill list, empty when the node declares none.
    pub fn fills(&self) -> Result<Vec<Paint>> {
        Ok(self.field("fills")?.unwrap_or_default())
    }

    pub fn has_image_fill(&self) -> bool {
        self.fills()
            .map(|fills| fills.iter().any(|paint| paint.kind == PaintKind::Image))
            .unwrap_or(false)
    }

    /// The first fill's color as `#rrggbb`.
    pub fn color(&self) -> Result<String> {
        let fills = self.fills()?;
        let paint = fills
            .first()
            .ok_or_else(|| DesignError::missing(self.label(), "fills"))?;
        let color = paint
            .color
            .ok_or_else(|| DesignError::missing(self.label(), "fills[0].color"))?;
        Ok(color.to_hex())
    }

    /// Declared corner radius, 0 when absent.
    pub fn corner_radius(&self) -> f64 {
        self.get("cornerRadius")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    pub fn style(&self) -> Result<TypeStyle> {
        self.require("style")
    }

    pub fn characters(&self) -> Result<&'a str> {
        self.get("characters")
            .and_then(Value::as_str)
            .ok_or_else(|| DesignError::missing(self.label(), "characters"))
    }

    /// Per-character style override indices.
    pub fn character_style_overrides(&self) -> Option<&'a Vec<Value>> {
        self.get("characterStyleOverrides").and_then(Value::as_array)
    }

    /// Style overrides keyed by the indices in [`Self::character_style_overrides`].
    pub fn style_override_table(&self) -> Option<&'a Map<String, Value>> {
        self.get("styleOverrideTable").and_then(Value::as_object)
    }
}
