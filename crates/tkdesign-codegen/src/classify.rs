//! Node-to-element classification.

use crate::error::{CodegenError, Result};
use crate::options::GeneratorOptions;
use regex::Regex;
use serde::Serialize;
use tkdesign_core::{Node, NodeKind};

/// The closed set of element variants a node can become.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Rectangle,
    Button,
    Text,
    Image,
    TextEntry,
}

impl ElementKind {
    /// Whether elements of this kind carry an identifier and an asset.
    pub fn has_identifier(&self) -> bool {
        matches!(self, Self::Button | Self::Image | Self::TextEntry)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Button => write!(f, "Button"),
            Self::Text => write!(f, "Text"),
            Self::Image => write!(f, "Image"),
            Self::TextEntry => write!(f, "TextEntry"),
        }
    }
}

/// Compiled classification rules.
#[derive(Debug, Clone)]
pub struct ClassifierPolicy {
    entry_marker: Option<Regex>,
    button_marker: Regex,
    image_marker: Regex,
    image_kinds: Vec<NodeKind>,
    input_kinds: Vec<(String, String)>,
}

impl ClassifierPolicy {
    /// Compile the markers and tables from `options`.
    pub fn from_options(options: &GeneratorOptions) -> Result<Self> {
        Ok(Self {
            entry_marker: options
                .entry_marker
                .as_deref()
                .map(|pattern| compile("entry_marker", pattern))
                .transpose()?,
            button_marker: compile("button_marker", &options.button_marker)?,
            image_marker: compile("image_marker", &options.image_marker)?,
            image_kinds: options
                .image_kinds
                .iter()
                .map(|kind| NodeKind::parse(kind))
                .collect(),
            input_kinds: options
                .input_kinds
                .iter()
                .map(|(prefix, widget)| (prefix.to_lowercase(), widget.clone()))
                .collect(),
        })
    }

    /// Choose the element variant for `node`.
    ///
    /// Returns [`CodegenError::UnrecognizedKind`] for nodes that are not part
    /// of the renderable UI (groups, vectors, nested frames).
    pub fn classify(&self, node: &Node<'_>) -> Result<ElementKind> {
        let prefix = node.name_prefix();
        let kind = node.kind();

        if self.is_entry_prefix(prefix) {
            return Ok(ElementKind::TextEntry);
        }
        if kind == NodeKind::Text {
            return Ok(ElementKind::Text);
        }
        if self.image_kinds.contains(&kind) && self.has_image_reference(node) {
            return Ok(if self.button_marker.is_match(prefix) {
                ElementKind::Button
            } else {
                ElementKind::Image
            });
        }
        if kind == NodeKind::Rectangle {
            return Ok(ElementKind::Rectangle);
        }

        Err(CodegenError::UnrecognizedKind {
            node: node.label(),
            kind: kind.to_string(),
        })
    }

    /// A prefix listed in `input_kinds`, or accepted by the entry marker.
    pub fn is_entry_prefix(&self, prefix: &str) -> bool {
        self.entry_widget(prefix).is_some()
            || self
                .entry_marker
                .as_ref()
                .is_some_and(|marker| marker.is_match(prefix))
    }

    /// An image fill, or a name marking the node as a button or image.
    pub fn has_image_reference(&self, node: &Node<'_>) -> bool {
        let prefix = node.name_prefix();
        node.has_image_fill() || self.button_marker.is_match(prefix) || self.image_marker.is_match(prefix)
    }

    /// Widget class for a text-entry prefix, if configured.
    pub fn entry_widget(&self, prefix: &str) -> Option<&str> {
        let prefix = prefix.trim().to_lowercase();
        self.input_kinds
            .iter()
            .find(|(key, _)| *key == prefix)
            .map(|(_, widget)| widget.as_str())
    }
}

fn compile(option: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CodegenError::InvalidPattern {
        option: option.to_string(),
        source,
    })
}
