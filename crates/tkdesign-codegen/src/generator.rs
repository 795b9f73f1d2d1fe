//! Frame and document traversal.

use crate::assets::{AssetKind, AssetNaming, AssetRef, NumberedAssets};
use crate::classify::{ClassifierPolicy, ElementKind};
use crate::element::{
    ButtonElement, Element, ImageElement, RectangleElement, TextElement, TextEntryElement,
};
use crate::error::{CodegenError, Result};
use crate::generators::{FragmentFormatter, ProgramRenderer, TkinterFormatter, Window};
use crate::identifier::IdentifierScope;
use crate::options::GeneratorOptions;
use serde::Serialize;
use serde_json::Value;
use tkdesign_core::{Node, NodeKind, Rgba};
use tracing::{debug, trace, warn};

/// One generated program and everything it references.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedProgram {
    pub frame_name: String,
    pub window: Window,
    /// Typed element descriptions in traversal order.
    pub elements: Vec<Element>,
    /// Assets the program loads, in traversal order.
    pub assets: Vec<AssetRef>,
    pub source: String,
}

/// Turns design frames into Tkinter programs.
pub struct Generator<'a, N: AssetNaming = NumberedAssets> {
    options: GeneratorOptions,
    policy: ClassifierPolicy,
    naming: N,
    formatter: TkinterFormatter,
    renderer: ProgramRenderer<'a>,
}

impl<'a> Generator<'a, NumberedAssets> {
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        let naming = NumberedAssets::new(options.asset_extension.clone());
        Self::with_naming(options, naming)
    }
}

impl<'a, N: AssetNaming> Generator<'a, N> {
    /// Generator with a caller-supplied asset naming strategy.
    pub fn with_naming(options: GeneratorOptions, naming: N) -> Result<Self> {
        Ok(Self {
            policy: ClassifierPolicy::from_options(&options)?,
            options,
            naming,
            formatter: TkinterFormatter::new(),
            renderer: ProgramRenderer::new()?,
        })
    }

    /// Replace the program template.
    pub fn with_template(mut self, template: &str) -> Result<Self> {
        self.renderer = ProgramRenderer::with_template(template)?;
        Ok(self)
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    /// A fresh identifier scope seeded from the options.
    pub fn new_scope(&self) -> IdentifierScope {
        IdentifierScope::new(self.options.counter_seed, self.options.unique_identifiers)
    }

    /// Classify `node` and build its element.
    ///
    /// Returns [`CodegenError::UnrecognizedKind`] for nodes with no variant;
    /// identifiers are only drawn from `scope` for variants that need one.
    pub fn build_element(
        &self,
        node: &Node<'_>,
        frame: &Node<'_>,
        scope: &mut IdentifierScope,
    ) -> Result<Element> {
        let kind = self.policy.classify(node)?;

        Ok(match kind {
            ElementKind::Rectangle => Element::Rectangle(RectangleElement::from_node(node, frame)?),
            ElementKind::Text => Element::Text(TextElement::from_node(node, frame)?),
            ElementKind::Button => {
                let (identifier, path) = self.assign(node, AssetKind::Button, scope);
                Element::Button(ButtonElement::from_node(node, frame, path, identifier)?)
            }
            ElementKind::Image => {
                let (identifier, path) = self.assign(node, AssetKind::Image, scope);
                Element::Image(ImageElement::from_node(node, frame, path, identifier)?)
            }
            ElementKind::TextEntry => {
                let (identifier, path) = self.assign(node, AssetKind::Entry, scope);
                let widget = self.policy.entry_widget(node.name_prefix());
                Element::TextEntry(TextEntryElement::from_node(
                    node, frame, path, identifier, widget,
                )?)
            }
        })
    }

    fn assign(
        &self,
        node: &Node<'_>,
        kind: AssetKind,
        scope: &mut IdentifierScope,
    ) -> (String, String) {
        let identifier = scope.assign(node, kind);
        let path = self.naming.asset_path(node, kind, &identifier);
        (identifier, path)
    }

    /// Build the elements under `frame`, depth-first in document order.
    ///
    /// Recognized nodes are leaves. Unrecognized nodes are skipped and their
    /// children visited. A malformed element aborts the pass.
    pub fn collect_elements(
        &self,
        frame: &Node<'_>,
        scope: &mut IdentifierScope,
    ) -> Result<Vec<Element>> {
        Ok(self.collect(frame, scope)?.elements)
    }

    fn collect(&self, frame: &Node<'_>, scope: &mut IdentifierScope) -> Result<Collected> {
        let mut out = Collected::default();
        for child in frame.children() {
            self.visit(&child, frame, scope, &mut out)?;
        }
        Ok(out)
    }

    fn visit(
        &self,
        node: &Node<'_>,
        frame: &Node<'_>,
        scope: &mut IdentifierScope,
        out: &mut Collected,
    ) -> Result<()> {
        match self.build_element(node, frame, scope) {
            Ok(element) => {
                trace!(
                    node = %node.label(),
                    kind = %element.kind(),
                    identifier = element.identifier().unwrap_or(""),
                    "built element"
                );
                if let (Some(path), Some(kind)) = (element.asset_path(), asset_kind(&element)) {
                    out.assets.push(AssetRef {
                        node_id: node.id().to_string(),
                        kind,
                        path: path.to_string(),
                    });
                }
                out.elements.push(element);
                Ok(())
            }
            Err(err) if err.is_skippable() => {
                debug!(node = %node.label(), kind = %node.kind(), "skipping unrecognized node");
                for child in node.children() {
                    self.visit(&child, frame, scope, out)?;
                }
                Ok(())
            }
            Err(err) => {
                warn!(node = %node.label(), error = %err, "failed to build element");
                Err(err)
            }
        }
    }

    /// Generate one program from a frame with a fresh identifier scope.
    pub fn generate_frame(&self, frame: &Node<'_>) -> Result<GeneratedProgram> {
        let mut scope = self.new_scope();
        self.generate_frame_with_scope(frame, &mut scope)
    }

    /// Generate one program, drawing fallback identifiers from `scope`.
    pub fn generate_frame_with_scope(
        &self,
        frame: &Node<'_>,
        scope: &mut IdentifierScope,
    ) -> Result<GeneratedProgram> {
        let (width, height) = frame.size()?;
        let window = Window {
            width: width.round() as i64,
            height: height.round() as i64,
            bg_color: frame_background(frame)?,
        };

        let Collected { elements, assets } = self.collect(frame, scope)?;

        let fragments = self.formatter.format_all(&elements)?;
        let frame_name = frame.label();
        let source = self.renderer.render(
            &frame_name,
            &window,
            &self.options.assets_path,
            &fragments,
        )?;

        debug!(
            frame = %frame_name,
            elements = elements.len(),
            assets = assets.len(),
            target = self.formatter.target_name(),
            "generated program"
        );

        Ok(GeneratedProgram {
            frame_name,
            window,
            elements,
            assets,
            source,
        })
    }

    /// Generate one program per top-level frame of the document's first page.
    ///
    /// Accepts a full design-file response (`{"document": {...}}`) or a bare
    /// document node.
    pub fn generate_document(&self, file: &Value) -> Result<Vec<GeneratedProgram>> {
        let document = Node::new(file.get("document").unwrap_or(file));
        let page = document
            .children()
            .find(|child| child.kind() == NodeKind::Canvas)
            .ok_or_else(|| CodegenError::InvalidDocument("document has no pages".to_string()))?;

        page.children()
            .filter(|child| child.kind() == NodeKind::Frame)
            .map(|frame| self.generate_frame(&frame))
            .collect()
    }

    /// Parse a design-file JSON string and generate its programs.
    pub fn generate_document_str(&self, json: &str) -> Result<Vec<GeneratedProgram>> {
        let file: Value = serde_json::from_str(json)?;
        self.generate_document(&file)
    }
}

#[derive(Default)]
struct Collected {
    elements: Vec<Element>,
    assets: Vec<AssetRef>,
}

fn asset_kind(element: &Element) -> Option<AssetKind> {
    match element {
        Element::Button(_) => Some(AssetKind::Button),
        Element::Image(_) => Some(AssetKind::Image),
        Element::TextEntry(_) => Some(AssetKind::Entry),
        Element::Rectangle(_) | Element::Text(_) => None,
    }
}

/// The frame's first fill, or white when it has none.
fn frame_background(frame: &Node<'_>) -> Result<String> {
    if frame.fills()?.is_empty() {
        Ok(Rgba::WHITE.to_hex())
    } else {
        Ok(frame.color()?)
    }
}
