//! Code generation from design-file frames to Tkinter canvas programs.
//!
//! A frame's descendants are classified into a closed set of elements
//! (rectangle, text, image, button, text entry), resolved against the frame's
//! coordinate origin, and formatted as Tkinter statements. The fragments are
//! then stitched into a complete program by a handlebars template.
//!
//! # Example
//!
//! ```ignore
//! use tkdesign_codegen::{Generator, GeneratorOptions};
//!
//! let generator = Generator::new(GeneratorOptions::default())?;
//! for program in generator.generate_document_str(&design_json)? {
//!     println!("{}", program.source);
//! }
//! ```

pub mod assets;
pub mod classify;
pub mod element;
pub mod error;
pub mod generator;
pub mod generators;
pub mod identifier;
pub mod options;

pub use assets::{AssetKind, AssetNaming, AssetRef, NumberedAssets};
pub use classify::{ClassifierPolicy, ElementKind};
pub use element::{
    ButtonElement, Element, Geometry, ImageElement, RectangleElement, TextElement,
    TextEntryElement,
};
pub use error::{CodegenError, Result};
pub use generator::{GeneratedProgram, Generator};
pub use generators::{FragmentFormatter, ProgramRenderer, TemplateEngine, TkinterFormatter, Window};
pub use identifier::{derive_identifier, IdentifierScope};
pub use options::GeneratorOptions;

pub use tkdesign_core::Node;
