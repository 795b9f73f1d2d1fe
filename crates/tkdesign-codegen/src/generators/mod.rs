//! Formatters turning element descriptions into target source text.

mod program;
mod templates;
mod tkinter;

pub use program::{ProgramRenderer, Window, PROGRAM_TEMPLATE};
pub use templates::TemplateEngine;
pub use tkinter::{format_number, TkinterFormatter};

use crate::element::Element;
use crate::error::Result;

/// Serializes one element into a self-contained source fragment.
///
/// Implementations must be pure: formatting the same element twice yields
/// byte-identical output.
pub trait FragmentFormatter {
    /// Target toolkit name.
    fn target_name(&self) -> &'static str;

    /// Format one element.
    fn format(&self, element: &Element) -> Result<String>;

    /// Format a sequence of elements, preserving order.
    fn format_all(&self, elements: &[Element]) -> Result<Vec<String>> {
        elements.iter().map(|element| self.format(element)).collect()
    }
}
