//! Whole-program assembly around element fragments.

use super::templates::TemplateEngine;
use crate::error::Result;
use serde::Serialize;
use tkdesign_core::escape_string_literal;

/// Window metadata taken from the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub width: i64,
    pub height: i64,
    pub bg_color: String,
}

/// Program boilerplate; fragments are concatenated in order.
pub const PROGRAM_TEMPLATE: &str = r#"
# Generated by tkdesign from frame: {{comment frame_name}}


from pathlib import Path

from tkinter import Tk, Canvas, Entry, Text, Button
from PIL import Image, ImageTk


OUTPUT_PATH = Path(__file__).parent
ASSETS_PATH = OUTPUT_PATH / Path("{{assets_path}}")


def relative_to_assets(path: str) -> Path:
    return ASSETS_PATH / Path(path)


window = Tk()

window.geometry("{{window.width}}x{{window.height}}")
window.configure(bg="{{window.bg_color}}")


canvas = Canvas(
    window,
    bg="{{window.bg_color}}",
    height={{window.height}},
    width={{window.width}},
    bd=0,
    highlightthickness=0,
    relief="ridge"
)

canvas.place(x=0, y=0)
{{#each fragments}}{{this}}{{/each}}

window.resizable(False, False)
window.mainloop()
"#;

const PROGRAM: &str = "program";

#[derive(Serialize)]
struct ProgramData<'a> {
    frame_name: &'a str,
    /// Escaped for a double-quoted literal.
    assets_path: String,
    window: &'a Window,
    fragments: &'a [String],
}

/// Stitches fragments into a runnable program.
pub struct ProgramRenderer<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ProgramRenderer<'a> {
    /// Renderer using [`PROGRAM_TEMPLATE`].
    pub fn new() -> Result<Self> {
        Self::with_template(PROGRAM_TEMPLATE)
    }

    /// Renderer using a caller-supplied template with the same variables:
    /// `frame_name`, `assets_path`, `window.{width,height,bg_color}` and
    /// `fragments`.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(PROGRAM, template)?;
        Ok(Self { engine })
    }

    pub fn render(
        &self,
        frame_name: &str,
        window: &Window,
        assets_path: &str,
        fragments: &[String],
    ) -> Result<String> {
        self.engine.render(
            PROGRAM,
            &ProgramData {
                frame_name,
                assets_path: escape_string_literal(assets_path),
                window,
                fragments,
            },
        )
    }
}
