//! Tkinter canvas fragments.
//!
//! Fragments assume `canvas`, `relative_to_assets`, `PhotoImage` from
//! `ImageTk`, `Image` from PIL and the tkinter widget classes are already
//! bound by the surrounding program.

use super::FragmentFormatter;
use crate::element::{
    ButtonElement, Element, ImageElement, RectangleElement, TextElement, TextEntryElement,
};
use crate::error::Result;
use tkdesign_core::escape_string_literal;

/// Foreground color of text typed into entry widgets.
const ENTRY_FOREGROUND: &str = "#000716";

/// Formats elements as Python/Tkinter statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct TkinterFormatter;

impl TkinterFormatter {
    pub fn new() -> Self {
        Self
    }

    fn rectangle(&self, e: &RectangleElement) -> String {
        let g = &e.geometry;
        format!(
            r#"
canvas.create_rectangle(
    {x0},
    {y0},
    {x1},
    {y1},
    fill="{fill}",
    outline="")
"#,
            x0 = format_number(g.x),
            y0 = format_number(g.y),
            x1 = format_number(g.x + g.width),
            y1 = format_number(g.y + g.height),
            fill = e.fill,
        )
    }

    fn text(&self, e: &TextElement) -> String {
        format!(
            r#"
canvas.create_text(
    {x},
    {y},
    anchor="nw",
    text="{text}",
    fill="{color}",
    font=("{font}", {size})
)
"#,
            x = format_number(e.geometry.x),
            y = format_number(e.geometry.y),
            text = escape_string_literal(&e.text),
            color = e.color,
            font = escape_string_literal(&e.font),
            size = -e.font_size,
        )
    }

    fn button(&self, e: &ButtonElement) -> String {
        let id = &e.identifier;
        format!(
            r#"
button_image_{id} = ImageTk.PhotoImage(Image.open(
    relative_to_assets("{path}")))
button_{id} = Button(
    image=button_image_{id},
    borderwidth=0,
    highlightthickness=0,
    command=lambda: print("button_{id} clicked"),
    relief="flat"
)
button_{id}.place(
    x={x},
    y={y},
    width={width},
    height={height}
)
"#,
            path = escape_string_literal(&e.asset_path),
            x = format_number(e.geometry.x),
            y = format_number(e.geometry.y),
            width = format_number(e.geometry.width),
            height = format_number(e.geometry.height),
        )
    }

    fn image(&self, e: &ImageElement) -> String {
        let id = &e.identifier;
        format!(
            r#"
image_image_{id} = ImageTk.PhotoImage(Image.open(
    relative_to_assets("{path}")))
image_{id} = canvas.create_image(
    {x},
    {y},
    image=image_image_{id}
)
"#,
            path = escape_string_literal(&e.asset_path),
            x = format_number(e.geometry.x),
            y = format_number(e.geometry.y),
        )
    }

    fn text_entry(&self, e: &TextEntryElement) -> Result<String> {
        let widget = e.widget_class()?;
        let id = &e.identifier;
        Ok(format!(
            r#"
entry_image_{id} = ImageTk.PhotoImage(Image.open(
    relative_to_assets("{path}")))
entry_bg_{id} = canvas.create_image(
    {bg_x},
    {bg_y},
    image=entry_image_{id}
)
entry_{id} = {widget}(
    bd=0,
    bg="{bg_color}",
    fg="{fg}",
    highlightthickness=0
)
entry_{id}.place(
    x={x},
    y={y},
    width={width},
    height={height}
)
"#,
            path = escape_string_literal(&e.asset_path),
            bg_x = format_number(e.background.x),
            bg_y = format_number(e.background.y),
            bg_color = e.bg_color,
            fg = ENTRY_FOREGROUND,
            x = format_number(e.entry.x),
            y = format_number(e.entry.y),
            width = format_number(e.entry.width),
            height = format_number(e.entry.height),
        ))
    }
}

impl FragmentFormatter for TkinterFormatter {
    fn target_name(&self) -> &'static str {
        "tkinter"
    }

    fn format(&self, element: &Element) -> Result<String> {
        Ok(match element {
            Element::Rectangle(e) => self.rectangle(e),
            Element::Text(e) => self.text(e),
            Element::Button(e) => self.button(e),
            Element::Image(e) => self.image(e),
            Element::TextEntry(e) => self.text_entry(e)?,
        })
    }
}

/// Print a coordinate: integral values without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
