//! Pure geometry and style resolution.
//!
//! These functions carry no node access; [`crate::Node`] delegates to them so
//! they can be tested without building JSON records.

use crate::types::{BoundingBox, TextCase, TypeStyle};

/// `absolute(node) - absolute(frame)`, componentwise.
pub fn relative_position(node: &BoundingBox, frame: &BoundingBox) -> (f64, f64) {
    (node.x - frame.x, node.y - frame.y)
}

/// Center point of a box whose top-left corner sits at `(x, y)`.
pub fn center_anchor((x, y): (f64, f64), (width, height): (f64, f64)) -> (f64, f64) {
    (x + width / 2.0, y + height / 2.0)
}

/// Center anchor with the half extents floored to whole pixels.
pub fn pixel_center_anchor((x, y): (f64, f64), (width, height): (f64, f64)) -> (f64, f64) {
    (x + (width / 2.0).floor(), y + (height / 2.0).floor())
}

/// Bound a declared corner radius to half the height.
pub fn clamp_corner_radius(radius: f64, height: f64) -> f64 {
    radius.min(height / 2.0)
}

/// Resolve a font token: PostScript name, else family, hyphens as spaces.
pub fn resolve_font_name(style: &TypeStyle) -> Option<String> {
    style
        .font_post_script_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(style.font_family.as_deref())
        .map(|name| name.replace('-', " "))
}

/// Truncate a font size to whole points.
pub fn resolve_font_size(size: f64) -> i64 {
    size.trunc() as i64
}

/// Apply a case directive to raw text content.
pub fn apply_text_case(text: &str, case: TextCase) -> String {
    match case {
        TextCase::Upper => text.to_uppercase(),
        TextCase::Lower => text.to_lowercase(),
        TextCase::Title => title_case(text),
        TextCase::Original | TextCase::Unsupported => text.to_string(),
    }
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                // Expanding capitals ("ß" -> "SS") keep only the first letter upper.
                let mut upper = ch.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

/// Escape text for a double-quoted, single-line string literal.
pub fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
