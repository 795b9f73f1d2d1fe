//! Template engine for program assembly.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is disabled and templates run in
/// strict mode: a missing variable is an error, not an empty string.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        // Register custom helpers
        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // Single-line comment helper: folds newlines so a value can't escape a `#` comment
        handlebars.register_helper(
            "comment",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&to_comment_line(param))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_comment_line(s: &str) -> String {
    s.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
