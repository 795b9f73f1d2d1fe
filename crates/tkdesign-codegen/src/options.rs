//! Generator configuration.

use crate::error::{CodegenError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Options controlling classification, identifiers and asset paths.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration:
///
/// ```ignore
/// let options = GeneratorOptions::from_json(r#"{"input_kinds": {"TextArea": "Text"}}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Text-entry name prefix -> widget class. Keys match case-insensitively.
    pub input_kinds: IndexMap<String, String>,
    /// Extra regex over the name prefix marking a text entry. A prefix it
    /// accepts that `input_kinds` lacks fails with a configuration error.
    pub entry_marker: Option<String>,
    /// Regex over the name prefix marking an interactive (button) image.
    pub button_marker: String,
    /// Regex over the name prefix marking a static image.
    pub image_marker: String,
    /// Node kinds that may become a Button or Image.
    pub image_kinds: Vec<String>,
    /// First value handed out by the fallback identifier counter.
    pub counter_seed: u64,
    /// Replace identifiers already used by the same variant in one program.
    pub unique_identifiers: bool,
    /// Assets directory, relative to the generated program.
    pub assets_path: String,
    /// Extension of exported asset files.
    pub asset_extension: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        let mut input_kinds = IndexMap::new();
        input_kinds.insert("TextArea".to_string(), "Text".to_string());
        input_kinds.insert("TextBox".to_string(), "Entry".to_string());

        Self {
            input_kinds,
            entry_marker: None,
            button_marker: "(?i)^button$".to_string(),
            image_marker: "(?i)^image$".to_string(),
            image_kinds: vec!["RECTANGLE".to_string()],
            counter_seed: 1,
            unique_identifiers: true,
            assets_path: "./assets".to_string(),
            asset_extension: "png".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CodegenError::Json)
    }

    /// Map an additional text-entry prefix to a widget class.
    pub fn with_input_kind(mut self, prefix: impl Into<String>, widget: impl Into<String>) -> Self {
        self.input_kinds.insert(prefix.into(), widget.into());
        self
    }

    pub fn with_entry_marker(mut self, pattern: impl Into<String>) -> Self {
        self.entry_marker = Some(pattern.into());
        self
    }

    pub fn with_button_marker(mut self, pattern: impl Into<String>) -> Self {
        self.button_marker = pattern.into();
        self
    }

    pub fn with_image_marker(mut self, pattern: impl Into<String>) -> Self {
        self.image_marker = pattern.into();
        self
    }

    pub fn with_counter_seed(mut self, seed: u64) -> Self {
        self.counter_seed = seed;
        self
    }

    pub fn with_unique_identifiers(mut self, unique: bool) -> Self {
        self.unique_identifiers = unique;
        self
    }

    pub fn with_assets_path(mut self, path: impl Into<String>) -> Self {
        self.assets_path = path.into();
        self
    }
}
