//! Asset references emitted alongside generated programs.
//!
//! The generator never touches asset bytes. It names the file each fragment
//! loads and reports the list so an exporter can fetch the images.

use serde::Serialize;
use tkdesign_core::Node;

/// What an asset is used for; also the variable-name prefix of its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Button,
    Image,
    Entry,
}

impl AssetKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Image => "image",
            Self::Entry => "entry",
        }
    }

    /// Program-level variables an element of this kind binds for `identifier`.
    pub fn bindings(&self, identifier: &str) -> Vec<String> {
        let prefix = self.prefix();
        let mut names = vec![
            format!("{prefix}_{identifier}"),
            format!("{prefix}_image_{identifier}"),
        ];
        if *self == Self::Entry {
            names.push(format!("entry_bg_{identifier}"));
        }
        names
    }
}

/// An asset file referenced by a generated program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    /// Design node to export.
    pub node_id: String,
    pub kind: AssetKind,
    /// Path relative to the assets directory.
    pub path: String,
}

/// Strategy for naming asset files.
pub trait AssetNaming {
    fn asset_path(&self, node: &Node<'_>, kind: AssetKind, identifier: &str) -> String;
}

/// Names assets `<prefix>_<identifier>.<extension>`.
#[derive(Debug, Clone)]
pub struct NumberedAssets {
    extension: String,
}

impl NumberedAssets {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for NumberedAssets {
    fn default() -> Self {
        Self::new("png")
    }
}

impl AssetNaming for NumberedAssets {
    fn asset_path(&self, _node: &Node<'_>, kind: AssetKind, identifier: &str) -> String {
        format!("{}_{}.{}", kind.prefix(), identifier, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bindings() {
        assert_eq!(AssetKind::Image.bindings("2"), ["image_2", "image_image_2"]);
        assert_eq!(
            AssetKind::Entry.bindings("email"),
            ["entry_email", "entry_image_email", "entry_bg_email"]
        );
    }

    #[test]
    fn test_numbered_asset_names() {
        let raw = json!({"id": "1:2", "name": "Button_ok"});
        let naming = NumberedAssets::default();
        assert_eq!(naming.asset_path(&Node::new(&raw), AssetKind::Button, "ok"), "button_ok.png");
        assert_eq!(
            NumberedAssets::new("gif").asset_path(&Node::new(&raw), AssetKind::Entry, "3"),
            "entry_3.gif"
        );
    }
}
