//! Identifier derivation for generated variable names.

use crate::assets::AssetKind;
use convert_case::{Case, Casing};
use std::collections::HashSet;
use tkdesign_core::Node;

/// Derive an identifier from a node name like `"TextBox_42"`.
///
/// Takes the segment after the first `_`, lower-cased and converted to
/// snake case. Returns `None` when the name has no usable segment.
pub fn derive_identifier(name: &str) -> Option<String> {
    let segment = name.trim().to_lowercase();
    let segment = segment.split('_').nth(1)?.trim();

    let identifier: String = segment
        .to_case(Case::Snake)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if identifier.is_empty() {
        None
    } else {
        Some(identifier)
    }
}

/// Identifier state threaded through one generation pass.
///
/// Holds the fallback counter explicitly so two passes seeded alike produce
/// the same identifiers. Uniqueness is tracked on the program variables each
/// identifier binds, so `image_2` and `2` cannot both claim `image_image_2`.
#[derive(Debug, Clone)]
pub struct IdentifierScope {
    next: u64,
    unique: bool,
    bound: HashSet<String>,
}

impl IdentifierScope {
    pub fn new(seed: u64, unique: bool) -> Self {
        Self {
            next: seed,
            unique,
            bound: HashSet::new(),
        }
    }

    /// The value the counter will hand out next.
    pub fn counter(&self) -> u64 {
        self.next
    }

    fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// Assign an identifier to `node` for a variant of `kind`.
    ///
    /// The counter advances once per call, whether or not the name supplies
    /// the identifier.
    pub fn assign(&mut self, node: &Node<'_>, kind: AssetKind) -> String {
        let fallback = self.advance();
        let mut identifier = derive_identifier(node.name()).unwrap_or_else(|| fallback.to_string());

        if self.unique && self.is_bound(kind, &identifier) {
            identifier = fallback.to_string();
            while self.is_bound(kind, &identifier) {
                identifier = self.advance().to_string();
            }
        }

        self.bound.extend(kind.bindings(&identifier));
        identifier
    }

    fn is_bound(&self, kind: AssetKind, identifier: &str) -> bool {
        kind.bindings(identifier)
            .iter()
            .any(|name| self.bound.contains(name))
    }
}
