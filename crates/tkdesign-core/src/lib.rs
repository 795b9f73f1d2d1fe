//! Core types and resolution helpers for tkdesign.
//!
//! This crate provides the read-only view over design-file nodes used by the
//! code generator:
//! - [`Node`], an adapter over one raw JSON node with field lookup
//! - Typed design records (bounding boxes, fills, type styles)
//! - Pure geometry/style resolution (frame-relative position, hex colors,
//!   font names, text case)
//! - Error types

pub mod errors;
pub mod node;
pub mod resolve;
pub mod types;

pub use errors::*;
pub use node::Node;
pub use resolve::*;
pub use types::*;
