//! Document model types.
//!
//! This module defines the document value that flows through the cleaner
//! pipeline and the splitters: a plain-text content string paired with an
//! opaque string-to-string metadata map.

mod document;

pub use document::{Document, Metadata};
