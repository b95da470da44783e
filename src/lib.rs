//! # docsplit
//!
//! High-performance document cleaning and chunking for text retrieval
//! pipelines.
//!
//! This library takes batches of plain-text documents (content plus
//! string-keyed metadata), normalizes the content through a fixed pipeline
//! of text cleaners, and recursively splits each document into overlapping
//! chunks bounded by a character budget. Documents are processed in
//! parallel; output order always matches input order.
//!
//! ## Quick Start
//!
//! ```
//! use docsplit::{clean_and_split, Document, Metadata};
//!
//! fn main() -> docsplit::Result<()> {
//!     let mut metadata = Metadata::new();
//!     metadata.insert("source".to_string(), "report.txt".to_string());
//!
//!     let docs = vec![Document::new("The  quick\nbrown fox. ".repeat(200), metadata)];
//!     let chunks = clean_and_split(&docs, 2000)?;
//!
//!     for chunk in &chunks {
//!         assert!(chunk.page_content.chars().count() <= 2000);
//!         assert_eq!(chunk.metadata["source"], "report.txt");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Cleaner pipeline**: whitespace collapse, ligature expansion,
//!   non-ASCII stripping, and paragraph regrouping, in a fixed order
//! - **Recursive splitting**: paragraph breaks before line breaks before
//!   spaces, with a character-level fallback and configurable overlap
//! - **Metadata preservation**: every chunk carries its source document's
//!   metadata unchanged
//! - **Parallel batches**: one worker per hardware thread via Rayon, with
//!   input order preserved
//! - **Character budgets**: chunk sizes count Unicode scalar values, never
//!   bytes

pub mod batch;
pub mod clean;
pub mod error;
pub mod model;
pub mod split;

// Re-export commonly used types
pub use batch::{clean_and_split, clean_and_split_with_options, BatchOptions, THREADS_ENV_VAR};
pub use clean::{
    apply_pipeline, auto_paragraph_grouper, blank_line_grouper, clean_bullets,
    clean_extra_whitespace, clean_ligatures, clean_non_ascii_chars, group_broken_paragraphs,
    group_bullet_paragraph, new_line_grouper, replace_unicode_quotes, Cleaner, CLEANER_PIPELINE,
};
pub use error::{Error, Result};
pub use model::{Document, Metadata};
pub use split::{split_every_n, RecursiveSplitter, DEFAULT_SEPARATORS};
