//! Document value type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::clean;
use crate::error::Result;
use crate::split::{self, RecursiveSplitter};

/// String-keyed document metadata.
///
/// Keys and values are owned strings; the map's sorted iteration order makes
/// the display form and serialized output deterministic.
pub type Metadata = BTreeMap<String, String>;

/// A plain-text document with arbitrary string metadata.
///
/// Cleaner methods mutate `page_content` in place; splitter methods consume
/// nothing and return new documents that carry a clone of this document's
/// metadata.
///
/// # Example
///
/// ```
/// use docsplit::{Document, Metadata};
///
/// let mut metadata = Metadata::new();
/// metadata.insert("source".to_string(), "report.txt".to_string());
///
/// let mut doc = Document::new("ITEM 1.     BUSINESS ", metadata);
/// doc.clean_extra_whitespace();
/// assert_eq!(doc.page_content, "ITEM 1. BUSINESS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The document text.
    pub page_content: String,

    /// Metadata carried unchanged through every transformation.
    pub metadata: Metadata,
}

impl Document {
    /// Create a new document from content and metadata.
    pub fn new(page_content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            page_content: page_content.into(),
            metadata,
        }
    }

    /// Create a document with empty metadata.
    pub fn from_content(page_content: impl Into<String>) -> Self {
        Self::new(page_content, Metadata::new())
    }

    /// Apply the full cleaner pipeline in place.
    ///
    /// Runs the same fixed cleaner sequence the batch pipeline applies
    /// before splitting.
    pub fn clean(&mut self) {
        clean::apply_pipeline(&mut self.page_content);
    }

    /// Collapse extra whitespace between words and trim the ends.
    pub fn clean_extra_whitespace(&mut self) {
        self.page_content = clean::clean_extra_whitespace(&self.page_content);
    }

    /// Expand typographic ligatures into their letter sequences.
    pub fn clean_ligatures(&mut self) {
        self.page_content = clean::clean_ligatures(&self.page_content);
    }

    /// Remove every non-ASCII character.
    pub fn clean_non_ascii_chars(&mut self) {
        self.page_content = clean::clean_non_ascii_chars(&self.page_content);
    }

    /// Remove a leading bullet character, if present.
    pub fn clean_bullets(&mut self) {
        self.page_content = clean::clean_bullets(&self.page_content);
    }

    /// Repair mis-decoded unicode quote and dash sequences.
    pub fn replace_unicode_quotes(&mut self) {
        self.page_content = clean::replace_unicode_quotes(&self.page_content);
    }

    /// Rejoin paragraphs whose lines were broken for visual layout.
    pub fn group_broken_paragraphs(&mut self) {
        self.page_content = clean::group_broken_paragraphs(&self.page_content);
    }

    /// Promote single line breaks to paragraph breaks.
    pub fn new_line_grouper(&mut self) {
        self.page_content = clean::new_line_grouper(&self.page_content);
    }

    /// Regroup text that uses blank-line paragraph breaks.
    pub fn blank_line_grouper(&mut self) {
        self.page_content = clean::blank_line_grouper(&self.page_content);
    }

    /// Pick a paragraph grouping strategy from the blank-line ratio.
    pub fn auto_paragraph_grouper(&mut self) {
        self.page_content = clean::auto_paragraph_grouper(&self.page_content);
    }

    /// Split into fixed-width windows of `n` characters.
    ///
    /// The last window may be shorter; empty content yields no documents.
    /// Characters are Unicode scalar values, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `n` is zero.
    pub fn split_on_num_characters(&self, n: usize) -> Result<Vec<Document>> {
        let chunks = split::split_every_n(&self.page_content, n)?;
        Ok(self.wrap_chunks(chunks))
    }

    /// Split into chunks of at most `chunk_size` characters, preferring
    /// paragraph and word boundaries, with the default overlap of
    /// `chunk_size / 3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `chunk_size` is zero.
    pub fn recursive_character_splitter(&self, chunk_size: usize) -> Result<Vec<Document>> {
        let splitter = RecursiveSplitter::new(chunk_size)?;
        Ok(self.wrap_chunks(splitter.split_text(&self.page_content)))
    }

    /// Wrap raw text chunks into documents carrying this document's metadata.
    fn wrap_chunks(&self, chunks: Vec<String>) -> Vec<Document> {
        chunks
            .into_iter()
            .map(|page_content| Document {
                page_content,
                metadata: self.metadata.clone(),
            })
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document(page_content={:?}, metadata={{", self.page_content)?;
        for (i, (key, value)) in self.metadata.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        write!(f, "}})")
    }
}
