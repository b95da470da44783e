//! Recursive character splitting.
//!
//! Content is first fragmented along a separator hierarchy (paragraph
//! breaks before line breaks before spaces, with a character-by-character
//! terminal fallback), then adjacent fragments are merged back into chunks
//! bounded by the chunk size, carrying a configurable overlap from each
//! chunk into the next.

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Default separator hierarchy, highest priority first.
///
/// The empty string is the terminal fallback and means "split between
/// every character".
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Count characters (Unicode scalar values), not bytes.
#[inline]
fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Splits text into size-bounded chunks along a separator hierarchy.
///
/// The splitter is a pure function of its configuration: the same input
/// always produces the same chunks.
///
/// # Example
///
/// ```
/// use docsplit::RecursiveSplitter;
///
/// let splitter = RecursiveSplitter::new(100)?;
/// let chunks = splitter.split_text("First paragraph.\n\nSecond paragraph.");
/// assert!(chunks.iter().all(|c| c.chars().count() <= 100));
/// # Ok::<(), docsplit::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveSplitter {
    /// Create a splitter with the default separators and an overlap of
    /// `chunk_size / 3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_argument(
                "chunk_size",
                chunk_size,
                "must be greater than 0",
            ));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap: chunk_size / 3,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Set the number of characters carried over between adjacent chunks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `chunk_overlap` is not
    /// strictly less than the chunk size.
    pub fn with_overlap(mut self, chunk_overlap: usize) -> Result<Self> {
        if chunk_overlap >= self.chunk_size {
            return Err(Error::invalid_argument(
                "chunk_overlap",
                chunk_overlap,
                "must be strictly less than chunk_size",
            ));
        }
        self.chunk_overlap = chunk_overlap;
        Ok(self)
    }

    /// Replace the separator hierarchy.
    pub fn with_separators(mut self, separators: &[&str]) -> Self {
        self.separators = separators.iter().map(|s| s.to_string()).collect();
        self
    }

    /// The configured chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The configured overlap.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into chunks of at most the configured chunk size.
    ///
    /// Empty input produces no chunks. Chunks are trimmed; blank chunks are
    /// dropped.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let fragments = self.fragment(text, &self.separators);
        let chunks = self.merge(fragments);
        log::debug!(
            "split {} characters into {} chunks (chunk_size={}, overlap={})",
            char_count(text),
            chunks.len(),
            self.chunk_size,
            self.chunk_overlap
        );
        chunks
    }

    /// Recursively cut `text` into fragments shorter than the chunk size.
    ///
    /// Each matched separator stays appended to the piece that precedes it,
    /// so concatenating the fragments reproduces `text`.
    fn fragment<'a>(&self, text: &'a str, separators: &[String]) -> Vec<&'a str> {
        let Some((separator, lower)) = pick_separator(text, separators) else {
            // No separators left at this depth: the text is atomic.
            return vec![text];
        };

        let mut fragments = Vec::new();
        for piece in split_with_separator(text, separator) {
            if char_count(piece) < self.chunk_size {
                fragments.push(piece);
            } else if separator.is_empty() {
                // Terminal level: a single character is the smallest
                // unsplittable unit.
                fragments.push(piece);
            } else {
                fragments.extend(self.fragment(piece, lower));
            }
        }
        fragments
    }

    /// Merge fragments left-to-right into output chunks, carrying at most
    /// `chunk_overlap` trailing characters into the next chunk.
    fn merge(&self, fragments: Vec<&str>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer: VecDeque<&str> = VecDeque::new();
        let mut buffer_len = 0usize;

        for fragment in fragments {
            let fragment_len = char_count(fragment);
            if buffer_len + fragment_len > self.chunk_size && !buffer.is_empty() {
                self.push_chunk(&mut chunks, &buffer);
                // Drain the left edge until the residue fits under the
                // overlap budget and the incoming fragment still fits in a
                // chunk. The residue becomes the next chunk's prefix.
                while buffer_len > self.chunk_overlap
                    || (buffer_len + fragment_len > self.chunk_size && buffer_len > 0)
                {
                    match buffer.pop_front() {
                        Some(removed) => buffer_len -= char_count(removed),
                        None => break,
                    }
                }
            }
            buffer.push_back(fragment);
            buffer_len += fragment_len;
        }

        if !buffer.is_empty() {
            self.push_chunk(&mut chunks, &buffer);
        }
        chunks
    }

    /// Finalize the buffer into a chunk, dropping it if blank after trim.
    fn push_chunk(&self, chunks: &mut Vec<String>, buffer: &VecDeque<&str>) {
        let joined: String = buffer.iter().copied().collect();
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            return;
        }
        let len = char_count(trimmed);
        if len > self.chunk_size {
            log::warn!(
                "created a chunk of {} characters, longer than the requested {}",
                len,
                self.chunk_size
            );
        }
        chunks.push(trimmed.to_string());
    }
}

/// Pick the highest-priority separator occurring in `text`, together with
/// the lower-priority separators for recursion.
///
/// Falls back to the last separator when none occurs; returns `None` only
/// for an empty separator list.
fn pick_separator<'s>(text: &str, separators: &'s [String]) -> Option<(&'s str, &'s [String])> {
    let mut separator: &str = separators.last()?;
    let mut lower: &[String] = &[];
    for (i, candidate) in separators.iter().enumerate() {
        if candidate.is_empty() || text.contains(candidate.as_str()) {
            separator = candidate;
            lower = &separators[i + 1..];
            break;
        }
    }
    Some((separator, lower))
}

/// Split `text` on `separator`, keeping the separator appended to the
/// piece that precedes it. An empty separator cuts between every character.
fn split_with_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, matched) in text.match_indices(separator) {
        let end = idx + matched.len();
        pieces.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_text_word_separator() {
        let splitter = RecursiveSplitter::new(7)
            .unwrap()
            .with_overlap(3)
            .unwrap()
            .with_separators(&[" "]);
        let chunks = splitter.split_text("foo bar baz 123");
        assert_eq!(chunks, vec!["foo", "bar", "baz 123"]);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let splitter = RecursiveSplitter::new(100).unwrap();
        assert!(splitter.split_text("").is_empty());
    }

    #[test]
    fn test_whitespace_only_yields_no_chunks() {
        let splitter = RecursiveSplitter::new(100).unwrap();
        assert!(splitter.split_text("   \n\n   ").is_empty());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = RecursiveSplitter::new(0).unwrap_err();
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        assert!(RecursiveSplitter::new(10).unwrap().with_overlap(10).is_err());
        assert!(RecursiveSplitter::new(10).unwrap().with_overlap(9).is_ok());
    }

    #[test]
    fn test_prefers_paragraph_boundaries() {
        let splitter = RecursiveSplitter::new(20).unwrap();
        let chunks = splitter.split_text("Paragraph one.\n\nParagraph two.");
        assert_eq!(chunks, vec!["Paragraph one.", "Paragraph two."]);
    }

    #[test]
    fn test_respects_chunk_size_without_natural_breaks() {
        let splitter = RecursiveSplitter::new(100).unwrap();
        let chunks = splitter.split_text(&"A".repeat(1000));
        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| char_count(c) <= 100));
    }

    #[test]
    fn test_overlapping_chunks_share_content() {
        let splitter = RecursiveSplitter::new(4).unwrap().with_overlap(1).unwrap();
        let chunks = splitter.split_text(&"A".repeat(10));
        assert_eq!(chunks, vec!["AAAA", "AAAA", "AAAA"]);
    }

    #[test]
    fn test_deterministic() {
        let splitter = RecursiveSplitter::new(50).unwrap();
        let text = "Some text\n\nMore text\n\nEven more text. ".repeat(10);
        assert_eq!(splitter.split_text(&text), splitter.split_text(&text));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let splitter = RecursiveSplitter::new(20).unwrap();
        let text = "English \u{4e2d}\u{6587} \u{65e5}\u{672c}\u{8a9e} \u{d55c}\u{ae00} words";
        let chunks = splitter.split_text(text);
        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| char_count(c) <= 20));
    }

    #[test]
    fn test_mixed_separators() {
        let splitter = RecursiveSplitter::new(20).unwrap();
        let chunks = splitter.split_text("Para1\n\nPara2\nLine break\n\nPara3 with spaces");
        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| char_count(c) <= 20));
    }

    #[test]
    fn test_fragment_concatenation_reproduces_text() {
        let splitter = RecursiveSplitter::new(10).unwrap();
        let text = "one two three\n\nfour five six seven\neight";
        let fragments = splitter.fragment(text, &splitter.separators);
        let rebuilt: String = fragments.concat();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_split_with_separator_keeps_separator() {
        assert_eq!(
            split_with_separator("a b c", " "),
            vec!["a ", "b ", "c"]
        );
        assert_eq!(split_with_separator("ab", ""), vec!["a", "b"]);
        assert_eq!(split_with_separator("a\n\nb", "\n\n"), vec!["a\n\n", "b"]);
    }

    #[test]
    fn test_pick_separator_priority() {
        let separators: Vec<String> = DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect();
        let (sep, lower) = pick_separator("a\n\nb", &separators).unwrap();
        assert_eq!(sep, "\n\n");
        assert_eq!(lower.len(), 3);

        let (sep, _) = pick_separator("abc", &separators).unwrap();
        assert_eq!(sep, "");

        assert!(pick_separator("abc", &[]).is_none());
    }
}
