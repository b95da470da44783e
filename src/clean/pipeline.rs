//! The fixed cleaner pipeline applied before splitting.

use super::cleaners::{
    auto_paragraph_grouper, blank_line_grouper, clean_extra_whitespace, clean_ligatures,
    clean_non_ascii_chars, group_broken_paragraphs, new_line_grouper,
};

/// A text cleaner: a total transform from one string to another.
pub type Cleaner = fn(&str) -> String;

/// The cleaners the batch pipeline applies, in order, before splitting.
///
/// Bullet stripping and quote repair are deliberately not part of the fixed
/// pipeline; they are available as standalone [`Document`](crate::Document)
/// methods.
pub const CLEANER_PIPELINE: [Cleaner; 7] = [
    clean_extra_whitespace,
    clean_ligatures,
    clean_non_ascii_chars,
    blank_line_grouper,
    new_line_grouper,
    group_broken_paragraphs,
    auto_paragraph_grouper,
];

/// Run the full cleaner pipeline over `content` in place.
///
/// Reuses the one buffer across the chain; each stage reads the previous
/// stage's output.
pub fn apply_pipeline(content: &mut String) {
    for cleaner in CLEANER_PIPELINE {
        *content = cleaner(content);
    }
}
