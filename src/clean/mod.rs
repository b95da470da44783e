//! Text cleaning: the individual cleaners, the fixed pipeline, and the
//! compiled pattern assets they share.

mod cleaners;
mod patterns;
mod pipeline;

pub use cleaners::{
    auto_paragraph_grouper, blank_line_grouper, clean_bullets, clean_extra_whitespace,
    clean_ligatures, clean_non_ascii_chars, group_broken_paragraphs, group_bullet_paragraph,
    new_line_grouper, replace_unicode_quotes,
};
pub use pipeline::{apply_pipeline, Cleaner, CLEANER_PIPELINE};
