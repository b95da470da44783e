//! Text cleaners.
//!
//! Each cleaner is a total `&str -> String` transform. They never fail and
//! never touch document metadata.

use super::patterns::{
    is_bullet, starts_with_bullet, starts_with_e_bullet, DOUBLE_PARAGRAPH_RE, E_BULLET_RE,
    LIGATURES, LINE_BREAK_OR_NBSP_RE, PARAGRAPH_RE, QUOTES, SPACE_RUN_RE,
};

/// Remove every non-ASCII character.
///
/// Idempotent: the output contains only code points in `0x00..=0x7F`.
pub fn clean_non_ascii_chars(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii()).collect()
}

/// Remove a single leading bullet character and trim surrounding whitespace.
///
/// Text that does not start with a bullet is returned unchanged, as is text
/// starting with a doubled bullet. Note that the bullet set includes the
/// ASCII list markers `-` and `*`.
pub fn clean_bullets(text: &str) -> String {
    if !starts_with_bullet(text) {
        return text.to_string();
    }
    let mut chars = text.chars();
    chars.next();
    chars.as_str().trim().to_string()
}

/// Replace ligature glyphs with their letter sequences.
///
/// Replacements never introduce new ligatures, so one pass suffices.
pub fn clean_ligatures(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (ligature, replacement) in LIGATURES {
        cleaned = cleaned.replace(ligature, replacement);
    }
    cleaned
}

/// Collapse extra whitespace between words and trim the ends.
///
/// Line breaks (including `\r`) and non-breaking spaces become plain
/// spaces before runs of spaces are collapsed.
pub fn clean_extra_whitespace(text: &str) -> String {
    let unbroken = LINE_BREAK_OR_NBSP_RE.replace_all(text, " ");
    let collapsed = SPACE_RUN_RE.replace_all(&unbroken, " ");
    collapsed.trim().to_string()
}

/// Repair mis-decoded unicode quote and dash sequences.
pub fn replace_unicode_quotes(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (broken, intended) in QUOTES {
        cleaned = cleaned.replace(broken, intended);
    }
    cleaned
}

/// Rejoin a bullet list whose items were line-wrapped for visual layout.
///
/// Standalone `e` characters at line starts (an OCR artifact) are first
/// rewritten as bullets; the paragraph is then cut before each bullet and
/// line breaks inside each item collapse to spaces.
pub fn group_bullet_paragraph(paragraph: &str) -> Vec<String> {
    let substituted = E_BULLET_RE.replace_all(paragraph, "\u{b7}$1");
    let trimmed = substituted.trim();

    split_before_bullets(trimmed)
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .map(|piece| PARAGRAPH_RE.replace_all(piece, " ").into_owned())
        .collect()
}

/// Cut `text` immediately before each bullet character.
///
/// The cut is suppressed when the preceding character is itself a bullet,
/// so runs of bullets stay together.
fn split_before_bullets(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (idx, c) in text.char_indices() {
        if idx > 0 && is_bullet(c) && !prev.is_some_and(is_bullet) {
            pieces.push(&text[start..idx]);
            start = idx;
        }
        prev = Some(c);
    }
    pieces.push(&text[start..]);
    pieces
}

/// Rejoin paragraphs whose lines were broken for visual layout.
///
/// The text is cut at blank-line boundaries. Bullet paragraphs are handed
/// to [`group_bullet_paragraph`]; paragraphs whose lines all have fewer
/// than five words (address blocks, license headers) keep their lines
/// separate; everything else has its internal line breaks collapsed to
/// spaces. Paragraphs are rejoined with blank lines.
pub fn group_broken_paragraphs(text: &str) -> String {
    let mut grouped: Vec<String> = Vec::new();
    for paragraph in DOUBLE_PARAGRAPH_RE.split(text) {
        let stripped = paragraph.trim();
        if stripped.is_empty() {
            continue;
        }
        if starts_with_bullet(stripped) || starts_with_e_bullet(stripped) {
            grouped.extend(group_bullet_paragraph(paragraph));
            continue;
        }
        let lines: Vec<&str> = PARAGRAPH_RE.split(paragraph).collect();
        let all_lines_short = lines
            .iter()
            .all(|line| line.split_whitespace().count() < 5);
        if all_lines_short {
            grouped.extend(
                lines
                    .iter()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| line.to_string()),
            );
        } else {
            grouped.push(PARAGRAPH_RE.replace_all(paragraph, " ").into_owned());
        }
    }
    grouped.join("\n\n")
}

/// Promote single line breaks to paragraph breaks, dropping blank lines.
///
/// For documents that separate paragraphs with one line break each.
pub fn new_line_grouper(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Regroup text that separates paragraphs with blank lines.
pub fn blank_line_grouper(text: &str) -> String {
    group_broken_paragraphs(text)
}

/// Pick a grouping strategy from the blank-line ratio of the first lines.
///
/// Documents with almost no blank lines use one line break per paragraph
/// and go through [`new_line_grouper`]; anything else is treated as
/// blank-line separated and goes through [`blank_line_grouper`].
pub fn auto_paragraph_grouper(text: &str) -> String {
    const MAX_LINE_COUNT: usize = 2000;
    const THRESHOLD: f64 = 0.1;

    let mut line_count = 0usize;
    let mut empty_line_count = 0usize;
    for line in text.split_inclusive('\n').take(MAX_LINE_COUNT) {
        line_count += 1;
        if line.trim().is_empty() {
            empty_line_count += 1;
        }
    }
    // Splitting after each newline leaves an empty trailing piece when the
    // text ends with a line break; it counts as a blank line.
    if (text.is_empty() || text.ends_with('\n')) && line_count < MAX_LINE_COUNT {
        line_count += 1;
        empty_line_count += 1;
    }

    let ratio = empty_line_count as f64 / line_count as f64;
    if ratio < THRESHOLD {
        new_line_grouper(text)
    } else {
        blank_line_grouper(text)
    }
}
