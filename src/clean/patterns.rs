//! Compiled patterns and lookup tables shared by the cleaners.
//!
//! Everything here is initialized once per process and shared read-only
//! across worker threads.

use regex::Regex;
use std::sync::LazyLock;

/// Whitespace run containing a single line break.
pub(crate) static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("paragraph pattern"));

/// Two consecutive line-break runs: a blank-line paragraph boundary.
pub(crate) static DOUBLE_PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*\n\s*){2}").expect("double paragraph pattern"));

/// Line-leading standalone `e` followed by whitespace. OCR output renders
/// some bullet glyphs as a bare `e`; the whitespace is captured so the
/// replacement can re-emit it after the substituted bullet.
pub(crate) static E_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^e(\s)").expect("e-bullet pattern"));

/// Newlines, carriage returns, and non-breaking spaces, all of which
/// collapse to a plain space.
pub(crate) static LINE_BREAK_OR_NBSP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{a0}\r\n]").expect("line-break pattern"));

/// A run of two or more plain spaces.
pub(crate) static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" {2,}").expect("space-run pattern"));

/// Bullet characters recognized at the start of a line or list item.
///
/// Includes the bare hyphen and asterisk used as ASCII list markers.
pub(crate) const BULLETS: &[char] = &[
    '\u{0095}', // message waiting indicator, seen in CP1252 exports
    '\u{2022}', // •
    '\u{2023}', // ‣
    '\u{2043}', // ⁃
    '\u{3164}', // Hangul filler
    '\u{204c}', // ⁌
    '\u{204d}', // ⁍
    '\u{2219}', // ∙
    '\u{25cb}', // ○
    '\u{25cf}', // ●
    '\u{25d8}', // ◘
    '\u{25e6}', // ◦
    '\u{2619}', // ☙
    '\u{2765}', // ❥
    '\u{2767}', // ❧
    '\u{29be}', // ⦾
    '\u{29bf}', // ⦿
    '-',
    '*',
    '\u{00b7}', // ·
];

/// Ligature glyphs and their letter-sequence expansions.
pub(crate) const LIGATURES: &[(&str, &str)] = &[
    ("\u{00e6}", "ae"),  // æ
    ("\u{00c6}", "AE"),  // Æ
    ("\u{fb00}", "ff"),  // ﬀ
    ("\u{fb01}", "fi"),  // ﬁ
    ("\u{fb02}", "fl"),  // ﬂ
    ("\u{fb03}", "ffi"), // ﬃ
    ("\u{fb04}", "ffl"), // ﬄ
    ("\u{fb05}", "ft"),  // ﬅ
    ("\u{02aa}", "ls"),  // ʪ
    ("\u{0153}", "oe"),  // œ
    ("\u{0152}", "OE"),  // Œ
    ("\u{0239}", "qp"),  // ȹ
    ("\u{fb06}", "st"),  // ﬆ
    ("\u{02a6}", "ts"),  // ʦ
];

/// Mis-decoded quote and dash sequences and their intended characters.
///
/// Covers raw CP1252 control bytes and UTF-8 byte sequences that were
/// decoded as Latin-1. Order matters: longer sequences come before their
/// two-character prefix so the prefix rule only catches leftovers.
pub(crate) const QUOTES: &[(&str, &str)] = &[
    ("\u{91}", "\u{2018}"),             // ‘
    ("\u{92}", "\u{2019}"),             // ’
    ("\u{93}", "\u{201c}"),             // “
    ("\u{94}", "\u{201d}"),             // ”
    ("&apos;", "'"),
    ("\u{e2}\u{80}\u{99}", "'"),
    ("\u{e2}\u{80}\u{94}", "\u{2014}"), // —
    ("\u{e2}\u{80}\u{93}", "\u{2013}"), // –
    ("\u{e2}\u{80}\u{98}", "\u{2018}"), // ‘
    ("\u{e2}\u{80}\u{a6}", "\u{2026}"), // …
    ("\u{e2}\u{80}\u{153}", "\u{201c}"), // “
    ("\u{e2}\u{80}?", "\u{201d}"),      // ”
    ("\u{e2}\u{80}\u{165}", "\u{201d}"), // ”
    ("\u{e2}\u{80}\u{15b}", "\u{201c}"), // “
    ("\u{e2}\u{80}\u{a8}", "\u{2014}"), // —
    ("\u{e2}\u{80}\u{142}", "\u{2033}"), // ″
    ("\u{e2}\u{80}\u{17d}", ""),
    ("\u{e2}\u{80}\u{201a}", ""),
    ("\u{e2}\u{80}\u{2030}", ""),
    ("\u{e2}\u{80}\u{2039}", ""),
    ("\u{e2}\u{80}", ""),
];

/// Whether `c` is a recognized bullet character.
pub(crate) fn is_bullet(c: char) -> bool {
    BULLETS.contains(&c)
}

/// Whether `text` begins with a single bullet character.
///
/// A doubled bullet (for example `**`) does not count, mirroring the
/// negative look-ahead in the source pattern.
pub(crate) fn starts_with_bullet(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_bullet(first) => !chars.next().is_some_and(is_bullet),
        _ => false,
    }
}

/// Whether `text` begins with a standalone `e` followed by whitespace.
pub(crate) fn starts_with_e_bullet(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('e') && chars.next().is_some_and(char::is_whitespace)
}
