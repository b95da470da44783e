//! Fixed-width character splitting.

use crate::error::{Error, Result};

/// Split `text` into windows of exactly `n` characters.
///
/// The last window may be shorter. Characters are Unicode scalar values,
/// so a window never cuts inside a multi-byte sequence. Empty input yields
/// no windows.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is zero.
pub fn split_every_n(text: &str, n: usize) -> Result<Vec<String>> {
    if n == 0 {
        return Err(Error::invalid_argument("n", n, "must be greater than 0"));
    }
    Ok(text
        .chars()
        .collect::<Vec<_>>()
        .chunks(n)
        .map(|window| window.iter().collect())
        .collect())
}
