//! Splitters that turn cleaned content into size-bounded chunks.

mod fixed;
mod recursive;

pub use fixed::split_every_n;
pub use recursive::{RecursiveSplitter, DEFAULT_SEPARATORS};
