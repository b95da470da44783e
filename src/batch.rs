//! Data-parallel batch pipeline.
//!
//! Cleans every document through the fixed cleaner pipeline, splits the
//! cleaned content with the recursive splitter, and flattens the chunks in
//! input order. Input documents are never mutated; each worker clones the
//! content it needs.

use rayon::prelude::*;
use std::env;
use std::sync::LazyLock;

use crate::clean;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::split::RecursiveSplitter;

/// Advisory override for the worker-thread count.
///
/// When unset, the pool uses one worker per available hardware thread.
pub const THREADS_ENV_VAR: &str = "DOCSPLIT_THREADS";

/// Worker pool shared by every batch call, built on first use.
static POOL: LazyLock<std::result::Result<rayon::ThreadPool, rayon::ThreadPoolBuildError>> =
    LazyLock::new(|| {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = env::var(THREADS_ENV_VAR)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            builder = builder.num_threads(threads);
        }
        builder.build()
    });

/// Options for a batch run.
///
/// Validation happens at construction, so a `BatchOptions` value is always
/// runnable.
///
/// # Example
///
/// ```
/// use docsplit::BatchOptions;
///
/// let options = BatchOptions::new(2000)?.with_overlap(200)?.sequential();
/// # Ok::<(), docsplit::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BatchOptions {
    splitter: RecursiveSplitter,
    parallel: bool,
}

impl BatchOptions {
    /// Create options with the default separators and overlap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self> {
        Ok(Self {
            splitter: RecursiveSplitter::new(chunk_size)?,
            parallel: true,
        })
    }

    /// Set the overlap carried between adjacent chunks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the overlap is not strictly
    /// less than the chunk size.
    pub fn with_overlap(mut self, chunk_overlap: usize) -> Result<Self> {
        self.splitter = self.splitter.with_overlap(chunk_overlap)?;
        Ok(self)
    }

    /// Replace the separator hierarchy.
    pub fn with_separators(mut self, separators: &[&str]) -> Self {
        self.splitter = self.splitter.with_separators(separators);
        self
    }

    /// Process documents one at a time on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Whether documents are processed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

/// Clean and split a batch of documents with default options.
///
/// Every document runs through the fixed cleaner pipeline and the recursive
/// splitter with an overlap of `chunk_size / 3`. The output contains each
/// document's chunks in input order; every chunk carries a clone of its
/// source document's metadata.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `chunk_size` is zero, and
/// [`Error::Internal`] if the worker pool cannot be built. The batch either
/// completes as a whole or fails as a whole.
///
/// # Example
///
/// ```
/// use docsplit::{clean_and_split, Document, Metadata};
///
/// let docs = vec![Document::new("Some  content\nto chunk", Metadata::new())];
/// let chunks = clean_and_split(&docs, 2000)?;
/// assert_eq!(chunks.len(), 1);
/// # Ok::<(), docsplit::Error>(())
/// ```
pub fn clean_and_split(docs: &[Document], chunk_size: usize) -> Result<Vec<Document>> {
    let options = BatchOptions::new(chunk_size)?;
    clean_and_split_with_options(docs, &options)
}

/// Clean and split a batch of documents with explicit options.
///
/// See [`clean_and_split`] for the pipeline contract.
pub fn clean_and_split_with_options(
    docs: &[Document],
    options: &BatchOptions,
) -> Result<Vec<Document>> {
    let worker = |doc: &Document| -> Vec<Document> {
        let mut content = doc.page_content.clone();
        clean::apply_pipeline(&mut content);
        options
            .splitter
            .split_text(&content)
            .into_iter()
            .map(|chunk| Document::new(chunk, doc.metadata.clone()))
            .collect()
    };

    // One slot per input index; collect keeps slots in input order, so no
    // post-sort is needed regardless of completion order.
    let per_doc: Vec<Vec<Document>> = if options.parallel {
        let pool = match &*POOL {
            Ok(pool) => pool,
            Err(e) => return Err(Error::Internal(format!("worker pool failed to build: {e}"))),
        };
        pool.install(|| docs.par_iter().map(worker).collect())
    } else {
        docs.iter().map(worker).collect()
    };

    let chunks: Vec<Document> = per_doc.into_iter().flatten().collect();
    log::debug!("processed {} documents into {} chunks", docs.len(), chunks.len());
    Ok(chunks)
}
