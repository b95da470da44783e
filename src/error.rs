//! Error types for the docsplit library.

use thiserror::Error;

/// Result type alias for docsplit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
///
/// Cleaners are total functions and never fail; splitters and the batch
/// pipeline validate their parameters up front and cannot fail afterwards
/// on user data.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter was rejected before any work was done.
    #[error("invalid argument `{param}`: {message} (got {value})")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value.
        value: usize,
        /// Why the value was rejected.
        message: &'static str,
    },

    /// An implementation fault, e.g. a shared asset failed to initialize.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(
        param: &'static str,
        value: usize,
        message: &'static str,
    ) -> Self {
        Error::InvalidArgument {
            param,
            value,
            message,
        }
    }
}
