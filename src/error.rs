use thiserror::Error;

/// Error type returned by wakachi-rs public APIs.
///
/// The merge engine itself never fails; every variant here comes from the
/// orchestration layer around it.
#[derive(Debug, Error)]
pub enum Error {
    /// The analyzer was already initialized with a different configuration.
    #[error("analyzer already initialized with {existing}, refusing {requested}")]
    ConfigConflict {
        /// Debug rendering of the configuration in use.
        existing: String,
        /// Debug rendering of the rejected configuration.
        requested: String,
    },
    /// Analyzer surfaces did not reproduce the input text.
    #[error("analyzer surface mismatch at char {offset}: expected {expected:?}, found {found:?}")]
    SurfaceMismatch {
        /// Character offset where the mismatch starts.
        offset: usize,
        /// Text actually present in the input at `offset`.
        expected: String,
        /// Surface reported by the analyzer.
        found: String,
    },
    /// Failure reported by the external analyzer, passed through as-is.
    ///
    /// Display and `source()` are the analyzer's own; downcast the box to the
    /// analyzer's error type to get the original value back.
    #[error(transparent)]
    Analyzer(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn analyzer<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Analyzer(Box::new(error))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
