//! Error types for pif2pass operations.

use thiserror::Error;

/// Result type alias using [`Pif2PassError`].
pub type Result<T> = std::result::Result<T, Pif2PassError>;

/// Errors that can occur while reading an export or writing to a store.
///
/// All errors implement `std::error::Error` and can be chained with `source()`.
#[derive(Debug, Error)]
pub enum Pif2PassError {
    /// Input file does not carry the `.1pif` extension.
    #[error("Unsupported file format.")]
    UnsupportedFormat(String),

    /// A URL in the export could not be parsed.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The offending URL text
        url: String,
        /// Underlying parser error
        #[source]
        source: url::ParseError,
    },

    /// A URL parsed but has no host to derive a title from.
    #[error("URL has no host: {0:?}")]
    MissingHost(String),

    /// Entry title cannot be used as a store path.
    #[error("invalid entry title: {0}")]
    InvalidTitle(String),

    /// Entry already exists in the store (insert without force).
    #[error("entry already exists: {0}")]
    AlreadyExists(String),

    /// Required CLI tool is not installed.
    #[error("store command not installed: {0}")]
    StoreNotInstalled(String),

    /// Password store directory does not exist.
    #[error("password store not initialized at {0}")]
    StoreNotInitialized(String),

    /// Operation is not supported by this store or platform.
    #[error("operation not supported: {0}")]
    NotSupported(String),

    /// Store operation failed with context.
    #[error("{store}: {operation} {title}: {source}")]
    StoreOperation {
        /// Store name
        store: String,
        /// Operation name (insert, link)
        operation: String,
        /// Entry title
        title: String,
        /// Underlying error
        #[source]
        source: Box<Pif2PassError>,
    },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export text is not valid JSON after normalization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    CommandFailed(String),

    /// Other error (catch-all).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Pif2PassError {
    /// Creates a store operation error with context.
    ///
    /// # Example
    ///
    /// ```
    /// use pif2pass::Pif2PassError;
    ///
    /// let err = Pif2PassError::AlreadyExists("example.com".to_string());
    /// let wrapped = Pif2PassError::store_op("pass", "insert", "example.com", err);
    ///
    /// assert_eq!(
    ///     wrapped.to_string(),
    ///     "pass: insert example.com: entry already exists: example.com"
    /// );
    /// ```
    pub fn store_op(
        store: impl Into<String>,
        operation: impl Into<String>,
        title: impl Into<String>,
        err: Pif2PassError,
    ) -> Self {
        Self::StoreOperation {
            store: store.into(),
            operation: operation.into(),
            title: title.into(),
            source: Box::new(err),
        }
    }
}
