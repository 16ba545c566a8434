//! Error type shared by the fetcher and the accessor surface.

use thiserror::Error;

/// Every failure the crate can surface to a caller.
#[derive(Debug, Error)]
pub enum CardError {
    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status and a body that is not a document.
    #[error("request to {url} failed with HTTP {status}")]
    Status { status: u16, url: String },

    /// The remote service returned an error document.
    #[error("{details}")]
    Api {
        details: String,
        status: Option<u64>,
        code: Option<String>,
        warnings: Vec<String>,
    },

    /// A getter was invoked for a key the document does not carry.
    #[error("this card has no key '{field}'")]
    MissingField { field: String },

    /// A per-face getter found no `field` in `parent[index]`.
    #[error("{parent}[{index}] has no key '{field}'")]
    MissingTupleField {
        parent: &'static str,
        index: usize,
        field: &'static str,
    },

    /// The stored value does not have the shape the getter declares.
    #[error("field '{field}' is {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An argument outside the accepted set was passed to a getter.
    #[error("invalid {argument}: '{value}'")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    /// The body is not JSON, or its top level is not an object.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CardError {
    /// Whether this is a transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CardError::Network(err) if err.is_timeout())
    }

    /// Whether a getter found no value, at the top level or on a card face.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            CardError::MissingField { .. } | CardError::MissingTupleField { .. }
        )
    }

    pub(crate) fn missing(field: &str) -> Self {
        CardError::MissingField {
            field: field.to_string(),
        }
    }
}

/// Convenience alias over [`CardError`].
pub type Result<T> = std::result::Result<T, CardError>;
