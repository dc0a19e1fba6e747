//! Error types for the booking client library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
///
/// Every error here is terminal at the presentation boundary: it is surfaced
/// to the user and the caller returns to an interactive state. None of these
/// variants should abort the process.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A wizard guard blocked a forward transition. Always recoverable by
    /// making the missing selection; never caused by the network.
    #[error("Selection required: {reason}")]
    SelectionRequired { reason: String },
    /// A read from the remote API failed. The affected list is left empty
    /// and the user may retry via an explicit refresh.
    #[error("Could not load {what}. Please try again later.")]
    Fetch {
        what: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server rejected a request and supplied a structured message.
    /// Surfaced verbatim; any in-progress draft is preserved.
    #[error("{message}")]
    Validation { message: String },
    /// Non-success response whose body could not be parsed. The synthesized
    /// message carries the HTTP status code.
    #[error("Server returned an invalid response. Status: {status}")]
    Server { status: u16 },
    /// The request never completed (connectivity, timeout).
    #[error("Cannot connect to the server. Please try again later.")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    /// An operation that needs a logged-in user was attempted without one.
    #[error("Not logged in. Please log in first.")]
    NotLoggedIn,
    /// Invalid input validation errors (registration forms, pet forms)
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors (session persistence)
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ClientError {
        ClientError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ClientError {
    /// Creates a guard failure for a missing wizard selection.
    pub fn selection_required(reason: impl Into<String>) -> Self {
        ClientError::SelectionRequired {
            reason: reason.into(),
        }
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classifies a transport-level `reqwest` failure.
    ///
    /// Requests that never completed (connection refused, timeout) become
    /// [`ClientError::Network`]; anything else that surfaced during a read is
    /// reported as a fetch failure for the named resource.
    pub fn from_transport(what: &str, source: reqwest::Error) -> Self {
        if source.is_connect() || source.is_timeout() || source.is_request() {
            ClientError::Network { source }
        } else {
            ClientError::Fetch {
                what: what.to_string(),
                source,
            }
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
