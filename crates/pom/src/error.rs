// Error types for pom-rs

use thiserror::Error;

/// Result type alias for pom-rs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving page objects
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to establish a session with the driver endpoint
    ///
    /// Common causes: no driver process listening on the endpoint, or the
    /// driver rejected the requested capabilities.
    /// Start one with e.g. `chromedriver --port=9515` or `geckodriver`.
    #[error("Failed to connect to WebDriver endpoint: {0}")]
    ConnectionFailed(String),

    /// Session was closed (quit or expired on the driver side)
    ///
    /// The session must be recreated before it can be used again.
    #[error("Session closed: {0}")]
    SessionClosed(String),

    /// Error response from the driver
    ///
    /// Carries the W3C error code (e.g. `no such window`) and the driver's
    /// human-readable message.
    #[error("Driver error [{error}]: {message}")]
    Driver { error: String, message: String },

    /// HTTP transport error talking to the driver
    #[cfg(feature = "webdriver")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed URL (endpoint or declared page URL)
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Element not found by locator
    ///
    /// Includes the locator that was used. This error typically surfaces
    /// after element resolution has polled until its deadline.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Timeout waiting for an operation
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Page model has no element declared under this name
    #[error("Unknown element: no '{0}' declared on this page")]
    UnknownElement(String),

    /// Element was declared with a different role than the accessor asked for
    #[error("Role mismatch: '{name}' is declared as a {actual}, not a {expected}")]
    RoleMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Invalid argument provided to a method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Protocol-level error (unexpected response shape)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
