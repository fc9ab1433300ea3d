//! Error types for the EPP tool transport.

use thiserror::Error;

/// Errors from sending a command over a connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server endpoint could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The server rejected the submission.
    #[error("server error {status}: {message}")]
    ServerError {
        /// HTTP-style status code.
        status: u16,
        /// Server-supplied message.
        message: String,
    },
}

/// Errors from verifying captured submissions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Fewer or more requests were captured than expected.
    #[error("expected {expected} sent command(s), captured {captured}")]
    RequestCountMismatch {
        /// Number of expected commands.
        expected: usize,
        /// Number of captured requests.
        captured: usize,
    },

    /// A request went to the wrong endpoint.
    #[error("request sent to '{found}', expected '{expected}'")]
    WrongEndpoint {
        /// Expected endpoint path.
        expected: &'static str,
        /// Path actually used.
        found: String,
    },

    /// A request used the wrong content type.
    #[error("request content type was '{found}', expected '{expected}'")]
    WrongContentType {
        /// Expected content type.
        expected: &'static str,
        /// Content type actually used.
        found: String,
    },

    /// The form body did not contain exactly the four protocol fields.
    #[error("form body has {found} field(s), expected exactly 4")]
    FieldCount {
        /// Number of fields found.
        found: usize,
    },

    /// A form field is missing or has the wrong value.
    #[error("field '{field}' was '{found}', expected '{expected}'")]
    FieldMismatch {
        /// Field name.
        field: &'static str,
        /// Expected literal value.
        expected: String,
        /// Value found in the body.
        found: String,
    },

    /// The body could not be decoded as a form payload.
    #[error("malformed form body: {0}")]
    Decode(String),

    /// The decoded XML does not match the expected fixture.
    #[error("XML mismatch:\nexpected: {expected}\nactual:   {actual}")]
    XmlMismatch {
        /// Expected XML document.
        expected: String,
        /// XML actually sent.
        actual: String,
    },
}
