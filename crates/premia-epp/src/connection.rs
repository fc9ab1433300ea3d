//! Connection abstraction for the tool endpoint.

use parking_lot::Mutex;

use crate::error::TransportError;

/// One captured submission to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    /// Endpoint path the request went to.
    pub path: String,
    /// Content type of the body.
    pub content_type: String,
    /// Raw request body.
    pub body: Vec<u8>,
}

/// Server-side connection used by tool commands.
///
/// Production implementations speak HTTP to the registry frontend; tests
/// use [`RecordingConnection`] and verify what was captured.
pub trait Connection: Send + Sync {
    /// Sends a request body to the given path, returning the response body.
    fn send(
        &self,
        path: &str,
        content_type: &str,
        body: &[u8],
    ) -> Result<Vec<u8>, TransportError>;
}

/// Connection that records every request and answers with an empty body.
#[derive(Debug, Default)]
pub struct RecordingConnection {
    requests: Mutex<Vec<SentRequest>>,
}

impl RecordingConnection {
    /// Creates an empty recording connection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all captured requests, in send order.
    #[must_use]
    pub fn requests(&self) -> Vec<SentRequest> {
        self.requests.lock().clone()
    }
}

impl Connection for RecordingConnection {
    fn send(
        &self,
        path: &str,
        content_type: &str,
        body: &[u8],
    ) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().push(SentRequest {
            path: path.to_string(),
            content_type: content_type.to_string(),
            body: body.to_vec(),
        });
        Ok(Vec::new())
    }
}
