//! Tool client that submits EPP commands to the server endpoint.

use std::sync::Arc;

use crate::connection::Connection;
use crate::error::TransportError;

/// Fixed server endpoint for tool-submitted EPP commands.
pub const EPP_TOOL_ENDPOINT: &str = "/_dr/epptool";

/// Content type of the command submission body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Submits EPP command XML to the registry tool endpoint.
///
/// Each command is sent as a form-encoded body of exactly four fields:
/// `dryRun`, `clientIdentifier`, `superuser`, and the percent-encoded
/// command `xml`. This wire shape is a fixed protocol contract; verifiers
/// decode it field for field.
pub struct EppToolClient {
    connection: Arc<dyn Connection>,
    client_id: String,
    dry_run: bool,
    superuser: bool,
}

impl EppToolClient {
    /// Creates a client acting as the given registrar client, with both
    /// flags off.
    #[must_use]
    pub fn new(connection: Arc<dyn Connection>, client_id: impl Into<String>) -> Self {
        Self {
            connection,
            client_id: client_id.into(),
            dry_run: false,
            superuser: false,
        }
    }

    /// Marks submissions as dry runs (validated but not committed).
    #[must_use]
    pub fn as_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Marks submissions as superuser commands.
    #[must_use]
    pub fn as_superuser(mut self) -> Self {
        self.superuser = true;
        self
    }

    /// Submits one command XML document to the tool endpoint.
    pub fn send_command(&self, xml: &str) -> Result<Vec<u8>, TransportError> {
        let body = format!(
            "dryRun={}&clientIdentifier={}&superuser={}&xml={}",
            self.dry_run,
            urlencoding::encode(&self.client_id),
            self.superuser,
            urlencoding::encode(xml),
        );
        self.connection
            .send(EPP_TOOL_ENDPOINT, FORM_CONTENT_TYPE, body.as_bytes())
    }

    /// Submits several command XML documents in order.
    pub fn send_commands(&self, xmls: &[&str]) -> Result<(), TransportError> {
        for xml in xmls {
            self.send_command(xml)?;
        }
        Ok(())
    }
}
