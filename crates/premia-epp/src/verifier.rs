//! Verifier for EPP commands sent via the tool endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::{EPP_TOOL_ENDPOINT, FORM_CONTENT_TYPE};
use crate::connection::{RecordingConnection, SentRequest};
use crate::error::VerifyError;
use crate::xml::xml_equal;

/// Verifies commands captured by a [`RecordingConnection`].
///
/// Mirrors the submission contract from the other side: each captured
/// request must target the fixed endpoint, carry the form content type, and
/// decode to exactly four fields whose flag values match this verifier's
/// configuration and whose `xml` value is structurally equal to the
/// expected fixture.
///
/// # Example
///
/// ```ignore
/// EppToolVerifier::new(connection)
///     .with_client_id("clientA")
///     .as_dry_run()
///     .verify_sent(&[DOMAIN_CHECK_XML])?;
/// ```
pub struct EppToolVerifier {
    connection: Arc<RecordingConnection>,
    client_id: String,
    superuser: bool,
    dry_run: bool,
}

impl EppToolVerifier {
    /// Creates a verifier over the given recording connection, expecting
    /// both flags off.
    #[must_use]
    pub fn new(connection: Arc<RecordingConnection>) -> Self {
        Self {
            connection,
            client_id: String::new(),
            superuser: false,
            dry_run: false,
        }
    }

    /// Sets the expected client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Expects submissions flagged as superuser.
    #[must_use]
    pub fn as_superuser(mut self) -> Self {
        self.superuser = true;
        self
    }

    /// Expects submissions flagged as dry runs.
    #[must_use]
    pub fn as_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Verifies that exactly the given command documents were sent, in
    /// order, with the expected protocol shape.
    pub fn verify_sent(&self, expected_xmls: &[&str]) -> Result<(), VerifyError> {
        let requests = self.connection.requests();
        if requests.len() != expected_xmls.len() {
            return Err(VerifyError::RequestCountMismatch {
                expected: expected_xmls.len(),
                captured: requests.len(),
            });
        }
        for (expected_xml, request) in expected_xmls.iter().zip(&requests) {
            self.verify_request(request, expected_xml)?;
        }
        Ok(())
    }

    fn verify_request(&self, request: &SentRequest, expected_xml: &str) -> Result<(), VerifyError> {
        if request.path != EPP_TOOL_ENDPOINT {
            return Err(VerifyError::WrongEndpoint {
                expected: EPP_TOOL_ENDPOINT,
                found: request.path.clone(),
            });
        }
        if request.content_type != FORM_CONTENT_TYPE {
            return Err(VerifyError::WrongContentType {
                expected: FORM_CONTENT_TYPE,
                found: request.content_type.clone(),
            });
        }

        let fields = decode_form_body(&request.body)?;
        if fields.len() != 4 {
            return Err(VerifyError::FieldCount {
                found: fields.len(),
            });
        }

        check_field(&fields, "dryRun", &self.dry_run.to_string())?;
        check_field(&fields, "superuser", &self.superuser.to_string())?;
        check_field(&fields, "clientIdentifier", &self.client_id)?;

        let xml = fields
            .get("xml")
            .ok_or(VerifyError::FieldMismatch {
                field: "xml",
                expected: "<present>".to_string(),
                found: "<missing>".to_string(),
            })?;
        if !xml_equal(expected_xml, xml) {
            return Err(VerifyError::XmlMismatch {
                expected: expected_xml.to_string(),
                actual: xml.clone(),
            });
        }
        Ok(())
    }
}

/// Splits a form body on `&`/`=` and percent-decodes each value.
///
/// A repeated key is a malformed body; collapsing it would let a padded
/// payload slip past the field-count check.
fn decode_form_body(body: &[u8]) -> Result<HashMap<String, String>, VerifyError> {
    let body = std::str::from_utf8(body).map_err(|e| VerifyError::Decode(e.to_string()))?;
    let mut fields = HashMap::new();
    for pair in body.split('&') {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| VerifyError::Decode(format!("field without '=': '{pair}'")))?;
        let value = urlencoding::decode(value)
            .map_err(|e| VerifyError::Decode(e.to_string()))?
            .into_owned();
        if fields.insert(key.to_string(), value).is_some() {
            return Err(VerifyError::Decode(format!("duplicate field '{key}'")));
        }
    }
    Ok(fields)
}

fn check_field(
    fields: &HashMap<String, String>,
    field: &'static str,
    expected: &str,
) -> Result<(), VerifyError> {
    let found = fields.get(field).map(String::as_str).unwrap_or("<missing>");
    if found != expected {
        return Err(VerifyError::FieldMismatch {
            field,
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;

    #[test]
    fn test_wrong_endpoint_detected() {
        let conn = Arc::new(RecordingConnection::new());
        conn.send("/elsewhere", FORM_CONTENT_TYPE, b"dryRun=false")
            .unwrap();

        let err = EppToolVerifier::new(conn).verify_sent(&["<epp/>"]).unwrap_err();
        assert!(matches!(err, VerifyError::WrongEndpoint { .. }));
    }

    #[test]
    fn test_count_mismatch_detected() {
        let conn = Arc::new(RecordingConnection::new());
        let err = EppToolVerifier::new(conn).verify_sent(&["<epp/>"]).unwrap_err();
        assert_eq!(
            err,
            VerifyError::RequestCountMismatch {
                expected: 1,
                captured: 0
            }
        );
    }

    #[test]
    fn test_extra_field_detected() {
        let conn = Arc::new(RecordingConnection::new());
        conn.send(
            EPP_TOOL_ENDPOINT,
            FORM_CONTENT_TYPE,
            b"dryRun=false&clientIdentifier=clientA&superuser=false&xml=%3Cepp%2F%3E&extra=1",
        )
        .unwrap();

        let err = EppToolVerifier::new(conn)
            .with_client_id("clientA")
            .verify_sent(&["<epp/>"])
            .unwrap_err();
        assert_eq!(err, VerifyError::FieldCount { found: 5 });
    }

    #[test]
    fn test_duplicate_field_detected() {
        // Five pairs that collapse to four distinct keys must not pass the
        // four-field check.
        let conn = Arc::new(RecordingConnection::new());
        conn.send(
            EPP_TOOL_ENDPOINT,
            FORM_CONTENT_TYPE,
            b"dryRun=true&dryRun=true&clientIdentifier=clientA&superuser=false&xml=%3Cepp%2F%3E",
        )
        .unwrap();

        let err = EppToolVerifier::new(conn)
            .with_client_id("clientA")
            .as_dry_run()
            .verify_sent(&["<epp/>"])
            .unwrap_err();
        assert!(matches!(err, VerifyError::Decode(_)));
    }
}
