//! Round-trip verification of tool-submitted EPP commands.

use std::sync::Arc;

use premia_epp::{EppToolClient, EppToolVerifier, RecordingConnection, VerifyError};

const DOMAIN_CHECK: &str = include_str!("testdata/domain_check.xml");

const DOMAIN_CREATE: &str = r#"<epp xmlns="urn:ietf:params:xml:ns:epp-1.0">
  <command>
    <create>
      <domain:create xmlns:domain="urn:ietf:params:xml:ns:domain-1.0">
        <domain:name>promo.example</domain:name>
      </domain:create>
    </create>
    <clTRID>ABC-12346</clTRID>
  </command>
</epp>"#;

#[test]
fn dry_run_submission_verifies_against_fixture() {
    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "clientA").as_dry_run();
    client.send_command(DOMAIN_CHECK).unwrap();

    EppToolVerifier::new(conn)
        .with_client_id("clientA")
        .as_dry_run()
        .verify_sent(&[DOMAIN_CHECK])
        .unwrap();
}

#[test]
fn fixture_comparison_ignores_formatting() {
    // The sent XML is a reformatted but structurally identical document.
    let compact = DOMAIN_CHECK
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("");

    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "clientA").as_dry_run();
    client.send_command(&compact).unwrap();

    EppToolVerifier::new(conn)
        .with_client_id("clientA")
        .as_dry_run()
        .verify_sent(&[DOMAIN_CHECK])
        .unwrap();
}

#[test]
fn superuser_flag_round_trips() {
    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "admin").as_superuser();
    client.send_command(DOMAIN_CHECK).unwrap();

    EppToolVerifier::new(conn)
        .with_client_id("admin")
        .as_superuser()
        .verify_sent(&[DOMAIN_CHECK])
        .unwrap();
}

#[test]
fn flag_mismatch_is_detected() {
    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "clientA"); // not a dry run
    client.send_command(DOMAIN_CHECK).unwrap();

    let err = EppToolVerifier::new(conn)
        .with_client_id("clientA")
        .as_dry_run()
        .verify_sent(&[DOMAIN_CHECK])
        .unwrap_err();
    assert!(matches!(
        err,
        VerifyError::FieldMismatch { field: "dryRun", .. }
    ));
}

#[test]
fn client_id_mismatch_is_detected() {
    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "clientB");
    client.send_command(DOMAIN_CHECK).unwrap();

    let err = EppToolVerifier::new(conn)
        .with_client_id("clientA")
        .verify_sent(&[DOMAIN_CHECK])
        .unwrap_err();
    assert!(matches!(
        err,
        VerifyError::FieldMismatch {
            field: "clientIdentifier",
            ..
        }
    ));
}

#[test]
fn wrong_xml_is_detected() {
    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "clientA");
    client.send_command(DOMAIN_CREATE).unwrap();

    let err = EppToolVerifier::new(conn)
        .with_client_id("clientA")
        .verify_sent(&[DOMAIN_CHECK])
        .unwrap_err();
    assert!(matches!(err, VerifyError::XmlMismatch { .. }));
}

#[test]
fn multiple_commands_verify_in_order() {
    let conn = Arc::new(RecordingConnection::new());
    let client = EppToolClient::new(conn.clone(), "clientA");
    client.send_commands(&[DOMAIN_CHECK, DOMAIN_CREATE]).unwrap();

    EppToolVerifier::new(conn)
        .with_client_id("clientA")
        .verify_sent(&[DOMAIN_CHECK, DOMAIN_CREATE])
        .unwrap();
}
