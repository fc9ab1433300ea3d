//! # Premia EPP
//!
//! Transport boundary for submitting EPP commands to the registry tool
//! endpoint and verifying what went over the wire.
//!
//! The protocol shape is fixed: every command goes to [`EPP_TOOL_ENDPOINT`]
//! as a form-encoded body of exactly four fields (`xml`,
//! `clientIdentifier`, `dryRun`, `superuser`). [`EppToolVerifier`] decodes
//! captured submissions and asserts the XML against expected fixtures.
//!
//! The pricing contract in `premia-traits` has no dependency on this crate;
//! it exists for tool clients and their tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod connection;
mod error;
mod verifier;
mod xml;

pub use client::{EppToolClient, EPP_TOOL_ENDPOINT, FORM_CONTENT_TYPE};
pub use connection::{Connection, RecordingConnection, SentRequest};
pub use error::{TransportError, VerifyError};
pub use verifier::EppToolVerifier;
pub use xml::xml_equal;
