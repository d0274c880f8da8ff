#![doc(html_root_url = "https://docs.rs/sdpio/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # sdpio - Session Description Protocol codec
//!
//! `sdpio` parses and serializes the SDP text format (RFC 4566) that SIP,
//! RTSP and WebRTC signaling use to describe multimedia sessions. It turns
//! an SDP blob into a [`SessionDescription`] and writes one back out as
//! canonical SDP text.
//!
//! ## Features
//!
//! - Single forward scan over LF or CRLF terminated text
//! - Typed session and media level fields: origin, connection with
//!   multicast TTL and layer count, timing with repeats and time zones,
//!   bandwidth, legacy encryption keys, contacts and attributes
//! - Unknown and vendor lines never abort a parse; they are reported as
//!   [`ParseWarning`]s through a caller supplied [`WarningSink`]
//! - Lenient or strict handling of malformed values via [`ParseOptions`]
//! - Serialization in RFC 4566 field order with CRLF line endings
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! sdpio = "0.1.0"
//! ```
//!
//! ```rust
//! use sdpio::{parse, stringify};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "v=0\r\n\
//!             o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
//!             s=SDP Seminar\r\n\
//!             t=0 0\r\n\
//!             a=recvonly\r\n\
//!             m=video 51372 RTP/AVP 99\r\n\
//!             a=rtpmap:99 h263-1998/90000\r\n";
//!
//! let sdp = parse(text)?;
//! assert_eq!(sdp.origin.session_id, 2890844526);
//! assert_eq!(sdp.media[0].attribute("rtpmap").and_then(|a| a.value.as_deref()),
//!            Some("99 h263-1998/90000"));
//!
//! assert_eq!(stringify(&sdp), text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - `types`: the value types of a session description
//! - `parser`: line dispatcher, session/media state machine and field sub-parsers
//! - `serializer`: canonical text output
//! - `diagnostics`: warnings and warning sinks
//! - `config`: parse options
//! - `error`: error types and the `Result` alias

/// Parse options
pub mod config;

/// Recoverable parse anomalies and where they are sent
pub mod diagnostics;

/// Error types and utilities
pub mod error;

/// Text to structure
pub mod parser;

/// Structure to text
pub mod serializer;

/// Session description value types
pub mod types;

pub use config::ParseOptions;
pub use diagnostics::{LogSink, ParseWarning, Scope, WarningSink};
pub use error::{FieldError, Result, SdpError};
pub use parser::Parser;
pub use serializer::stringify;
pub use types::*;

/// Parses SDP text leniently, logging warnings through the `log` facade.
///
/// Use [`Parser`] for strict decoding or to collect warnings.
pub fn parse(text: &str) -> Result<SessionDescription> {
    Parser::default().parse(text)
}
