//! # SDP Parser
//!
//! A single forward scan over the lines of a session description. Each
//! line is split at its first `=` into a key and a value, classified into a
//! [`LineKind`], routed by the current [`ParseState`] and handed to the
//! matching sub-parser in [`fields`].
//!
//! Unknown keys and `r=` lines without a `t=` line are reported to a
//! [`WarningSink`] and skipped. A value that fails to decode is either
//! reported and skipped (the default) or returned as [`SdpError::Decode`]
//! when [`ParseOptions::strict`] is set.
//!
//! ```rust
//! use sdpio::{ParseOptions, ParseWarning, Parser};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "v=0\r\no=- 1 1 IN IP4 10.0.0.1\r\ns=-\r\nx=vendor\r\n";
//! let mut warnings: Vec<ParseWarning> = Vec::new();
//! let sdp = Parser::new(ParseOptions::new()).parse_with(text, &mut warnings)?;
//!
//! assert_eq!(sdp.origin.address, "10.0.0.1");
//! assert_eq!(warnings.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Value sub-parsers, one per line type
pub mod fields;
/// Line classification and the session/media state machine
pub mod state;


pub use state::{LineKind, ParseState, Route};

use crate::config::ParseOptions;
use crate::diagnostics::{LogSink, ParseWarning, WarningSink};
use crate::error::FieldError;
use crate::types::{MediaDescription, SessionDescription};
use crate::{Result, SdpError};
use fields::FieldResult;

/// Splits a line at its first `=`. A line without one is all key.
pub fn split_line(line: &str) -> (&str, &str) {
    line.split_once('=').unwrap_or((line, ""))
}

/// SDP text decoder configured by [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses `text`, sending warnings to the `log` facade.
    pub fn parse(&self, text: &str) -> Result<SessionDescription> {
        self.parse_with(text, &mut LogSink)
    }

    /// Parses `text`, sending warnings to `sink`.
    pub fn parse_with(
        &self,
        text: &str,
        sink: &mut dyn WarningSink,
    ) -> Result<SessionDescription> {
        let mut session = SessionDescription::default();
        let mut state = ParseState::SessionLevel;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = split_line(line);
            let route = state.route(LineKind::from_key(key));
            log::trace!("SDP: line {} {:?}", line_number, route);

            let outcome = match route {
                Route::OpenMedia => match fields::parse_media(value) {
                    Ok(media) => {
                        log::debug!(
                            "SDP: media block {} ({} port {})",
                            session.media.len(),
                            media.media_type.as_str(),
                            media.port
                        );
                        session.media.push(media);
                        state = ParseState::MediaLevel(session.media.len() - 1);
                        Ok(())
                    }
                    Err(err) => {
                        state = ParseState::DiscardedMedia;
                        Err(err)
                    }
                },
                Route::Session(kind) => apply_session(&mut session, kind, value, line_number, sink),
                Route::Media(index, kind) => {
                    // MediaLevel(index) is only entered right after pushing block `index`
                    debug_assert!(index < session.media.len(), "media block {} not open", index);
                    match session.media.get_mut(index) {
                        Some(media) => apply_media(media, kind, value),
                        None => Ok(()),
                    }
                }
                Route::Discard => {
                    log::debug!("SDP: dropping line {} of undecoded media block", line_number);
                    Ok(())
                }
                Route::Unrecognized(scope) => {
                    sink.warning(ParseWarning::UnknownLine {
                        line: line_number,
                        key: key.to_string(),
                        value: value.to_string(),
                        scope,
                    });
                    Ok(())
                }
            };

            if let Err(source) = outcome {
                let err = SdpError::Decode {
                    line: line_number,
                    key: key.to_string(),
                    value: value.to_string(),
                    source,
                };
                if self.options.strict {
                    return Err(err);
                }
                sink.warning(ParseWarning::SkippedLine(err));
            }
        }

        Ok(session)
    }
}

fn apply_session(
    session: &mut SessionDescription,
    kind: LineKind,
    value: &str,
    line_number: usize,
    sink: &mut dyn WarningSink,
) -> FieldResult<()> {
    debug_assert_ne!(kind, LineKind::Media, "m= lines open a block instead");
    match kind {
        LineKind::Version => session.version = fields::parse_version(value)?,
        LineKind::Origin => session.origin = fields::parse_origin(value)?,
        LineKind::SessionName => session.session_name = value.to_string(),
        LineKind::Information => session.information = Some(value.to_string()),
        LineKind::Uri => session.uri = Some(value.to_string()),
        LineKind::Email => session.emails.push(fields::parse_contact(value)),
        LineKind::Phone => session.phone_numbers.push(fields::parse_contact(value)),
        LineKind::Connection => session.connection = Some(fields::parse_connection(value)?),
        LineKind::Bandwidth => session.bandwidth.push(fields::parse_bandwidth(value)?),
        LineKind::Time => session.times.push(fields::parse_time(value)?),
        LineKind::Repeat => match session.times.last_mut() {
            Some(time) => time.repeats.push(fields::parse_repeat(value)?),
            None => sink.warning(ParseWarning::OrphanRepeat {
                line: line_number,
                value: value.to_string(),
            }),
        },
        LineKind::TimeZone => session
            .time_zone_adjustments
            .extend(fields::parse_time_zones(value)?),
        LineKind::EncryptionKey => {
            session.encryption_key = Some(fields::parse_encryption_key(value)?)
        }
        LineKind::Attribute => session.attributes.push(fields::parse_attribute(value)?),
        LineKind::Media => return Err(FieldError::invalid("session line", value)),
    }
    Ok(())
}

fn apply_media(media: &mut MediaDescription, kind: LineKind, value: &str) -> FieldResult<()> {
    debug_assert!(kind.is_media_level(), "{:?} routed into a media block", kind);
    match kind {
        LineKind::Information => media.title = Some(value.to_string()),
        LineKind::Connection => media.connections.push(fields::parse_connection(value)?),
        LineKind::Bandwidth => media.bandwidth.push(fields::parse_bandwidth(value)?),
        LineKind::EncryptionKey => media.encryption_key = Some(fields::parse_encryption_key(value)?),
        LineKind::Attribute => media.attributes.push(fields::parse_attribute(value)?),
        _ => return Err(FieldError::invalid("media line", value)),
    }
    Ok(())
}
