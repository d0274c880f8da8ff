use std::fmt;

use crate::SdpError;

/// Where an unrecognized line was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Session level, or inside a media block that was not decoded
    Session,
    /// Index of the media block in [`SessionDescription::media`](crate::SessionDescription::media)
    Media(usize),
}

/// A recoverable anomaly. The parser reports these and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key that has no meaning in the current scope
    UnknownLine {
        /// 1-based line number
        line: usize,
        /// Text before the `=`, or the whole line if it has none
        key: String,
        /// Text after the `=`
        value: String,
        /// Where the line was found
        scope: Scope,
    },
    /// An `r=` line with no `t=` line before it
    OrphanRepeat {
        /// 1-based line number
        line: usize,
        /// Text after the `r=`
        value: String,
    },
    /// A line dropped because its value failed to decode (lenient mode only)
    SkippedLine(SdpError),
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::UnknownLine {
                line,
                key,
                value,
                scope: Scope::Session,
            } => write!(f, "unknown line {} in session description: {}={}", line, key, value),
            ParseWarning::UnknownLine {
                line,
                key,
                value,
                scope: Scope::Media(index),
            } => write!(
                f,
                "unknown line {} in media description {}: {}={}",
                line, index, key, value
            ),
            ParseWarning::OrphanRepeat { line, value } => {
                write!(f, "r= line {} without a preceding t= line: r={}", line, value)
            }
            ParseWarning::SkippedLine(err) => write!(f, "skipped malformed {}", err),
        }
    }
}

/// Receives warnings raised while parsing.
pub trait WarningSink {
    /// Called once per warning, in line order.
    fn warning(&mut self, warning: ParseWarning);
}

/// Forwards every warning to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warning(&mut self, warning: ParseWarning) {
        log::warn!("SDP: {}", warning);
    }
}

impl WarningSink for Vec<ParseWarning> {
    fn warning(&mut self, warning: ParseWarning) {
        self.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = ParseWarning::UnknownLine {
            line: 4,
            key: "x".into(),
            value: "vendor".into(),
            scope: Scope::Media(1),
        };
        assert_eq!(
            warning.to_string(),
            "unknown line 4 in media description 1: x=vendor"
        );

        let warning = ParseWarning::OrphanRepeat {
            line: 3,
            value: "7d 1h 0".into(),
        };
        assert_eq!(
            warning.to_string(),
            "r= line 3 without a preceding t= line: r=7d 1h 0"
        );
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<ParseWarning> = Vec::new();
        sink.warning(ParseWarning::OrphanRepeat {
            line: 1,
            value: String::new(),
        });
        assert_eq!(sink.len(), 1);
    }
}
