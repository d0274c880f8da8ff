use thiserror::Error;

/// Failure of a single field sub-parser, before line context is attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required token was absent
    #[error("missing {0}")]
    Missing(&'static str),

    /// A token was present but could not be decoded
    #[error("invalid {field}: {value:?}")]
    Invalid {
        /// Name of the field being decoded
        field: &'static str,
        /// The offending token
        value: String,
    },
}

impl FieldError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        FieldError::Invalid {
            field,
            value: value.to_string(),
        }
    }
}

/// Error type returned by the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdpError {
    /// A line whose value failed to decode
    #[error("line {line} ({key}={value}): {source}")]
    Decode {
        /// 1-based line number
        line: usize,
        /// Text before the `=`
        key: String,
        /// Text after the `=`
        value: String,
        /// What went wrong inside the value
        #[source]
        source: FieldError,
    },

    /// Invalid parse options, e.g. a bad environment value
    #[error("config error: {0}")]
    Config(String),
}

impl SdpError {
    /// The field error behind a decode failure, if any.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            SdpError::Decode { source, .. } => Some(source),
            SdpError::Config(_) => None,
        }
    }
}

/// `Result` with [`SdpError`] as the error type.
pub type Result<T> = std::result::Result<T, SdpError>;
