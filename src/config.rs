use std::env;

use crate::{Result, SdpError};

/// Environment variable that switches [`ParseOptions::from_env`] into strict mode.
pub const STRICT_ENV_VAR: &str = "SDPIO_STRICT";

/// Options controlling how the parser reacts to malformed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Abort on the first structural decode failure instead of skipping the line
    pub strict: bool,
}

impl ParseOptions {
    /// Creates lenient options: malformed lines are skipped and reported as warnings.
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Enables or disables strict decoding.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builds options from the environment, falling back to the defaults
    /// when `SDPIO_STRICT` is unset.
    pub fn from_env() -> Result<Self> {
        let mut options = ParseOptions::new();

        match env::var(STRICT_ENV_VAR) {
            Ok(value) => options.strict = parse_flag(&value)?,
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(SdpError::Config(format!(
                    "{} is not valid unicode",
                    STRICT_ENV_VAR
                )))
            }
        }

        Ok(options)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SdpError::Config(format!(
            "{} must be a boolean flag, got {:?}",
            STRICT_ENV_VAR, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lenient() {
        assert!(!ParseOptions::new().strict);
        assert_eq!(ParseOptions::default(), ParseOptions::new());
        assert!(ParseOptions::new().with_strict(true).strict);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1").unwrap(), true);
        assert_eq!(parse_flag("TRUE").unwrap(), true);
        assert_eq!(parse_flag(" on ").unwrap(), true);
        assert_eq!(parse_flag("off").unwrap(), false);
        assert_eq!(parse_flag("").unwrap(), false);
        assert!(matches!(parse_flag("maybe"), Err(SdpError::Config(_))));
    }
}
