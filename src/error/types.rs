//! Error type definitions
//!
//! Defines the error types returned by the configuration loading pipeline.

use thiserror::Error;

/// Identifies which URL-valued setting an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlField {
    /// The `cancel_url` key
    Cancel,
    /// The `return_url` key
    Return,
    /// The `auto_response_url` key
    AutoResponse,
}

impl std::fmt::Display for UrlField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UrlField::Cancel => "cancel",
            UrlField::Return => "return",
            UrlField::AutoResponse => "autoresponse",
        };
        f.write_str(name)
    }
}

/// Main error type for configuration loading
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The provider section is missing from the file
    #[error("missing section `{name}`")]
    MissingSection {
        /// Name of the expected section
        name: String,
    },

    /// A required key is absent, mistyped or empty
    #[error("missing or invalid key `{key}`")]
    MissingField {
        /// The offending config key
        key: String,
    },

    /// A referenced `${NAME}` token has no non-empty environment value
    #[error("env var ${{{name}}} not defined")]
    UnresolvedVariable {
        /// Name of the unresolved variable
        name: String,
    },

    /// A URL-valued setting failed to parse before or after substitution
    #[error("{field} URL: {reason}")]
    MalformedUrl {
        /// Which URL setting failed
        field: UrlField,
        /// Parse failure including the offending input
        reason: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a missing-section error
    pub fn missing_section(name: impl Into<String>) -> Self {
        Self::MissingSection { name: name.into() }
    }

    /// Create a missing-field error
    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::MissingField { key: key.into() }
    }

    /// Create an unresolved-variable error
    pub fn unresolved_variable(name: impl Into<String>) -> Self {
        Self::UnresolvedVariable { name: name.into() }
    }

    /// Create a malformed-URL error
    pub fn malformed_url(field: UrlField, reason: impl Into<String>) -> Self {
        Self::MalformedUrl {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let err = Error::missing_field("merchant_id");
        assert!(matches!(err, Error::MissingField { .. }));
        assert_eq!(err.to_string(), "missing or invalid key `merchant_id`");
    }

    #[test]
    fn test_unresolved_variable_error() {
        let err = Error::unresolved_variable("HOME");
        assert!(matches!(err, Error::UnresolvedVariable { .. }));
        assert_eq!(err.to_string(), "env var ${HOME} not defined");
    }

    #[test]
    fn test_malformed_url_error_context() {
        let err = Error::malformed_url(UrlField::Return, "empty host");
        assert!(matches!(
            err,
            Error::MalformedUrl {
                field: UrlField::Return,
                ..
            }
        ));
        assert_eq!(err.to_string(), "return URL: empty host");
    }

    #[test]
    fn test_url_field_display() {
        assert_eq!(UrlField::Cancel.to_string(), "cancel");
        assert_eq!(UrlField::Return.to_string(), "return");
        assert_eq!(UrlField::AutoResponse.to_string(), "autoresponse");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not [ valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
