// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Design(DesignError),
}

/// Problems found while loading a design document.
/// A design that fails any of these checks is never partially applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// The document is not valid TOML or does not match the expected shape.
    Syntax(String),

    /// A notification type has no table in the document.
    MissingKind(&'static str),

    /// A color attribute is not a `#RGB`, `#RRGGBB` or `#RRGGBBAA` hex string.
    InvalidColor { kind: &'static str, field: &'static str, value: String },

    /// The design file could not be read.
    Unreadable(String),
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignError::Syntax(msg) => write!(f, "malformed design document: {}", msg),
            DesignError::MissingKind(kind) => write!(f, "no design for notification type '{}'", kind),
            DesignError::InvalidColor { kind, field, value } => {
                write!(f, "invalid color '{}' for {}.{}", value, kind, field)
            }
            DesignError::Unreadable(msg) => write!(f, "design file unreadable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Design(e) => write!(f, "Design Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DesignError> for Error {
    fn from(err: DesignError) -> Self {
        Error::Design(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn design_error_names_the_offending_field() {
        let err: Error = DesignError::InvalidColor {
            kind: "error",
            field: "background_color",
            value: "#zz".into(),
        }
        .into();
        let text = format!("{}", err);
        assert!(text.starts_with("Design Error:"));
        assert!(text.contains("error.background_color"));
        assert!(text.contains("#zz"));
    }

    #[test]
    fn missing_kind_display() {
        let err = DesignError::MissingKind("warning");
        assert_eq!(
            format!("{}", err),
            "no design for notification type 'warning'"
        );
    }
}
