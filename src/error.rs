// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Token(TokenError),
    Route(String),
}

/// Specific error types for design-token resolution issues.
/// All of these are configuration errors: they are raised while validating
/// the dictionary at startup, never while rendering.
#[derive(Debug, Clone)]
pub enum TokenError {
    /// A component references a token the dictionary does not define.
    Missing(String),

    /// A token exists but holds the wrong kind of value
    /// (e.g. a color token carrying a number).
    WrongKind { name: String, expected: String },

    /// A color token whose literal cannot be parsed as `#rrggbb`.
    MalformedColor { name: String, literal: String },

    /// The dictionary document itself failed to parse.
    Parse(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Missing(name) => write!(f, "token '{}' is not defined", name),
            TokenError::WrongKind { name, expected } => {
                write!(f, "token '{}' is not a {} token", name, expected)
            }
            TokenError::MalformedColor { name, literal } => {
                write!(
                    f,
                    "token '{}' has malformed color literal '{}'",
                    name, literal
                )
            }
            TokenError::Parse(msg) => write!(f, "token dictionary failed to parse: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Token(e) => write!(f, "Token Error: {}", e),
            Error::Route(e) => write!(f, "Route Error: {}", e),
        }
    }
}

impl From<TokenError> for Error {
    fn from(err: TokenError) -> Self {
        Error::Token(err)
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
