//! Error types for color parsing and pattern compilation.

use thiserror::Error;

/// Error returned when text cannot be read as a color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The text is not a recognized color notation.
    #[error("invalid color format: {0}")]
    InvalidFormat(String),
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        ColorError::InvalidFormat(format!("{input:?}"))
    }
}

/// Error returned when a pattern cannot be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid pattern /{pattern}/: {message}")]
pub struct CompileError {
    /// The pattern that failed to compile.
    pub pattern: String,
    /// The diagnostic reported by the engine.
    pub message: String,
}

/// Error returned by the digest helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// There is nothing to hash.
    #[error("input is empty")]
    EmptyInput,

    /// The algorithm name is not supported.
    #[error("unsupported digest algorithm: {0}")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ColorError::invalid("#12").to_string(),
            "invalid color format: \"#12\""
        );

        let err = CompileError {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "invalid pattern /(/: unclosed group");
    }
}
