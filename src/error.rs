use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    IoError = 12,
    UnsupportedCodec = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    MultipleOf(usize),
    NotCongruent { modulus: usize, remainder: usize },
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
            LengthConstraint::NotCongruent { modulus, remainder } => {
                write!(f, "length not {} mod {}", remainder, modulus)
            }
        }
    }
}

/// Why a piece of text could not be decoded.
///
/// Decoding failure is an ordinary outcome, so every codec returns this as a
/// value and never panics on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid length: expected {expected}, got {actual}{}", if !.message.is_empty() { format!(" ({})", .message) } else { String::new() })]
    InvalidLength {
        expected: LengthConstraint,
        actual: usize,
        message: String,
    },

    #[error("invalid character {char:?} at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("value {value} at position {position} exceeds maximum {max}")]
    ValueOverflow { value: u32, max: u32, position: usize },

    #[error("empty input")]
    EmptyInput,
}

impl DecodeError {
    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength {
            expected,
            actual,
            message: String::new(),
        }
    }

    pub fn invalid_length_msg(expected: LengthConstraint, actual: usize, message: impl Into<String>) -> Self {
        Self::InvalidLength {
            expected,
            actual,
            message: message.into(),
        }
    }

    pub fn overflow(value: u32, max: u32, position: usize) -> Self {
        Self::ValueOverflow { value, max, position }
    }

    /// Short stable name of the variant, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidLength { .. } => "invalid_length",
            DecodeError::InvalidCharacter { .. } => "invalid_character",
            DecodeError::ValueOverflow { .. } => "value_overflow",
            DecodeError::EmptyInput => "empty_input",
        }
    }
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum BintextError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported codec: {name}")]
    UnsupportedCodec { name: String },

    #[error("logger setup failed: {message}")]
    Logging { message: String },
}

impl BintextError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BintextError::Decode(_) | BintextError::InvalidInput { .. } => ExitCode::InvalidInput,
            BintextError::Io(_) => ExitCode::IoError,
            BintextError::UnsupportedCodec { .. } => ExitCode::UnsupportedCodec,
            BintextError::Json(_) | BintextError::Logging { .. } => ExitCode::GeneralError,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unsupported_codec(name: impl Into<String>) -> Self {
        Self::UnsupportedCodec { name: name.into() }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BintextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_display_with_message() {
        let err = DecodeError::invalid_length_msg(LengthConstraint::MultipleOf(8), 5, "base32");
        assert_eq!(err.to_string(), "invalid length: expected multiple of 8, got 5 (base32)");
    }

    #[test]
    fn test_invalid_char_display() {
        assert_eq!(
            DecodeError::invalid_char('#', 3).to_string(),
            "invalid character '#' at position 3"
        );
    }

    #[test]
    fn test_not_congruent_display() {
        let c = LengthConstraint::NotCongruent { modulus: 3, remainder: 1 };
        assert_eq!(c.to_string(), "length not 1 mod 3");
    }

    #[test]
    fn test_exit_codes() {
        let decode: BintextError = DecodeError::EmptyInput.into();
        assert_eq!(decode.exit_code(), ExitCode::InvalidInput);
        assert_eq!(BintextError::unsupported_codec("rot13").exit_code(), ExitCode::UnsupportedCodec);
    }
}
