use serde::Serialize;
use std::path::PathBuf;

use crate::codec::Registry;
use crate::error::DecodeError;

pub struct Context {
    pub registry: &'static Registry,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                if Self::looks_like_path(s) {
                    log::warn!("treating '{}' as literal data; use @{} to read from a file", s, s);
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        let extensions = [".txt", ".bin", ".dat", ".json", ".xml", ".csv", ".log"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaddingRule {
    None,
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    pub padding: PaddingRule,
    pub case_sensitivity: CaseSensitivity,
    pub description: &'static str,
}

/// Non-throwing decode result: a success flag, the bytes on success and a
/// diagnostic on failure. Exactly one of `bytes` and `diagnostic` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeOutcome {
    pub success: bool,
    pub bytes: Option<Vec<u8>>,
    pub diagnostic: Option<String>,
    #[serde(skip)]
    error: Option<DecodeError>,
}

impl DecodeOutcome {
    pub fn error(&self) -> Option<&DecodeError> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<Vec<u8>, DecodeError> {
        match (self.bytes, self.error) {
            (Some(bytes), _) => Ok(bytes),
            (None, Some(err)) => Err(err),
            (None, None) => Ok(Vec::new()),
        }
    }
}

impl From<Result<Vec<u8>, DecodeError>> for DecodeOutcome {
    fn from(result: Result<Vec<u8>, DecodeError>) -> Self {
        match result {
            Ok(bytes) => Self {
                success: true,
                bytes: Some(bytes),
                diagnostic: None,
                error: None,
            },
            Err(err) => Self {
                success: false,
                bytes: None,
                diagnostic: Some(err.to_string()),
                error: Some(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_ok() {
        let outcome = DecodeOutcome::from(Ok(vec![1, 2]));
        assert!(outcome.success);
        assert_eq!(outcome.bytes.as_deref(), Some(&[1u8, 2][..]));
        assert!(outcome.diagnostic.is_none());
        assert_eq!(outcome.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_outcome_from_err() {
        let outcome = DecodeOutcome::from(Err(DecodeError::invalid_char('!', 4)));
        assert!(!outcome.success);
        assert!(outcome.bytes.is_none());
        assert_eq!(outcome.diagnostic.as_deref(), Some("invalid character '!' at position 4"));
        assert_eq!(outcome.error(), Some(&DecodeError::invalid_char('!', 4)));
        assert_eq!(outcome.into_result(), Err(DecodeError::invalid_char('!', 4)));
    }

    #[test]
    fn test_input_source_parse() {
        assert!(matches!(InputSource::parse("-"), InputSource::Stdin));
        assert!(matches!(InputSource::parse("@data.bin"), InputSource::File(p) if p == PathBuf::from("data.bin")));
        assert!(matches!(InputSource::parse("SGVsbG8"), InputSource::Literal(b) if b == b"SGVsbG8"));
    }

    #[test]
    fn test_output_dest_parse() {
        assert!(matches!(OutputDest::parse("-"), OutputDest::Stdout));
        assert!(matches!(OutputDest::parse("@out.txt"), OutputDest::File(p) if p == PathBuf::from("out.txt")));
        assert!(matches!(OutputDest::parse("out.txt"), OutputDest::File(p) if p == PathBuf::from("out.txt")));
    }
}
