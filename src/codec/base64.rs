use base64::prelude::*;
use base64::Engine;

use super::{util, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const STANDARD_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}

/// Standard Base64 with `=` padding: 3 bytes per 4 symbols.
pub fn encode(input: &[u8]) -> String {
    BASE64_STANDARD.encode(input)
}

fn from_engine_error(err: base64::DecodeError, significant_len: usize) -> DecodeError {
    match err {
        base64::DecodeError::InvalidByte(offset, byte) | base64::DecodeError::InvalidLastSymbol(offset, byte) => {
            DecodeError::invalid_char(char::from(byte), offset)
        }
        base64::DecodeError::InvalidLength(len) => {
            DecodeError::invalid_length_msg(LengthConstraint::MultipleOf(4), len, "incomplete final group")
        }
        // InvalidPadding
        _ => DecodeError::invalid_char('=', significant_len),
    }
}

/// Decodes canonical padded Base64.
///
/// The text must be whole 4-symbol groups, padding may only form a suffix
/// of at most two `=`, and unused bits of the last symbol must be zero.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let len = input.chars().count();
    if len % 4 != 0 {
        return Err(DecodeError::invalid_length(LengthConstraint::MultipleOf(4), len));
    }

    let (significant, pad_len) = util::split_padding(input);
    util::validate_chars(significant, is_symbol)?;
    if pad_len > 2 {
        return Err(DecodeError::invalid_char('=', significant.len()));
    }

    BASE64_STANDARD
        .decode(input)
        .map_err(|e| from_engine_error(e, significant.len()))
}

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base64",
            aliases: &["b64", "base64pad"],
            alphabet: STANDARD_ALPHABET,
            padding: PaddingRule::Required,
            case_sensitivity: CaseSensitivity::Sensitive,
            description: "RFC 4648 Base64 with padding",
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        encode(input)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encode_empty() {
        assert_eq!(Base64.encode(&[]), "");
        assert_eq!(Base64.decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base64_encode() {
        assert_eq!(encode(b"Hello"), "SGVsbG8=");
        assert_eq!(encode(b"He"), "SGU=");
        assert_eq!(encode(b"Hel"), "SGVs");
    }

    #[test]
    fn test_base64_decode() {
        assert_eq!(decode("SGVsbG8=").unwrap(), b"Hello".to_vec());
        assert_eq!(decode("SGU=").unwrap(), b"He".to_vec());
        assert_eq!(decode("SGVs").unwrap(), b"Hel".to_vec());
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(Base64.decode(&Base64.encode(data)).unwrap(), data.to_vec());
    }

    #[test]
    fn test_base64_rejects_unpadded() {
        assert_eq!(
            decode("SGVsbG8"),
            Err(DecodeError::invalid_length(LengthConstraint::MultipleOf(4), 7))
        );
    }

    #[test]
    fn test_base64_invalid_char() {
        assert_eq!(decode("SGV*bG8="), Err(DecodeError::invalid_char('*', 3)));
        assert_eq!(decode("SGVs-G8="), Err(DecodeError::invalid_char('-', 4)));
    }

    #[test]
    fn test_base64_padding_before_data() {
        assert_eq!(decode("SG=sbG8="), Err(DecodeError::invalid_char('=', 2)));
        assert_eq!(decode("=GVs"), Err(DecodeError::invalid_char('=', 0)));
    }

    #[test]
    fn test_base64_too_much_padding() {
        assert_eq!(decode("S==="), Err(DecodeError::invalid_char('=', 1)));
        assert_eq!(decode("SGVs===="), Err(DecodeError::invalid_char('=', 4)));
    }

    #[test]
    fn test_base64_rejects_nonzero_trailing_bits() {
        assert_eq!(decode("SGV="), Err(DecodeError::invalid_char('V', 2)));
    }

    #[test]
    fn test_base64_binary() {
        assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
        assert_eq!(decode("+/8=").unwrap(), vec![0xfb, 0xff]);
    }
}
