use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE, HEXUPPER};

use super::{util, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const LOWER_ALPHABET: &str = "0123456789abcdef";
const UPPER_ALPHABET: &str = "0123456789ABCDEF";

/// Letter case used for the digits `a`-`f` when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Two digits per byte, high nibble first. No prefix or separators.
pub fn encode(input: &[u8], case: HexCase) -> String {
    match case {
        HexCase::Lower => HEXLOWER.encode(input),
        HexCase::Upper => HEXUPPER.encode(input),
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ':' || c == '-'
}

/// Decodes hex digits in either case.
///
/// Whitespace, `:` and `-` are dropped first, then an optional `0x`/`0X`
/// prefix. Error positions index into the remaining digit string.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned: String = input.chars().filter(|&c| !is_separator(c)).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(cleaned.as_str());

    if digits.is_empty() {
        return Ok(Vec::new());
    }

    let len = digits.chars().count();
    if len % 2 != 0 {
        return Err(DecodeError::invalid_length(LengthConstraint::MultipleOf(2), len));
    }

    util::validate_chars(digits, |c| c.is_ascii_hexdigit())?;

    HEXLOWER_PERMISSIVE.decode(digits.as_bytes()).map_err(|e| {
        let ch = digits
            .get(e.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('?');
        DecodeError::invalid_char(ch, e.position)
    })
}

fn hex_meta(name: &'static str, aliases: &'static [&'static str], alphabet: &'static str, description: &'static str) -> CodecMeta {
    CodecMeta {
        name,
        aliases,
        alphabet,
        padding: PaddingRule::None,
        case_sensitivity: CaseSensitivity::Insensitive,
        description,
    }
}

pub struct HexLower;

impl Codec for HexLower {
    fn meta(&self) -> CodecMeta {
        hex_meta("hex", &["base16", "hexlower"], LOWER_ALPHABET, "Hexadecimal, lowercase output")
    }

    fn encode(&self, input: &[u8]) -> String {
        encode(input, HexCase::Lower)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }
}

pub struct HexUpper;

impl Codec for HexUpper {
    fn meta(&self) -> CodecMeta {
        hex_meta("hexupper", &["HEX", "base16upper"], UPPER_ALPHABET, "Hexadecimal, uppercase output")
    }

    fn encode(&self, input: &[u8]) -> String {
        encode(input, HexCase::Upper)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }
}
