use super::{base64, util, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const URL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn to_url(c: char) -> char {
    match c {
        '+' => '-',
        '/' => '_',
        c => c,
    }
}

/// Base64 with `-`/`_` in place of `+`/`/` and no padding.
pub fn encode(input: &[u8]) -> String {
    base64::encode(input).trim_end_matches('=').chars().map(to_url).collect()
}

/// Decodes URL-safe Base64, with or without trailing padding.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut standard = String::with_capacity(input.len() + 2);
    for (pos, c) in input.chars().enumerate() {
        match c {
            '-' => standard.push('+'),
            '_' => standard.push('/'),
            '+' | '/' => return Err(DecodeError::invalid_char(c, pos)),
            c => standard.push(c),
        }
    }

    if !standard.ends_with('=') {
        let len = standard.chars().count();
        if len % 4 == 1 {
            return Err(DecodeError::invalid_length_msg(
                LengthConstraint::NotCongruent { modulus: 4, remainder: 1 },
                len,
                "a single trailing symbol cannot hold a byte",
            ));
        }
        standard = util::pad_to_multiple(&standard, 4);
    }

    base64::decode(&standard).map_err(|err| match err {
        DecodeError::InvalidCharacter { char, position } => DecodeError::invalid_char(to_url(char), position),
        other => other,
    })
}

pub struct Base64Url;

impl Codec for Base64Url {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base64url",
            aliases: &["b64url", "url64"],
            alphabet: URL_ALPHABET,
            padding: PaddingRule::Optional,
            case_sensitivity: CaseSensitivity::Sensitive,
            description: "RFC 4648 URL-safe Base64, unpadded output",
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        encode(input)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }
}
