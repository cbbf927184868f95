use super::Codec;
use crate::error::{DecodeError, LengthConstraint};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

/// RFC 9285 symbol table; the index of each character is its value.
const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";
const SYMBOLS: &[u8] = ALPHABET.as_bytes();
const BASE: u32 = 45;

fn char_to_val(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    SYMBOLS.iter().position(|&s| s == c as u8).map(|p| p as u32)
}

fn val_to_char(v: u32) -> char {
    SYMBOLS[v as usize] as char
}

/// Two bytes become three symbols, a trailing single byte becomes two.
/// Symbols are emitted least significant first.
pub fn encode(input: &[u8]) -> String {
    let mut result = String::with_capacity(input.len() / 2 * 3 + input.len() % 2 * 2);

    for chunk in input.chunks(2) {
        if let [hi, lo] = *chunk {
            let n = (u32::from(hi) << 8) | u32::from(lo);
            result.push(val_to_char(n % BASE));
            result.push(val_to_char((n / BASE) % BASE));
            result.push(val_to_char(n / (BASE * BASE)));
        } else {
            let n = u32::from(chunk[0]);
            result.push(val_to_char(n % BASE));
            result.push(val_to_char(n / BASE));
        }
    }

    result
}

/// `v(c0) + v(c1)*45 + v(c2)*45*45`, failing on the first unknown symbol.
fn chunk_value(chunk: &[char], start: usize) -> Result<u32, DecodeError> {
    let (n, _) = chunk
        .iter()
        .enumerate()
        .try_fold((0u32, 1u32), |(acc, weight), (i, &c)| -> Result<_, DecodeError> {
            let v = char_to_val(c).ok_or_else(|| DecodeError::invalid_char(c, start + i))?;
            Ok((acc + v * weight, weight * BASE))
        })?;
    Ok(n)
}

pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let chars: Vec<char> = input.chars().collect();

    if chars.len() % 3 == 1 {
        return Err(DecodeError::invalid_length_msg(
            LengthConstraint::NotCongruent { modulus: 3, remainder: 1 },
            chars.len(),
            "a base45 group is 2 or 3 symbols",
        ));
    }

    let mut result = Vec::with_capacity(chars.len() / 3 * 2 + 1);

    for (idx, chunk) in chars.chunks(3).enumerate() {
        let start = idx * 3;
        let n = chunk_value(chunk, start)?;

        if chunk.len() == 3 {
            if n > 0xFFFF {
                return Err(DecodeError::overflow(n, 0xFFFF, start));
            }
            result.push((n >> 8) as u8);
            result.push((n & 0xFF) as u8);
        } else {
            if n > 0xFF {
                return Err(DecodeError::overflow(n, 0xFF, start));
            }
            result.push(n as u8);
        }
    }

    log::trace!("base45: {} symbols -> {} bytes", chars.len(), result.len());
    Ok(result)
}

pub struct Base45;

impl Codec for Base45 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base45",
            aliases: &["b45"],
            alphabet: ALPHABET,
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Sensitive,
            description: "RFC 9285 Base45, QR-code friendly",
        }
    }

    fn encode(&self, input: &[u8]) -> String {
        encode(input)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }
}
