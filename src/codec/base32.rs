use super::{util, Codec};
use crate::error::{DecodeError, LengthConstraint};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PAD: char = '=';
const GROUP_BYTES: usize = 5;
const GROUP_SYMBOLS: usize = 8;

/// Output symbols for a final group of 0..=4 bytes.
const SYMBOLS_FOR_TAIL: [usize; GROUP_BYTES] = [0, 2, 4, 5, 7];

fn symbol_value(c: char) -> Option<u8> {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(c as u8 - b'A'),
        c @ '2'..='7' => Some(c as u8 - b'2' + 26),
        _ => None,
    }
}

pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(GROUP_BYTES) * GROUP_SYMBOLS);

    for chunk in input.chunks(GROUP_BYTES) {
        let mut group = [0u8; GROUP_BYTES];
        group[..chunk.len()].copy_from_slice(chunk);
        let bits = group.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

        let symbols = if chunk.len() == GROUP_BYTES {
            GROUP_SYMBOLS
        } else {
            SYMBOLS_FOR_TAIL[chunk.len()]
        };
        for i in 0..symbols {
            let shift = 35 - 5 * i;
            out.push(ALPHABET[((bits >> shift) & 0x1f) as usize] as char);
        }
        for _ in symbols..GROUP_SYMBOLS {
            out.push(PAD);
        }
    }

    out
}

/// Decodes padded Base32, accepting either letter case.
///
/// Surrounding whitespace is trimmed; error positions index into the
/// trimmed text.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let len = text.chars().count();
    if len % GROUP_SYMBOLS != 0 {
        return Err(DecodeError::invalid_length_msg(
            LengthConstraint::MultipleOf(GROUP_SYMBOLS),
            len,
            "base32 input must be whole 8-symbol groups",
        ));
    }

    let (significant, pad_len) = util::split_padding(text);
    util::validate_chars(significant, |c| symbol_value(c).is_some())?;

    // Only ASCII remains, so byte and char indices agree from here on.
    let sig_len = significant.len();
    let tail = sig_len % GROUP_SYMBOLS;
    if pad_len > 0 && !SYMBOLS_FOR_TAIL[1..].contains(&tail) {
        return Err(DecodeError::invalid_char(PAD, sig_len));
    }

    let mut out = Vec::with_capacity(sig_len * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;
    for (pos, c) in significant.chars().enumerate() {
        let value = symbol_value(c).ok_or_else(|| DecodeError::invalid_char(c, pos))?;
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    if buffer != 0 || out.len() != sig_len * 5 / 8 {
        let ch = significant.chars().next_back().unwrap_or(PAD);
        return Err(DecodeError::invalid_char(ch, sig_len.saturating_sub(1)));
    }

    log::trace!("base32: {} symbols -> {} bytes", sig_len, out.len());
    Ok(out)
}

pub struct Base32;

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base32",
            aliases: &["b32", "base32pad"],
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
            padding: PaddingRule::Required,
            case_sensitivity: CaseSensitivity::Insensitive,
            description: "RFC 4648 Base32 with padding",
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
    fn test_base32_rfc_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "MY======"),
            (b"fo", "MZXQ===="),
            (b"foo", "MZXW6==="),
            (b"foob", "MZXW6YQ="),
            (b"fooba", "MZXW6YTB"),
            (b"foobar", "MZXW6YTBOI======"),
        ];
        for (raw, text) in vectors {
            assert_eq!(encode(raw), text);
            assert_eq!(decode(text).unwrap(), raw);
        }
    }

    #[test]
    fn test_base32_encode_foo() {
        assert_eq!(Base32.encode(&[0x66, 0x6f, 0x6f]), "MZXW6===");
        assert_eq!(Base32.decode("MZXW6===").unwrap(), vec![0x66, 0x6f, 0x6f]);
    }

    #[test]
    fn test_base32_case_insensitive() {
        assert_eq!(decode("mzxw6ytb").unwrap(), b"fooba");
        assert_eq!(decode("MzXw6YtB").unwrap(), b"fooba");
    }

    #[test]
    fn test_base32_trims_whitespace() {
        assert_eq!(decode("  MZXW6===\n").unwrap(), b"foo");
    }

    #[test]
    fn test_base32_empty() {
        assert_eq!(Base32.encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("   ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base32_invalid_length() {
        assert!(matches!(
            decode("MZXW6"),
            Err(DecodeError::InvalidLength { actual: 5, .. })
        ));
    }

    #[test]
    fn test_base32_invalid_char() {
        assert_eq!(decode("MZXW1==="), Err(DecodeError::invalid_char('1', 4)));
        assert_eq!(decode("MZ!W6==="), Err(DecodeError::invalid_char('!', 2)));
    }

    #[test]
    fn test_base32_pad_inside_data() {
        assert_eq!(decode("MZ=W6==="), Err(DecodeError::invalid_char('=', 2)));
    }

    #[test]
    fn test_base32_illegal_pad_count() {
        assert_eq!(decode("MZXW6Y=="), Err(DecodeError::invalid_char('=', 6)));
        assert_eq!(decode("M======="), Err(DecodeError::invalid_char('=', 1)));
        assert_eq!(decode("========"), Err(DecodeError::invalid_char('=', 0)));
    }

    #[test]
    fn test_base32_rejects_nonzero_trailing_bits() {
        assert_eq!(decode("MZXW7==="), Err(DecodeError::invalid_char('7', 4)));
    }

    #[test]
    fn test_base32_length_multiple_of_8() {
        for n in 0..20 {
            let data = vec![0xa5u8; n];
            assert_eq!(encode(&data).len() % 8, 0);
        }
    }
}
