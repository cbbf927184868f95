//! Stateless converters between raw bytes and hexadecimal, Base32
//! (RFC 4648), Base45 (RFC 9285), Base64 and URL-safe Base64 text.
//!
//! Each codec is available as a pair of free functions in its module
//! ([`codec::base32::encode`], [`codec::base32::decode`], ...) and as a
//! [`codec::Codec`] implementation looked up through [`codec::Registry`].

pub mod codec;
pub mod error;
pub mod types;

pub use codec::hex::HexCase;
pub use codec::{Codec, Registry};
pub use error::{BintextError, DecodeError, LengthConstraint, Result};
pub use types::{CaseSensitivity, CodecMeta, Context, DecodeOutcome, InputSource, OutputDest, PaddingRule};
