pub mod base32;
pub mod base45;
pub mod base64;
pub mod base64url;
pub mod hex;
pub mod registry;
pub(crate) mod util;

pub use registry::Registry;

use crate::error::DecodeError;
use crate::types::{CodecMeta, DecodeOutcome};

/// A pair of pure conversions between bytes and one textual encoding.
///
/// Implementations hold no state; every call allocates its own output and
/// the codec keeps no reference to its input.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &[u8]) -> String;
    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError>;

    /// Decode without an error type: success flag, bytes, or a diagnostic.
    fn try_decode(&self, input: &str) -> DecodeOutcome {
        DecodeOutcome::from(self.decode(input))
    }

    /// Like [`Codec::decode`], but treats empty text as [`DecodeError::EmptyInput`].
    fn decode_non_empty(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        if input.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        self.decode(input)
    }

    fn name(&self) -> &'static str {
        self.meta().name
    }
}
