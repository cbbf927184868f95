use serde::Serialize;

use crate::io::read_text;
use bintext::error::Result;
use bintext::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub from_codec: String,
    pub to_codec: String,
    pub input: String,
    pub output: String,
}

pub fn run_conv(ctx: &Context, from_codec: &str, to_codec: &str, input: &InputSource) -> Result<String> {
    Ok(run_conv_json(ctx, from_codec, to_codec, input)?.output)
}

pub fn run_conv_json(ctx: &Context, from_codec: &str, to_codec: &str, input: &InputSource) -> Result<ConvertResult> {
    let decoder = ctx.registry.get(from_codec)?;
    let encoder = ctx.registry.get(to_codec)?;

    let text = read_text(input)?;
    let decoded = decoder.decode(&text)?;
    let output = encoder.encode(&decoded);
    log::info!("converted {} -> {} ({} bytes)", decoder.name(), encoder.name(), decoded.len());

    Ok(ConvertResult {
        from_codec: decoder.name().to_string(),
        to_codec: encoder.name().to_string(),
        input: text,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> InputSource {
        InputSource::Literal(s.as_bytes().to_vec())
    }

    #[test]
    fn test_conv_hex_to_base45() {
        let ctx = Context::default();
        assert_eq!(run_conv(&ctx, "hex", "base45", &literal("4142")).unwrap(), "BB8");
    }

    #[test]
    fn test_conv_base64_to_base64url() {
        let ctx = Context::default();
        assert_eq!(run_conv(&ctx, "base64", "base64url", &literal("+/8=")).unwrap(), "-_8");
    }

    #[test]
    fn test_conv_json_uses_canonical_names() {
        let ctx = Context::default();
        let result = run_conv_json(&ctx, "b32", "HEX", &literal("MZXW6===")).unwrap();
        assert_eq!(result.from_codec, "base32");
        assert_eq!(result.to_codec, "hexupper");
        assert_eq!(result.output, "666F6F");
    }

    #[test]
    fn test_conv_invalid_input() {
        let ctx = Context::default();
        assert!(run_conv(&ctx, "base32", "hex", &literal("MZXW6")).is_err());
    }
}
