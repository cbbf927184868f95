use serde::Serialize;

use crate::io::read_input;
use bintext::error::Result;
use bintext::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub codec: String,
    pub output: String,
}

pub fn run_encode(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<String> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    let encoded = codec.encode(&data);
    log::info!("encoded {} bytes as {} ({} chars)", data.len(), codec.name(), encoded.len());
    Ok(encoded)
}

pub fn run_encode_json(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<EncodeResult> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    Ok(EncodeResult {
        codec: codec.name().to_string(),
        output: codec.encode(&data),
    })
}

pub fn run_encode_all(ctx: &Context, input: &InputSource) -> Result<String> {
    let data = read_input(input)?;

    let mut table = format!("{:<12} {}\n{}", "CODEC", "ENCODED", "-".repeat(70));
    for meta in ctx.registry.list() {
        let encoded = ctx.registry.get(meta.name)?.encode(&data);
        let display = if encoded.chars().count() > 50 {
            format!("{}...", encoded.chars().take(47).collect::<String>())
        } else {
            encoded
        };
        table.push_str(&format!("\n{:<12} {}", meta.name, display));
    }

    Ok(table)
}

pub fn run_encode_all_json(ctx: &Context, input: &InputSource) -> Result<Vec<EncodeResult>> {
    let data = read_input(input)?;
    ctx.registry
        .list()
        .into_iter()
        .map(|meta| -> Result<EncodeResult> {
            Ok(EncodeResult {
                codec: meta.name.to_string(),
                output: ctx.registry.get(meta.name)?.encode(&data),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> InputSource {
        InputSource::Literal(s.as_bytes().to_vec())
    }

    #[test]
    fn test_run_encode() {
        let ctx = Context::default();
        assert_eq!(run_encode(&ctx, "base32", &literal("foo")).unwrap(), "MZXW6===");
        assert_eq!(run_encode(&ctx, "base45", &literal("AB")).unwrap(), "BB8");
        assert_eq!(run_encode(&ctx, "hexupper", &literal("Hi")).unwrap(), "4869");
    }

    #[test]
    fn test_run_encode_unknown_codec() {
        let ctx = Context::default();
        assert!(run_encode(&ctx, "base91", &literal("foo")).is_err());
    }

    #[test]
    fn test_run_encode_all_lists_every_codec() {
        let ctx = Context::default();
        let table = run_encode_all(&ctx, &literal("Hello")).unwrap();
        for meta in ctx.registry.list() {
            assert!(table.contains(meta.name), "missing {}", meta.name);
        }
        assert!(table.contains("SGVsbG8="));
    }

    #[test]
    fn test_run_encode_all_json() {
        let ctx = Context::default();
        let results = run_encode_all_json(&ctx, &literal("Hello")).unwrap();
        let url = results.iter().find(|r| r.codec == "base64url").unwrap();
        assert_eq!(url.output, "SGVsbG8");
    }
}
