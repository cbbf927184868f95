use serde::Serialize;

use crate::io::read_text;
use bintext::error::Result;
use bintext::types::{Context, DecodeOutcome, InputSource};

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub codec: String,
    pub error_kind: Option<&'static str>,
    pub error: Option<String>,
}

pub fn run_verify(ctx: &Context, codec_name: &str, input: &InputSource, non_empty: bool) -> Result<VerifyResult> {
    let codec = ctx.registry.get(codec_name)?;
    let text = read_text(input)?;

    let outcome = if non_empty {
        DecodeOutcome::from(codec.decode_non_empty(&text))
    } else {
        codec.try_decode(&text)
    };

    Ok(VerifyResult {
        schema_version: 1,
        valid: outcome.success,
        codec: codec.name().to_string(),
        error_kind: outcome.error().map(|e| e.kind()),
        error: outcome.diagnostic,
    })
}
