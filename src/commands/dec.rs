use serde::Serialize;

use crate::io::read_text;
use bintext::codec::hex::{self, HexCase};
use bintext::codec::Codec;
use bintext::error::Result;
use bintext::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub codec: String,
    pub success: bool,
    pub hex: Option<String>,
    pub error_kind: Option<&'static str>,
    pub diagnostic: Option<String>,
}

fn report(codec: &dyn Codec, text: &str) -> DecodeReport {
    let outcome = codec.try_decode(text);
    DecodeReport {
        codec: codec.name().to_string(),
        success: outcome.success,
        hex: outcome.bytes.as_deref().map(|b| hex::encode(b, HexCase::Lower)),
        error_kind: outcome.error().map(|e| e.kind()),
        diagnostic: outcome.diagnostic,
    }
}

pub fn run_decode(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<Vec<u8>> {
    let codec = ctx.registry.get(codec_name)?;
    let text = read_text(input)?;
    let decoded = codec.decode(&text)?;
    log::info!("decoded {} chars of {} into {} bytes", text.chars().count(), codec.name(), decoded.len());
    Ok(decoded)
}

pub fn run_decode_json(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<DecodeReport> {
    let codec = ctx.registry.get(codec_name)?;
    let text = read_text(input)?;
    Ok(report(codec, &text))
}

pub fn run_decode_all(ctx: &Context, input: &InputSource) -> Result<String> {
    let text = read_text(input)?;

    let mut table = format!("{:<12} {}\n{}", "CODEC", "DECODED (as text, or hex if binary)", "-".repeat(70));
    let mut successes = 0;
    for meta in ctx.registry.list() {
        let codec = ctx.registry.get(meta.name)?;
        match codec.decode(&text) {
            Ok(decoded) => {
                successes += 1;
                table.push_str(&format!("\n{:<12} {}", meta.name, format_decoded(&decoded)));
            }
            Err(e) => log::debug!("{} rejected input: {}", meta.name, e),
        }
    }

    if successes == 0 {
        table.push_str("\n(no codec could decode the input)");
    }

    Ok(table)
}

pub fn run_decode_all_json(ctx: &Context, input: &InputSource) -> Result<Vec<DecodeReport>> {
    let text = read_text(input)?;
    ctx.registry
        .list()
        .into_iter()
        .map(|meta| -> Result<DecodeReport> { Ok(report(ctx.registry.get(meta.name)?, &text)) })
        .collect()
}

fn format_decoded(data: &[u8]) -> String {
    if data.is_empty() {
        return "(empty)".to_string();
    }

    let is_printable = data
        .iter()
        .all(|&b| b == b'\n' || b == b'\r' || b == b'\t' || (0x20..0x7F).contains(&b));

    if is_printable {
        let s = String::from_utf8_lossy(data);
        if s.len() > 50 {
            format!("\"{}...\"", &s[..47])
        } else {
            format!("\"{}\"", s)
        }
    } else {
        let shown = hex::encode(&data[..data.len().min(25)], HexCase::Lower);
        if data.len() > 25 {
            format!("[{}...] ({} bytes)", shown, data.len())
        } else {
            format!("[{}] ({} bytes)", shown, data.len())
        }
    }
}
