use serde::Serialize;

use crate::io::read_text;
use bintext::error::{DecodeError, LengthConstraint, Result};
use bintext::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub schema_version: u32,
    pub codec: String,
    pub input_preview: String,
    pub valid: bool,
    pub error: Option<ExplainError>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplainError {
    pub kind: &'static str,
    pub message: String,
    pub position: Option<usize>,
    pub offending_char: Option<char>,
    pub context: Option<String>,
}

/// A window of `input` around character `pos` with a caret under it.
fn get_context(input: &str, pos: usize, window: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    let start = pos.saturating_sub(window);
    let end = (pos + window + 1).min(chars.len());

    let mut result: String = chars[start..end].iter().collect();
    result.push('\n');
    result.push_str(&" ".repeat(pos - start));
    result.push('^');
    result
}

fn suggest_fixes(error: &DecodeError, codec_name: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    match error {
        DecodeError::InvalidCharacter { char: c, .. } => {
            if c.is_whitespace() && codec_name != "base45" {
                suggestions.push("Remove whitespace from the input".to_string());
            }
            if *c == '=' {
                suggestions.push("Padding may only appear at the end, with the canonical count".to_string());
            }
            if codec_name == "base45" && c.is_ascii_lowercase() {
                suggestions.push("Base45 is uppercase only; convert the input to uppercase".to_string());
            }
            if codec_name == "base64" && (*c == '-' || *c == '_') {
                suggestions.push("Input looks URL-safe; try --codec base64url".to_string());
            }
            if codec_name == "base64url" && (*c == '+' || *c == '/') {
                suggestions.push("Input looks like standard Base64; try --codec base64".to_string());
            }
        }
        DecodeError::InvalidLength { expected, actual, .. } => match expected {
            LengthConstraint::MultipleOf(2) => {
                suggestions.push("Hex input has odd length; a digit may be missing".to_string());
            }
            LengthConstraint::MultipleOf(4) if codec_name == "base64" => {
                suggestions.push("Unpadded input; add '=' padding or try --codec base64url".to_string());
            }
            _ => {
                suggestions.push(format!("Input length {} can't be a complete {} value; it may be truncated", actual, codec_name));
            }
        },
        DecodeError::ValueOverflow { position, .. } => {
            suggestions.push(format!(
                "The group starting at position {} is not a valid encoding; the data may be corrupted",
                position
            ));
        }
        DecodeError::EmptyInput => {
            suggestions.push("Provide non-empty input".to_string());
        }
    }

    suggestions
}

pub fn run_explain(ctx: &Context, input: InputSource, codec: &str) -> Result<ExplainResult> {
    let text = read_text(&input)?;
    let codec_impl = ctx.registry.get(codec)?;

    let preview = if text.chars().count() > 60 {
        format!("{}...", text.chars().take(60).collect::<String>())
    } else {
        text.clone()
    };

    let result = match codec_impl.decode(&text) {
        Ok(_) => ExplainResult {
            schema_version: 1,
            codec: codec_impl.name().to_string(),
            input_preview: preview,
            valid: true,
            error: None,
            suggestions: vec![],
        },
        Err(e) => {
            let (position, offending_char) = match &e {
                DecodeError::InvalidCharacter { char: c, position: p } => (Some(*p), Some(*c)),
                DecodeError::ValueOverflow { position: p, .. } => (Some(*p), None),
                _ => (None, None),
            };
            // Positions index into the codec's cleaned view; only draw a caret
            // when that view lines up with the raw input.
            let context = position
                .filter(|&p| match offending_char {
                    Some(c) => text.chars().nth(p) == Some(c),
                    None => p < text.chars().count(),
                })
                .map(|p| get_context(&text, p, 10));

            ExplainResult {
                schema_version: 1,
                codec: codec_impl.name().to_string(),
                input_preview: preview,
                valid: false,
                suggestions: suggest_fixes(&e, codec_impl.name()),
                error: Some(ExplainError {
                    kind: e.kind(),
                    message: e.to_string(),
                    position,
                    offending_char,
                    context,
                }),
            }
        }
    };

    Ok(result)
}
