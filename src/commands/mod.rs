mod conv;
mod dec;
mod enc;
mod explain;
mod info;
mod list;
mod verify;

pub use conv::{run_conv, run_conv_json};
pub use dec::{run_decode, run_decode_all, run_decode_all_json, run_decode_json};
pub use enc::{run_encode, run_encode_all, run_encode_all_json, run_encode_json};
pub use explain::run_explain;
pub use info::run_info;
pub use list::run_list;
pub use verify::run_verify;

use serde::Serialize;

use crate::io::{write_output, OutputConfig};
use bintext::error::{BintextError, Result};
use bintext::types::{Context, InputSource, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes encoded text; stdout gets a trailing newline, files do not.
fn write_text(text: &str, dest: &OutputDest) -> Result<()> {
    let config = OutputConfig {
        dest: dest.clone(),
        force: true,
    };
    write_output(text.as_bytes(), &config)?;
    if matches!(dest, OutputDest::Stdout) {
        println!();
    }
    Ok(())
}

pub struct EncCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        match (self.json, self.all) {
            (true, true) => print_json(&run_encode_all_json(ctx, &self.input)?),
            (true, false) => print_json(&run_encode_json(ctx, &self.codec, &self.input)?),
            (false, true) => write_text(&run_encode_all(ctx, &self.input)?, &self.output),
            (false, false) => write_text(&run_encode(ctx, &self.codec, &self.input)?, &self.output),
        }
    }
}

pub struct DecCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub force: bool,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        match (self.json, self.all) {
            (true, true) => print_json(&run_decode_all_json(ctx, &self.input)?),
            (true, false) => print_json(&run_decode_json(ctx, &self.codec, &self.input)?),
            (false, true) => write_text(&run_decode_all(ctx, &self.input)?, &self.output),
            (false, false) => {
                let decoded = run_decode(ctx, &self.codec, &self.input)?;
                let config = OutputConfig {
                    dest: self.output.clone(),
                    force: self.force,
                };
                write_output(&decoded, &config)
            }
        }
    }
}

pub struct ConvCommand {
    pub from: String,
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            return print_json(&run_conv_json(ctx, &self.from, &self.to, &self.input)?);
        }
        write_text(&run_conv(ctx, &self.from, &self.to, &self.input)?, &self.output)
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let codecs = run_list(ctx);
        if self.json {
            return print_json(&codecs);
        }
        println!("{:<12} {:<10} DESCRIPTION", "NAME", "PADDING");
        println!("{}", "-".repeat(60));
        for c in codecs {
            println!("{:<12} {:<10} {}", c.name, format!("{:?}", c.padding), c.description);
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub codec: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.codec)?;
        if self.json {
            return print_json(&meta);
        }
        println!("Name:        {}", meta.name);
        println!("Aliases:     {}", meta.aliases.join(", "));
        println!("Alphabet:    {}", meta.alphabet);
        println!("Padding:     {:?}", meta.padding);
        println!("Case:        {:?}", meta.case_sensitivity);
        println!("Description: {}", meta.description);
        Ok(())
    }
}

pub struct VerifyCommand {
    pub codec: String,
    pub input: InputSource,
    pub non_empty: bool,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_verify(ctx, &self.codec, &self.input, self.non_empty)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else {
            println!("invalid: {}", result.error.as_deref().unwrap_or_default());
        }
        if result.valid {
            Ok(())
        } else {
            Err(BintextError::invalid_input(result.error.unwrap_or_default()))
        }
    }
}

pub struct ExplainCommand {
    pub codec: String,
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for ExplainCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_explain(ctx, self.input.clone(), &self.codec)?;

        if self.json {
            return print_json(&result);
        }

        println!("Codec: {}", result.codec);
        println!("Input: {}", result.input_preview);
        println!();

        if result.valid {
            println!("Status: VALID");
            println!("The input is valid for this codec.");
        } else if let Some(ref err) = result.error {
            println!("Status: INVALID");
            println!();
            println!("Error: {}", err.message);

            if let Some(pos) = err.position {
                println!("Position: {}", pos);
            }
            if let Some(c) = err.offending_char {
                println!("Character: {:?}", c);
            }
            if let Some(ref context) = err.context {
                println!();
                println!("{}", context);
            }

            if !result.suggestions.is_empty() {
                println!();
                println!("Suggestions:");
                for suggestion in &result.suggestions {
                    println!("  - {}", suggestion);
                }
            }
        }
        Ok(())
    }
}
