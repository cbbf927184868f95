mod cli;
mod commands;
mod io;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use bintext::{error, types, Context};
use cli::{Cli, Command};
use commands::CommandHandler;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => error::ExitCode::Success.into(),
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            codec,
            r#in,
            out,
            all,
            json,
        } => Box::new(commands::EncCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            all,
            json,
        }),

        Command::Dec {
            codec,
            r#in,
            out,
            force,
            all,
            json,
        } => Box::new(commands::DecCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            force,
            all,
            json,
        }),

        Command::Conv {
            from,
            to,
            r#in,
            out,
            json,
        } => Box::new(commands::ConvCommand {
            from,
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { codec, json } => Box::new(commands::InfoCommand { codec, json }),

        Command::Verify {
            codec,
            r#in,
            non_empty,
            json,
        } => Box::new(commands::VerifyCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            non_empty,
            json,
        }),

        Command::Explain { codec, r#in, json } => Box::new(commands::ExplainCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            json,
        }),
    };

    handler.execute(&ctx)
}
