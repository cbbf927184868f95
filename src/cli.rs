use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bintext")]
#[command(about = "Encode, decode and convert hex, Base32, Base45 and Base64 text")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode bytes to text")]
    Enc {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Show encoding with all codecs")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode text to bytes")]
    Dec {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Write binary output to a terminal")]
        force: bool,

        #[arg(long, help = "Try all codecs and show successful decodes")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Convert between encodings")]
    Conv {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List supported codecs")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show codec details")]
    Info {
        #[arg(long)]
        codec: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Verify input conforms to codec")]
    Verify {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, help = "Treat empty input as invalid")]
        non_empty: bool,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Explain why input fails to decode")]
    Explain {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },
}
