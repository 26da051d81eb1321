//! Command-line front end for the Morse translator and the one-hot encoder.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use codebook::{
    config::{load_settings, Settings},
    morse, onehot,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "codebook", version, about)]
struct Cli {
    /// Settings file, `codebook.toml` by default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a message into Morse code.
    Encode {
        /// Uppercase message to encode.
        message: String,
    },
    /// Decode a whitespace-separated Morse message.
    Decode {
        /// Morse message to decode.
        morse: String,
    },
    /// One-hot encode categories in order of first appearance.
    Onehot {
        /// Treat every character of the arguments as a category.
        #[arg(long)]
        chars: bool,
        /// Categories to encode.
        #[arg(required = true)]
        categories: Vec<String>,
    },
    /// Decode the demonstration message and check that it re-encodes to itself.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config)?;
    init_tracing(&settings);

    match cli.command {
        Command::Encode { message } => {
            let encoded = morse::encode(&message).context("failed to encode message")?;
            println!("{encoded}");
        }
        Command::Decode { morse } => {
            let decoded = morse::decode(&morse).context("failed to decode message")?;
            println!("{decoded}");
        }
        Command::Onehot { chars, categories } => {
            let categories: Vec<String> = if chars {
                categories
                    .iter()
                    .flat_map(|s| s.chars().map(String::from))
                    .collect()
            } else {
                categories
            };
            let rows = onehot::fit_transform(categories).context("failed to encode categories")?;
            for (category, code) in rows {
                let bits: String = code.iter().map(u8::to_string).collect();
                println!("{category}\t{bits}");
            }
        }
        Command::Demo => run_demo(&settings)?,
    }
    Ok(())
}

fn run_demo(settings: &Settings) -> Result<()> {
    let message = &settings.demo.message;
    let decoded = morse::decode(message).context("failed to decode demonstration message")?;
    println!("{decoded}");
    let encoded = morse::encode(&decoded).context("failed to re-encode demonstration message")?;
    if encoded != *message {
        bail!("re-encoding produced {encoded:?}, expected {message:?}");
    }
    info!(%decoded, "demonstration message round-tripped");
    Ok(())
}

fn init_tracing(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
