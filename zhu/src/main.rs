use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[derive(Parser)]
#[command(name = "zhu", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a zsh history file into JSON lines
    Decode {
        /// History file to read; defaults to ~/.zsh_history
        history_file: Option<PathBuf>,
        /// Prettify output JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Convert JSON lines back into a zsh history file
    Encode {
        /// File with one JSON entry per line
        decoded_file: PathBuf,
    },
    /// Merge zsh history files into one chronologically ordered file
    Merge {
        /// History files to merge
        #[arg(required = true)]
        history_files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize tracing: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Decode {
            history_file,
            pretty,
        } => commands::decode::run(history_file, pretty),
        Commands::Encode { decoded_file } => commands::encode::run(&decoded_file),
        Commands::Merge { history_files } => commands::merge::run(&history_files),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("zhu: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<()> {
    // logs go to stderr, stdout carries the converted data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}
