mod config;
mod generate;
mod inspect;
mod scan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate accessor classes for all resource files under a directory.
    Generate {
        /// Directory to scan for .resx files
        #[arg(short, long)]
        input: PathBuf,
        /// Directory to write generated .g.cs files to
        #[arg(short, long)]
        output: PathBuf,
        /// Optional TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print diagnostics as JSON on stdout instead of text on stderr
        #[arg(long)]
        json: bool,
    },

    /// Show file grouping and culture combinations without generating.
    Inspect {
        /// Directory to scan for .resx files
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Generate {
            input,
            output,
            config,
            json,
        } => generate::run(&input, &output, config.as_deref(), json),
        Commands::Inspect { input } => inspect::run(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
