//! gzinfo CLI
//!
//! Print the original filename and header fields stored in GZIP files
//! without decompressing them.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_info, cmd_name};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gzinfo")]
#[command(
    author,
    version,
    about = "Inspect GZIP headers without decompressing"
)]
#[command(long_about = "
gzinfo reads the header of the first member of a GZIP file and reports the
original filename, compression method, flag byte and modification time.
Use - to read from standard input.

Examples:
  gzinfo info backup.tar.gz
  gzinfo info --json *.gz
  gzinfo name download.gz
  cat data.gz | gzinfo name --default-name data -
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all header fields
    #[command(alias = "i")]
    Info {
        /// GZIP files to inspect (- for standard input)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Filename to report when neither the header nor the input has one
        #[arg(short = 'n', long)]
        default_name: Option<String>,
    },

    /// Print only the original filename
    #[command(alias = "n")]
    Name {
        /// GZIP files to inspect (- for standard input)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Filename to report when neither the header nor the input has one
        #[arg(short = 'n', long)]
        default_name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info {
            files,
            json,
            default_name,
        } => cmd_info(&files, json, default_name.as_deref()),
        Commands::Name {
            files,
            default_name,
        } => cmd_name(&files, default_name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
