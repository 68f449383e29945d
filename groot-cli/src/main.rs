use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

mod commands;
mod display;

use commands::{add, commit, init, log, show, status};

#[derive(Parser)]
#[command(name = "groot")]
#[command(version, about = "A minimal content-addressed version control engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository directory (defaults to ./.groot)
    #[arg(short, long, global = true)]
    repo: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the repository, keeping anything that already exists
    Init,

    /// Stage a file for the next commit
    Add {
        /// File to stage
        file_name: PathBuf,
    },

    /// Commit the staged files
    Commit {
        /// Commit message
        message: String,
    },

    /// Show commit history, newest first
    Log {
        /// Number of commits to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a commit's files and their diff against the parent commit
    Show {
        /// Commit hash
        commit_hash: String,
    },

    /// Show HEAD and the staged files
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let repo_path = commands::get_repo_path(cli.repo)?;

    match cli.command {
        Commands::Init => {
            init::run(&repo_path)?;
        }
        Commands::Add { file_name } => {
            add::run(&repo_path, &file_name)?;
        }
        Commands::Commit { message } => {
            commit::run(&repo_path, &message)?;
        }
        Commands::Log { limit } => {
            log::run(&repo_path, limit)?;
        }
        Commands::Show { commit_hash } => {
            show::run(&repo_path, &commit_hash)?;
        }
        Commands::Status => {
            status::run(&repo_path)?;
        }
    }

    Ok(())
}
