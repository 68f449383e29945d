use anyhow::Result;
use colored::Colorize;
use groot_core::{Comparison, DiffStats, ObjectId, Repository};
use std::path::Path;

use crate::display;

pub fn run(repo_path: &Path, commit_hash: &str) -> Result<()> {
    let repo = Repository::open(repo_path)?;

    let result = ObjectId::parse(commit_hash).and_then(|id| repo.show_commit(&id));
    let Some(shown) = super::report_not_found(result)? else {
        return Ok(());
    };

    println!("{}", format!("Commit {}", shown.id).bold().cyan());
    println!("{}: {}", "Message".bold(), shown.commit.message);
    println!(
        "{}: {}",
        "Date".bold(),
        shown.commit.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    if shown.files.is_empty() {
        println!("{}", "No files in this commit".yellow());
        return Ok(());
    }

    println!("{}", "Changes in this commit:".bold());

    for file in &shown.files {
        println!("{}", "━".repeat(80).bright_black());
        println!("{}: {}", "File Name".bold(), file.path.white().bold());
        display::file_content(&file.content_text());

        match &file.comparison {
            Comparison::FirstCommit => {
                println!("{}", "This is the first commit.".cyan());
            }
            Comparison::Created => {
                println!(
                    "{}",
                    "This file is created in this commit, so no previous version to compare with."
                        .green()
                );
            }
            Comparison::Binary => {
                println!("  {}", "[Binary file, no line diff]".dimmed());
            }
            Comparison::Changed(runs) => {
                display::diff_runs(runs);
                let stats = DiffStats::from_runs(runs);
                if stats.is_unchanged() {
                    println!("{}", "Unchanged since the parent commit.".dimmed());
                } else {
                    println!(
                        "{} {}",
                        format!("+{}", stats.added).green(),
                        format!("-{}", stats.removed).red()
                    );
                }
            }
        }
        println!();
    }

    Ok(())
}
