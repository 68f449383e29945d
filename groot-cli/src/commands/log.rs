use anyhow::Result;
use colored::Colorize;
use groot_core::Repository;
use std::path::Path;

pub fn run(repo_path: &Path, limit: Option<usize>) -> Result<()> {
    let repo = Repository::open(repo_path)?;
    let mut history = repo.history()?.peekable();

    if history.peek().is_none() {
        println!("{}", "No commits yet".yellow());
        return Ok(());
    }

    let limit = limit.unwrap_or(usize::MAX);
    let mut shown = 0;

    for entry in history.by_ref().take(limit) {
        let Some((id, commit)) = super::report_not_found(entry)? else {
            return Ok(());
        };

        println!("{}", "_".repeat(27).bright_black());
        println!();
        println!("{} {}", "commit".yellow().bold(), id.to_string().yellow());
        println!(
            "{}: {}",
            "Date".bold(),
            commit.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
        println!("{}: {}", "Message".bold(), commit.message);
        println!("    {} file(s)", commit.files.len().to_string().cyan());
        println!();
        shown += 1;
    }

    if history.peek().is_some() {
        println!(
            "{}",
            format!("... {} commit(s) shown, older history omitted", shown).dimmed()
        );
        println!("Use {} to see more", "--limit N".cyan());
    }

    Ok(())
}
