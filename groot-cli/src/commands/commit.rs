use anyhow::Result;
use colored::Colorize;
use groot_core::Repository;
use std::path::Path;

pub fn run(repo_path: &Path, message: &str) -> Result<()> {
    let repo = Repository::open(repo_path)?;
    let staged = repo.staged()?;

    if staged.is_empty() {
        println!("{}", "Nothing staged, recording an empty commit".yellow());
    }

    let id = repo.commit(message)?;

    println!("{}", "✓ Commit successful".green().bold());
    println!("  {}: {}", "Commit".bold(), id.to_string().yellow());
    println!("  {}: {}", "Message".bold(), message);
    println!("  {}: {}", "Files".bold(), staged.len());

    Ok(())
}
