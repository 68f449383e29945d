use anyhow::Result;
use colored::Colorize;
use groot_core::Repository;
use std::path::Path;

pub fn run(repo_path: &Path) -> Result<()> {
    let repo = Repository::open(repo_path)?;
    let staged = repo.staged()?;

    println!("{}", "Repository Status".bold().cyan());
    println!("  {}: {}", "Repository".bold(), repo.dir().display());
    match repo.current_head()? {
        Some(head) => println!("  {}: {}", "HEAD".bold(), head.to_string().yellow()),
        None => println!("  {}: {}", "HEAD".bold(), "no commits yet".dimmed()),
    }
    println!();

    if staged.is_empty() {
        println!("{}", "Nothing staged".green());
        return Ok(());
    }

    println!(
        "{} {}",
        "Staged files:".bold(),
        format!("({})", staged.len()).yellow()
    );
    println!();

    for entry in &staged {
        println!(
            "  {} {} {}",
            "+".green(),
            entry.path,
            entry.hash.short().dimmed()
        );
    }

    println!();
    println!(
        "Run {} to commit these files",
        "groot commit \"message\"".cyan()
    );

    Ok(())
}
