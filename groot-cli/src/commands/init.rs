use anyhow::Result;
use colored::Colorize;
use groot_core::Repository;
use std::path::Path;

pub fn run(repo_path: &Path) -> Result<()> {
    let existed = Repository::is_initialized(repo_path);
    let repo = Repository::open(repo_path)?;

    if existed {
        println!(
            "{} {}",
            "Repository already initialized in".yellow(),
            repo.dir().display()
        );
    } else {
        println!(
            "{} {}",
            "✓ Initialized empty repository in".green().bold(),
            repo.dir().display()
        );
    }

    Ok(())
}
