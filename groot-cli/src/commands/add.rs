use anyhow::Result;
use colored::Colorize;
use groot_core::Repository;
use std::path::Path;

pub fn run(repo_path: &Path, file_name: &Path) -> Result<()> {
    let repo = Repository::open(repo_path)?;
    let id = repo.stage(file_name)?;

    println!(
        "{} {} {}",
        "Added".green(),
        file_name.display().to_string().bold(),
        format!("({})", id.short()).dimmed()
    );

    Ok(())
}
