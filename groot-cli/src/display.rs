use colored::{ColoredString, Colorize};
use groot_core::{DiffRun, Error, RunKind};

pub fn not_found(error: &Error) {
    let message = match error {
        Error::InvalidObjectId(id) => format!("Commit not found: {} is not a valid hash", id),
        other => other.to_string(),
    };
    println!("{}", message.red());
}

pub fn file_content(content: &str) {
    println!("{}", " ------ File content started ------ ".dimmed());
    println!();
    println!("{}", content);
    println!("{}", " ------ File content ended ------".dimmed());
    println!();
}

pub fn diff_runs(runs: &[DiffRun]) {
    for run in runs {
        print!("{}", render_run(run));
    }
    println!();
}

fn render_run(run: &DiffRun) -> ColoredString {
    match run.kind {
        RunKind::Added => format!("++ {}", terminated(&run.text)).green(),
        RunKind::Removed => format!("-- {}", terminated(&run.text)).red(),
        RunKind::Equal => terminated(&run.text).yellow(),
    }
}

/// Runs at the end of a file may lack a trailing newline; the next run must
/// still start on its own line.
fn terminated(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: RunKind, text: &str) -> DiffRun {
        DiffRun {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_render_prefixes() {
        colored::control::set_override(false);

        assert_eq!(
            render_run(&run(RunKind::Added, "new\n")).to_string(),
            "++ new\n"
        );
        assert_eq!(
            render_run(&run(RunKind::Removed, "old\n")).to_string(),
            "-- old\n"
        );
        assert_eq!(
            render_run(&run(RunKind::Equal, "same\n")).to_string(),
            "same\n"
        );
    }

    #[test]
    fn test_unterminated_run_gets_newline() {
        assert_eq!(terminated("last line"), "last line\n");
        assert_eq!(terminated("done\n"), "done\n");
    }
}
