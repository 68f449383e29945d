use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Equal,
    Added,
    Removed,
}

/// A contiguous block of lines sharing one [`RunKind`]. `text` keeps line
/// terminators, so runs concatenate back into the original documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRun {
    pub kind: RunKind,
    pub text: String,
}

impl DiffRun {
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Outcome of comparing a file against its version in the parent commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileComparison {
    /// The parent commit has no entry for this path.
    Created,
    Changed(Vec<DiffRun>),
}

/// Line-oriented differ. Implementations must cover every line of both inputs
/// exactly once, in document order.
pub trait LineDiffer {
    fn diff_lines(&self, old: &str, new: &str) -> Vec<DiffRun>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Lcs,
    Patience,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
            DiffAlgorithm::Patience => Algorithm::Patience,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarDiffer {
    algorithm: DiffAlgorithm,
}

impl SimilarDiffer {
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl LineDiffer for SimilarDiffer {
    fn diff_lines(&self, old: &str, new: &str) -> Vec<DiffRun> {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_lines(old, new);

        let mut runs: Vec<DiffRun> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => RunKind::Equal,
                ChangeTag::Insert => RunKind::Added,
                ChangeTag::Delete => RunKind::Removed,
            };

            match runs.last_mut() {
                Some(run) if run.kind == kind => run.text.push_str(change.value()),
                _ => runs.push(DiffRun {
                    kind,
                    text: change.value().to_string(),
                }),
            }
        }

        runs
    }
}

/// Compares `current` against the parent's version of the same file.
pub fn diff_files<D: LineDiffer + ?Sized>(
    differ: &D,
    parent: Option<&str>,
    current: &str,
) -> FileComparison {
    match parent {
        None => FileComparison::Created,
        Some(parent) => FileComparison::Changed(differ.diff_lines(parent, current)),
    }
}

/// Parent text: equal and removed runs, in order.
pub fn reconstruct_old(runs: &[DiffRun]) -> String {
    collect_runs(runs, RunKind::Removed)
}

/// Current text: equal and added runs, in order.
pub fn reconstruct_new(runs: &[DiffRun]) -> String {
    collect_runs(runs, RunKind::Added)
}

fn collect_runs(runs: &[DiffRun], side: RunKind) -> String {
    runs.iter()
        .filter(|run| run.kind == RunKind::Equal || run.kind == side)
        .map(|run| run.text.as_str())
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn from_runs(runs: &[DiffRun]) -> Self {
        runs.iter().fold(Self::default(), |mut stats, run| {
            match run.kind {
                RunKind::Added => stats.added += run.line_count(),
                RunKind::Removed => stats.removed += run.line_count(),
                RunKind::Equal => {}
            }
            stats
        })
    }

    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}
