use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::RepoConfig;
use crate::diff::{diff_files, FileComparison, LineDiffer, SimilarDiffer};
use crate::error::{Error, Result};
use crate::hash::ObjectId;
use crate::history::History;
use crate::index::{StagingEntry, StagingIndex};
use crate::models::{Commit, CommitDiff, Comparison, FileDiff};
use crate::store::ObjectStore;

/// Conventional name of the repository directory inside a working tree.
pub const REPO_DIR_NAME: &str = ".groot";

const OBJECTS_DIR: &str = "objects";
const HEAD_FILE: &str = "HEAD";
const INDEX_FILE: &str = "index";
const CONFIG_FILE: &str = "config.toml";

/// Handle on a repository directory holding `objects/`, `HEAD`, `index` and
/// `config.toml`.
///
/// Operations do blocking I/O and assume a single writer. Nothing guards
/// against two processes committing at once.
pub struct Repository {
    dir: PathBuf,
    objects: ObjectStore,
    index: StagingIndex,
    config: RepoConfig,
}

impl Repository {
    /// Opens the repository at `dir`, creating whatever parts are missing.
    /// Existing objects, HEAD and index are never touched.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        Self::initialize(&dir)?;

        let config = RepoConfig::load(dir.join(CONFIG_FILE))?;

        Ok(Self {
            objects: ObjectStore::new(dir.join(OBJECTS_DIR)),
            index: StagingIndex::new(dir.join(INDEX_FILE)),
            config,
            dir,
        })
    }

    pub fn is_initialized<P: AsRef<Path>>(dir: P) -> bool {
        let dir = dir.as_ref();
        dir.join(OBJECTS_DIR).is_dir() && dir.join(HEAD_FILE).is_file()
    }

    fn initialize(dir: &Path) -> Result<()> {
        fs::create_dir_all(dir.join(OBJECTS_DIR))?;

        let mut created = false;
        created |= create_if_missing(&dir.join(HEAD_FILE), b"")?;
        created |= create_if_missing(&dir.join(INDEX_FILE), b"[]")?;
        created |= create_if_missing(
            &dir.join(CONFIG_FILE),
            RepoConfig::default().to_toml()?.as_bytes(),
        )?;

        if created {
            info!("Initialized repository in {}", dir.display());
        }

        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Snapshots the file at `path` into the object store and queues it for
    /// the next commit. The path is recorded as given and must be UTF-8.
    pub fn stage<P: AsRef<Path>>(&self, path: P) -> Result<ObjectId> {
        let path = path.as_ref();
        let label = path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;
        let content = fs::read(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let id = self.objects.put(&content)?;
        self.index.append(StagingEntry::new(label, id.clone()))?;

        Ok(id)
    }

    pub fn staged(&self) -> Result<Vec<StagingEntry>> {
        self.index.load()
    }

    /// Records the staged files as a new commit on top of HEAD, moves HEAD to
    /// it and empties the staging index. An empty stage still commits.
    ///
    /// The steps are not rolled back: if updating HEAD or the index fails, the
    /// commit object stays in the store.
    pub fn commit(&self, message: &str) -> Result<ObjectId> {
        let files = self.index.load()?;
        let parent = self.current_head()?;

        let commit = Commit::new(message.to_string(), files).with_parent(parent);
        let id = self.objects.put(commit.to_json()?.as_bytes())?;

        fs::write(self.dir.join(HEAD_FILE), id.as_str())?;
        self.index.clear()?;

        info!(
            "Committed {} ({} file(s)) on top of {}",
            id.short(),
            commit.files.len(),
            commit.parent.as_ref().map_or("nothing", |p| p.short())
        );
        Ok(id)
    }

    pub fn current_head(&self) -> Result<Option<ObjectId>> {
        match fs::read_to_string(self.dir.join(HEAD_FILE)) {
            Ok(data) if data.trim().is_empty() => Ok(None),
            Ok(data) => ObjectId::parse(&data).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads a commit record. Missing objects and objects that are not commit
    /// records both come back as `CommitNotFound`.
    pub fn get_commit(&self, id: &ObjectId) -> Result<Commit> {
        let data = self.objects.get(id).map_err(|e| match e {
            Error::ObjectNotFound(_) => Error::CommitNotFound(id.to_string()),
            other => other,
        })?;

        let not_a_commit = || {
            debug!("Object {} is not a commit record", id.short());
            Error::CommitNotFound(id.to_string())
        };
        let text = String::from_utf8(data).map_err(|_| not_a_commit())?;
        Commit::from_json(&text).map_err(|_| not_a_commit())
    }

    /// Commits from HEAD back to the root.
    pub fn history(&self) -> Result<History<'_>> {
        Ok(History::new(self, self.current_head()?))
    }

    /// Loads a commit together with the content of every file it records and
    /// how each file compares to the parent commit's version.
    ///
    /// A commit whose parent cannot be loaded fails with `MissingParent`,
    /// naming both ids.
    pub fn show_commit(&self, id: &ObjectId) -> Result<CommitDiff> {
        let commit = self.get_commit(id)?;
        let parent = commit
            .parent
            .as_ref()
            .map(|parent_id| {
                self.get_commit(parent_id).map_err(|e| match e {
                    Error::CommitNotFound(_) => Error::MissingParent {
                        commit: id.clone(),
                        parent: parent_id.clone(),
                    },
                    other => other,
                })
            })
            .transpose()?;

        let differ = SimilarDiffer::new(self.config.diff.algorithm);
        let mut files = Vec::with_capacity(commit.files.len());

        for entry in &commit.files {
            let content = self.objects.get(&entry.hash)?;

            let comparison = match &parent {
                None => Comparison::FirstCommit,
                Some(parent) => {
                    let previous = parent
                        .find_file(&entry.path)
                        .map(|prev| self.objects.get(&prev.hash))
                        .transpose()?;
                    compare(&differ, previous.as_deref(), &content)
                }
            };

            files.push(FileDiff {
                path: entry.path.clone(),
                hash: entry.hash.clone(),
                content,
                comparison,
            });
        }

        Ok(CommitDiff {
            id: id.clone(),
            commit,
            files,
        })
    }
}

fn compare<D: LineDiffer>(differ: &D, previous: Option<&[u8]>, current: &[u8]) -> Comparison {
    let Some(previous) = previous else {
        return Comparison::Created;
    };

    match (std::str::from_utf8(previous), std::str::from_utf8(current)) {
        (Ok(previous), Ok(current)) => match diff_files(differ, Some(previous), current) {
            FileComparison::Created => Comparison::Created,
            FileComparison::Changed(runs) => Comparison::Changed(runs),
        },
        _ => Comparison::Binary,
    }
}

/// Writes `contents` to `path` unless the file already exists. Returns whether
/// it was written.
fn create_if_missing(path: &Path, contents: &[u8]) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(contents)?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}
