//! # groot-core
//!
//! Core library for groot - a minimal version control engine.
//!
//! File contents and commit records are kept in a content-addressed object
//! store. Commits snapshot a flat staging index and link to their parent,
//! forming a single linear history that can be walked and diffed.

pub mod config;
pub mod diff;
pub mod error;
pub mod hash;
pub mod history;
pub mod index;
pub mod models;
pub mod repository;
pub mod store;

pub use config::RepoConfig;
pub use diff::{DiffAlgorithm, DiffRun, DiffStats, LineDiffer, RunKind, SimilarDiffer};
pub use error::{Error, Result};
pub use hash::{hash_content, ObjectId};
pub use history::History;
pub use index::{StagingEntry, StagingIndex};
pub use models::{Commit, CommitDiff, Comparison, FileDiff};
pub use repository::{Repository, REPO_DIR_NAME};
pub use store::ObjectStore;
