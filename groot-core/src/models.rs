use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::diff::DiffRun;
use crate::error::Result;
use crate::hash::ObjectId;
use crate::index::StagingEntry;

/// An immutable snapshot of the staging index, linked to the commit before it.
///
/// A commit's id is the hash of its JSON text, so the serialized form must be
/// reproducible: timestamps are kept at millisecond precision and fields are
/// written in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(rename = "timeStamp", with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub files: Vec<StagingEntry>,
    pub parent: Option<ObjectId>,
}

impl Commit {
    pub fn new(message: String, files: Vec<StagingEntry>) -> Self {
        Self {
            timestamp: Utc::now().trunc_subsecs(3),
            message,
            files,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<ObjectId>) -> Self {
        self.parent = parent;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// First entry recorded for `path`, if any.
    pub fn find_file(&self, path: &str) -> Option<&StagingEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// How a file recorded in a commit relates to the parent commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// The commit has no parent.
    FirstCommit,
    /// The parent commit does not record this path.
    Created,
    Changed(Vec<DiffRun>),
    /// One of the two versions is not UTF-8 text.
    Binary,
}

#[derive(Debug, Clone)]
pub struct FileDiff {
    pub path: String,
    pub hash: ObjectId,
    pub content: Vec<u8>,
    pub comparison: Comparison,
}

impl FileDiff {
    pub fn content_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

#[derive(Debug, Clone)]
pub struct CommitDiff {
    pub id: ObjectId,
    pub commit: Commit,
    pub files: Vec<FileDiff>,
}

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
