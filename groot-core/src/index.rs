use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::hash::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingEntry {
    pub path: String,
    pub hash: ObjectId,
}

impl StagingEntry {
    pub fn new(path: impl Into<String>, hash: ObjectId) -> Self {
        Self {
            path: path.into(),
            hash,
        }
    }
}

/// Files queued for the next commit, persisted as a JSON array.
///
/// Entries keep append order. Staging the same path twice leaves two entries,
/// and both end up in the next commit.
pub struct StagingIndex {
    path: PathBuf,
}

impl StagingIndex {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<StagingEntry>> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn append(&self, entry: StagingEntry) -> Result<()> {
        let mut entries = self.load()?;
        debug!("Staging {} as {}", entry.path, entry.hash.short());
        entries.push(entry);
        self.save(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        debug!("Clearing staging index");
        self.save(&[])
    }

    fn save(&self, entries: &[StagingEntry]) -> Result<()> {
        fs::write(&self.path, serde_json::to_string(entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_content;
    use tempfile::TempDir;

    #[test]
    fn test_missing_index_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let index = StagingIndex::new(temp_dir.path().join("index"));

        assert!(index.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let index = StagingIndex::new(temp_dir.path().join("index"));

        index
            .append(StagingEntry::new("a.txt", hash_content(b"1")))
            .unwrap();
        index
            .append(StagingEntry::new("b.txt", hash_content(b"2")))
            .unwrap();
        index
            .append(StagingEntry::new("a.txt", hash_content(b"3")))
            .unwrap();

        let entries = index.load().unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt", "a.txt"]);
        assert_eq!(entries[2].hash, hash_content(b"3"));
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("index");
        let index = StagingIndex::new(&index_path);

        index
            .append(StagingEntry::new("a.txt", hash_content(b"1")))
            .unwrap();
        index.clear().unwrap();

        assert!(index.load().unwrap().is_empty());
        assert_eq!(fs::read_to_string(index_path).unwrap(), "[]");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = StagingEntry::new("dir/a.txt", hash_content(b"a"));
        let json: serde_json::Value = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["path"], "dir/a.txt");
        assert_eq!(json["hash"], hash_content(b"a").as_str());
    }
}
