use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hash::{hash_content, ObjectId};

/// Append-only, content-addressed object storage.
///
/// Every object lives in a single file named by its id directly under the
/// objects directory. Objects are written to a temporary file and renamed into
/// place, so an object file either holds the full content or does not exist.
pub struct ObjectStore {
    dir: PathBuf,
}

impl ObjectStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `content` and returns its id. Storing the same bytes again
    /// replaces the file with identical content, which also repairs an object
    /// file left short by an earlier failed write.
    pub fn put(&self, content: &[u8]) -> Result<ObjectId> {
        let id = hash_content(content);
        let path = self.object_path(&id);

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(content)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| e.error)?;

        debug!("Stored object {} ({} bytes)", id.short(), content.len());
        Ok(id)
    }

    pub fn get(&self, id: &ObjectId) -> Result<Vec<u8>> {
        fs::read(self.object_path(id)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ObjectNotFound(id.clone()),
            _ => Error::Io(e),
        })
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.object_path(id).is_file()
    }

    fn object_path(&self, id: &ObjectId) -> PathBuf {
        self.dir.join(id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, ObjectStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ObjectStore::new(temp_dir.path());
        (temp_dir, store)
    }

    #[test]
    fn test_put_and_get() {
        let (_dir, store) = store();

        let id = store.put(b"Hello, World!").unwrap();

        assert!(store.contains(&id));
        assert_eq!(store.get(&id).unwrap(), b"Hello, World!");
        assert_eq!(id, hash_content(b"Hello, World!"));
    }

    #[test]
    fn test_put_is_idempotent() {
        let (dir, store) = store();

        let first = store.put(b"same").unwrap();
        let second = store.put(b"same").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_put_repairs_truncated_object() {
        let (dir, store) = store();
        let content = b"line one\nline two\n";
        let id = hash_content(content);
        fs::write(dir.path().join(id.as_str()), b"line o").unwrap();

        assert_eq!(store.put(content).unwrap(), id);

        assert_eq!(store.get(&id).unwrap(), content);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_object_file_named_by_id() {
        let (dir, store) = store();

        let id = store.put(b"named").unwrap();

        assert!(dir.path().join(id.as_str()).is_file());
    }

    #[test]
    fn test_get_missing_object() {
        let (_dir, store) = store();
        let id = hash_content(b"never stored");

        match store.get(&id) {
            Err(Error::ObjectNotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected ObjectNotFound, got {:?}", other),
        }
        assert!(!store.contains(&id));
    }
}
