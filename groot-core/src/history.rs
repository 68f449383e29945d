use std::iter::FusedIterator;
use tracing::warn;

use crate::error::Result;
use crate::hash::ObjectId;
use crate::models::Commit;
use crate::repository::Repository;

/// Walks the commit chain from a starting commit back to the root.
///
/// A parent that cannot be loaded is yielded as an error, after which the
/// walk ends.
pub struct History<'a> {
    repo: &'a Repository,
    next: Option<ObjectId>,
}

impl<'a> History<'a> {
    pub fn new(repo: &'a Repository, start: Option<ObjectId>) -> Self {
        Self { repo, next: start }
    }
}

impl Iterator for History<'_> {
    type Item = Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;

        match self.repo.get_commit(&id) {
            Ok(commit) => {
                self.next = commit.parent.clone();
                Some(Ok((id, commit)))
            }
            Err(e) => {
                warn!("Commit chain broken at {}: {}", id, e);
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for History<'_> {}
