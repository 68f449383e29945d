use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Length of a hex-encoded SHA-256 digest.
pub const OBJECT_ID_LEN: usize = 64;

/// Name of a stored object: the lowercase hex SHA-256 of its bytes.
///
/// Blobs and commit records share one namespace, so an id alone does not say
/// which kind of object it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != OBJECT_ID_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidObjectId(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

pub fn hash_content(content: &[u8]) -> ObjectId {
    let mut hasher = Sha256::new();
    hasher.update(content);
    ObjectId(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let a = hash_content(b"hello");
        let b = hash_content(b"hello");

        assert_eq!(a, b);
        assert_eq!(
            a.as_str(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_hash_differs_for_different_content() {
        assert_ne!(hash_content(b"hello"), hash_content(b"hello\n"));
        assert_eq!(hash_content(b"").as_str().len(), OBJECT_ID_LEN);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id = hash_content(b"abc");
        let upper = id.as_str().to_ascii_uppercase();

        assert_eq!(ObjectId::parse(&upper).unwrap(), id);
        assert_eq!(id.short().len(), 8);
    }

    #[test]
    fn test_parse_rejects_bad_ids() {
        assert!(ObjectId::parse("").is_err());
        assert!(ObjectId::parse("abc123").is_err());
        assert!(ObjectId::parse(&"../".repeat(22)[..64]).is_err());
        assert!(ObjectId::parse(&"g".repeat(64)).is_err());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = hash_content(b"x");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ObjectId>("\"not-a-digest\"").is_err());
    }
}
