use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Name of an object inside the blob container
///
/// Generated keys are a random UUID followed by the extension of the
/// uploaded file, so two uploads of `cat.png` never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobKey(String);

impl BlobKey {
    /// Generate a fresh, collision-resistant key for an uploaded file.
    pub fn generate(original_filename: &str) -> Self {
        Self(format!(
            "{}{}",
            Uuid::new_v4(),
            Self::extension_of(original_filename)
        ))
    }

    /// Extension of `file_name`, including the leading dot.
    ///
    /// Only the part after the last dot counts: `a.tar.gz` yields `.gz`.
    /// A name without any dot has no extension. Directory parts of a
    /// client-supplied path are ignored, so the result never holds a separator.
    pub fn extension_of(file_name: &str) -> &str {
        let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
        match base.rfind('.') {
            Some(idx) => &base[idx..],
            None => "",
        }
    }

    /// Accept a key supplied by a client (e.g. a path segment)
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidBlobKey(
                "Blob key cannot be empty".to_string(),
            ));
        }

        if value == "." || value == ".." || value.contains('/') || value.contains('\\') {
            return Err(DomainError::InvalidBlobKey(format!(
                "Blob key must be a plain object name: {}",
                value
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BlobKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const UUID_LEN: usize = 36;

    #[test]
    fn test_generate_keeps_simple_extension() {
        let key = BlobKey::generate("cat.png");
        assert!(key.as_str().ends_with(".png"));
        assert_eq!(key.as_str().len(), UUID_LEN + ".png".len());
        assert!(Uuid::parse_str(&key.as_str()[..UUID_LEN]).is_ok());
    }

    #[test]
    fn test_generate_without_extension_has_no_suffix() {
        let key = BlobKey::generate("README");
        assert_eq!(key.as_str().len(), UUID_LEN);
        assert!(Uuid::parse_str(key.as_str()).is_ok());
    }

    #[test]
    fn test_generate_uses_last_extension_only() {
        let key = BlobKey::generate("a.tar.gz");
        assert!(key.as_str().ends_with(".gz"));
        assert!(!key.as_str().contains(".tar"));
        assert_eq!(&key.as_str()[UUID_LEN..], ".gz");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(BlobKey::extension_of("photo.jpeg"), ".jpeg");
        assert_eq!(BlobKey::extension_of("a.tar.gz"), ".gz");
        assert_eq!(BlobKey::extension_of("noext"), "");
        assert_eq!(BlobKey::extension_of(""), "");
        assert_eq!(BlobKey::extension_of("trailing."), ".");
        assert_eq!(BlobKey::extension_of(".hidden"), ".hidden");
    }

    #[test]
    fn test_extension_ignores_directories() {
        assert_eq!(BlobKey::extension_of("v1.2/pic"), "");
        assert_eq!(BlobKey::extension_of("C:\\photos.old\\cat.png"), ".png");
        assert_eq!(BlobKey::extension_of("dir/sub.d/a.tar.gz"), ".gz");

        let key = BlobKey::generate("v1.2/pic");
        assert_eq!(key.as_str().len(), UUID_LEN);
        assert!(BlobKey::parse(key.as_str()).is_ok());
    }

    #[test]
    fn test_generate_is_unique() {
        let keys: HashSet<_> = (0..1000).map(|_| BlobKey::generate("x.png")).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_parse_valid() {
        let key = BlobKey::parse("2f1c7a9e-0000-4000-8000-000000000000.png").unwrap();
        assert_eq!(key.as_str(), "2f1c7a9e-0000-4000-8000-000000000000.png");
    }

    #[test]
    fn test_parse_invalid() {
        for invalid in ["", "   ", ".", "..", "a/b.png", "..\\evil"] {
            assert!(
                BlobKey::parse(invalid).is_err(),
                "Should reject blob key: {:?}",
                invalid
            );
        }
    }
}
