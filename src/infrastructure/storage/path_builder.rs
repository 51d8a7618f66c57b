use std::path::{Path, PathBuf};

use crate::domain::value_objects::BlobKey;

/// Utility for generating storage paths
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding in-flight writes: /root/temp
    pub fn temp_dir(&self) -> PathBuf {
        self.root.join("temp")
    }

    /// Generate temp upload path: /root/temp/{uuid}
    pub fn temp_path(&self, id: uuid::Uuid) -> PathBuf {
        self.temp_dir().join(id.to_string())
    }

    /// Directory holding committed objects: /root/objects
    pub fn objects_dir(&self) -> PathBuf {
        self.root.join("objects")
    }

    /// Generate final object path: /root/objects/{key}
    pub fn object_path(&self, key: &BlobKey) -> PathBuf {
        self.objects_dir().join(key.as_str())
    }
}
