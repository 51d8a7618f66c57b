use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ImageDimensions, ItemId};

/// Display format of the `uploaded` column (local server time)
pub const UPLOADED_FORMAT: &str = "%m/%d/%Y %-I:%M:%S %p";

/// Image metadata record as persisted
///
/// The row and the blob it points at are independent resources: nothing
/// keeps `url` valid after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: Option<String>,
    tags: Option<String>,
    url: String,
    width: String,
    height: String,
    uploaded: String,
}

impl Item {
    /// Reconstruct from storage (e.g., database) or a full-record replace
    pub fn reconstruct(
        id: ItemId,
        title: Option<String>,
        tags: Option<String>,
        url: String,
        width: String,
        height: String,
        uploaded: String,
    ) -> Self {
        Self {
            id,
            title,
            tags,
            url,
            width,
            height,
            uploaded,
        }
    }

    // Getters
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn uploaded(&self) -> &str {
        &self.uploaded
    }

    /// Case-insensitive exact match on the tag value.
    /// An empty query matches every item.
    pub fn matches_tag(&self, tag: &str) -> bool {
        if tag.is_empty() {
            return true;
        }
        self.tags
            .as_deref()
            .is_some_and(|t| t.to_lowercase() == tag.to_lowercase())
    }

    /// Last path segment of `url`, which is the blob key for uploaded items
    pub fn blob_key_hint(&self) -> Option<&str> {
        self.url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }
}

/// Item that has not been assigned an ID yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: Option<String>,
    pub tags: Option<String>,
    pub url: String,
    pub width: String,
    pub height: String,
    pub uploaded: String,
}

impl NewItem {
    /// Metadata for a freshly uploaded blob, stamped with the current local time
    pub fn from_upload(
        title: Option<String>,
        tags: Option<String>,
        url: String,
        dimensions: ImageDimensions,
    ) -> Self {
        Self {
            title,
            tags,
            url,
            width: dimensions.width_string(),
            height: dimensions.height_string(),
            uploaded: Local::now().format(UPLOADED_FORMAT).to_string(),
        }
    }

    /// Attach the storage-assigned ID
    pub fn into_item(self, id: ItemId) -> Item {
        Item::reconstruct(
            id,
            self.title,
            self.tags,
            self.url,
            self.width,
            self.height,
            self.uploaded,
        )
    }
}
