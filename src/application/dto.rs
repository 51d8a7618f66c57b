use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    entities::{Item, NewItem},
    value_objects::ItemId,
};

/// DTO for item responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub title: Option<String>,
    pub tags: Option<String>,
    pub url: String,
    pub width: String,
    pub height: String,
    pub uploaded: String,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id().value(),
            title: item.title().map(|t| t.to_string()),
            tags: item.tags().map(|t| t.to_string()),
            url: item.url().to_string(),
            width: item.width().to_string(),
            height: item.height().to_string(),
            uploaded: item.uploaded().to_string(),
        }
    }
}

/// Full item record as sent by clients to the create and replace endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemPayload {
    /// Ignored on create; must match the path ID on replace
    pub id: Option<i32>,
    #[validate(length(max = 512))]
    pub title: Option<String>,
    #[validate(length(max = 256))]
    pub tags: Option<String>,
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub uploaded: String,
}

impl ItemPayload {
    pub fn into_new_item(self) -> NewItem {
        NewItem {
            title: self.title,
            tags: self.tags,
            url: self.url,
            width: self.width,
            height: self.height,
            uploaded: self.uploaded,
        }
    }

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

/// DTO for upload request metadata (the image bytes travel separately)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadItemRequest {
    pub title: Option<String>,
    pub tags: Option<String>,
    /// Original client-side file name; only its extension is kept
    pub file_name: String,
    /// Declared `Content-Type` of the HTTP request
    pub content_type: Option<String>,
}

/// Multipart form accepted by the upload endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadForm {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Tags")]
    pub tags: Option<String>,
    #[serde(rename = "Image")]
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// DTO for upload response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub item: ItemDto,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ItemPayload {
        ItemPayload {
            id: Some(3),
            title: Some("cat.png".to_string()),
            tags: Some("animals".to_string()),
            url: "https://example.test/blob.png".to_string(),
            width: "10".to_string(),
            height: "10".to_string(),
            uploaded: "10/16/2026 3:04:05 PM".to_string(),
        }
    }

    #[test]
    fn test_payload_validation_accepts_full_record() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_payload_validation_rejects_empty_url() {
        let payload = ItemPayload {
            url: String::new(),
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_payload_deserializes_with_missing_optional_fields() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"url":"https://example.test/a.png"}"#).unwrap();
        assert_eq!(payload.id, None);
        assert_eq!(payload.title, None);
        assert_eq!(payload.width, "");
    }

    #[test]
    fn test_item_dto_from_item() {
        let item = valid_payload().into_item(ItemId::new(3));
        let dto = ItemDto::from(item);
        assert_eq!(dto.id, 3);
        assert_eq!(dto.tags.as_deref(), Some("animals"));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["url"], "https://example.test/blob.png");
        assert_eq!(json["width"], "10");
    }
}
