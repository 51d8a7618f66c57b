use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Invalid item ID: {0}")]
    InvalidItemId(String),

    #[error("Invalid blob key: {0}")]
    InvalidBlobKey(String),

    #[error("Image could not be decoded: {0}")]
    ImageDecode(String),
}
