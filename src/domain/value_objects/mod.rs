mod blob_key;
mod image_dimensions;
mod item_id;

pub use blob_key::BlobKey;
pub use image_dimensions::ImageDimensions;
pub use item_id::ItemId;
