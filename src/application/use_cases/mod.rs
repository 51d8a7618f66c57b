use std::time::Duration;

mod delete_item_with_blob;
mod items;
mod tags;
mod upload_item;

pub use delete_item_with_blob::{DeleteError, DeleteItemWithBlobUseCase};
pub use items::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ListItemsUseCase, UpdateItemUseCase,
};
pub use tags::{FindItemsByTagUseCase, ListTagsUseCase};
pub use upload_item::{UploadError, UploadItemUseCase};

/// Upper bound for a single blob store or database call inside a workflow
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(30);
