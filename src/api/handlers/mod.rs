pub mod delete;
pub mod health;
pub mod items;
pub mod tags;
pub mod upload;


pub use delete::delete_with_blob_handler;
pub use health::{health_handler, readiness_handler};
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use tags::{find_by_tag_handler, list_tags_handler};
pub use upload::upload_handler;
