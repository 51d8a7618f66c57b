mod azure_blob_store;
mod local_filesystem_store;
mod path_builder;

pub use azure_blob_store::AzureBlobStore;
pub use local_filesystem_store::LocalFilesystemStore;
pub use path_builder::PathBuilder;
