//! # Image Catalog - Image metadata over a blob store
//!
//! A small REST service that keeps image metadata records in PostgreSQL
//! and the image bytes in a blob store, built on Clean Architecture
//! principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core types (items, blob keys, image dimensions, domain errors)
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: Adapters for blob storage and persistence
//! - **API**: HTTP handlers and middleware
//!
//! ## Key Features
//!
//! - Multipart image upload: blob written first, then the metadata row
//! - Combined delete: blob removed first, then the row
//! - Tag queries, case-insensitive
//! - Local filesystem or Azure Blob Storage backends
//!
//! There is no transaction spanning the two stores. A failure after the
//! blob write leaves an orphaned blob, and deleting a blob out of band
//! leaves a row with a stale url.
//!
//! ## Example Usage
//!
//! ```no_run
//! use image_catalog::{application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::from_env())
//!     .with_database()
//!     .await?
//!     .with_infrastructure()
//!     .await?
//!     .build()?;
//! let app = image_catalog::api::create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
