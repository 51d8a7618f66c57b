//! Common error type for the plain item use cases
//!
//! Upload and combined delete have their own error enums next to the use
//! case, since their failure kinds depend on which store failed.

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

/// Error type for list/get/create/update/delete and tag queries
#[derive(Debug, Error)]
pub enum ItemUseCaseError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Concurrent modification: {0}")]
    Conflict(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
