use thiserror::Error;

use crate::domain::models::CafeId;
use crate::repositories::RepositoryError;

/// Errors produced while resolving a request credential into a member.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors that can occur during bookmark operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("cafe not found: {0}")]
    CafeNotFound(CafeId),
    #[error("invalid cafe id: {0}")]
    InvalidCafeId(CafeId),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors that can occur during profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to change profile: {0}")]
    UpdateFailed(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors surfaced by the object store seam.
#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("object store operation failed: {0}")]
    Storage(String),
}
