//! Course source trait abstraction.

use async_trait::async_trait;
use coursegate_core::{Module, UnlockPolicyConfig, ValidationError};

/// Error type for source operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while loading course data.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Loaded data breaks the input contract
    #[error("Invalid course data: {0}")]
    Validation(#[from] ValidationError),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Where course structure and unlock settings come from.
///
/// Implementations must validate what they return: modules pass
/// [`coursegate_core::validate_modules`] and the policy passes
/// [`UnlockPolicyConfig::validate`].
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Load the ordered module list.
    async fn load_modules(&self) -> Result<Vec<Module>>;

    /// Load the unlock policy for the tenant.
    async fn load_policy(&self) -> Result<UnlockPolicyConfig>;
}
