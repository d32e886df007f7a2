//! Error types shared by the author collaborators.

use thiserror::Error;

/// Failure reported by an author data-access collaborator.
///
/// Every variant is treated the same way by the request handler: logged once
/// and answered with a generic 500.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing document could not be read.
    #[error("failed to read author data: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document is not valid JSON.
    #[error("invalid JSON author data: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing document is not valid TOML.
    #[error("invalid TOML author data: {0}")]
    Toml(#[from] toml::de::Error),

    /// The store is reachable but refused or failed the lookup.
    #[error("author store unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
