// Retrieval outcome classification

use super::model::Author;
use crate::error::{RepositoryError, RepositoryResult};

/// Result of one author lookup, as seen by the request handler.
#[derive(Debug)]
pub enum AuthorsOutcome {
    /// One or more authors, in collaborator order.
    Populated(Vec<Author>),
    /// The lookup succeeded but produced no authors.
    Empty,
    /// The lookup itself failed.
    Failed(RepositoryError),
}

/// Map a collaborator result onto exactly one of the three outcomes.
pub fn classify(result: RepositoryResult<Vec<Author>>) -> AuthorsOutcome {
    match result {
        Ok(authors) if authors.is_empty() => AuthorsOutcome::Empty,
        Ok(authors) => AuthorsOutcome::Populated(authors),
        Err(err) => AuthorsOutcome::Failed(err),
    }
}
