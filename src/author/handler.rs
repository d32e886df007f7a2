//! `GET /authors` request handler
//!
//! Asks the injected collaborator for every author, classifies what comes
//! back and turns it into one of three responses:
//!
//! | Outcome   | Status | Body                     |
//! |-----------|--------|--------------------------|
//! | Populated | 200    | JSON `[{name, lifespan}]` |
//! | Empty     | 200    | `No authors found`       |
//! | Failed    | 500    | `No authors found`       |

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::fmt;
use std::sync::Arc;

use super::model::SortConfig;
use super::outcome::{classify, AuthorsOutcome};
use super::repository::AuthorRepositoryArc;
use crate::error::RepositoryError;
use crate::http;
use crate::logger;

/// Body shared by the empty and failure responses.
pub const NO_AUTHORS_MESSAGE: &str = "No authors found";

/// Destination for retrieval failures. Never visible to clients.
pub trait FailureSink: Send + Sync {
    fn report(&self, err: &RepositoryError);
}

/// Writes retrieval failures to the error log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorLogSink;

impl FailureSink for ErrorLogSink {
    fn report(&self, err: &RepositoryError) {
        logger::log_error(&format!("Failed to retrieve authors: {err}"));
    }
}

pub struct AuthorsHandler {
    repository: AuthorRepositoryArc,
    sort: Option<SortConfig>,
    failures: Arc<dyn FailureSink>,
}

impl fmt::Debug for AuthorsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorsHandler")
            .field("repository", &self.repository)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl AuthorsHandler {
    /// Handler that requests ascending family-name order when
    /// `sort_by_family_name` is set and natural order otherwise.
    pub fn new(repository: AuthorRepositoryArc, sort_by_family_name: bool) -> Self {
        Self {
            repository,
            sort: sort_by_family_name.then(SortConfig::by_family_name),
            failures: Arc::new(ErrorLogSink),
        }
    }

    #[must_use]
    pub fn with_failure_sink(mut self, failures: Arc<dyn FailureSink>) -> Self {
        self.failures = failures;
        self
    }

    /// Run one lookup against the collaborator and classify the result.
    pub async fn fetch(&self) -> AuthorsOutcome {
        classify(self.repository.get_all(self.sort).await)
    }

    /// Serve `GET /authors`.
    pub async fn list_authors(&self) -> Response<Full<Bytes>> {
        match self.fetch().await {
            AuthorsOutcome::Populated(authors) => {
                http::build_json_response(StatusCode::OK, &authors)
            }
            AuthorsOutcome::Empty => http::build_text_response(StatusCode::OK, NO_AUTHORS_MESSAGE),
            AuthorsOutcome::Failed(err) => {
                self.failures.report(&err);
                http::build_text_response(StatusCode::INTERNAL_SERVER_ERROR, NO_AUTHORS_MESSAGE)
            }
        }
    }
}
