use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use super::{apply_sort, AuthorRepository};
use crate::author::model::{Author, SortConfig};
use crate::error::{RepositoryError, RepositoryResult};

/// Author store backed by a JSON or TOML document on disk.
///
/// The file is re-read on every lookup, so edits show up without a restart.
/// Accepted layouts:
///
/// - a top-level array of `{name, lifespan}` records (JSON only)
/// - a mapping with an `authors` array (`[[authors]]` in TOML)
///
/// Any other well-formed document resolves to no authors.
#[derive(Debug, Clone)]
pub struct FileAuthorRepository {
    path: PathBuf,
}

impl FileAuthorRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_toml(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }
}

#[async_trait]
impl AuthorRepository for FileAuthorRepository {
    async fn get_all(&self, sort: Option<SortConfig>) -> RepositoryResult<Vec<Author>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            // Usually a file caught mid-rewrite
            return Err(RepositoryError::Unavailable(format!(
                "{} is empty",
                self.path.display()
            )));
        }
        let document: Value = if self.is_toml() {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        let mut authors = extract_authors(document)?;
        apply_sort(&mut authors, sort)?;
        Ok(authors)
    }
}

/// Pull author records out of a parsed document.
fn extract_authors(document: Value) -> RepositoryResult<Vec<Author>> {
    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("authors") {
            Some(Value::Array(entries)) => entries,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    entries
        .into_iter()
        .map(|entry| serde_json::from_value::<Author>(entry).map_err(RepositoryError::from))
        .collect()
}
