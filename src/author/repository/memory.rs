use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{apply_sort, AuthorRepository};
use crate::author::model::{Author, SortConfig};
use crate::error::RepositoryResult;

/// In-memory author store.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    authors: Arc<RwLock<Vec<Author>>>,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    /// Creates a store holding `authors` in the given natural order.
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(authors)),
        }
    }

    /// Store used when no data file is configured.
    pub fn builtin() -> Self {
        Self::with_data(builtin_authors())
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn get_all(&self, sort: Option<SortConfig>) -> RepositoryResult<Vec<Author>> {
        let mut authors = self.authors.read().await.clone();
        apply_sort(&mut authors, sort)?;
        Ok(authors)
    }
}

fn builtin_authors() -> Vec<Author> {
    [
        ("Tagore, Robi", "1900 - 2000"),
        ("Asimov, Isaac", "1920 - 1992"),
        ("Bova, Ben", "1932 - "),
        ("Jones, Jim", "1971 - "),
        ("Shelley, Mary", "1797 - 1851"),
        ("Shakespeare, William", "1564 - 1616"),
        ("Orwell, George", "1903 - 1950"),
    ]
    .into_iter()
    .map(|(name, lifespan)| Author::new(name, lifespan))
    .collect()
}
