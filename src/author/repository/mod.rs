//! Author data-access collaborators
//!
//! The request handler only depends on the [`AuthorRepository`] trait; the
//! concrete stores here exist so the service can run on its own.

mod file;
mod memory;

pub use file::FileAuthorRepository;
pub use memory::MemoryAuthorRepository;

use async_trait::async_trait;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use std::fmt::Debug;
use std::sync::Arc;

use super::model::{Author, SortConfig};
use crate::error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait AuthorRepository: Debug + Send + Sync {
    /// Fetch every author.
    ///
    /// When `sort.family_name` is set the result is ordered by the
    /// [`root_collator`] on the full `name`; otherwise the store's natural
    /// order is returned.
    async fn get_all(&self, sort: Option<SortConfig>) -> RepositoryResult<Vec<Author>>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository>;

/// CLDR root-locale collator at default (tertiary) strength.
///
/// Accented letters sort with their base letter, punctuation sorts before
/// digits and letters, and case only breaks otherwise equal names.
pub fn root_collator() -> RepositoryResult<CollatorBorrowed<'static>> {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .map_err(|e| RepositoryError::Unavailable(format!("collation data: {e}")))
}

/// Apply a sort directive in place. Stable, so ties keep insertion order.
pub fn apply_sort(authors: &mut [Author], sort: Option<SortConfig>) -> RepositoryResult<()> {
    if sort.and_then(|s| s.family_name).is_some() {
        let collator = root_collator()?;
        authors.sort_by(|a, b| collator.compare(&a.name, &b.name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn sorted_names(names: &[&str]) -> Vec<String> {
        let mut authors: Vec<_> = names.iter().map(|n| Author::new(*n, "")).collect();
        apply_sort(&mut authors, Some(SortConfig::by_family_name())).unwrap();
        authors.into_iter().map(|a| a.name).collect()
    }

    #[test]
    fn test_collator_ignores_case_first() {
        let collator = root_collator().unwrap();
        assert_eq!(collator.compare("asimov", "Bova"), Ordering::Less);
        assert_eq!(collator.compare("Zed", "adams"), Ordering::Greater);
        assert_eq!(
            collator.compare("Shelley, Mary", "Shakespeare, William"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_collator_lowercase_before_uppercase() {
        let collator = root_collator().unwrap();
        assert_eq!(collator.compare("a", "A"), Ordering::Less);
        assert_eq!(collator.compare("Bova", "bova"), Ordering::Greater);
        assert_eq!(collator.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        assert_eq!(
            sorted_names(&["Zola, Emile", "Éluard, Paul", "Fabre, Jean"]),
            ["Éluard, Paul", "Fabre, Jean", "Zola, Emile"]
        );
        assert_eq!(
            sorted_names(&["Oz, Amos", "Österberg, Lena", "Orwell, George"]),
            ["Orwell, George", "Österberg, Lena", "Oz, Amos"]
        );
    }

    #[test]
    fn test_hyphen_sorts_before_comma() {
        let collator = root_collator().unwrap();
        assert_eq!(
            collator.compare("Smith-Jones, Ann", "Smith, Bob"),
            Ordering::Less
        );
        assert_eq!(
            sorted_names(&["Smith, Bob", "Smith-Jones, Ann", "Smithers, Carl"]),
            ["Smith-Jones, Ann", "Smith, Bob", "Smithers, Carl"]
        );
    }

    #[test]
    fn test_apply_sort_without_directive_keeps_order() {
        let mut authors = vec![
            Author::new("Tagore, Robi", ""),
            Author::new("Asimov, Isaac", ""),
        ];
        apply_sort(&mut authors, None).unwrap();
        assert_eq!(authors[0].name, "Tagore, Robi");

        apply_sort(&mut authors, Some(SortConfig::default())).unwrap();
        assert_eq!(authors[0].name, "Tagore, Robi");
    }

    #[test]
    fn test_apply_sort_by_family_name() {
        assert_eq!(
            sorted_names(&["Tagore, Robi", "asimov, Isaac", "Bova, Ben"]),
            ["asimov, Isaac", "Bova, Ben", "Tagore, Robi"]
        );
    }

    #[test]
    fn test_apply_sort_is_stable_for_equal_names() {
        let mut authors = vec![
            Author::new("Bova, Ben", "first"),
            Author::new("Asimov, Isaac", ""),
            Author::new("Bova, Ben", "second"),
        ];
        apply_sort(&mut authors, Some(SortConfig::by_family_name())).unwrap();
        assert_eq!(authors[1].lifespan, "first");
        assert_eq!(authors[2].lifespan, "second");
    }
}
