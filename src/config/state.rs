// Application state module
// Holds the loaded configuration and the author handler shared by connections

use std::sync::Arc;

use super::types::Config;
use crate::author::{
    AuthorRepositoryArc, AuthorsHandler, FileAuthorRepository, MemoryAuthorRepository,
};

/// Application state
pub struct AppState {
    pub config: Config,
    pub authors: AuthorsHandler,
    /// `logging.access_log`, fixed for the life of the process
    pub access_log: bool,
}

impl AppState {
    /// Build state with the collaborator selected by `catalog.data_file`
    pub fn new(config: &Config) -> Self {
        let repository: AuthorRepositoryArc = match config.catalog.data_file.as_deref() {
            Some(path) => Arc::new(FileAuthorRepository::new(path)),
            None => Arc::new(MemoryAuthorRepository::builtin()),
        };
        Self::with_repository(config, repository)
    }

    /// Build state around an explicit collaborator
    pub fn with_repository(config: &Config, repository: AuthorRepositoryArc) -> Self {
        Self::with_handler(
            config,
            AuthorsHandler::new(repository, config.catalog.sort_by_family_name),
        )
    }

    pub fn with_handler(config: &Config, authors: AuthorsHandler) -> Self {
        Self {
            config: config.clone(),
            authors,
            access_log: config.logging.access_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_flag_follows_config() {
        let mut cfg = Config::load_from("/nonexistent/author_catalog/config").unwrap();
        assert!(AppState::new(&cfg).access_log);

        cfg.logging.access_log = false;
        assert!(!AppState::new(&cfg).access_log);
    }
}
