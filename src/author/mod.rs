//! Author catalog module
//!
//! The `/authors` endpoint: data types, the data-access seam, outcome
//! classification and the request handler built on top of them.

pub mod handler;
pub mod model;
pub mod outcome;
pub mod repository;

pub use handler::AuthorsHandler;
pub use repository::{AuthorRepositoryArc, FileAuthorRepository, MemoryAuthorRepository};
