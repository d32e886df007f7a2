// Author data types

use serde::{Deserialize, Serialize};

/// A display-ready author entry.
///
/// `name` follows the `"Family, Given"` convention; `lifespan` is free-form
/// text such as `"1920 - 1992"` or `"1932 - "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub lifespan: String,
}

impl Author {
    pub fn new(name: impl Into<String>, lifespan: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lifespan: lifespan.into(),
        }
    }
}

/// Sort direction sentinel. Only ascending order is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
}

/// Ordering directive handed to an author collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub family_name: Option<SortOrder>,
}

impl SortConfig {
    pub const fn by_family_name() -> Self {
        Self {
            family_name: Some(SortOrder::Ascending),
        }
    }
}
