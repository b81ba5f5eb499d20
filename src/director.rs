//! Director records
//!
//! A director owns zero or more movies. The link is stored on the movie side
//! only (`movies.director_id`); walking from a director to its movies is a
//! query, see [`crate::CatalogStore::movies_by_director`].

use serde::{Deserialize, Serialize};

/// Store-assigned director identifier
pub type DirectorId = i64;

/// Declared column bound for `directors.name`. SQLite does not enforce it.
pub const NAME_MAX_LEN: usize = 32;

/// A film director as persisted in the `directors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    /// Unique, monotonically increasing, never reused
    pub id: DirectorId,
    /// Display name. The column is nullable; a NULL is read back as `""`,
    /// so a NULL and an empty name cannot be told apart. Rows written through
    /// this crate always carry a value.
    pub name: String,
}

impl Director {
    pub fn new(id: DirectorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether the name fits the declared column width
    pub fn name_within_bound(&self) -> bool {
        self.name.chars().count() <= NAME_MAX_LEN
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let director = Director::new(3, "Otoyo");
        assert_eq!(director.to_string(), "#3 Otoyo");
    }

    #[test]
    fn test_name_bound() {
        assert!(Director::new(1, "a".repeat(NAME_MAX_LEN)).name_within_bound());
        assert!(!Director::new(1, "a".repeat(NAME_MAX_LEN + 1)).name_within_bound());
    }
}
