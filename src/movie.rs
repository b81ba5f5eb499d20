//! Movie records

use crate::director::DirectorId;
use serde::{Deserialize, Serialize};

/// Store-assigned movie identifier
pub type MovieId = i64;

/// Declared column bound for `movies.title`. SQLite does not enforce it.
pub const TITLE_MAX_LEN: usize = 55;

/// A film as persisted in the `movies` table.
///
/// `director_id` is a plain reference. Nothing checks that the director
/// exists unless foreign-key enforcement is switched on for the store.
///
/// `title` and `genre` columns are nullable. A NULL reads back as `""`, the
/// same as an empty string; rows written through this crate always carry
/// both values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub director_id: Option<DirectorId>,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        director_id: Option<DirectorId>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            director_id,
        }
    }

    pub fn title_within_bound(&self) -> bool {
        self.title.chars().count() <= TITLE_MAX_LEN
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "title:{} genre:{}", self.title, self.genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_listing_format() {
        let movie = Movie::new(1, "Pengle part 2", "Luo Comedy", Some(1));
        assert_eq!(movie.to_string(), "title:Pengle part 2 genre:Luo Comedy");
    }

    #[test]
    fn test_title_bound() {
        assert!(Movie::new(1, "x".repeat(TITLE_MAX_LEN), "Drama", None).title_within_bound());
        assert!(!Movie::new(1, "x".repeat(TITLE_MAX_LEN + 1), "Drama", None).title_within_bound());
    }
}
