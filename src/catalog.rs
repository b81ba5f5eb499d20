//! Catalog data access functions
//!
//! The operations the CLI (or any other caller) uses:
//! - Create a director
//! - Create a movie
//! - List all movies
//! - Search movies (not implemented, always `None`)
//!
//! Every call goes through the borrowed [`CatalogStore`]. Errors from the
//! store are returned unchanged; nothing here retries or cleans up.

use crate::Result;
use crate::director::{Director, DirectorId};
use crate::movie::Movie;
use crate::storage::CatalogStore;

/// Data access layer over a shared store handle
pub struct Catalog<'a> {
    store: &'a CatalogStore,
}

impl<'a> Catalog<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Add a director and commit immediately.
    ///
    /// The name is stored as given, with no length or content checks.
    pub fn create_director(&self, name: &str) -> Result<Director> {
        let director = self.store.insert_director(name)?;
        tracing::debug!(id = director.id, "Inserted director {}", director.name);
        Ok(director)
    }

    /// Add a movie and commit immediately.
    ///
    /// `director_id` is not checked against existing directors.
    pub fn create_movie(&self, title: &str, genre: &str, director_id: DirectorId) -> Result<Movie> {
        let movie = self.store.insert_movie(title, genre, Some(director_id))?;
        tracing::debug!(id = movie.id, director_id, "Inserted movie {}", movie.title);
        Ok(movie)
    }

    /// Every movie in the store, in storage order.
    pub fn list_all_movies(&self) -> Result<Vec<Movie>> {
        let movies = self.store.list_movies()?;
        tracing::debug!("Listed {} movies", movies.len());
        Ok(movies)
    }

    /// Movie search is an open extension point: there is no matching rule yet,
    /// so this returns `None` for every input and never fails.
    pub fn search_movie(&self, name: &str) -> Option<Movie> {
        tracing::debug!("search_movie({:?}) is not implemented", name);
        None
    }

    /// All directors, in storage order
    pub fn list_directors(&self) -> Result<Vec<Director>> {
        self.store.list_directors()
    }

    pub fn director(&self, id: DirectorId) -> Result<Option<Director>> {
        self.store.get_director(id)
    }

    /// Director-side traversal of the director/movie link
    pub fn movies_by_director(&self, id: DirectorId) -> Result<Vec<Movie>> {
        self.store.movies_by_director(id)
    }
}
