//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::director::{Director, DirectorId};
use crate::movie::Movie;
use super::schema;

const MOVIE_COLUMNS: &str = "id, title, genre, director_id";

/// Options applied when a store is opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Turn on `PRAGMA foreign_keys` so dangling `director_id`s are rejected
    pub enforce_foreign_keys: bool,
}

/// SQLite-backed storage for the movie catalog.
///
/// One handle is opened at startup and shared by every data access call.
/// There is no explicit close; the connection is released on drop.
pub struct CatalogStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl CatalogStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, &StoreOptions::default())
    }

    /// Open a database file with explicit options
    pub fn open_with(path: &Path, options: &StoreOptions) -> Result<Self> {
        tracing::debug!("Opening catalog store at {}", path.display());
        let conn = Connection::open(path)?;
        let store = Self { conn, path: Some(path.to_path_buf()) };
        store.initialize(options)?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with(&StoreOptions::default())
    }

    pub fn open_in_memory_with(options: &StoreOptions) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, path: None };
        store.initialize(options)?;
        Ok(store)
    }

    /// Apply connection pragmas and create any missing tables
    fn initialize(&self, options: &StoreOptions) -> Result<()> {
        let pragma = if options.enforce_foreign_keys {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        self.conn.execute_batch(pragma)?;

        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether SQLite is currently checking `REFERENCES` constraints
    pub fn foreign_keys_enforced(&self) -> Result<bool> {
        let enabled: i64 = self
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
        Ok(enabled != 0)
    }

    // ========== Director Operations ==========

    /// Insert a director and return it with its assigned id.
    ///
    /// Runs in autocommit mode, so the row is durable on return.
    pub fn insert_director(&self, name: &str) -> Result<Director> {
        self.conn.execute(
            "INSERT INTO directors (name) VALUES (?1)",
            params![name],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Director::new(id, name))
    }

    /// Get a director by id
    pub fn get_director(&self, id: DirectorId) -> Result<Option<Director>> {
        self.conn
            .query_row(
                "SELECT id, name FROM directors WHERE id = ?1",
                [id],
                |row| self.row_to_director(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// All directors, in storage order
    pub fn list_directors(&self) -> Result<Vec<Director>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM directors")?;

        let directors = stmt
            .query_map([], |row| self.row_to_director(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(directors)
    }

    pub fn count_directors(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM directors", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_director(&self, row: &rusqlite::Row) -> rusqlite::Result<Director> {
        // name is nullable in the schema; an explicit NULL reads back empty
        let name: Option<String> = row.get(1)?;
        Ok(Director::new(row.get(0)?, name.unwrap_or_default()))
    }

    // ========== Movie Operations ==========

    /// Insert a movie and return it with its assigned id.
    ///
    /// `director_id` is not looked up; whether a dangling id is accepted
    /// depends on [`StoreOptions::enforce_foreign_keys`].
    pub fn insert_movie(
        &self,
        title: &str,
        genre: &str,
        director_id: Option<DirectorId>,
    ) -> Result<Movie> {
        self.conn.execute(
            "INSERT INTO movies (title, genre, director_id) VALUES (?1, ?2, ?3)",
            params![title, genre, director_id],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Movie::new(id, title, genre, director_id))
    }

    /// All movies. No ORDER BY: the order is whatever SQLite yields.
    pub fn list_movies(&self) -> Result<Vec<Movie>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movies"))?;

        let movies = stmt
            .query_map([], |row| self.row_to_movie(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(movies)
    }

    /// Movies referencing the given director, in insertion order
    pub fn movies_by_director(&self, director_id: DirectorId) -> Result<Vec<Movie>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE director_id = ?1 ORDER BY id"
        ))?;

        let movies = stmt
            .query_map([director_id], |row| self.row_to_movie(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(movies)
    }

    pub fn count_movies(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Movies whose `director_id` points at no existing director
    pub fn count_dangling_movies(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            r#"
            SELECT COUNT(*) FROM movies m
            WHERE m.director_id IS NOT NULL
              AND NOT EXISTS (SELECT 1 FROM directors d WHERE d.id = m.director_id)
            "#,
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn row_to_movie(&self, row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        // NULL title/genre read back empty, same as directors.name
        let title: Option<String> = row.get(1)?;
        let genre: Option<String> = row.get(2)?;
        Ok(Movie::new(
            row.get(0)?,
            title.unwrap_or_default(),
            genre.unwrap_or_default(),
            row.get(3)?,
        ))
    }

    // ========== Utility Operations ==========

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            directors: self.count_directors()?,
            movies: self.count_movies()?,
            dangling_movies: self.count_dangling_movies()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub directors: usize,
    pub movies: usize,
    pub dangling_movies: usize,
}
