//! Database schema definitions

/// SQL to create the directors table
pub const CREATE_DIRECTORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS directors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(32)
)
"#;

/// SQL to create the movies table
///
/// The REFERENCES clause is only checked when `PRAGMA foreign_keys` is on.
pub const CREATE_MOVIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(55),
    genre VARCHAR,
    director_id INTEGER REFERENCES directors(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_movies_director ON movies(director_id)",
];

/// Names of the tables the store owns
pub const TABLES: &[&str] = &["directors", "movies"];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_DIRECTORS_TABLE, CREATE_MOVIES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_created_before_indexes() {
        let stmts = all_schema_statements();
        assert_eq!(stmts.len(), 3);
        assert!(stmts[0].contains("directors"));
        assert!(stmts[1].contains("movies"));
        assert!(stmts[2].starts_with("CREATE INDEX"));
    }
}
