//! Optional `moviedb.toml` configuration

use crate::storage::StoreOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MoviedbConfig {
    pub database: Option<String>,
    pub enforce_foreign_keys: Option<bool>,
}

impl MoviedbConfig {
    /// Configured database path, or `movies.sqlite3`
    pub fn database_path(&self) -> PathBuf {
        self.database
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            enforce_foreign_keys: self.enforce_foreign_keys.unwrap_or(false),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("moviedb.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("movies.sqlite3")
}

/// Read `moviedb.toml` (or `path`). A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Option<MoviedbConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.is_file() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map(Some)
        .map_err(|err| Error::Config(format!("invalid moviedb config {}: {err}", path.display())))
}

/// Write the config, refusing to replace an existing file unless `force`
pub fn write_config(path: &Path, config: &MoviedbConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "moviedb config already exists at {} (run `moviedb init --force` to replace it)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|err| Error::Config(format!("cannot serialize moviedb config: {err}")))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Create the directory that will hold the database file
pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MoviedbConfig::default();
        assert_eq!(config.database_path(), PathBuf::from("movies.sqlite3"));
        assert!(!config.store_options().enforce_foreign_keys);
    }

    #[test]
    fn test_write_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moviedb.toml");
        let config = MoviedbConfig {
            database: Some("catalog/films.sqlite3".to_string()),
            enforce_foreign_keys: Some(true),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.store_options().enforce_foreign_keys);
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moviedb.toml");
        let config = MoviedbConfig::default();

        write_config(&path, &config, false).unwrap();
        let err = write_config(&path, &config, false).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("moviedb init --force")));
        write_config(&path, &config, true).unwrap();
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).unwrap().is_none());
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moviedb.toml");
        std::fs::write(&path, "enforce_foreign_keys = \"maybe\"").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("invalid moviedb config")));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("movies.sqlite3");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
    }
}
