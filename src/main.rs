//! moviedb CLI - Command-line interface for the movie catalog

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use moviedb::config::{self, MoviedbConfig};
use moviedb::{ui, Catalog, CatalogStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "moviedb")]
#[command(version)]
#[command(about = "Minimal movie catalog - directors and their movies in a local SQLite store")]
#[command(long_about = r#"
moviedb keeps directors and their movies in a local SQLite file.

Example usage:
  moviedb add-director "Otoyo"
  moviedb add-movie "Pengle part 2" "Luo Comedy" 1
  moviedb list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a director
    AddDirector {
        /// Director name
        name: String,
    },

    /// Add a movie
    AddMovie {
        /// Movie title
        title: String,

        /// Genre
        genre: String,

        /// Id of the movie's director (not checked unless foreign keys are enforced)
        director_id: i64,
    },

    /// List all movies
    List {
        /// Render as a table
        #[arg(short, long)]
        table: bool,
    },

    /// Search movies by name (not implemented yet)
    Search {
        /// Name to search for
        name: String,
    },

    /// List all directors
    Directors,

    /// Show a director and their movies
    Director {
        /// Director id
        id: i64,
    },

    /// Show catalog statistics
    Stats,

    /// Write a moviedb.toml config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Turn on foreign-key enforcement in the written config
        #[arg(long)]
        enforce_foreign_keys: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

/// Print a `{"ok": true, "command": ..., "data": ...}` envelope
pub fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode.is_human() {
        return Ok(());
    }
    let envelope = serde_json::json!({
        "ok": true,
        "command": command,
        "data": data,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        ui::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let config_path = cli.config;
    let database_override = cli.database;

    // Failing to open the store is fatal; the error surfaces through anyhow.
    let open_store = || -> anyhow::Result<CatalogStore> {
        let file_config = config::load_config(config_path.as_deref())?.unwrap_or_default();
        let database = database_override
            .clone()
            .unwrap_or_else(|| file_config.database_path());
        config::ensure_db_dir(&database)?;
        tracing::debug!("Using database {:?}", database);
        Ok(CatalogStore::open_with(&database, &file_config.store_options())?)
    };

    match cli.command {
        Commands::AddDirector { name } => {
            let store = open_store()?;
            commands::run_add_director(output_mode, &Catalog::new(&store), &name)?;
        }

        Commands::AddMovie { title, genre, director_id } => {
            let store = open_store()?;
            commands::run_add_movie(output_mode, &Catalog::new(&store), &title, &genre, director_id)?;
        }

        Commands::List { table } => {
            let store = open_store()?;
            commands::run_list(output_mode, &Catalog::new(&store), table)?;
        }

        Commands::Search { name } => {
            let store = open_store()?;
            commands::run_search(output_mode, &Catalog::new(&store), &name)?;
        }

        Commands::Directors => {
            let store = open_store()?;
            commands::run_directors(output_mode, &Catalog::new(&store))?;
        }

        Commands::Director { id } => {
            let store = open_store()?;
            commands::run_director(output_mode, &Catalog::new(&store), id)?;
        }

        Commands::Stats => {
            let store = open_store()?;
            commands::run_stats(output_mode, &store)?;
        }

        Commands::Init { force, enforce_foreign_keys } => {
            let path = config_path.clone().unwrap_or_else(config::default_config_path);
            let new_config = MoviedbConfig {
                database: Some(
                    database_override
                        .clone()
                        .unwrap_or_else(config::default_database_path)
                        .to_string_lossy()
                        .into_owned(),
                ),
                enforce_foreign_keys: Some(enforce_foreign_keys),
            };
            commands::run_init(output_mode, &path, &new_config, force)?;
        }
    }

    Ok(())
}
