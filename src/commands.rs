use crate::{OutputMode, emit_success};
use moviedb::config::{self, MoviedbConfig};
use moviedb::ui::{self, Icons, header, info, movie_line, section, success};
use moviedb::{Catalog, CatalogStore};
use std::path::Path;

pub fn run_add_director(output_mode: OutputMode, catalog: &Catalog, name: &str) -> anyhow::Result<()> {
    let director = catalog.create_director(name)?;
    if !director.name_within_bound() {
        ui::warn(&format!(
            "Name is longer than {} characters; stored as given",
            moviedb::director::NAME_MAX_LEN
        ));
    }

    if output_mode.is_human() {
        success(&ui::director_added(&director.name));
    } else {
        emit_success(output_mode, "add-director", serde_json::to_value(&director)?)?;
    }
    Ok(())
}

pub fn run_add_movie(
    output_mode: OutputMode,
    catalog: &Catalog,
    title: &str,
    genre: &str,
    director_id: i64,
) -> anyhow::Result<()> {
    let movie = catalog.create_movie(title, genre, director_id)?;
    if !movie.title_within_bound() {
        ui::warn(&format!(
            "Title is longer than {} characters; stored as given",
            moviedb::movie::TITLE_MAX_LEN
        ));
    }

    if output_mode.is_human() {
        success(&ui::movie_created(&movie.title));
    } else {
        emit_success(output_mode, "add-movie", serde_json::to_value(&movie)?)?;
    }
    Ok(())
}

pub fn run_list(output_mode: OutputMode, catalog: &Catalog, as_table: bool) -> anyhow::Result<()> {
    let movies = catalog.list_all_movies()?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "list", serde_json::to_value(&movies)?);
    }

    if movies.is_empty() {
        println!("∅ No movies found.");
    } else if as_table {
        println!("{}", ui::movies_table(&movies));
    } else {
        for movie in &movies {
            movie_line(movie);
        }
    }
    Ok(())
}

pub fn run_search(output_mode: OutputMode, catalog: &Catalog, name: &str) -> anyhow::Result<()> {
    let found = catalog.search_movie(name);

    if output_mode.is_human() {
        match found {
            Some(movie) => movie_line(&movie),
            None => println!("{} Search is not implemented yet; no results for '{}'.", Icons::SEARCH, name),
        }
    } else {
        let data = serde_json::json!({
            "query": name,
            "implemented": false,
            "result": found,
        });
        emit_success(output_mode, "search", data)?;
    }
    Ok(())
}

pub fn run_directors(output_mode: OutputMode, catalog: &Catalog) -> anyhow::Result<()> {
    let directors = catalog.list_directors()?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "directors", serde_json::to_value(&directors)?);
    }

    if directors.is_empty() {
        println!("∅ No directors found.");
    } else {
        println!("{}", ui::directors_table(&directors));
    }
    Ok(())
}

pub fn run_director(output_mode: OutputMode, catalog: &Catalog, id: i64) -> anyhow::Result<()> {
    let Some(director) = catalog.director(id)? else {
        anyhow::bail!("Director {} not found", id);
    };
    let movies = catalog.movies_by_director(id)?;

    if output_mode.is_human() {
        header(&format!("{} {}", Icons::PERSON, director));
        section("Movies");
        if movies.is_empty() {
            println!("  {}", ui::muted("none"));
        } else {
            for movie in &movies {
                movie_line(movie);
            }
        }
    } else {
        let data = serde_json::json!({
            "director": director,
            "movies": movies,
        });
        emit_success(output_mode, "director", data)?;
    }
    Ok(())
}

pub fn run_stats(output_mode: OutputMode, store: &CatalogStore) -> anyhow::Result<()> {
    let stats = store.stats()?;

    if output_mode.is_human() {
        let location = store
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ":memory:".to_string());
        println!("{} moviedb Statistics ({})", Icons::STATS, location);
        let directors = stats.directors.to_string();
        let movies = stats.movies.to_string();
        let dangling = stats.dangling_movies.to_string();
        println!(
            "{}",
            ui::stats_table(&[
                ("Directors", directors.as_str()),
                ("Movies", movies.as_str()),
                ("Dangling director refs", dangling.as_str()),
            ])
        );
        info(
            "Foreign keys enforced",
            &store.foreign_keys_enforced()?.to_string(),
        );
        if stats.dangling_movies > 0 {
            ui::warn(&format!(
                "{} movie(s) reference a director that does not exist",
                stats.dangling_movies
            ));
        }
    } else {
        emit_success(output_mode, "stats", serde_json::to_value(&stats)?)?;
    }
    Ok(())
}

pub fn run_init(output_mode: OutputMode, path: &Path, new_config: &MoviedbConfig, force: bool) -> anyhow::Result<()> {
    config::write_config(path, new_config, force)?;

    if output_mode.is_human() {
        success(&format!("Wrote {}", path.display()));
        info("Database", &new_config.database_path().display().to_string());
        info(
            "Foreign keys enforced",
            &new_config.store_options().enforce_foreign_keys.to_string(),
        );
    } else {
        let data = serde_json::json!({
            "path": path.display().to_string(),
            "config": new_config,
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}
