use crate::director::Director;
use crate::movie::Movie;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Director")]
    director: String,
}

#[derive(Tabled)]
struct DirectorRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

/// Rounded table of movies; a missing director shows as `-`
pub fn movies_table(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return String::new();
    }

    let rows: Vec<MovieRow> = movies
        .iter()
        .map(|m| MovieRow {
            id: m.id,
            title: m.title.clone(),
            genre: m.genre.clone(),
            director: m.director_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn directors_table(directors: &[Director]) -> String {
    if directors.is_empty() {
        return String::new();
    }

    let rows: Vec<DirectorRow> = directors
        .iter()
        .map(|d| DirectorRow {
            id: d.id,
            name: d.name.clone(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
