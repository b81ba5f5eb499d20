use crate::movie::Movie;
use crate::output::is_quiet;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Confirmation text for a stored director
pub fn director_added(name: &str) -> String {
    format!("Director {name} added")
}

/// Confirmation text for a stored movie
pub fn movie_created(title: &str) -> String {
    format!("Movie {title} created")
}

/// `title:<title> genre:<genre>`, one line of `moviedb list`
pub fn movie_listing(movie: &Movie) -> String {
    movie.to_string()
}

pub fn header(text: &str) {
    println!("{} {}", Icons::FILM, text.style(theme().header.clone()));
}

/// Confirmation line on stdout. `MOVIEDB_QUIET` drops it.
pub fn success(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

/// Fatal error line on stderr, prefixed with the program name
pub fn error(label: &str) {
    eprintln!(
        "{} {} {}",
        Icons::CROSS,
        "moviedb:".style(theme().error.clone()),
        label
    );
}

/// Non-fatal catalog warning (dangling references, oversized text)
pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("{} {}", Icons::FILM, title.style(theme().header.clone()));
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

pub fn movie_line(movie: &Movie) {
    println!("{}", movie_listing(movie));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_text() {
        assert_eq!(director_added("Otoyo"), "Director Otoyo added");
        assert_eq!(movie_created("Pengle part 2"), "Movie Pengle part 2 created");
    }

    #[test]
    fn test_movie_listing() {
        let movie = Movie::new(7, "Pengle part 2", "Luo Comedy", Some(1));
        assert_eq!(movie_listing(&movie), "title:Pengle part 2 genre:Luo Comedy");
    }
}
