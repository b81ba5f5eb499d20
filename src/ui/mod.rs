pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{
    director_added, error, header, info, movie_created, movie_line, movie_listing, muted, section,
    success, warn,
};
pub use table::{directors_table, movies_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
