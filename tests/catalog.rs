use moviedb::storage::schema;
use moviedb::{Catalog, CatalogStore, Error, StoreOptions};

#[test]
fn director_and_movie_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.sqlite3");

    let otoyo_id = {
        let store = CatalogStore::open(&path).unwrap();
        let catalog = Catalog::new(&store);
        let otoyo = catalog.create_director("Otoyo").unwrap();
        catalog.create_movie("Pengle part 2", "Luo Comedy", otoyo.id).unwrap();
        otoyo.id
    };

    let store = CatalogStore::open(&path).unwrap();
    let catalog = Catalog::new(&store);
    let movies = catalog.list_all_movies().unwrap();
    assert!(movies
        .iter()
        .any(|m| m.title == "Pengle part 2" && m.genre == "Luo Comedy" && m.director_id == Some(otoyo_id)));
    assert_eq!(catalog.director(otoyo_id).unwrap().unwrap().name, "Otoyo");
}

#[test]
fn ids_are_not_reused_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.sqlite3");

    let first = {
        let store = CatalogStore::open(&path).unwrap();
        Catalog::new(&store).create_director("First").unwrap().id
    };

    let store = CatalogStore::open(&path).unwrap();
    let second = Catalog::new(&store).create_director("Second").unwrap().id;
    assert!(second > first);
}

#[test]
fn orphan_movie_is_listed_with_its_director_id() {
    let store = CatalogStore::open_in_memory().unwrap();
    let catalog = Catalog::new(&store);

    catalog.create_movie("Orphan Film", "Drama", 9999).unwrap();

    let movies = catalog.list_all_movies().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Orphan Film");
    assert_eq!(movies[0].director_id, Some(9999));
}

#[test]
fn orphan_movie_is_rejected_when_foreign_keys_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.sqlite3");
    let options = StoreOptions { enforce_foreign_keys: true };

    let store = CatalogStore::open_with(&path, &options).unwrap();
    let catalog = Catalog::new(&store);

    let err = catalog.create_movie("Orphan Film", "Drama", 9999).unwrap_err();
    assert!(matches!(err, Error::Storage(_)));

    let director = catalog.create_director("Otoyo").unwrap();
    catalog.create_movie("Pengle part 1", "Luo Comedy", director.id).unwrap();
    assert_eq!(catalog.list_all_movies().unwrap().len(), 1);
}

#[test]
fn search_returns_nothing() {
    let store = CatalogStore::open_in_memory().unwrap();
    let catalog = Catalog::new(&store);

    for query in ["anything", "", "Pengle part 2", "%"] {
        assert!(catalog.search_movie(query).is_none());
    }
}

#[test]
fn open_creates_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.sqlite3");
    drop(CatalogStore::open(&path).unwrap());

    let conn = rusqlite::Connection::open(&path).unwrap();
    for table in schema::TABLES {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "table {table} does not exist");
    }
}

#[test]
fn open_fails_when_parent_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("movies.sqlite3");

    let result = CatalogStore::open(&path);
    assert!(matches!(result, Err(Error::Storage(_))));
}
