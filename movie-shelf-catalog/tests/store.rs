use movie_shelf_catalog::{MovieDraft, MovieStore};

fn dune() -> MovieDraft {
    MovieDraft::new("Dune", "Sci-Fi", 2021, 8.0)
}

#[test]
fn seeded_store_has_two_records() {
    let store = MovieStore::seeded();
    let movies = store.movies();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[0].title, "Parasite");
    assert!(movies[0].watched);
    assert_eq!(movies[1].id, 2);
    assert_eq!(movies[1].title, "Spirited Away");
    assert!(!movies[1].watched);
}

#[test]
fn add_assigns_next_id_and_appends() {
    let mut store = MovieStore::seeded();
    let id = store.add(dune());
    assert_eq!(id, 3);

    let movies = store.movies();
    assert_eq!(movies.len(), 3);
    let added = &movies[2];
    assert_eq!(added.id, 3);
    assert_eq!(added.title, "Dune");
    assert_eq!(added.genre, "Sci-Fi");
    assert_eq!(added.year, 2021);
    assert_eq!(added.rating, 8.0);
    assert!(!added.watched);

    let next = store.add(MovieDraft::new("Heat", "Crime", 1995, 8.3));
    assert_eq!(next, 4);
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let mut store = MovieStore::new();
    let a = store.add(MovieDraft::new("A", "x", 2000, 1.0));
    let b = store.add(MovieDraft::new("B", "x", 2001, 2.0));
    assert!(b > a);

    // Deleting the highest id must not free it up for reuse.
    assert!(store.delete(b));
    let c = store.add(MovieDraft::new("C", "x", 2002, 3.0));
    assert!(c > b);

    assert!(store.delete(a));
    assert!(store.delete(c));
    let d = store.add(MovieDraft::new("D", "x", 2003, 4.0));
    assert!(d > c);
}

#[test]
fn delete_removes_record_and_preserves_order() {
    let mut store = MovieStore::seeded();
    assert!(store.delete(1));

    let movies = store.movies();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 2);
    assert_eq!(movies[0].title, "Spirited Away");
    assert!(movies.iter().all(|m| m.id != 1));
}

#[test]
fn delete_of_missing_id_is_a_noop() {
    let mut store = MovieStore::seeded();
    assert!(store.delete(1));
    // Same id again: nothing happens, nothing panics.
    assert!(!store.delete(1));
    assert_eq!(store.movies().len(), 1);
    assert!(!store.delete(99));
}

#[test]
fn toggle_flips_and_is_immediately_visible() {
    let mut store = MovieStore::seeded();
    assert!(store.toggle_watched(2));
    assert!(store.get(2).map(|m| m.watched).unwrap_or(false));
}

#[test]
fn toggle_twice_restores_original_value() {
    let mut store = MovieStore::seeded();
    let before = store.get(2).map(|m| m.watched);
    store.toggle_watched(2);
    store.toggle_watched(2);
    assert_eq!(store.get(2).map(|m| m.watched), before);
}

#[test]
fn toggle_of_missing_id_is_a_noop() {
    let mut store = MovieStore::seeded();
    assert!(!store.toggle_watched(42));
    assert_eq!(store.movies().len(), 2);
}

#[test]
fn update_changes_fields_but_not_id_or_watched() {
    let mut store = MovieStore::seeded();
    assert!(store.update(
        1,
        MovieDraft::new("Parasite (2019)", "Thriller", 2019, 9.0),
    ));

    let movie = store.get(1).expect("id 1 exists");
    assert_eq!(movie.id, 1);
    assert_eq!(movie.title, "Parasite (2019)");
    assert_eq!(movie.genre, "Thriller");
    assert_eq!(movie.year, 2019);
    assert_eq!(movie.rating, 9.0);
    // Watched state is the store's, not the form's.
    assert!(movie.watched);
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let mut store = MovieStore::seeded();
    assert!(!store.update(7, dune()));
    assert_eq!(store.get(1).map(|m| m.title.as_str()), Some("Parasite"));
    assert_eq!(
        store.get(2).map(|m| m.title.as_str()),
        Some("Spirited Away"),
    );
}

#[test]
fn get_returns_none_for_missing_id() {
    let store = MovieStore::new();
    assert!(store.get(1).is_none());
}

#[test]
fn empty_store_starts_at_id_one() {
    let mut store = MovieStore::new();
    assert!(store.movies().is_empty());
    assert_eq!(store.add(dune()), 1);
}
