//! Catalog scenarios exercised through the trait object, the way the facade
//! consumes the backend.

use shelf_core::{Book, Catalog, MemoryCatalog};

fn boxed_catalog() -> Box<dyn Catalog> {
    Box::new(MemoryCatalog::new())
}

#[test]
fn duplicate_titles_are_both_removed() {
    let mut catalog = boxed_catalog();
    catalog.add(Book::new("Dune", "Herbert", 1965)).unwrap();
    catalog.add(Book::new("Dune", "Herbert", 1977)).unwrap();

    catalog.remove("Dune").unwrap();

    assert!(catalog.list().unwrap().is_empty());
}

#[test]
fn removing_missing_title_leaves_catalog_unchanged() {
    let mut catalog = boxed_catalog();
    catalog.add(Book::new("A", "X", 2000)).unwrap();
    catalog.add(Book::new("B", "Y", 2001)).unwrap();

    catalog.remove("Z").unwrap();

    let books = catalog.list().unwrap();
    assert_eq!(
        books,
        vec![Book::new("A", "X", 2000), Book::new("B", "Y", 2001)]
    );
}

#[test]
fn catalog_length_tracks_adds() {
    let mut catalog = boxed_catalog();
    let titles = ["A", "B", "A", "C", "A"];
    for (i, title) in titles.iter().enumerate() {
        catalog.add(Book::new(*title, "X", 2000)).unwrap();
        assert_eq!(catalog.list().unwrap().len(), i + 1);
    }
}
