use std::fs;
use contactbook::{
    Contact,
    ContactList,
    LoadStatus,
    Store,
};
use crate::{
    working_path,
    remove_working_path
};

/**
# Store
 - new
 - path
 - load
 - save

# ContactList
 - add
 - view
 */
#[test]
fn test_load_example_file() {
    let path = working_path("apitests-store-example");
    let file = format!("{}/contacts.txt", path);
    fs::write(&file, "Alice,555-1111,alice@x.com\n\nBob,555-2222,bob@x.com\n").unwrap();

    let store = Store::new(&file);
    let loaded = store.load();
    assert_eq!(matches!(loaded.status, LoadStatus::Loaded), true);
    assert_eq!(loaded.malformed.is_empty(), true);
    assert_eq!(loaded.contacts.len(), 2);
    assert_eq!(loaded.contacts[0], Contact::new("Alice", "555-1111", "alice@x.com"));
    assert_eq!(loaded.contacts[1], Contact::new("Bob", "555-2222", "bob@x.com"));

    let mut out = Vec::new();
    loaded.contacts.view(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.contains("1. Name: Alice, Phone: 555-1111, Email: alice@x.com\n"), true);
    assert_eq!(out.contains("2. Name: Bob, Phone: 555-2222, Email: bob@x.com\n"), true);

    remove_working_path(&path);
}

#[test]
fn test_round_trip() {
    let path = working_path("apitests-store-roundtrip");
    let store = Store::new(format!("{}/contacts.txt", path));

    let mut list = ContactList::new();
    list.add("Alice", "555-1111", "alice@x.com").unwrap();
    list.add("Bob", "555-2222", "bob@x.com").unwrap();
    list.add("Carol", "+44 20 7946 0000", "carol@example.org").unwrap();

    store.save(&list).unwrap();
    let loaded = store.load();
    assert_eq!(loaded.contacts, list);
    assert_eq!(store.load().contacts, loaded.contacts);

    remove_working_path(&path);
}

#[test]
fn test_malformed_lines_skipped() {
    let path = working_path("apitests-store-malformed");
    let file = format!("{}/contacts.txt", path);
    fs::write(&file, "Alice,555-1111,alice@x.com\nno commas\na,b\na,b,c,d\nBob,555-2222,bob@x.com\n").unwrap();

    let loaded = Store::new(&file).load();
    let names = loaded.contacts.iter().map(|c| c.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(loaded.malformed.len(), 3);

    remove_working_path(&path);
}

#[test]
fn test_missing_file() {
    let path = working_path("apitests-store-missing");
    let loaded = Store::new(format!("{}/contacts.txt", path)).load();
    assert_eq!(matches!(loaded.status, LoadStatus::Missing), true);
    assert_eq!(loaded.contacts.is_empty(), true);

    remove_working_path(&path);
}
