#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use unicode_char_finder::{CharFinder, DataStore, FinderOptions};

pub fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

pub fn fixture_text() -> String {
    let path = fixture_path(&["tests", "fixtures", "char-data.txt"]);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

pub fn fixture_store() -> DataStore {
    DataStore::parse(&fixture_text()).expect("fixture parses")
}

pub fn fixture_finder() -> CharFinder {
    fixture_finder_with(FinderOptions::default())
}

pub fn fixture_finder_with(options: FinderOptions) -> CharFinder {
    let options = options.with_data_path(fixture_path(&["tests", "fixtures", "char-data.txt"]));
    CharFinder::open(options).expect("open fixture")
}
