// Copyright (c) 2025 Lani Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the prefix index and autocomplete engine through the
//! public library API.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;

use lani_autocomplete_lib::config::{ConfigLoader, LaniConfig};
use lani_autocomplete_lib::data_structures::prefix_index::{PrefixIndex, PrefixIndexConfig};
use lani_autocomplete_lib::dictionary;
use lani_autocomplete_lib::Autocomplete;

#[test]
fn test_scenarios_from_word_list() {
    let mut index = PrefixIndex::new();
    index.bulk_load(["cat", "car", "cart", "dog"]);

    assert_eq!(index.prefix_query("ca", 8), vec!["car", "cart", "cat"]);
    assert_eq!(index.prefix_query("ca", 2), vec!["car", "cart"]);
    assert!(index.prefix_query("", 8).is_empty());
    assert!(index.prefix_query("xyz", 8).is_empty());
    assert!(!index.contains("ca"));
}

#[test]
fn test_large_dictionary_stays_bounded() {
    let mut index = PrefixIndex::with_config(PrefixIndexConfig::default());
    let words: Vec<String> = (0..5_000).map(|n| format!("word{n:04}")).collect();
    let report = index.bulk_load(&words);
    assert_eq!(report.inserted, 5_000);

    let results = index.prefix_query("word", 8);
    assert_eq!(
        results,
        vec![
            "word0000", "word0001", "word0002", "word0003", "word0004", "word0005", "word0006",
            "word0007"
        ]
    );
    assert_eq!(index.prefix_query("WORD49", 3), vec!["word4900", "word4901", "word4902"]);
}

#[test]
fn test_engine_from_config_file() {
    let dir = tempfile::tempdir().unwrap();

    let words_path = dir.path().join("words.txt");
    let mut words = std::fs::File::create(&words_path).unwrap();
    writeln!(words, "react\nredux\nrust\nruby\n# comment\n").unwrap();

    let config_path = dir.path().join("lani.toml");
    std::fs::write(
        &config_path,
        format!(
            "[index]\ndefault_limit = 2\n\n[dictionary]\npath = {:?}\n",
            words_path.to_string_lossy()
        ),
    )
    .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "LANI_IT_FILE")
        .load()
        .unwrap();
    let mut engine = Autocomplete::from_config(&config).unwrap();

    assert_eq!(engine.index().len(), 4);
    assert_eq!(engine.search("r"), vec!["react", "redux"]);
    assert_eq!(engine.search("ru"), vec!["ruby", "rust"]);
}

#[test]
fn test_missing_dictionary_fails_engine_construction() {
    let mut config = LaniConfig::default();
    config.dictionary.path = Some("/nonexistent/lani/words.txt".into());

    assert!(Autocomplete::from_config(&config).is_err());
    assert!(dictionary::load_word_list("/nonexistent/lani/words.txt", "#").is_err());
}

/// The index has no internal locking; callers serialize access themselves.
#[test]
fn test_externally_locked_sharing() {
    const THREAD_COUNT: usize = 4;
    const WORDS_PER_THREAD: usize = 25;

    let index = Arc::new(Mutex::new(PrefixIndex::new()));
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for thread_id in 0..THREAD_COUNT {
        let index = Arc::clone(&index);
        handles.push(thread::spawn(move || {
            for j in 0..WORDS_PER_THREAD {
                let word = format!("key{thread_id}x{j:02}");
                let mut guard = index.lock().unwrap();
                guard.insert(&word).unwrap();
                assert!(guard.prefix_query(&word, 1) == vec![word.clone()]);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let mut index = index.lock().unwrap();
    assert_eq!(index.len(), THREAD_COUNT * WORDS_PER_THREAD);
    assert_eq!(index.prefix_query("key0", 100).len(), WORDS_PER_THREAD);
}
