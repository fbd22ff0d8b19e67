// Copyright (c) 2025 Lani Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix index.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::prefix_index::PrefixIndex;

// Small alphabet so generated words share prefixes often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D]{1,6}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D]{1,3}").unwrap()
}

// Reference answer computed from a sorted set
fn expected(dictionary: &[String], prefix: &str, limit: usize) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    dictionary
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|w| w.starts_with(&prefix))
        .take(limit)
        .collect()
}

proptest! {
    // Property: results equal the first `limit` sorted dictionary words with the prefix
    #[test]
    fn prop_query_matches_sorted_model(
        dictionary in dictionary_strategy(),
        prefix in prefix_strategy(),
        limit in 1usize..12
    ) {
        let mut index = PrefixIndex::new();
        index.bulk_load(&dictionary);

        prop_assert_eq!(index.prefix_query(&prefix, limit), expected(&dictionary, &prefix, limit));
    }

    // Property: every inserted word is found and completes from each of its prefixes
    #[test]
    fn prop_inserted_words_round_trip(dictionary in dictionary_strategy()) {
        let mut index = PrefixIndex::new();
        index.bulk_load(&dictionary);
        let limit = dictionary.len().max(1);

        for word in &dictionary {
            prop_assert!(index.contains(word));
            let lowered = word.to_lowercase();
            for end in 1..=lowered.len() {
                let results = index.prefix_query(&lowered[..end], limit);
                prop_assert!(results.contains(&lowered));
            }
        }
    }

    // Property: results never exceed the limit and are strictly increasing
    #[test]
    fn prop_results_bounded_and_sorted(
        dictionary in dictionary_strategy(),
        prefix in prefix_strategy(),
        limit in 1usize..6
    ) {
        let mut index = PrefixIndex::new();
        index.bulk_load(&dictionary);

        let results = index.prefix_query(&prefix, limit);
        prop_assert!(results.len() <= limit);
        prop_assert!(results.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Property: interleaved queries of different limits agree with a fresh index
    #[test]
    fn prop_cached_answers_match_recomputation(
        dictionary in dictionary_strategy(),
        queries in prop::collection::vec((prefix_strategy(), 1usize..10), 1..20)
    ) {
        let mut cached = PrefixIndex::new();
        cached.bulk_load(&dictionary);

        for (prefix, limit) in queries {
            let mut fresh = PrefixIndex::new();
            fresh.bulk_load(&dictionary);
            prop_assert_eq!(
                cached.prefix_query(&prefix, limit),
                fresh.prefix_query(&prefix, limit)
            );
        }
    }

    // Property: inserting after a query is reflected in the next query
    #[test]
    fn prop_insert_never_leaves_stale_results(
        dictionary in dictionary_strategy(),
        extra in word_strategy(),
        limit in 1usize..10
    ) {
        let mut index = PrefixIndex::new();
        index.bulk_load(&dictionary);
        let prefix: String = extra.chars().take(1).collect();
        index.prefix_query(&prefix, limit);

        index.insert(&extra).unwrap();

        let mut all = dictionary.clone();
        all.push(extra.clone());
        prop_assert_eq!(index.prefix_query(&prefix, limit), expected(&all, &prefix, limit));
    }
}
