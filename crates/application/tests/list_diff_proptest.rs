//! Property-based tests for the result list diff

use application::ListChange;
use application::list_diff::{apply_changes, diff};
use domain::entities::SearchResult;
use domain::value_objects::Coordinate;
use proptest::prelude::*;

fn result_strategy() -> impl Strategy<Value = SearchResult> {
    // A small address alphabet makes shared rows between both lists likely
    ("[A-D]", "[a-f]").prop_map(|(name, address)| {
        SearchResult::new(name, address, Coordinate::new(37.5, 127.0))
    })
}

fn unique_by_address(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut unique: Vec<SearchResult> = Vec::new();
    for result in results {
        if !unique.iter().any(|r| r.is_same_item(&result)) {
            unique.push(result);
        }
    }
    unique
}

proptest! {
    #[test]
    fn applying_diff_reproduces_new_list(
        old in prop::collection::vec(result_strategy(), 0..8),
        new in prop::collection::vec(result_strategy(), 0..8),
    ) {
        let old = unique_by_address(old);
        let new = unique_by_address(new);

        let mut applied = old.clone();
        apply_changes(&mut applied, &diff(&old, &new));
        prop_assert_eq!(applied, new);
    }

    #[test]
    fn diff_of_identical_lists_is_empty(
        list in prop::collection::vec(result_strategy(), 0..8),
    ) {
        prop_assert!(diff(&list, &list).is_empty());
    }

    #[test]
    fn diff_never_exceeds_remove_all_insert_all(
        old in prop::collection::vec(result_strategy(), 0..8),
        new in prop::collection::vec(result_strategy(), 0..8),
    ) {
        prop_assert!(diff(&old, &new).len() <= old.len() + new.len());
    }

    #[test]
    fn updates_only_target_matching_rows(
        old in prop::collection::vec(result_strategy(), 0..8),
        new in prop::collection::vec(result_strategy(), 0..8),
    ) {
        let old = unique_by_address(old);
        let new = unique_by_address(new);

        for change in diff(&old, &new) {
            if let ListChange::Update { index, item } = change {
                prop_assert!(new[index].is_same_item(&item));
                prop_assert!(old.iter().any(|r| r.is_same_item(&item) && *r != item));
            }
        }
    }
}
