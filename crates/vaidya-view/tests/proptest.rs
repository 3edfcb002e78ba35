//! Property-based tests for the list pipeline using proptest.

use std::collections::HashSet;

use proptest::prelude::*;
use vaidya_view::{query, Clause, EmptyPolicy, Field, Number, SortKey, View, ViewSpec, Viewable};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: usize,
    group: u8,
    score: i64,
    name: String,
}

impl Viewable for Item {
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];

    fn field_value(&self, field: &str) -> Field<'_> {
        match field {
            "id" => Field::Number(Number::from(self.id)),
            "group" => Field::Number(Number::from(self.group)),
            "score" => Field::Number(Number::Int(self.score)),
            "name" => Field::Text(&self.name),
            _ => Field::Missing,
        }
    }
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0u8..4, -5i64..5, "[a-cA-C]{0,4}"), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (group, score, name))| Item {
                id,
                group,
                score,
                name,
            })
            .collect()
    })
}

fn spec<'f>(threshold: i64, term: &str, grouped: bool, sorted: bool) -> ViewSpec<'f, Item> {
    let mut spec = ViewSpec::<Item>::viewable()
        .search(term)
        .filter("score", move |i: &Item| i.score >= threshold);
    if grouped {
        spec = spec.group_by(|i| format!("g{}", i.group));
    }
    if sorted {
        spec = spec.sort_by(|a, b| a.score.cmp(&b.score));
    }
    spec
}

fn expected_survivors(items: &[Item], threshold: i64, term: &str) -> HashSet<usize> {
    let folded = term.to_lowercase();
    items
        .iter()
        .filter(|i| i.score >= threshold)
        .filter(|i| i.name.to_lowercase().contains(&folded))
        .map(|i| i.id)
        .collect()
}

fn view_ids(view: &View<'_, Item>) -> Vec<usize> {
    view.iter().map(|i| i.id).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every survivor appears exactly once, and nothing else appears.
    #[test]
    fn survivors_appear_exactly_once(
        items in items_strategy(),
        threshold in -5i64..5,
        term in "[a-c]{0,2}",
        grouped in any::<bool>(),
        sorted in any::<bool>(),
    ) {
        let view = query(&items, &spec(threshold, &term, grouped, sorted));
        let ids = view_ids(&view);
        let unique: HashSet<usize> = ids.iter().copied().collect();

        prop_assert_eq!(ids.len(), unique.len());
        prop_assert_eq!(unique, expected_survivors(&items, threshold, &term));
    }

    /// The view never holds more records than the input.
    #[test]
    fn view_never_grows_collection(
        items in items_strategy(),
        threshold in -5i64..5,
    ) {
        let s = spec(threshold, "", true, true);
        let view = query(&items, &s);
        prop_assert!(view.len() <= items.len());
        prop_assert_eq!(view.len(), s.count(&items));
    }

    /// Records with equal sort keys keep their relative input order.
    #[test]
    fn sort_is_stable(
        items in items_strategy(),
        grouped in any::<bool>(),
    ) {
        let view = query(&items, &spec(i64::MIN, "", grouped, true));
        for group in view.groups() {
            for pair in group.members().windows(2) {
                prop_assert!(pair[0].score <= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    /// Without a comparator, members stay in input order.
    #[test]
    fn unsorted_groups_keep_input_order(items in items_strategy()) {
        let view = query(&items, &spec(i64::MIN, "", true, false));
        for group in view.groups() {
            let ids: Vec<usize> = group.members().iter().map(|i| i.id).collect();
            let mut ordered = ids.clone();
            ordered.sort_unstable();
            prop_assert_eq!(ids, ordered);
        }
    }

    /// Groups partition the survivors: each member carries its group's key,
    /// keys are distinct and appear in first-seen order.
    #[test]
    fn groups_partition_survivors(
        items in items_strategy(),
        threshold in -5i64..5,
    ) {
        let view = query(&items, &spec(threshold, "", true, true));

        let keys = view.keys();
        let distinct: HashSet<&str> = keys.iter().copied().collect();
        prop_assert_eq!(keys.len(), distinct.len());

        for group in view.groups() {
            prop_assert!(!group.is_empty());
            for member in group.members() {
                prop_assert_eq!(format!("g{}", member.group), group.key());
            }
        }

        let mut first_seen: Vec<String> = Vec::new();
        for item in items.iter().filter(|i| i.score >= threshold) {
            let key = format!("g{}", item.group);
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        prop_assert_eq!(keys, first_seen.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Querying twice with the same spec gives the same view.
    #[test]
    fn query_is_idempotent(
        items in items_strategy(),
        threshold in -5i64..5,
        term in "[a-c]{0,2}",
    ) {
        let s = spec(threshold, &term, true, true);
        prop_assert_eq!(query(&items, &s), query(&items, &s));
    }

    /// An empty collection gives no groups under the default policy and one
    /// empty group under the single-group policy.
    #[test]
    fn empty_input_follows_policy(
        threshold in -5i64..5,
        grouped in any::<bool>(),
    ) {
        let items: Vec<Item> = Vec::new();
        let view = query(&items, &spec(threshold, "", grouped, true));
        prop_assert_eq!(view.group_count(), 0);

        let single = spec(threshold, "", false, true).empty_policy(EmptyPolicy::SingleGroup);
        let view = query(&items, &single);
        prop_assert_eq!(view.group_count(), 1);
        prop_assert!(view.is_empty());
    }

    /// A parsed clause filters exactly like the equivalent closure.
    #[test]
    fn clause_matches_closure(
        items in items_strategy(),
        threshold in -5i64..5,
    ) {
        let clause = Clause::parse(&format!("score>={threshold}")).unwrap();
        let by_clause = ViewSpec::<Item>::new().where_clause(clause);
        let by_closure = ViewSpec::<Item>::new().filter("score", move |i| i.score >= threshold);

        prop_assert_eq!(
            view_ids(&query(&items, &by_clause)),
            view_ids(&query(&items, &by_closure))
        );
    }

    /// Descending sort keys reverse the order but keep ties stable.
    #[test]
    fn descending_sort_key_is_stable(items in items_strategy()) {
        let s = ViewSpec::<Item>::new().sort_by_keys(vec![SortKey::parse("-score").unwrap()]);
        let view = query(&items, &s);
        for pair in view.iter().collect::<Vec<_>>().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
