//! The filter, group and sort pipeline.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::spec::{EmptyPolicy, ViewSpec};
use crate::view::{Group, View};

/// Builds the view of `records` described by `spec`.
///
/// 1. Keeps records that match the search term and every predicate.
/// 2. Groups survivors by key, creating groups in first-seen order.
/// 3. Stable-sorts each group with the spec's comparators.
/// 4. Reorders groups if the spec has a group ordering.
///
/// The call is pure: the same records and spec always give an equal view.
/// Panics raised by the spec's closures propagate unchanged.
///
/// ```
/// use vaidya_view::{query, ViewSpec};
///
/// struct Patient {
///     id: u32,
///     name: &'static str,
///     status: &'static str,
/// }
///
/// let patients = [
///     Patient { id: 1, name: "Priya Sharma", status: "active" },
///     Patient { id: 2, name: "Raj Patel", status: "needs-attention" },
/// ];
///
/// let spec = ViewSpec::<Patient>::new().filter("status", |p| p.status == "active");
/// let view = query(&patients, &spec);
///
/// assert_eq!(view.group_count(), 1);
/// assert_eq!(view.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
/// ```
pub fn query<'r, T>(records: &'r [T], spec: &ViewSpec<'_, T>) -> View<'r, T> {
    let mut groups: Vec<Group<'r, T>> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records.iter().filter(|r| spec.matches(r)) {
        let slot = match slots.entry(spec.group_key(record)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                groups.push(Group::new(entry.key().clone()));
                *entry.insert(groups.len() - 1)
            }
        };
        groups[slot].members.push(record);
    }

    if spec.is_sorted() {
        for group in &mut groups {
            // slice::sort_by is stable
            group.members.sort_by(|a, b| spec.compare(a, b));
        }
    }

    if spec.orders_groups() {
        groups.sort_by(|a, b| spec.compare_groups(&a.key, &b.key));
    }

    if groups.is_empty()
        && !spec.is_grouped()
        && spec.get_empty_policy() == EmptyPolicy::SingleGroup
    {
        groups.push(Group::new(String::new()));
    }

    let view = View { groups };
    tracing::debug!(
        records = records.len(),
        matched = view.len(),
        groups = view.group_count(),
        search = spec.search_term().as_str(),
        "built list view"
    );
    view
}
