//! The declarative description of a list view.
//!
//! A [`ViewSpec`] bundles everything a screen decides about its list: the
//! search term and which text it searches, the filters, how records are
//! grouped and how each group is sorted. Specs are plain values built fresh
//! from UI state on every change and handed to [`query`](crate::query).

use std::cmp::Ordering;
use std::fmt;

use crate::clause::Clause;
use crate::ordering::{compare_by_keys, SortKey};
use crate::search::SearchTerm;
use crate::traits::Viewable;

type SearchFn<'f, T> = Box<dyn for<'r> Fn(&'r T) -> Vec<&'r str> + 'f>;
type GroupFn<'f, T> = Box<dyn Fn(&T) -> String + 'f>;
type GroupOrderFn<'f> = Box<dyn Fn(&str, &str) -> Ordering + 'f>;
type CompareFn<'f, T> = Box<dyn Fn(&T, &T) -> Ordering + 'f>;

/// What a view looks like when no record survives filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// No groups at all.
    #[default]
    NoGroups,
    /// One empty group keyed `""`, but only when the spec has no `group_by`.
    SingleGroup,
}

/// A named filter over records.
pub struct Predicate<'f, T> {
    name: String,
    test: Box<dyn Fn(&T) -> bool + 'f>,
}

impl<'f, T> Predicate<'f, T> {
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&T) -> bool + 'f,
    {
        Predicate {
            name: name.into(),
            test: Box::new(test),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, record: &T) -> bool {
        (self.test)(record)
    }
}

impl<T> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

/// Search, filters, grouping and sorting for one list.
///
/// The default spec matches everything, keeps a single implicit group and
/// preserves input order.
///
/// ```
/// use std::cmp::Ordering;
/// use vaidya_view::{query, ViewSpec};
///
/// struct Session {
///     patient: String,
///     date: &'static str,
///     time: &'static str,
/// }
///
/// let sessions = vec![
///     Session { patient: "Priya Sharma".into(), date: "2024-12-15", time: "14:00" },
///     Session { patient: "Raj Patel".into(), date: "2024-12-16", time: "09:00" },
///     Session { patient: "Anita Rao".into(), date: "2024-12-15", time: "10:30" },
/// ];
///
/// let spec = ViewSpec::<Session>::new()
///     .search("a")
///     .search_fields(|s| vec![s.patient.as_str()])
///     .group_by(|s| s.date.to_string())
///     .sort_by(|a, b| a.time.cmp(b.time));
///
/// let view = query(&sessions, &spec);
/// assert_eq!(view.keys(), vec!["2024-12-15", "2024-12-16"]);
/// assert_eq!(view.groups()[0].members()[0].patient, "Anita Rao");
/// ```
pub struct ViewSpec<'f, T> {
    search: SearchTerm,
    search_fields: Option<SearchFn<'f, T>>,
    predicates: Vec<Predicate<'f, T>>,
    group_by: Option<GroupFn<'f, T>>,
    group_order: Option<GroupOrderFn<'f>>,
    comparators: Vec<CompareFn<'f, T>>,
    empty_policy: EmptyPolicy,
}

impl<'f, T> Default for ViewSpec<'f, T> {
    fn default() -> Self {
        ViewSpec {
            search: SearchTerm::default(),
            search_fields: None,
            predicates: Vec::new(),
            group_by: None,
            group_order: None,
            comparators: Vec::new(),
            empty_policy: EmptyPolicy::default(),
        }
    }
}

impl<'f, T> ViewSpec<'f, T> {
    pub fn new() -> Self {
        ViewSpec::default()
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Sets the free-text search term. Empty matches all records.
    pub fn search(mut self, term: impl Into<SearchTerm>) -> Self {
        self.search = term.into();
        self
    }

    /// Sets the text a search term is matched against.
    ///
    /// Without an extraction function a non-empty term matches nothing.
    pub fn search_fields<F>(mut self, extract: F) -> Self
    where
        F: for<'r> Fn(&'r T) -> Vec<&'r str> + 'f,
    {
        self.search_fields = Some(Box::new(extract));
        self
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Appends a named predicate. All predicates must hold.
    pub fn filter<F>(mut self, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&T) -> bool + 'f,
    {
        self.predicates.push(Predicate::new(name, test));
        self
    }

    /// Appends a predicate only when `condition` is true.
    ///
    /// Screens use this for dropdowns whose "all" option disables the filter.
    pub fn filter_if<F>(self, condition: bool, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&T) -> bool + 'f,
    {
        if condition {
            self.filter(name, test)
        } else {
            self
        }
    }

    /// Appends an already built predicate.
    pub fn predicate(mut self, predicate: Predicate<'f, T>) -> Self {
        self.predicates.push(predicate);
        self
    }

    // ------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------

    /// Groups records by the returned key.
    ///
    /// Drops any group ordering set for a previous key; call
    /// [`order_groups_by`](Self::order_groups_by) afterwards to order the new groups.
    pub fn group_by<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> String + 'f,
    {
        self.group_by = Some(Box::new(key));
        self.group_order = None;
        self
    }

    /// Orders groups by key instead of first-seen order. The sort is stable.
    pub fn order_groups_by<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + 'f,
    {
        self.group_order = Some(Box::new(cmp));
        self
    }

    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Sets the comparator used within each group, replacing earlier ones.
    pub fn sort_by<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'f,
    {
        self.comparators.clear();
        self.comparators.push(Box::new(cmp));
        self
    }

    /// Adds a tie-breaker consulted when earlier comparators return `Equal`.
    pub fn then_by<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'f,
    {
        self.comparators.push(Box::new(cmp));
        self
    }

    // ------------------------------------------------------------------
    // Introspection and evaluation
    // ------------------------------------------------------------------

    pub fn search_term(&self) -> &SearchTerm {
        &self.search
    }

    pub fn predicates(&self) -> &[Predicate<'f, T>] {
        &self.predicates
    }

    pub fn predicate_names(&self) -> Vec<&str> {
        self.predicates.iter().map(Predicate::name).collect()
    }

    pub fn is_grouped(&self) -> bool {
        self.group_by.is_some()
    }

    pub fn is_sorted(&self) -> bool {
        !self.comparators.is_empty()
    }

    pub fn get_empty_policy(&self) -> EmptyPolicy {
        self.empty_policy
    }

    /// `true` when `record` passes the search term and every predicate.
    ///
    /// Predicates run left to right and stop at the first failure.
    pub fn matches(&self, record: &T) -> bool {
        self.matches_search(record) && self.predicates.iter().all(|p| p.test(record))
    }

    fn matches_search(&self, record: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        match &self.search_fields {
            Some(extract) => self.search.matches_any(extract(record)),
            None => false,
        }
    }

    /// Number of records that pass the filter pass.
    pub fn count(&self, records: &[T]) -> usize {
        records.iter().filter(|r| self.matches(r)).count()
    }

    /// Group key of `record`; `""` without a `group_by`.
    pub fn group_key(&self, record: &T) -> String {
        match &self.group_by {
            Some(key) => key(record),
            None => String::new(),
        }
    }

    /// Runs the comparators in order until one is decisive.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparators
            .iter()
            .map(|cmp| cmp(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// `true` when groups are reordered by key after grouping.
    pub fn orders_groups(&self) -> bool {
        self.group_order.is_some()
    }

    /// Compares two group keys; `Equal` without a group ordering.
    pub fn compare_groups(&self, a: &str, b: &str) -> Ordering {
        match &self.group_order {
            Some(cmp) => cmp(a, b),
            None => Ordering::Equal,
        }
    }
}

impl<'f, T: Viewable + 'f> ViewSpec<'f, T> {
    /// A spec that searches [`Viewable::search_text`].
    pub fn viewable() -> Self {
        ViewSpec::new().search_fields(T::search_text)
    }

    /// Searches the named fields instead of the record's default search text.
    pub fn search_in_fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.search_fields(move |record| {
            fields
                .iter()
                .filter_map(|name| record.field_value(name).as_text())
                .collect()
        })
    }

    /// Appends a field clause as a predicate named after the clause.
    pub fn where_clause(self, clause: Clause) -> Self {
        let name = clause.to_string();
        self.filter(name, move |record: &T| {
            clause.matches(&record.field_value(&clause.field))
        })
    }

    /// Groups by a field's rendered value. Records missing it share the `""` group.
    pub fn group_by_field(self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.group_by(move |record: &T| record.field_value(&field).to_key())
    }

    /// Sorts by field keys, the first being primary. Replaces earlier comparators.
    pub fn sort_by_keys(self, keys: Vec<SortKey>) -> Self {
        self.sort_by(move |a: &T, b: &T| compare_by_keys(a, b, &keys))
    }
}

impl<T> fmt::Debug for ViewSpec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSpec")
            .field("search", &self.search.as_str())
            .field("searches_fields", &self.search_fields.is_some())
            .field("predicates", &self.predicate_names())
            .field("grouped", &self.is_grouped())
            .field("ordered_groups", &self.group_order.is_some())
            .field("comparators", &self.comparators.len())
            .field("empty_policy", &self.empty_policy)
            .finish()
    }
}
