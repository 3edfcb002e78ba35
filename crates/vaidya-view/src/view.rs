//! The result of a query: ordered groups of borrowed records.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A derived, read-only list view.
///
/// Records are borrowed from the slice given to [`query`](crate::query);
/// the view never owns or mutates them.
#[derive(Debug, PartialEq)]
pub struct View<'r, T> {
    pub(crate) groups: Vec<Group<'r, T>>,
}

/// One group of a [`View`].
#[derive(Debug, PartialEq)]
pub struct Group<'r, T> {
    pub(crate) key: String,
    pub(crate) members: Vec<&'r T>,
}

/// A window over the flattened view, for paginated lists.
#[derive(Debug, serde::Serialize)]
pub struct Page<'r, T> {
    pub items: Vec<&'r T>,
    pub offset: usize,
    pub total: usize,
    pub has_more: bool,
}

impl<'r, T> Group<'r, T> {
    pub(crate) fn new(key: String) -> Self {
        Group {
            key,
            members: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn members(&self) -> &[&'r T] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'r, T> View<'r, T> {
    /// A view with no groups.
    pub fn empty() -> Self {
        View { groups: Vec::new() }
    }

    pub fn groups(&self) -> &[Group<'r, T>] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Looks a group up by key.
    pub fn group(&self, key: &str) -> Option<&Group<'r, T>> {
        self.groups.iter().find(|g| g.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    /// Total number of member records across groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// `true` when no record is shown, even if an empty group exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in display order: group by group, each in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &'r T> + '_ {
        self.groups.iter().flat_map(|g| g.members.iter().copied())
    }

    pub fn into_flat(self) -> Vec<&'r T> {
        self.groups.into_iter().flat_map(|g| g.members).collect()
    }

    /// Takes `limit` members starting at `offset` of the flattened order.
    ///
    /// ```
    /// use vaidya_view::{query, ViewSpec};
    ///
    /// let ids = [1, 2, 3, 4, 5];
    /// let view = query(&ids, &ViewSpec::new());
    /// let page = view.page(3, Some(10));
    /// assert_eq!(page.items, vec![&4, &5]);
    /// assert_eq!(page.total, 5);
    /// assert!(!page.has_more);
    /// ```
    pub fn page(&self, offset: usize, limit: Option<usize>) -> Page<'r, T> {
        let total = self.len();
        let items: Vec<&'r T> = self
            .iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        let has_more = offset.saturating_add(items.len()) < total;
        Page {
            items,
            offset,
            total,
            has_more,
        }
    }
}

impl<'r, T> IntoIterator for View<'r, T> {
    type Item = Group<'r, T>;
    type IntoIter = std::vec::IntoIter<Group<'r, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<T: Serialize> Serialize for Group<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Group", 3)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("count", &self.members.len())?;
        state.serialize_field("members", &self.members)?;
        state.end()
    }
}

impl<T: Serialize> Serialize for View<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("View", 2)?;
        state.serialize_field("groups", &self.groups)?;
        state.serialize_field("total", &self.len())?;
        state.end()
    }
}
