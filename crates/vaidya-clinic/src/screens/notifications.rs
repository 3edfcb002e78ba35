use std::cmp::Ordering;

use vaidya_view::{ViewChoice, ViewSpec};

use super::{ScreenFilters, Select};
use crate::records::{Notification, NotificationKind, Priority};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationGrouping {
    #[default]
    None,
    /// Newest day first.
    Day,
    /// High, medium, low.
    Priority,
}

/// Notification center: newest first, optionally grouped.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilters {
    pub search: String,
    pub kind: Select<NotificationKind>,
    pub priority: Select<Priority>,
    pub unread_only: bool,
    pub group: NotificationGrouping,
}

impl ScreenFilters for NotificationFilters {
    type Record = Notification;

    fn searching(term: &str) -> Self {
        NotificationFilters {
            search: term.to_string(),
            ..Default::default()
        }
    }

    fn spec(&self) -> ViewSpec<'_, Notification> {
        let spec = ViewSpec::<Notification>::viewable()
            .search(self.search.as_str())
            .filter_if(!self.kind.is_all(), "kind", move |n: &Notification| {
                self.kind.accepts(&n.kind)
            })
            .filter_if(!self.priority.is_all(), "priority", move |n: &Notification| {
                self.priority.accepts(&n.priority)
            })
            .filter_if(self.unread_only, "unread", |n: &Notification| !n.read)
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));

        match self.group {
            NotificationGrouping::None => spec,
            NotificationGrouping::Day => spec.group_by(Notification::day).order_groups_by(|a, b| b.cmp(a)),
            NotificationGrouping::Priority => spec
                .group_by(|n| n.priority.label().to_string())
                .order_groups_by(by_priority_label),
        }
    }
}

fn by_priority_label(a: &str, b: &str) -> Ordering {
    let rank = |label: &str| label.parse::<Priority>().map_or(usize::MAX, Priority::rank);
    rank(a).cmp(&rank(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels_order_high_first() {
        assert_eq!(by_priority_label("high", "low"), Ordering::Less);
        assert_eq!(by_priority_label("medium", "high"), Ordering::Greater);
        assert_eq!(by_priority_label("unknown", "low"), Ordering::Greater);
    }
}
