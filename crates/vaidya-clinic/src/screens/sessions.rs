use vaidya_view::ViewSpec;

use super::{by_date, by_time, ScreenFilters, Select};
use crate::records::{Session, SessionStatus};

/// Schedule screen: one group per day, earliest day first, sessions by time.
#[derive(Debug, Clone, Default)]
pub struct SessionFilters {
    pub search: String,
    pub status: Select<SessionStatus>,
    /// ISO date.
    pub date: Select<String>,
}

impl ScreenFilters for SessionFilters {
    type Record = Session;

    fn searching(term: &str) -> Self {
        SessionFilters {
            search: term.to_string(),
            ..Default::default()
        }
    }

    fn spec(&self) -> ViewSpec<'_, Session> {
        ViewSpec::<Session>::viewable()
            .search(self.search.as_str())
            .filter_if(!self.status.is_all(), "status", move |s: &Session| {
                self.status.accepts(&s.status)
            })
            .filter_if(!self.date.is_all(), "date", move |s: &Session| {
                self.date.accepts(&s.date)
            })
            .group_by(|s| s.date.clone())
            .order_groups_by(by_date)
            .sort_by(|a, b| by_time(&a.time, &b.time))
    }
}
