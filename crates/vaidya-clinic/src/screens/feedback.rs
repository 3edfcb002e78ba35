use vaidya_view::ViewSpec;

use super::{by_date, ScreenFilters, Select};
use crate::records::{Feedback, FeedbackStatus};

/// Patient feedback: newest first, optionally one group per star rating.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilters {
    pub search: String,
    /// Keeps ratings at or above this many stars.
    pub min_rating: Option<u8>,
    pub status: Select<FeedbackStatus>,
    /// Highest rating first.
    pub group_by_rating: bool,
}

impl ScreenFilters for FeedbackFilters {
    type Record = Feedback;

    fn searching(term: &str) -> Self {
        FeedbackFilters {
            search: term.to_string(),
            ..Default::default()
        }
    }

    fn spec(&self) -> ViewSpec<'_, Feedback> {
        let spec = ViewSpec::<Feedback>::viewable()
            .search(self.search.as_str())
            .filter_if(self.min_rating.is_some(), "min_rating", move |f: &Feedback| {
                self.min_rating.map_or(true, |min| f.rating >= min)
            })
            .filter_if(!self.status.is_all(), "status", move |f: &Feedback| {
                self.status.accepts(&f.status)
            })
            .sort_by(|a, b| by_date(&b.submitted_on, &a.submitted_on));

        if self.group_by_rating {
            spec.group_by(|f| rating_label(f.rating))
                .order_groups_by(|a, b| stars(b).cmp(&stars(a)))
        } else {
            spec
        }
    }
}

fn rating_label(rating: u8) -> String {
    if rating == 1 {
        "1 star".to_string()
    } else {
        format!("{rating} stars")
    }
}

fn stars(label: &str) -> u8 {
    label
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_labels() {
        assert_eq!(rating_label(1), "1 star");
        assert_eq!(rating_label(4), "4 stars");
        assert_eq!(stars("4 stars"), 4);
        assert_eq!(stars("unrated"), 0);
    }
}
