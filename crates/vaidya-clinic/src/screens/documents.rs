use vaidya_view::{ViewChoice, ViewSpec};

use super::{by_date, by_text, ScreenFilters, Select};
use crate::records::{Document, DocumentCategory};

/// Document library: newest uploads first.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilters {
    pub search: String,
    pub category: Select<DocumentCategory>,
    /// Groups follow the category declaration order.
    pub group_by_category: bool,
}

impl ScreenFilters for DocumentFilters {
    type Record = Document;

    fn searching(term: &str) -> Self {
        DocumentFilters {
            search: term.to_string(),
            ..Default::default()
        }
    }

    fn spec(&self) -> ViewSpec<'_, Document> {
        let spec = ViewSpec::<Document>::viewable()
            .search(self.search.as_str())
            .filter_if(!self.category.is_all(), "category", move |d: &Document| {
                self.category.accepts(&d.category)
            })
            .sort_by(|a, b| by_date(&b.uploaded_on, &a.uploaded_on))
            .then_by(|a, b| by_text(&a.title, &b.title));

        if self.group_by_category {
            spec.group_by(|d| d.category.label().to_string())
                .order_groups_by(|a, b| category_rank(a).cmp(&category_rank(b)))
        } else {
            spec
        }
    }
}

fn category_rank(label: &str) -> usize {
    DocumentCategory::ALL
        .iter()
        .position(|c| c.label() == label)
        .unwrap_or(usize::MAX)
}
