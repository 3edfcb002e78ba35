use vaidya_view::ViewSpec;

use super::{by_text, ScreenFilters, Select};
use crate::records::{Resource, ResourceFormat};

/// Patient education library, alphabetical.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilters {
    pub search: String,
    pub category: Select<String>,
    pub format: Select<ResourceFormat>,
}

impl ScreenFilters for ResourceFilters {
    type Record = Resource;

    fn searching(term: &str) -> Self {
        ResourceFilters {
            search: term.to_string(),
            ..Default::default()
        }
    }

    fn spec(&self) -> ViewSpec<'_, Resource> {
        ViewSpec::<Resource>::viewable()
            .search(self.search.as_str())
            .filter_if(!self.category.is_all(), "category", move |r: &Resource| {
                self.category.accepts_text(&r.category)
            })
            .filter_if(!self.format.is_all(), "format", move |r: &Resource| {
                self.format.accepts(&r.format)
            })
            .sort_by(|a, b| by_text(&a.title, &b.title))
    }
}
