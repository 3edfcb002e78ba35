use vaidya_view::{SortKey, ViewSpec};

use super::{by_text, ScreenFilters, Select};
use crate::records::{Patient, PatientStatus};

/// Sort options of the patient list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatientSort {
    #[default]
    Name,
    /// Most progressed first.
    Progress,
    /// Soonest first; patients without a booking go last.
    NextSession,
}

#[derive(Debug, Clone, Default)]
pub struct PatientFilters {
    pub search: String,
    pub status: Select<PatientStatus>,
    pub dosha: Select<String>,
    pub sort: PatientSort,
    pub group_by_status: bool,
}

impl ScreenFilters for PatientFilters {
    type Record = Patient;

    fn searching(term: &str) -> Self {
        PatientFilters {
            search: term.to_string(),
            ..Default::default()
        }
    }

    fn spec(&self) -> ViewSpec<'_, Patient> {
        let spec = ViewSpec::<Patient>::viewable()
            .search(self.search.as_str())
            .filter_if(!self.status.is_all(), "status", move |p: &Patient| {
                self.status.accepts(&p.status)
            })
            .filter_if(!self.dosha.is_all(), "dosha", move |p: &Patient| {
                self.dosha.accepts_text(&p.dosha)
            });

        let spec = match self.sort {
            PatientSort::Name => spec.sort_by(|a, b| by_text(&a.name, &b.name)),
            PatientSort::Progress => spec.sort_by(|a, b| b.progress.cmp(&a.progress)),
            PatientSort::NextSession => spec.sort_by_keys(vec![SortKey::asc(Patient::NEXT_SESSION)]),
        };

        if self.group_by_status {
            spec.group_by_field(Patient::STATUS)
        } else {
            spec
        }
    }
}
