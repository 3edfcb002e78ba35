//! Screen filters against the fixture dataset.

use vaidya_clinic::records::{
    DocumentCategory, FeedbackStatus, NotificationKind, PatientStatus, Priority, ResourceFormat,
    SessionStatus,
};
use vaidya_clinic::screens::{
    DocumentFilters, FeedbackFilters, NotificationFilters, NotificationGrouping, PatientFilters,
    PatientSort, ResourceFilters, ScreenFilters, Select, SessionFilters,
};
use vaidya_clinic::Dataset;
use vaidya_view::{query, View};

fn dataset() -> Dataset {
    Dataset::from_json(include_str!("fixtures/clinic.json")).unwrap()
}

fn ids<T>(view: &View<'_, T>, id: impl Fn(&T) -> u32) -> Vec<u32> {
    view.iter().map(id).collect()
}

// ============================================================================
// Patients
// ============================================================================

#[test]
fn patients_default_to_name_order() {
    let data = dataset();
    let filters = PatientFilters::default();
    let view = query(&data.patients, &filters.spec());
    assert_eq!(view.group_count(), 1);
    assert_eq!(ids(&view, |p| p.id), vec![4, 5, 3, 1, 2]);
}

#[test]
fn patients_status_tab_and_search() {
    let data = dataset();
    let filters = PatientFilters {
        status: Select::Only(PatientStatus::Active),
        ..PatientFilters::searching("SHARMA")
    };
    let view = query(&data.patients, &filters.spec());
    assert_eq!(ids(&view, |p| p.id), vec![4, 1]);
}

#[test]
fn patients_search_covers_practitioner() {
    let data = dataset();
    let filters = PatientFilters::searching("menon");
    let view = query(&data.patients, &filters.spec());
    assert_eq!(ids(&view, |p| p.id), vec![4, 2]);
}

#[test]
fn patients_dosha_filter_ignores_case() {
    let data = dataset();
    let filters = PatientFilters {
        dosha: Select::Only("vata".to_string()),
        ..Default::default()
    };
    let view = query(&data.patients, &filters.spec());
    assert_eq!(ids(&view, |p| p.id), vec![4, 1]);
}

#[test]
fn patients_by_next_session_put_unbooked_last() {
    let data = dataset();
    let filters = PatientFilters {
        sort: PatientSort::NextSession,
        ..Default::default()
    };
    let view = query(&data.patients, &filters.spec());
    assert_eq!(ids(&view, |p| p.id), vec![4, 1, 2, 3, 5]);
}

#[test]
fn patients_grouped_by_status_sorted_by_progress() {
    let data = dataset();
    let filters = PatientFilters {
        sort: PatientSort::Progress,
        group_by_status: true,
        ..Default::default()
    };
    let view = query(&data.patients, &filters.spec());
    assert_eq!(
        view.keys(),
        vec!["active", "needs-attention", "completed", "paused"]
    );
    let active = view.group("active").unwrap();
    assert_eq!(
        active.members().iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 4]
    );
}

#[test]
fn patients_empty_tab_gives_no_groups() {
    let data = dataset();
    let filters = PatientFilters {
        status: Select::Only(PatientStatus::Paused),
        ..PatientFilters::searching("sharma")
    };
    assert_eq!(query(&data.patients, &filters.spec()).group_count(), 0);
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn sessions_grouped_by_day_in_time_order() {
    let data = dataset();
    let filters = SessionFilters::default();
    let view = query(&data.sessions, &filters.spec());

    assert_eq!(view.keys(), vec!["2024-12-15", "2024-12-16"]);
    let day = |key: &str| {
        view.group(key)
            .unwrap()
            .members()
            .iter()
            .map(|s| s.id)
            .collect::<Vec<_>>()
    };
    assert_eq!(day("2024-12-15"), vec![4, 2]);
    assert_eq!(day("2024-12-16"), vec![3, 1]);
}

#[test]
fn sessions_status_and_date_filters() {
    let data = dataset();
    let filters = SessionFilters {
        status: Select::Only(SessionStatus::Scheduled),
        date: Select::Only("2024-12-16".to_string()),
        ..Default::default()
    };
    let view = query(&data.sessions, &filters.spec());
    assert_eq!(view.keys(), vec!["2024-12-16"]);
    assert_eq!(ids(&view, |s| s.id), vec![3, 1]);
}

#[test]
fn sessions_search_therapy() {
    let data = dataset();
    let filters = SessionFilters::searching("abhy");
    let view = query(&data.sessions, &filters.spec());
    assert_eq!(ids(&view, |s| s.id), vec![2]);
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn notifications_newest_first() {
    let data = dataset();
    let filters = NotificationFilters::default();
    let view = query(&data.notifications, &filters.spec());
    assert_eq!(ids(&view, |n| n.id), vec![4, 2, 3, 1]);
}

#[test]
fn notifications_unread_only_by_priority() {
    let data = dataset();
    let filters = NotificationFilters {
        unread_only: true,
        group: NotificationGrouping::Priority,
        ..Default::default()
    };
    let view = query(&data.notifications, &filters.spec());
    assert_eq!(view.keys(), vec!["high", "low"]);
    assert_eq!(ids(&view, |n| n.id), vec![2, 4, 3]);
}

#[test]
fn notifications_grouped_by_day_newest_day_first() {
    let data = dataset();
    let filters = NotificationFilters {
        group: NotificationGrouping::Day,
        ..Default::default()
    };
    let view = query(&data.notifications, &filters.spec());
    assert_eq!(view.keys(), vec!["2024-12-16", "2024-12-15"]);
    assert_eq!(ids(&view, |n| n.id), vec![4, 2, 3, 1]);
}

#[test]
fn notifications_kind_and_priority_tabs() {
    let data = dataset();
    let filters = NotificationFilters {
        kind: Select::Only(NotificationKind::Alert),
        priority: Select::Only(Priority::High),
        ..Default::default()
    };
    let view = query(&data.notifications, &filters.spec());
    assert_eq!(ids(&view, |n| n.id), vec![2]);

    let filters = NotificationFilters {
        kind: Select::Only(NotificationKind::Reminder),
        ..Default::default()
    };
    assert!(query(&data.notifications, &filters.spec()).is_empty());
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn documents_newest_first_with_title_tie_break() {
    let data = dataset();
    let filters = DocumentFilters::default();
    let view = query(&data.documents, &filters.spec());
    assert_eq!(ids(&view, |d| d.id), vec![3, 2, 1, 4]);
}

#[test]
fn documents_search_matches_tags() {
    let data = dataset();
    let filters = DocumentFilters::searching("billing");
    let view = query(&data.documents, &filters.spec());
    assert_eq!(ids(&view, |d| d.id), vec![4]);
}

#[test]
fn documents_grouped_by_category_in_declared_order() {
    let data = dataset();
    let filters = DocumentFilters {
        group_by_category: true,
        ..Default::default()
    };
    let view = query(&data.documents, &filters.spec());
    assert_eq!(
        view.keys(),
        vec!["report", "prescription", "consent", "invoice"]
    );

    let filters = DocumentFilters {
        category: Select::Only(DocumentCategory::Consent),
        ..Default::default()
    };
    let view = query(&data.documents, &filters.spec());
    assert_eq!(ids(&view, |d| d.id), vec![3]);
}

// ============================================================================
// Resources
// ============================================================================

#[test]
fn resources_alphabetical_ignoring_case() {
    let data = dataset();
    let filters = ResourceFilters::default();
    let view = query(&data.resources, &filters.spec());
    assert_eq!(ids(&view, |r| r.id), vec![2, 3, 1]);
}

#[test]
fn resources_category_and_format() {
    let data = dataset();
    let filters = ResourceFilters {
        category: Select::Only("sleep".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&query(&data.resources, &filters.spec()), |r| r.id), vec![1]);

    let filters = ResourceFilters {
        format: Select::Only(ResourceFormat::Guide),
        ..ResourceFilters::searching("VATA")
    };
    assert_eq!(ids(&query(&data.resources, &filters.spec()), |r| r.id), vec![3]);
}

// ============================================================================
// Feedback
// ============================================================================

#[test]
fn feedback_minimum_rating_newest_first() {
    let data = dataset();
    let filters = FeedbackFilters {
        min_rating: Some(4),
        ..Default::default()
    };
    let view = query(&data.feedback, &filters.spec());
    assert_eq!(ids(&view, |f| f.id), vec![3, 1, 4]);
}

#[test]
fn feedback_grouped_by_rating_highest_first() {
    let data = dataset();
    let filters = FeedbackFilters {
        group_by_rating: true,
        ..Default::default()
    };
    let view = query(&data.feedback, &filters.spec());
    assert_eq!(view.keys(), vec!["5 stars", "4 stars", "2 stars"]);
    assert_eq!(ids(&view, |f| f.id), vec![1, 4, 3, 2]);
}

#[test]
fn feedback_status_and_search() {
    let data = dataset();
    let filters = FeedbackFilters {
        status: Select::Only(FeedbackStatus::New),
        ..FeedbackFilters::searching("knees")
    };
    let view = query(&data.feedback, &filters.spec());
    assert_eq!(ids(&view, |f| f.id), vec![3]);
}

#[test]
fn all_tabs_parse_to_no_filter() {
    let data = dataset();
    let filters = FeedbackFilters {
        status: "all".parse().unwrap(),
        ..Default::default()
    };
    assert_eq!(query(&data.feedback, &filters.spec()).len(), 4);
}
