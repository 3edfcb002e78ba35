//! Per-screen filter state, turned into [`ViewSpec`]s.
//!
//! Each dashboard screen keeps a small struct of UI state (search box,
//! dropdowns, toggles). [`ScreenFilters::spec`] turns that state into a spec
//! that borrows it, so building a view never copies the filter values.

mod documents;
mod feedback;
mod notifications;
mod patients;
mod resources;
mod sessions;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::Serialize;
use vaidya_view::{ViewSpec, Viewable};

pub use documents::DocumentFilters;
pub use feedback::FeedbackFilters;
pub use notifications::{NotificationFilters, NotificationGrouping};
pub use patients::{PatientFilters, PatientSort};
pub use resources::ResourceFilters;
pub use sessions::SessionFilters;

/// Filter state for one screen.
pub trait ScreenFilters {
    type Record: Viewable + Serialize + fmt::Display;

    /// Filter state with only the search box filled in.
    fn searching(term: &str) -> Self
    where
        Self: Sized;

    fn spec(&self) -> ViewSpec<'_, Self::Record>;
}

/// The dashboard screens, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Patients,
    Sessions,
    Notifications,
    Documents,
    Resources,
    Feedback,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Patients => "patients",
            Screen::Sessions => "sessions",
            Screen::Notifications => "notifications",
            Screen::Documents => "documents",
            Screen::Resources => "resources",
            Screen::Feedback => "feedback",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dropdown value: either the "all" tab or one concrete choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Select<T> {
    All,
    Only(T),
}

impl<T> Default for Select<T> {
    fn default() -> Self {
        Select::All
    }
}

impl<T> Select<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Select::All)
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Select::All => None,
            Select::Only(value) => Some(value),
        }
    }

    /// True for the "all" tab, else whatever `test` says about the choice.
    pub fn allows(&self, test: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Select::All => true,
            Select::Only(value) => test(value),
        }
    }

    pub fn accepts(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.allows(|selected| selected == value)
    }
}

impl Select<String> {
    /// Case-insensitive match for free-form dropdowns.
    pub fn accepts_text(&self, value: &str) -> bool {
        self.allows(|selected| selected.eq_ignore_ascii_case(value))
    }
}

impl<T> From<T> for Select<T> {
    fn from(value: T) -> Self {
        Select::Only(value)
    }
}

impl<T: FromStr> FromStr for Select<T> {
    type Err = T::Err;

    /// `all` (any case) and the empty string both mean no filter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Select::All)
        } else {
            s.parse().map(Select::Only)
        }
    }
}

/// Orders ISO dates chronologically. Unparseable dates go last, by text.
pub(crate) fn by_date(a: &str, b: &str) -> Ordering {
    chronological(a, b, |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Orders `HH:MM` times chronologically, so `9:30` comes before `10:00`.
pub(crate) fn by_time(a: &str, b: &str) -> Ordering {
    chronological(a, b, |s| NaiveTime::parse_from_str(s, "%H:%M").ok())
}

fn chronological<V: Ord>(a: &str, b: &str, parse: impl Fn(&str) -> Option<V>) -> Ordering {
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Case-folded comparison for names and titles, raw text as tie-breaker.
pub(crate) fn by_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
