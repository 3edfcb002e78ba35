//! Record shapes shown on the clinic dashboard screens.
//!
//! Every record derives (or implements) [`Viewable`], so the generic CLI
//! options can filter, group and sort any screen by field name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vaidya_view::{Field, Number, ViewChoice, Viewable};

use crate::error::ClinicError;

/// Declares a closed set of kebab-case labels with the view and parse glue.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl ViewChoice for $name {
            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ClinicError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ClinicError::UnknownChoice {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

choice_enum! {
    /// Where a patient is in their treatment.
    PatientStatus as "patient status" {
        Active => "active",
        NeedsAttention => "needs-attention",
        Completed => "completed",
        Paused => "paused",
    }
}

choice_enum! {
    SessionStatus as "session status" {
        Scheduled => "scheduled",
        InProgress => "in-progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

choice_enum! {
    NotificationKind as "notification kind" {
        Appointment => "appointment",
        Reminder => "reminder",
        Alert => "alert",
        System => "system",
        Feedback => "feedback",
    }
}

choice_enum! {
    /// Notification urgency. Declaration order is the display order.
    Priority as "priority" {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

choice_enum! {
    DocumentCategory as "document category" {
        Report => "report",
        Prescription => "prescription",
        Consent => "consent",
        Invoice => "invoice",
        Other => "other",
    }
}

choice_enum! {
    ResourceFormat as "resource format" {
        Article => "article",
        Video => "video",
        Guide => "guide",
    }
}

choice_enum! {
    FeedbackStatus as "feedback status" {
        New => "new",
        Reviewed => "reviewed",
        Resolved => "resolved",
    }
}

impl Priority {
    /// Position in the display order, highest first.
    pub fn rank(self) -> usize {
        Priority::ALL.iter().position(|p| *p == self).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Viewable)]
pub struct Patient {
    #[view(number)]
    pub id: u32,
    #[view(search)]
    pub name: String,
    #[view(number)]
    pub age: u8,
    #[view(text)]
    pub dosha: String,
    #[view(search)]
    pub condition: String,
    #[view(choice)]
    pub status: PatientStatus,
    #[view(search)]
    pub practitioner: String,
    /// ISO date of the next booked session.
    #[serde(default)]
    #[view(text)]
    pub next_session: Option<String>,
    /// Treatment progress, 0 to 100.
    #[view(number)]
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Viewable)]
pub struct Session {
    #[view(number)]
    pub id: u32,
    #[view(search)]
    pub patient: String,
    #[view(search)]
    pub therapy: String,
    /// ISO date, so lexical order is chronological.
    #[view(text)]
    pub date: String,
    /// `HH:MM`, 24-hour.
    #[view(text)]
    pub time: String,
    #[view(number)]
    pub duration_minutes: u32,
    #[view(text)]
    pub room: String,
    #[view(choice)]
    pub status: SessionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Viewable)]
pub struct Notification {
    #[view(number)]
    pub id: u32,
    #[view(search)]
    pub title: String,
    #[view(search)]
    pub message: String,
    #[view(choice)]
    pub kind: NotificationKind,
    #[view(choice)]
    pub priority: Priority,
    #[serde(default)]
    #[view(flag)]
    pub read: bool,
    /// Epoch milliseconds.
    #[view(timestamp)]
    pub created_at: i64,
}

impl Notification {
    /// UTC calendar day of `created_at`, as `YYYY-MM-DD`.
    pub fn day(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(self.created_at)
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub category: DocumentCategory,
    pub patient: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO date.
    pub uploaded_on: String,
}

impl Viewable for Document {
    fn field_value(&self, field: &str) -> Field<'_> {
        match field {
            "id" => Field::Number(Number::from(self.id)),
            "title" => Field::Text(&self.title),
            "category" => Field::Choice(self.category.label()),
            "patient" => Field::Text(&self.patient),
            "uploaded_on" => Field::Text(&self.uploaded_on),
            _ => Field::Missing,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.title.as_str(), self.patient.as_str()];
        text.extend(self.tags.iter().map(String::as_str));
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    /// Free-form topic, such as "nutrition" or "yoga".
    pub category: String,
    pub format: ResourceFormat,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_minutes: u32,
}

impl Viewable for Resource {
    fn field_value(&self, field: &str) -> Field<'_> {
        match field {
            "id" => Field::Number(Number::from(self.id)),
            "title" => Field::Text(&self.title),
            "category" => Field::Text(&self.category),
            "format" => Field::Choice(self.format.label()),
            "read_minutes" => Field::Number(Number::from(self.read_minutes)),
            _ => Field::Missing,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.title.as_str()];
        text.extend(self.tags.iter().map(String::as_str));
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Viewable)]
pub struct Feedback {
    #[view(number)]
    pub id: u32,
    #[view(search)]
    pub patient: String,
    #[view(search)]
    pub therapy: String,
    /// 1 to 5 stars.
    #[view(number)]
    pub rating: u8,
    #[view(search)]
    pub comment: String,
    /// ISO date.
    #[view(text)]
    pub submitted_on: String,
    #[view(choice)]
    pub status: FeedbackStatus,
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<4} {:<24} {:<16} {:>3}%  {}",
            self.id, self.name, self.status, self.progress, self.condition
        )?;
        if let Some(next) = &self.next_session {
            write!(f, "  (next {next})")?;
        }
        Ok(())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<24} {:<20} {:>3}m  {:<10} {}",
            self.time, self.patient, self.therapy, self.duration_minutes, self.room, self.status
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.read { ' ' } else { '*' };
        write!(
            f,
            "{marker} [{:<6}] {:<12} {}: {}",
            self.priority, self.kind, self.title, self.message
        )
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<32} {:<12} {}",
            self.uploaded_on, self.title, self.category, self.patient
        )?;
        if !self.tags.is_empty() {
            write!(f, "  [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<36} {:<8} {:<12} {:>3} min",
            self.title, self.format, self.category, self.read_minutes
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {:<24} {:<20} {:<9} {}",
            self.submitted_on,
            "*".repeat(usize::from(self.rating.min(5))),
            self.patient,
            self.therapy,
            self.status,
            self.comment
        )
    }
}
