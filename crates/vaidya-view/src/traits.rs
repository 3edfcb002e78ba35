//! Record access traits.
//!
//! [`Viewable`] lets the engine read fields by name, which is what the
//! field-based helpers on [`ViewSpec`](crate::ViewSpec) build on. It is
//! usually derived with `#[derive(Viewable)]` (feature `derive`), but a
//! manual impl is the way to go when a record's search text is not a plain
//! set of fields, for example a tag list.

use crate::field::{Field, Timestamp};

/// A record whose fields can be read by name.
///
/// # Manual implementation
///
/// ```
/// use vaidya_view::{Field, Viewable};
///
/// struct Document {
///     title: String,
///     tags: Vec<String>,
/// }
///
/// impl Viewable for Document {
///     const SEARCH_FIELDS: &'static [&'static str] = &["title"];
///
///     fn field_value(&self, field: &str) -> Field<'_> {
///         match field {
///             "title" => Field::Text(&self.title),
///             _ => Field::Missing,
///         }
///     }
///
///     fn search_text(&self) -> Vec<&str> {
///         let mut text = vec![self.title.as_str()];
///         text.extend(self.tags.iter().map(String::as_str));
///         text
///     }
/// }
/// ```
pub trait Viewable {
    /// Fields searched by default when a spec has a search term but no
    /// explicit extraction function.
    const SEARCH_FIELDS: &'static [&'static str] = &[];

    /// Returns the value of `field`, or [`Field::Missing`] for unknown names.
    fn field_value(&self, field: &str) -> Field<'_>;

    /// Text that a free-text search term is matched against.
    fn search_text(&self) -> Vec<&str> {
        Self::SEARCH_FIELDS
            .iter()
            .filter_map(|name| self.field_value(name).as_text())
            .collect()
    }

    /// Function-pointer form of [`Viewable::field_value`].
    fn accessor<'a>(record: &'a Self, field: &str) -> Field<'a>
    where
        Self: Sized,
    {
        record.field_value(field)
    }
}

/// Closed set of values exposed as [`Field::Choice`].
///
/// Labels are what users type into filters (`status=needs-attention`), so
/// keep them stable and lowercase.
///
/// ```
/// use vaidya_view::ViewChoice;
///
/// enum Priority {
///     Low,
///     High,
/// }
///
/// impl ViewChoice for Priority {
///     fn label(&self) -> &'static str {
///         match self {
///             Priority::Low => "low",
///             Priority::High => "high",
///         }
///     }
/// }
/// ```
pub trait ViewChoice {
    fn label(&self) -> &'static str;
}

/// Conversion into a [`Timestamp`] for [`Field::Instant`] fields.
pub trait ViewTimestamp {
    fn view_timestamp(&self) -> Timestamp;
}

impl ViewTimestamp for i64 {
    fn view_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl ViewTimestamp for u64 {
    fn view_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl ViewTimestamp for Timestamp {
    fn view_timestamp(&self) -> Timestamp {
        *self
    }
}
