//! Runtime field values read from records.
//!
//! A [`Field`] is what a [`Viewable`](crate::Viewable) record hands back when
//! the engine asks for one of its fields by name. Values borrow from the
//! record, so reading a field never allocates.

use std::cmp::Ordering;

/// A field value borrowed from a record.
///
/// # Example
///
/// ```
/// use vaidya_view::{Field, Number};
///
/// struct Patient {
///     name: String,
///     age: u8,
/// }
///
/// fn field<'a>(p: &'a Patient, name: &str) -> Field<'a> {
///     match name {
///         "name" => Field::Text(&p.name),
///         "age" => Field::Number(Number::from(p.age)),
///         _ => Field::Missing,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Field<'a> {
    /// Free text (names, titles, ISO dates).
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Point in time.
    Instant(Timestamp),
    /// Label of a closed set of values (status, category, priority).
    Choice(&'static str),
    /// Boolean flag.
    Flag(bool),
    /// Field absent, empty optional, or unknown name.
    Missing,
}

impl<'a> Field<'a> {
    /// Returns `true` for [`Field::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    /// Returns the text of `Text` and `Choice` values.
    ///
    /// This is what search and text clauses look at.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Field::Text(s) => Some(s),
            Field::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Field::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<Timestamp> {
        match self {
            Field::Instant(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Field::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the value kind, used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Text(_) => "text",
            Field::Number(_) => "number",
            Field::Instant(_) => "instant",
            Field::Choice(_) => "choice",
            Field::Flag(_) => "flag",
            Field::Missing => "missing",
        }
    }

    /// Renders the value as an owned group key.
    ///
    /// `Missing` becomes the empty string, which is also the key of the
    /// implicit single group.
    pub fn to_key(&self) -> String {
        match self {
            Field::Text(s) => (*s).to_string(),
            Field::Choice(s) => (*s).to_string(),
            Field::Number(n) => n.to_string(),
            Field::Instant(t) => t.as_millis().to_string(),
            Field::Flag(b) => b.to_string(),
            Field::Missing => String::new(),
        }
    }
}

impl<'a> From<&'a str> for Field<'a> {
    fn from(s: &'a str) -> Self {
        Field::Text(s)
    }
}

impl<'a> From<&'a String> for Field<'a> {
    fn from(s: &'a String) -> Self {
        Field::Text(s.as_str())
    }
}

impl<'a, 'b: 'a> From<&'a &'b str> for Field<'a> {
    fn from(s: &'a &'b str) -> Self {
        Field::Text(s)
    }
}

impl<'a> From<&'a Option<String>> for Field<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(Field::Missing, Field::Text)
    }
}

impl<'a, 'b: 'a> From<&'a Option<&'b str>> for Field<'a> {
    fn from(value: &'a Option<&'b str>) -> Self {
        match value {
            Some(s) => Field::Text(s),
            None => Field::Missing,
        }
    }
}

/// Numeric value: integers stay exact, floats compare through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    /// Compares two numbers. `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::Int(n as i64)
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

// u64/usize above i64::MAX lose exactness; clinic counters never get there.
impl From<u64> for Number {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Number::Float(n as f64), Number::Int)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::from(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Float(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

/// Milliseconds since the Unix epoch.
///
/// ```
/// use vaidya_view::Timestamp;
///
/// assert!(Timestamp::from_secs(1) < Timestamp::from_millis(1500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1000)
    }

    /// Whole days since the epoch, handy as a "same day" group key.
    pub fn day_index(self) -> i64 {
        self.0.div_euclid(86_400_000)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_view_covers_choice() {
        assert_eq!(Field::Text("Priya").as_text(), Some("Priya"));
        assert_eq!(Field::Choice("active").as_text(), Some("active"));
        assert_eq!(Field::Flag(true).as_text(), None);
        assert_eq!(Field::Missing.as_text(), None);
    }

    #[test]
    fn option_fields_become_missing() {
        let none: Option<String> = None;
        let some = Some("2024-12-15".to_string());
        assert_eq!(Field::from(&none), Field::Missing);
        assert_eq!(Field::from(&some), Field::Text("2024-12-15"));

        let borrowed: Option<&str> = Some("Dec 16");
        assert_eq!(Field::from(&borrowed), Field::Text("Dec 16"));
        assert_eq!(Field::from(&None::<&str>), Field::Missing);
    }

    #[test]
    fn keys() {
        assert_eq!(Field::Text("Dec 15").to_key(), "Dec 15");
        assert_eq!(Field::Choice("high").to_key(), "high");
        assert_eq!(Field::Number(Number::Int(4)).to_key(), "4");
        assert_eq!(Field::Flag(false).to_key(), "false");
        assert_eq!(Field::Missing.to_key(), "");
    }

    #[test]
    fn mixed_number_comparison() {
        assert_eq!(
            Number::Int(3).compare(Number::Float(3.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::Int(7).compare(Number::Int(7)),
            Some(Ordering::Equal)
        );
        assert_eq!(Number::Float(f64::NAN).compare(Number::Int(1)), None);
    }

    #[test]
    fn large_unsigned_falls_back_to_float() {
        assert_eq!(Number::from(5u64), Number::Int(5));
        assert!(matches!(Number::from(u64::MAX), Number::Float(_)));
    }

    #[test]
    fn timestamp_days() {
        let ts = Timestamp::from_millis(86_400_000 * 3 + 5);
        assert_eq!(ts.day_index(), 3);
        assert_eq!(Timestamp::from_millis(-1).day_index(), -1);
        assert_eq!(Timestamp::from_secs(2).as_millis(), 2000);
    }
}
