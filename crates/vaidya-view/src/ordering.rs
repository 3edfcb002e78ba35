//! Sort direction, field sort keys and field comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;
use crate::field::Field;
use crate::traits::Viewable;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort by one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub dir: Dir,
}

impl SortKey {
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            field: field.into(),
            dir,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Desc)
    }

    /// Parses `field`, `field:asc`, `field:desc` or `-field`.
    ///
    /// ```
    /// use vaidya_view::{Dir, SortKey};
    ///
    /// assert_eq!(SortKey::parse("-date").unwrap(), SortKey::desc("date"));
    /// assert_eq!(SortKey::parse("name:asc").unwrap().dir, Dir::Asc);
    /// assert!(SortKey::parse("name:sideways").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ViewError> {
        let invalid = || ViewError::InvalidSortKey(input.to_string());
        let input_trimmed = input.trim();

        let (field, dir) = if let Some(field) = input_trimmed.strip_prefix('-') {
            (field, Dir::Desc)
        } else if let Some((field, dir)) = input_trimmed.rsplit_once(':') {
            let dir = match dir.to_ascii_lowercase().as_str() {
                "asc" => Dir::Asc,
                "desc" => Dir::Desc,
                _ => return Err(invalid()),
            };
            (field, dir)
        } else {
            (input_trimmed, Dir::Asc)
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(invalid());
        }
        Ok(SortKey::new(field, dir))
    }

    /// Compares two records on this key.
    pub fn compare<T: Viewable>(&self, a: &T, b: &T) -> Ordering {
        compare_fields(
            &a.field_value(&self.field),
            &b.field_value(&self.field),
            self.dir,
        )
    }
}

impl FromStr for SortKey {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::parse(s)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.dir)
    }
}

/// Compares two field values in the given direction.
///
/// `Missing` sorts after present values in both directions, so records
/// without a next session stay at the bottom of the list either way.
/// Values of different kinds order by kind (numbers, instants, flags, then
/// text), and NaN sorts after every other number, so this is a total order.
pub fn compare_fields(a: &Field<'_>, b: &Field<'_>, dir: Dir) -> Ordering {
    match (a, b) {
        (Field::Missing, Field::Missing) => Ordering::Equal,
        (Field::Missing, _) => Ordering::Greater,
        (_, Field::Missing) => Ordering::Less,
        _ => dir.apply(compare_present(a, b)),
    }
}

fn compare_present(a: &Field<'_>, b: &Field<'_>) -> Ordering {
    match (a, b) {
        (Field::Number(x), Field::Number(y)) => x
            .compare(*y)
            .unwrap_or_else(|| x.to_f64().total_cmp(&y.to_f64())),
        (Field::Instant(x), Field::Instant(y)) => x.cmp(y),
        (Field::Flag(x), Field::Flag(y)) => x.cmp(y),
        _ => match (a.as_text(), b.as_text()) {
            (Some(x), Some(y)) => compare_text(x, y),
            _ => kind_rank(a).cmp(&kind_rank(b)),
        },
    }
}

// Text and choices share a rank: both compare as text.
fn kind_rank(field: &Field<'_>) -> u8 {
    match field {
        Field::Number(_) => 0,
        Field::Instant(_) => 1,
        Field::Flag(_) => 2,
        Field::Text(_) | Field::Choice(_) => 3,
        Field::Missing => 4,
    }
}

// Case-insensitive first so "raj" sits next to "Raj"; raw bytes break ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = if a.is_ascii() && b.is_ascii() {
        a.bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
    } else {
        a.to_lowercase().cmp(&b.to_lowercase())
    };
    folded.then_with(|| a.cmp(b))
}

/// Compares two records by a list of keys, the first being primary.
pub fn compare_by_keys<T: Viewable>(a: &T, b: &T, keys: &[SortKey]) -> Ordering {
    keys.iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
