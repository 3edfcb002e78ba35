//! Field clauses: declarative predicates over named fields.
//!
//! A [`Clause`] is the data form of a predicate like "status is active" or
//! "date on or after 2024-12-15". Dropdown filters and `--where` arguments
//! produce clauses; [`ViewSpec::where_clause`](crate::ViewSpec::where_clause)
//! turns them into predicates for any [`Viewable`](crate::Viewable) record.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

use crate::error::{Result, ViewError};
use crate::field::{Field, Number, Timestamp};
use crate::op::Op;
use crate::search::SearchTerm;

/// A single field predicate: `field op value`.
///
/// ```
/// use vaidya_view::{Clause, Field, Op};
///
/// let clause = Clause::new("status", Op::Eq, "Active");
/// assert!(clause.matches(&Field::Choice("active")));
/// assert!(!clause.matches(&Field::Choice("paused")));
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
}

/// Owned comparison value stored in a clause.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    Text(String),
    Number(Number),
    Instant(Timestamp),
    Flag(bool),
    /// Alternatives for [`Op::In`].
    Set(Vec<String>),
    Regex(Regex),
}

impl Clause {
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Shorthand for an [`Op::In`] clause over labels.
    pub fn one_of<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = values.into_iter().map(Into::into).collect();
        Clause::new(field, Op::In, ClauseValue::Set(set))
    }

    /// Builds a regex clause, failing on an invalid pattern.
    pub fn regex(field: impl Into<String>, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern)?;
        Ok(Clause::new(field, Op::Regex, ClauseValue::Regex(re)))
    }

    /// Parses `field<op>value`.
    ///
    /// | Syntax        | Meaning                     |
    /// |---------------|-----------------------------|
    /// | `f=v`         | equals (case-insensitive)   |
    /// | `f=a\|b\|c`   | one of                      |
    /// | `f!=v`        | not equal                   |
    /// | `f~v`         | contains                    |
    /// | `f^=v`, `f$=v`| starts / ends with          |
    /// | `f=~re`       | regex                       |
    /// | `f>v`, `f>=v`, `f<v`, `f<=v` | ordering     |
    ///
    /// `true`/`false` become flags and numeric literals become numbers;
    /// anything else stays text.
    ///
    /// ```
    /// use vaidya_view::{Clause, ClauseValue, Op};
    ///
    /// let c = Clause::parse("rating>=4").unwrap();
    /// assert_eq!(c.field, "rating");
    /// assert_eq!(c.op, Op::Gte);
    /// assert!(matches!(c.value, ClauseValue::Number(_)));
    ///
    /// let c = Clause::parse("status=active|paused").unwrap();
    /// assert_eq!(c.op, Op::In);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason| ViewError::InvalidClause {
            input: input.to_string(),
            reason,
        };

        let start = input
            .find(['=', '!', '~', '^', '$', '<', '>'])
            .ok_or_else(|| invalid("no operator found"))?;
        let field = input[..start].trim();
        if field.is_empty() {
            return Err(invalid("missing field name"));
        }

        let rest = &input[start..];
        let (op, value) = OPERATORS
            .iter()
            .find_map(|(token, op)| rest.strip_prefix(token).map(|value| (*op, value)))
            .ok_or_else(|| invalid("unknown operator"))?;
        if value.is_empty() {
            return Err(invalid("missing value"));
        }

        let clause = match op {
            Op::Regex => Clause::regex(field, value)?,
            Op::Eq if value.contains('|') => Clause::one_of(field, value.split('|')),
            op if op.is_text_only() => Clause::new(field, op, value),
            op => {
                let value = parse_literal(value);
                if matches!(value, ClauseValue::Flag(_)) && !matches!(op, Op::Eq | Op::Ne) {
                    return Err(ViewError::InvalidOperatorForKind {
                        op: op.as_str(),
                        value_kind: "flag",
                    });
                }
                Clause::new(field, op, value)
            }
        };

        tracing::trace!(clause = %clause, "parsed filter clause");
        Ok(clause)
    }

    /// Evaluates the clause against one field value.
    ///
    /// Missing fields never match, not even for [`Op::Ne`]. Values of
    /// incompatible kinds do not match either.
    pub fn matches(&self, field: &Field<'_>) -> bool {
        if field.is_missing() {
            return false;
        }
        match &self.value {
            ClauseValue::Text(pattern) => match field.as_text() {
                Some(text) => self.match_text(text, pattern),
                None => false,
            },
            ClauseValue::Set(set) => {
                self.op == Op::In && set.iter().any(|candidate| is_member(field, candidate))
            }
            ClauseValue::Regex(re) => match (self.op, field.as_text()) {
                (Op::Regex, Some(text)) => re.is_match(text),
                _ => false,
            },
            ClauseValue::Number(number) => match field {
                Field::Number(n) => self.match_ordering(n.compare(*number)),
                Field::Instant(t) => {
                    self.match_ordering(Number::Int(t.as_millis()).compare(*number))
                }
                // Numeric text such as a room number.
                Field::Text(text) => match text.trim().parse::<f64>() {
                    Ok(parsed) => self.match_ordering(Number::Float(parsed).compare(*number)),
                    Err(_) => false,
                },
                _ => false,
            },
            ClauseValue::Instant(ts) => match field {
                Field::Instant(t) => self.match_ordering(Some(t.cmp(ts))),
                _ => false,
            },
            ClauseValue::Flag(flag) => match (self.op, field.as_flag()) {
                (Op::Eq, Some(b)) => b == *flag,
                (Op::Ne, Some(b)) => b != *flag,
                _ => false,
            },
        }
    }

    fn match_text(&self, text: &str, pattern: &str) -> bool {
        match self.op {
            Op::Eq => eq_folded(text, pattern),
            Op::Ne => !eq_folded(text, pattern),
            Op::Contains => SearchTerm::new(pattern).matches(text),
            Op::StartsWith => text.to_lowercase().starts_with(&pattern.to_lowercase()),
            Op::EndsWith => text.to_lowercase().ends_with(&pattern.to_lowercase()),
            Op::Gt | Op::Gte | Op::Lt | Op::Lte => self.match_ordering(Some(text.cmp(pattern))),
            Op::Regex | Op::In => false,
        }
    }

    fn match_ordering(&self, ordering: Option<Ordering>) -> bool {
        ordering.is_some_and(|ordering| self.op.eval_ordering(ordering))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op.symbol(), self.value)
    }
}

impl fmt::Display for ClauseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseValue::Text(s) => f.write_str(s),
            ClauseValue::Number(n) => write!(f, "{n}"),
            ClauseValue::Instant(t) => write!(f, "{}", t.as_millis()),
            ClauseValue::Flag(b) => write!(f, "{b}"),
            ClauseValue::Set(set) => f.write_str(&set.join("|")),
            ClauseValue::Regex(re) => f.write_str(re.as_str()),
        }
    }
}

// Longest tokens first so `>=` wins over `>`.
const OPERATORS: &[(&str, Op)] = &[
    ("!=", Op::Ne),
    ("=~", Op::Regex),
    ("^=", Op::StartsWith),
    ("$=", Op::EndsWith),
    (">=", Op::Gte),
    ("<=", Op::Lte),
    ("=", Op::Eq),
    ("~", Op::Contains),
    (">", Op::Gt),
    ("<", Op::Lt),
];

fn parse_literal(value: &str) -> ClauseValue {
    match value {
        "true" => return ClauseValue::Flag(true),
        "false" => return ClauseValue::Flag(false),
        _ => {}
    }
    if let Ok(n) = value.parse::<i64>() {
        return ClauseValue::Number(Number::Int(n));
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => ClauseValue::Number(Number::Float(n)),
        _ => ClauseValue::Text(value.to_string()),
    }
}

/// Set alternatives are labels for text fields and literals for the rest.
fn is_member(field: &Field<'_>, candidate: &str) -> bool {
    if let Some(text) = field.as_text() {
        return eq_folded(text, candidate);
    }
    match (field, parse_literal(candidate.trim())) {
        (Field::Number(n), ClauseValue::Number(c)) => n.compare(c) == Some(Ordering::Equal),
        (Field::Instant(t), ClauseValue::Number(c)) => {
            Number::Int(t.as_millis()).compare(c) == Some(Ordering::Equal)
        }
        (Field::Flag(b), ClauseValue::Flag(c)) => *b == c,
        _ => false,
    }
}

fn eq_folded(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::Int(n))
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<u8> for ClauseValue {
    fn from(n: u8) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(Number::Float(n))
    }
}

impl From<Timestamp> for ClauseValue {
    fn from(t: Timestamp) -> Self {
        ClauseValue::Instant(t)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Flag(b)
    }
}

impl From<Regex> for ClauseValue {
    fn from(re: Regex) -> Self {
        ClauseValue::Regex(re)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_equality_ignores_case() {
        let clause = Clause::new("name", Op::Eq, "priya sharma");
        assert!(clause.matches(&Field::Text("Priya Sharma")));
        assert!(!clause.matches(&Field::Text("Priya")));

        let ne = Clause::new("status", Op::Ne, "active");
        assert!(ne.matches(&Field::Choice("paused")));
        assert!(!ne.matches(&Field::Choice("ACTIVE")));
    }

    #[test]
    fn missing_never_matches() {
        for op in [Op::Eq, Op::Ne, Op::Contains, Op::Lt] {
            assert!(!Clause::new("x", op, "a").matches(&Field::Missing));
        }
    }

    #[test]
    fn text_prefix_suffix_contains() {
        let field = Field::Text("Shirodhara therapy");
        assert!(Clause::new("t", Op::StartsWith, "SHIRO").matches(&field));
        assert!(Clause::new("t", Op::EndsWith, "Therapy").matches(&field));
        assert!(Clause::new("t", Op::Contains, "dhara").matches(&field));
        assert!(!Clause::new("t", Op::Contains, "abhy").matches(&field));
    }

    #[test]
    fn iso_dates_compare_as_text() {
        let after = Clause::new("date", Op::Gte, "2024-12-15");
        assert!(after.matches(&Field::Text("2024-12-15")));
        assert!(after.matches(&Field::Text("2024-12-16")));
        assert!(!after.matches(&Field::Text("2024-11-30")));
    }

    #[test]
    fn numbers_and_instants() {
        let clause = Clause::new("rating", Op::Gte, 4i64);
        assert!(clause.matches(&Field::Number(Number::Int(5))));
        assert!(!clause.matches(&Field::Number(Number::Int(3))));
        assert!(clause.matches(&Field::Text("4")));
        assert!(!clause.matches(&Field::Text("four")));

        let before = Clause::new("created_at", Op::Lt, 1_000i64);
        assert!(before.matches(&Field::Instant(Timestamp(999))));
        assert!(!before.matches(&Field::Instant(Timestamp(1_000))));

        let at = Clause::new("created_at", Op::Eq, Timestamp(5));
        assert!(at.matches(&Field::Instant(Timestamp(5))));
        assert!(!at.matches(&Field::Number(Number::Int(5))));
    }

    #[test]
    fn flags() {
        let unread = Clause::new("read", Op::Eq, false);
        assert!(unread.matches(&Field::Flag(false)));
        assert!(!unread.matches(&Field::Flag(true)));
        assert!(!unread.matches(&Field::Text("false")));
    }

    #[test]
    fn set_membership() {
        let clause = Clause::one_of("priority", ["high", "medium"]);
        assert!(clause.matches(&Field::Choice("high")));
        assert!(clause.matches(&Field::Text("Medium")));
        assert!(!clause.matches(&Field::Choice("low")));
    }

    #[test]
    fn set_membership_on_numbers_and_flags() {
        let top = Clause::parse("rating=4|5").unwrap();
        assert!(top.matches(&Field::Number(Number::Int(5))));
        assert!(top.matches(&Field::Number(Number::Float(4.0))));
        assert!(!top.matches(&Field::Number(Number::Int(3))));

        let ids = Clause::one_of("created_at", ["10", "20"]);
        assert!(ids.matches(&Field::Instant(Timestamp(20))));
        assert!(!ids.matches(&Field::Instant(Timestamp(15))));

        let either = Clause::one_of("read", ["true", "false"]);
        assert!(either.matches(&Field::Flag(false)));
        assert!(!Clause::one_of("read", ["yes"]).matches(&Field::Flag(true)));
    }

    #[test]
    fn regex_clause() {
        let clause = Clause::regex("time", r"^0[89]:").unwrap();
        assert!(clause.matches(&Field::Text("09:30")));
        assert!(!clause.matches(&Field::Text("14:00")));
        assert!(Clause::regex("time", "(").is_err());
    }

    #[test]
    fn parse_operators() {
        let cases = [
            ("status=active", Op::Eq),
            ("status!=active", Op::Ne),
            ("name~sharma", Op::Contains),
            ("name^=pri", Op::StartsWith),
            ("name$=rma", Op::EndsWith),
            ("time=~^09", Op::Regex),
            ("rating>3", Op::Gt),
            ("rating>=3", Op::Gte),
            ("rating<3", Op::Lt),
            ("rating<=3", Op::Lte),
            ("status=active|paused", Op::In),
        ];
        for (input, op) in cases {
            let clause = Clause::parse(input).unwrap();
            assert_eq!(clause.op, op, "{input}");
        }
    }

    #[test]
    fn parse_literals() {
        assert!(matches!(
            Clause::parse("read=false").unwrap().value,
            ClauseValue::Flag(false)
        ));
        assert!(matches!(
            Clause::parse("progress>=50").unwrap().value,
            ClauseValue::Number(Number::Int(50))
        ));
        assert!(matches!(
            Clause::parse("score<2.5").unwrap().value,
            ClauseValue::Number(Number::Float(_))
        ));
        assert!(matches!(
            Clause::parse("date>=2024-12-15").unwrap().value,
            ClauseValue::Text(_)
        ));
        // Text operators keep digits as text.
        assert!(matches!(
            Clause::parse("room~12").unwrap().value,
            ClauseValue::Text(_)
        ));
    }

    #[test]
    fn parse_trims_field_but_not_value() {
        let clause = Clause::parse(" name =Priya ").unwrap();
        assert_eq!(clause.field, "name");
        assert!(matches!(clause.value, ClauseValue::Text(ref v) if v == "Priya "));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Clause::parse("status"),
            Err(ViewError::InvalidClause { reason: "no operator found", .. })
        ));
        assert!(matches!(
            Clause::parse("=active"),
            Err(ViewError::InvalidClause { reason: "missing field name", .. })
        ));
        assert!(matches!(
            Clause::parse("status="),
            Err(ViewError::InvalidClause { reason: "missing value", .. })
        ));
        assert!(matches!(
            Clause::parse("status!x"),
            Err(ViewError::InvalidClause { reason: "unknown operator", .. })
        ));
        assert!(matches!(
            Clause::parse("read>true"),
            Err(ViewError::InvalidOperatorForKind { .. })
        ));
        assert!(matches!(
            Clause::parse("name=~("),
            Err(ViewError::InvalidRegex(_))
        ));
    }

    #[test]
    fn display_round_trips_text() {
        let clause = Clause::parse("status=active|paused").unwrap();
        assert_eq!(clause.to_string(), "status=active|paused");
        assert_eq!(Clause::parse("rating>=4").unwrap().to_string(), "rating>=4");
    }
}
