//! Comparison operators for field clauses.

use std::cmp::Ordering;

/// Comparison operator of a [`Clause`](crate::Clause).
///
/// Text operators are case-insensitive; ordering operators apply to text
/// (lexicographic), numbers and instants alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    /// Substring match.
    Contains,
    StartsWith,
    EndsWith,
    /// Regular expression match (case-sensitive unless the pattern says otherwise).
    Regex,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Membership in a set of labels.
    In,
}

impl Op {
    /// Operators that only make sense on text.
    pub fn is_text_only(self) -> bool {
        matches!(
            self,
            Op::Contains | Op::StartsWith | Op::EndsWith | Op::Regex
        )
    }

    /// Operators decided by an [`Ordering`].
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte
        )
    }

    /// Evaluates an ordering-based operator. Other operators return `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering.is_eq(),
            Op::Ne => ordering.is_ne(),
            Op::Gt => ordering.is_gt(),
            Op::Gte => ordering.is_ge(),
            Op::Lt => ordering.is_lt(),
            Op::Lte => ordering.is_le(),
            _ => false,
        }
    }

    /// The token used by [`Clause::parse`](crate::Clause::parse).
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Contains => "~",
            Op::StartsWith => "^=",
            Op::EndsWith => "$=",
            Op::Regex => "=~",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::In => "=",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Contains => "contains",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::In => "in",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
