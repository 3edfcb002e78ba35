//! Free-text search matching.
//!
//! A search term matches a record when any of its extracted text fields
//! contains the term, ignoring case. The term is used verbatim: no trimming,
//! so `" "` only matches text that contains a space.

/// A folded search term, ready to test against record text.
///
/// ```
/// use vaidya_view::SearchTerm;
///
/// let term = SearchTerm::new("sharma");
/// assert!(term.matches_any(["Priya Sharma"]));
/// assert!(!term.matches_any(["Raj Patel"]));
/// assert!(SearchTerm::new("").matches_any(Vec::<&str>::new()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let folded = raw.to_lowercase();
        SearchTerm { raw, folded }
    }

    /// The term as the caller typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty term matches every record.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive containment in a single piece of text.
    pub fn matches(&self, text: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        if text.is_ascii() && self.folded.is_ascii() {
            return contains_ascii_ci(text.as_bytes(), self.folded.as_bytes());
        }
        text.to_lowercase().contains(&self.folded)
    }

    /// `true` when the term is empty or any of `texts` contains it.
    pub fn matches_any<'a, I>(&self, texts: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.is_empty() || texts.into_iter().any(|text| self.matches(text))
    }
}

impl From<&str> for SearchTerm {
    fn from(term: &str) -> Self {
        SearchTerm::new(term)
    }
}

impl From<String> for SearchTerm {
    fn from(term: String) -> Self {
        SearchTerm::new(term)
    }
}

// `needle` is already lowercase.
fn contains_ascii_ci(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
