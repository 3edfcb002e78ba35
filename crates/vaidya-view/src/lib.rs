//! Vaidya View - filter, group and sort in-memory records into list views.
//!
//! Every list screen of the clinic dashboard (patients, sessions,
//! notifications, documents, resources, feedback) does the same thing: take
//! an in-memory slice of records, keep the ones matching a search box and a
//! few dropdown filters, group them, and sort each group. This crate does
//! that once, for any record type:
//!
//! - Free-text search: case-insensitive substring over caller-chosen text
//! - Named predicates combined with AND, evaluated left to right
//! - Grouping by a key, groups in first-seen order (or a caller order)
//! - Stable, multi-key sorting within each group
//! - Paging over the flattened result
//!
//! # Quick Start
//!
//! ```rust
//! use vaidya_view::{query, ViewSpec};
//!
//! struct Patient {
//!     id: u32,
//!     name: String,
//!     status: &'static str,
//! }
//!
//! let patients = vec![
//!     Patient { id: 1, name: "Priya Sharma".into(), status: "active" },
//!     Patient { id: 2, name: "Raj Patel".into(), status: "needs-attention" },
//!     Patient { id: 3, name: "Anil Sharma".into(), status: "active" },
//! ];
//!
//! let spec = ViewSpec::<Patient>::new()
//!     .search("sharma")
//!     .search_fields(|p| vec![p.name.as_str()])
//!     .filter("active", |p| p.status == "active")
//!     .sort_by(|a, b| a.name.cmp(&b.name));
//!
//! let view = query(&patients, &spec);
//! let ids: Vec<u32> = view.iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![3, 1]);
//! ```
//!
//! # Field-based specs
//!
//! Records implementing [`Viewable`] (by hand or with
//! `#[derive(Viewable)]` under the `derive` feature) can also be filtered,
//! grouped and sorted by field name, which is how text input such as
//! `status=active` or `-date` becomes a spec:
//!
//! ```rust
//! use vaidya_view::{query, Clause, Field, SortKey, ViewSpec, Viewable};
//!
//! struct Feedback {
//!     patient: String,
//!     rating: u8,
//! }
//!
//! impl Viewable for Feedback {
//!     const SEARCH_FIELDS: &'static [&'static str] = &["patient"];
//!
//!     fn field_value(&self, field: &str) -> Field<'_> {
//!         match field {
//!             "patient" => Field::Text(&self.patient),
//!             "rating" => Field::Number(self.rating.into()),
//!             _ => Field::Missing,
//!         }
//!     }
//! }
//!
//! let entries = vec![
//!     Feedback { patient: "Priya".into(), rating: 5 },
//!     Feedback { patient: "Raj".into(), rating: 3 },
//!     Feedback { patient: "Meera".into(), rating: 4 },
//! ];
//!
//! let spec = ViewSpec::<Feedback>::viewable()
//!     .where_clause(Clause::parse("rating>=4")?)
//!     .sort_by_keys(vec![SortKey::parse("-rating")?]);
//!
//! let names: Vec<&str> = query(&entries, &spec)
//!     .iter()
//!     .map(|f| f.patient.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Priya", "Meera"]);
//! # Ok::<(), vaidya_view::ViewError>(())
//! ```
//!
//! # Guarantees
//!
//! - Every surviving record appears exactly once, in exactly one group.
//! - Ties under the comparators keep their input order.
//! - Empty results have zero groups unless the spec asks for
//!   [`EmptyPolicy::SingleGroup`].
//! - [`query`] never fails; only parsing text into clauses and sort keys
//!   does, with [`ViewError`].

mod clause;
mod engine;
mod error;
mod field;
mod op;
mod ordering;
mod search;
mod spec;
mod traits;
mod view;

pub use clause::{Clause, ClauseValue};
pub use engine::query;
pub use error::{Result, ViewError};
pub use field::{Field, Number, Timestamp};
pub use op::Op;
pub use ordering::{compare_by_keys, compare_fields, Dir, SortKey};
pub use search::SearchTerm;
pub use spec::{EmptyPolicy, Predicate, ViewSpec};
pub use traits::{ViewChoice, ViewTimestamp, Viewable};
pub use view::{Group, Page, View};

#[cfg(feature = "derive")]
pub use vaidya_view_macros::Viewable;
