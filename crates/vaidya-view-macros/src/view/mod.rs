//! `#[derive(Viewable)]`: field constants and by-name field access for
//! `vaidya-view` records.

mod attrs;
mod derive;

pub use derive::viewable_derive_impl;
