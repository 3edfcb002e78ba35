//! # Vaidya Clinic
//!
//! Record shapes and screen filters for a clinic dashboard, built on
//! [`vaidya_view`], plus the pieces of the `vaidya` list CLI.
//!
//! Each screen keeps its UI state in a filter struct that turns into a
//! [`ViewSpec`](vaidya_view::ViewSpec):
//!
//! ```rust
//! use vaidya_clinic::records::{Patient, PatientStatus};
//! use vaidya_clinic::screens::{PatientFilters, ScreenFilters, Select};
//! use vaidya_view::query;
//!
//! let patients: Vec<Patient> = Vec::new();
//! let filters = PatientFilters {
//!     status: Select::Only(PatientStatus::Active),
//!     ..PatientFilters::searching("sharma")
//! };
//! let view = query(&patients, &filters.spec());
//! assert!(view.is_empty());
//! ```
//!
//! [`run`] drives a whole listing: load the dataset, build the screen's
//! spec, layer the command-line options over it and write the result.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod output;
pub mod records;
pub mod screens;

use std::io::Write;

use vaidya_view::query;

pub use config::Settings;
pub use data::Dataset;
pub use error::{ClinicError, Result};
pub use output::OutputMode;
pub use screens::Screen;

use screens::{
    DocumentFilters, FeedbackFilters, NotificationFilters, PatientFilters, ResourceFilters,
    ScreenFilters, SessionFilters,
};

/// Loads the dataset named in `settings` and writes the screen's listing.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let data = Dataset::load(&settings.data)?;
    render(&data, settings, out)
}

/// Writes the screen's listing of an already loaded dataset.
pub fn render<W: Write>(data: &Dataset, settings: &Settings, out: &mut W) -> Result<()> {
    match settings.screen {
        Screen::Patients => list::<PatientFilters, W>(&data.patients, settings, out),
        Screen::Sessions => list::<SessionFilters, W>(&data.sessions, settings, out),
        Screen::Notifications => {
            list::<NotificationFilters, W>(&data.notifications, settings, out)
        }
        Screen::Documents => list::<DocumentFilters, W>(&data.documents, settings, out),
        Screen::Resources => list::<ResourceFilters, W>(&data.resources, settings, out),
        Screen::Feedback => list::<FeedbackFilters, W>(&data.feedback, settings, out),
    }
}

fn list<F, W>(records: &[F::Record], settings: &Settings, out: &mut W) -> Result<()>
where
    F: ScreenFilters,
    W: Write,
{
    let filters = F::searching(&settings.search);
    let spec = settings.apply(filters.spec());
    let view = query(records, &spec);

    tracing::info!(
        screen = %settings.screen,
        records = records.len(),
        shown = view.len(),
        groups = view.group_count(),
        "listed"
    );

    if settings.is_paged() {
        output::write_page(&view.page(settings.offset, settings.limit), settings.output, out)
    } else {
        output::write_view(&view, settings.output, out)
    }
}
