//! Writing views as text or structured data.
//!
//! Text mode prints one header per named group and one line per record.
//! JSON and YAML serialize the view (or page) as is. CSV flattens records to
//! rows, with a `group` column when the view is grouped.

use std::fmt::Display;
use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use vaidya_view::{Page, View};

use crate::error::{ClinicError, Result};

/// Value of the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl OutputMode {
    /// True for modes that serialize data rather than print lines.
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputMode::Text)
    }
}

pub const NO_RESULTS: &str = "No results found";

/// Writes a whole view.
pub fn write_view<T, W>(view: &View<'_, T>, mode: OutputMode, out: &mut W) -> Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    let rendered = match mode {
        OutputMode::Text => render_view_text(view),
        OutputMode::Json => to_json(view)?,
        OutputMode::Yaml => to_yaml(view)?,
        OutputMode::Csv => view_to_csv(view)?,
    };
    emit(out, &rendered)
}

/// Writes one page of a view's flattened records.
pub fn write_page<T, W>(page: &Page<'_, T>, mode: OutputMode, out: &mut W) -> Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    let rendered = match mode {
        OutputMode::Text => render_page_text(page),
        OutputMode::Json => to_json(page)?,
        OutputMode::Yaml => to_yaml(page)?,
        OutputMode::Csv => rows_to_csv(
            page.items
                .iter()
                .map(serde_json::to_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        )?,
    };
    emit(out, &rendered)
}

fn emit<W: Write>(out: &mut W, rendered: &str) -> Result<()> {
    out.write_all(rendered.as_bytes())
        .and_then(|()| {
            if rendered.ends_with('\n') {
                Ok(())
            } else {
                out.write_all(b"\n")
            }
        })
        .map_err(ClinicError::Write)
}

/// Header for records that lack the group field.
pub const UNGROUPED: &str = "(none)";

pub fn render_view_text<T: Display>(view: &View<'_, T>) -> String {
    if view.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    // Only the implicit single group goes without a header.
    let headed = view.groups().iter().any(|g| !g.key().is_empty());
    let mut text = String::new();
    for group in view.groups().iter().filter(|g| !g.is_empty()) {
        let indent = if headed {
            if !text.is_empty() {
                text.push('\n');
            }
            let label = match group.key() {
                "" => UNGROUPED,
                key => key,
            };
            text.push_str(&format!("{label} ({})\n", group.len()));
            "  "
        } else {
            ""
        };
        for record in group.members() {
            text.push_str(&format!("{indent}{record}\n"));
        }
    }
    text
}

pub fn render_page_text<T: Display>(page: &Page<'_, T>) -> String {
    if page.total == 0 {
        return format!("{NO_RESULTS}\n");
    }

    let mut text = String::new();
    for record in &page.items {
        text.push_str(&format!("{record}\n"));
    }
    if page.items.is_empty() {
        text.push_str(&format!("No results past {} of {}\n", page.offset, page.total));
    } else {
        text.push_str(&format!(
            "Showing {}-{} of {}\n",
            page.offset + 1,
            page.offset + page.items.len(),
            page.total
        ));
    }
    text
}

pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn to_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_yaml::to_string(data)?)
}

fn view_to_csv<T: Serialize>(view: &View<'_, T>) -> Result<String> {
    let grouped = view.groups().iter().any(|g| !g.key().is_empty());
    let mut rows = Vec::with_capacity(view.len());
    for group in view.groups() {
        for record in group.members() {
            let mut row = serde_json::to_value(record)?;
            if let (true, Value::Object(fields)) = (grouped, &mut row) {
                fields.insert("group".to_string(), Value::String(group.key().to_string()));
            }
            rows.push(row);
        }
    }
    rows_to_csv(rows)
}

/// Flattens JSON objects into CSV. Headers come from the first row.
fn rows_to_csv(rows: Vec<Value>) -> Result<String> {
    let csv_err = |e: csv::Error| ClinicError::Csv(e.to_string());
    let mut wtr = csv::Writer::from_writer(vec![]);

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        wtr.write_record(&headers).map_err(csv_err)?;
        for row in &rows {
            if let Value::Object(fields) = row {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| fields.get(h).map(cell).unwrap_or_default())
                    .collect();
                wtr.write_record(&record).map_err(csv_err)?;
            }
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ClinicError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClinicError::Csv(e.to_string()))
}

/// One CSV cell. String lists (tags) are joined with `;`.
fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(";"),
        other => other.to_string(),
    }
}
