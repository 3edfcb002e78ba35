//! Resolved, validated settings for one listing run.

use std::path::PathBuf;

use vaidya_view::{Clause, EmptyPolicy, SortKey, ViewSpec, Viewable};

use crate::cli::Cli;
use crate::error::{ClinicError, Result};
use crate::output::OutputMode;
use crate::screens::Screen;

#[derive(Debug, Clone)]
pub struct Settings {
    pub screen: Screen,
    pub data: PathBuf,
    pub search: String,
    pub clauses: Vec<Clause>,
    pub group_by: Option<String>,
    pub sort: Vec<SortKey>,
    pub offset: usize,
    pub limit: Option<usize>,
    pub output: OutputMode,
    pub empty_policy: EmptyPolicy,
}

impl Settings {
    /// Settings that list `screen` from `data` with the screen's defaults.
    pub fn new(screen: Screen, data: impl Into<PathBuf>) -> Self {
        Settings {
            screen,
            data: data.into(),
            search: String::new(),
            clauses: Vec::new(),
            group_by: None,
            sort: Vec::new(),
            offset: 0,
            limit: None,
            output: OutputMode::default(),
            empty_policy: EmptyPolicy::default(),
        }
    }

    /// Parses clauses and sort keys from the command line, then validates.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let clauses = cli
            .clauses
            .iter()
            .map(|c| Clause::parse(c))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let sort = cli
            .sort
            .iter()
            .map(|k| SortKey::parse(k))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let settings = Settings {
            screen: cli.screen,
            data: cli.data.clone(),
            search: cli.search.clone().unwrap_or_default(),
            clauses,
            group_by: cli.group_by.clone(),
            sort,
            offset: cli.offset,
            limit: cli.limit,
            output: cli.output,
            empty_policy: if cli.single_group {
                EmptyPolicy::SingleGroup
            } else {
                EmptyPolicy::NoGroups
            },
        };
        settings.validate()?;

        tracing::debug!(
            screen = %settings.screen,
            clauses = settings.clauses.len(),
            sort_keys = settings.sort.len(),
            grouped = settings.group_by.is_some(),
            "resolved settings"
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == Some(0) {
            return Err(ClinicError::InvalidSetting(
                "--limit must be greater than zero".to_string(),
            ));
        }
        if self.group_by.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ClinicError::InvalidSetting(
                "--group-by needs a field name".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_paged(&self) -> bool {
        self.offset > 0 || self.limit.is_some()
    }

    /// Layers the command-line options over a screen's spec.
    ///
    /// Clauses are added to the screen's filters. Sort keys replace the
    /// screen's ordering. A group field replaces the screen's grouping, and
    /// its groups keep first-seen order.
    pub fn apply<'f, T: Viewable + 'f>(&self, spec: ViewSpec<'f, T>) -> ViewSpec<'f, T> {
        let mut spec = self
            .clauses
            .iter()
            .cloned()
            .fold(spec, ViewSpec::where_clause);
        if let Some(field) = &self.group_by {
            spec = spec.group_by_field(field.trim());
        }
        if !self.sort.is_empty() {
            spec = spec.sort_by_keys(self.sort.clone());
        }
        spec.empty_policy(self.empty_policy)
    }
}
