//! Command-line arguments of the `vaidya` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::output::OutputMode;
use crate::screens::Screen;

/// List, filter, group and sort clinic dashboard records
///
/// Each screen starts from its dashboard defaults (for example sessions are
/// grouped by day and sorted by time). The options below narrow or reshape
/// that view.
#[derive(Debug, Clone, Parser)]
#[command(name = "vaidya", version)]
#[command(after_help = "Examples:\n  \
    vaidya patients --where status=active --sort -progress\n  \
    vaidya sessions --search abhyanga --output json\n  \
    vaidya feedback --where 'rating>=4' --group-by status")]
pub struct Cli {
    /// Screen to list
    #[arg(value_enum)]
    pub screen: Screen,

    /// Dataset JSON file
    #[arg(long, env = "VAIDYA_DATA", value_name = "PATH")]
    pub data: PathBuf,

    /// Case-insensitive text to look for in the screen's search fields
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Field clause such as `status=active`, `rating>=4` or `room=A|B`
    #[arg(short = 'w', long = "where", value_name = "CLAUSE")]
    pub clauses: Vec<String>,

    /// Group by a field, replacing the screen's grouping
    #[arg(short, long, value_name = "FIELD")]
    pub group_by: Option<String>,

    /// Sort key `field`, `field:desc` or `-field`; the first is primary
    #[arg(long, value_name = "KEY", allow_hyphen_values = true)]
    pub sort: Vec<String>,

    /// Skip this many records of the flattened view
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Show at most this many records
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Keep one empty group when nothing matches
    #[arg(long)]
    pub single_group: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
