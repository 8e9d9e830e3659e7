//! CLI argument definitions for the chapter dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pyq_cli::session::Selection;
use pyq_core::SortKey;
use pyq_model::{ChapterStatus, Subject};

#[derive(Parser)]
#[command(
    name = "pyq",
    version,
    about = "Chapter-wise previous year questions dashboard",
    long_about = "Browse a catalogue of exam chapters with their question counts per year.\n\n\
                  Filter by subject, class, unit, status and weak chapters, and sort by\n\
                  title or question counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform config location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the chapters of a subject after filtering and sorting.
    Chapters(ChaptersArgs),

    /// Count chapters per subject.
    Subjects(CatalogueArgs),

    /// List the classes and units available for a subject.
    Filters(FiltersArgs),

    /// Apply a recorded JSON array of intents and list the result.
    Replay(ReplayArgs),

    /// Show or initialise the settings file.
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CatalogueArgs {
    /// Chapter catalogue JSON file (default: the bundled sample).
    #[arg(long = "catalogue", value_name = "FILE")]
    pub catalogue: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print rows and filter summary as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Use the dark palette regardless of settings.
    #[arg(long = "dark", conflicts_with = "light")]
    pub dark: bool,

    /// Use the light palette regardless of settings.
    #[arg(long = "light")]
    pub light: bool,
}

impl OutputArgs {
    pub fn dark_mode(&self, configured: bool) -> bool {
        if self.dark {
            true
        } else if self.light {
            false
        } else {
            configured
        }
    }
}

#[derive(Args)]
pub struct ChaptersArgs {
    #[command(flatten)]
    pub source: CatalogueArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Subject to show (default from settings).
    #[arg(long = "subject", value_name = "SUBJECT")]
    pub subject: Option<Subject>,

    /// Toggle a class in the class filter (repeatable). All classes start selected.
    #[arg(long = "class", value_name = "CLASS")]
    pub classes: Vec<String>,

    /// Toggle a unit in the unit filter (repeatable). All units start selected.
    #[arg(long = "unit", value_name = "UNIT")]
    pub units: Vec<String>,

    /// Toggle a status in the status filter (repeatable).
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<ChapterStatus>,

    /// Show weak chapters only.
    #[arg(long = "weak-only")]
    pub weak_only: bool,

    /// Click a sort header (repeatable; the same key twice flips direction).
    #[arg(long = "sort", value_enum, value_name = "KEY")]
    pub sorts: Vec<SortArg>,

    /// Keep catalogue order.
    #[arg(long = "no-sort")]
    pub no_sort: bool,
}

impl ChaptersArgs {
    pub fn selection(&self) -> Selection {
        Selection {
            subject: self.subject,
            class_toggles: self.classes.clone(),
            unit_toggles: self.units.clone(),
            status_toggles: self.statuses.clone(),
            weak_only: self.weak_only,
            sort_clicks: self.sorts.iter().map(|sort| SortKey::from(*sort)).collect(),
            clear_sort: self.no_sort,
        }
    }
}

#[derive(Args)]
pub struct FiltersArgs {
    #[command(flatten)]
    pub source: CatalogueArgs,

    /// Subject whose filters to list (default from settings).
    #[arg(long = "subject", value_name = "SUBJECT")]
    pub subject: Option<Subject>,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub source: CatalogueArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// JSON array of intents, e.g. `[{"type": "toggle-weak-only"}]`.
    #[arg(long = "intents", value_name = "FILE")]
    pub intents: PathBuf,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default settings to the settings path.
    #[arg(long = "write-defaults")]
    pub write_defaults: bool,
}

/// Sort header choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Title,
    Questions,
    LatestYear,
    PreviousYear,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Questions => SortKey::QuestionsTotal,
            SortArg::LatestYear => SortKey::LatestYear,
            SortArg::PreviousYear => SortKey::PreviousYear,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
