use crate::core::summary::Lang;
use crate::export::ExportFormat;
use crate::source::SourceFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWorkhours
/// CLI application to sum worked hours over a day range of an attendance period
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum worked hours over a day range of an attendance period, including ranges that cross the month end",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the day records come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Attendance data: a .csv, .json or .html file, or "-" for stdin
    pub input: String,

    /// Input format (default: from config, then from the file extension)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<SourceFormat>,
}

/// The day range to sum.
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// First day of the range (default: first day of the period)
    #[arg(long, short = 's', conflicts_with = "range")]
    pub start: Option<String>,

    /// Last day of the range (default: last day of the period).
    /// A value lower than the start day crosses the month end.
    #[arg(long, short = 'e', conflicts_with = "range")]
    pub end: Option<String>,

    /// Compact range START:END (e.g. "26:5" for the 26th to the 5th of the next month)
    #[arg(long, short = 'r', value_name = "START:END")]
    pub range: Option<String>,

    /// Language of the labels (default: from config)
    #[arg(long, value_enum)]
    pub lang: Option<Lang>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the first and last day found in the attendance data
    Bounds {
        #[command(flatten)]
        source: SourceArgs,

        /// Language of the hint (default: from config)
        #[arg(long, value_enum)]
        lang: Option<Lang>,
    },

    /// Sum the worked hours of a day range
    ///
    /// Examples:
    ///   rworkhours sum attendance.html --start 1 --end 15
    ///   rworkhours sum attendance.csv --range 26:5
    Sum {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// List the days of a range with their worked time
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Month the period starts in (YYYY-MM), to show calendar dates
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        /// Show every day of the period, marking the ones in range
        #[arg(long)]
        all: bool,
    },

    /// Export the days of a range with their total
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export format: csv, json
        #[arg(long = "out-format", value_enum, default_value = "csv")]
        out_format: ExportFormat,

        /// Overwrite output file without confirmation
        #[arg(long)]
        force: bool,
    },
}
