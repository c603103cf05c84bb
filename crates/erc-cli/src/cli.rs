//! CLI argument definitions for the report converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "erc",
    version,
    about = "eBay Report Converter - Turn an eBay sales report into a contact sheet",
    long_about = "Convert an eBay sales report CSV into a contact-sheet CSV.\n\n\
                  Item titles are cut to 23 characters, buyer last names are dropped,\n\
                  repeat buyers are blanked and only United States shipments are kept."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include buyer names and other cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert the sales report into a contact sheet.
    Convert(ConvertArgs),

    /// Show the header mapping used for the contact sheet.
    Mapping(MappingArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// JSON run configuration (paths, header mapping, stage columns).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Source report (default: ./input/input-file.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Contact sheet to write (default: ./output/eBay-Report.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run load and transforms and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct MappingArgs {
    /// JSON run configuration whose header mapping should be shown.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "erc", "convert", "--input", "a.csv", "--output", "b.csv", "--dry-run",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, Some(PathBuf::from("a.csv")));
        assert_eq!(args.output, Some(PathBuf::from("b.csv")));
        assert!(args.dry_run);
        assert!(args.config.is_none());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "erc",
            "mapping",
            "--log-format",
            "json",
            "--log-data",
            "--log-timestamps",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(cli.log_data);
        assert!(cli.log_timestamps);
    }
}
