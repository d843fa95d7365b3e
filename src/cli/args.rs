//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// apilab - run a plain-text HTTP request
#[derive(Parser, Debug, Clone)]
#[command(name = "apilab", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // INPUT
    // =========================================================================

    /// Request file to run. Reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // =========================================================================
    // VARIABLES
    // =========================================================================

    /// Directory searched for api-lab.env.json. Repeat to search several in order.
    /// Defaults to the request file's directory, then the current directory
    #[arg(
        long = "root",
        value_name = "DIR",
        env = "APILAB_ROOTS",
        value_delimiter = ','
    )]
    pub roots: Vec<PathBuf>,

    /// Also resolve placeholders from process environment variables
    /// (api-lab.env.json entries take precedence)
    #[arg(long = "system-env", action = ArgAction::SetTrue)]
    pub system_env: bool,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Print the resolved request instead of sending it
    #[arg(long = "offline", action = ArgAction::SetTrue)]
    pub offline: bool,

    /// Never color the output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Log pipeline progress to stderr. Use -vv for debug, -vvv for trace
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Log line format
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Show error details
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,

    /// Debug mode (implies --traceback and debug logging)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

impl Args {
    /// The request file, unless input comes from stdin
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Log format for structured output
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// JSON Lines
    Json,
}
