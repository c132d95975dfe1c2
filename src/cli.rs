use std::path::PathBuf;

use clap::Parser;

const AFTER_HELP: &str = "\
EXAMPLES:
  licensecheck
  licensecheck --deny GPL-3.0 --deny AGPL-3.0
  licensecheck --json
  licensecheck --summary

EXIT CODES:
  0  No issues found
  1  Issues detected (copyleft, unknown, or denied licenses), or the scan failed";

#[derive(Parser, Debug)]
#[command(
    name = "licensecheck",
    about = "Scan installed node_modules and check dependency licenses",
    version,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Project root containing node_modules
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Fail if a license containing this pattern is found (repeatable)
    #[arg(long, value_name = "LICENSE")]
    pub deny: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show summary only
    #[arg(long)]
    pub summary: bool,

    /// Policy config file [default: ./.licensecheck/config.toml, fallback ~/.config/licensecheck/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Detailed,
    Summary,
    Json,
}

impl Cli {
    /// `--json` takes precedence over `--summary`; detailed is the default.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.summary {
            OutputMode::Summary
        } else {
            OutputMode::Detailed
        }
    }
}
