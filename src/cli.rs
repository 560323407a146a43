use clap::Parser;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use iq_label_inventory::config::SettingsOverrides;

/// Export the components of every application report that carry labels
#[derive(Parser, Debug)]
#[command(name = "iq-label-inventory")]
#[command(version)]
#[command(about = "Export every labeled component found in IQ server application reports", long_about = None)]
pub struct Args {
    /// IQ server base URL [default: http://localhost:8070]
    #[arg(short, long)]
    pub url: Option<String>,

    /// Credentials as USER:PASSWORD [default: admin:admin123]
    #[arg(short, long, value_name = "USER:PASSWORD")]
    pub auth: Option<String>,

    /// Output file path, or '-' for stdout [default: results.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a YAML config file (defaults to ./iq-label-inventory.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum requests in flight per stage (unbounded when omitted)
    #[arg(long, value_name = "N")]
    pub concurrency: Option<NonZeroUsize>,

    /// Write single-line JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Log filter directive, e.g. "debug" or "iq_label_inventory=trace" (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values given on the command line, to be layered over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            url: self.url.clone(),
            auth: self.auth.clone(),
            output: self.output.clone(),
            concurrency: self.concurrency,
            compact: self.compact,
        }
    }
}

/// Whether the output path selects stdout instead of a file
pub fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}
