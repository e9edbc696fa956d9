#![forbid(unsafe_code)]

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::FetchMode;
use std::path::{Path, PathBuf};

/// steam-rs: Steam Web API helpers
///
/// Looks up Workshop file details in bulk, lists game servers and picks the
/// game version most servers agree on.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    ///
    /// Without one, defaults and `STEAM_*` environment variables are used.
    #[arg(short, long, value_parser = validate_file)]
    pub config: Option<PathBuf>,

    /// Steam Web API key. Takes precedence over the configuration.
    #[arg(short, long)]
    pub key: Option<String>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Fetch Workshop file details and print them as JSON.
    Details(DetailsArgs),

    /// List game servers of an app and print them as JSON.
    Servers(ServersArgs),

    /// Print the version most servers of an app are running.
    Latest(LatestArgs),

    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Debug, Args, Clone)]
pub struct DetailsArgs {
    /// Published file IDs.
    #[arg(required = true)]
    pub ids: Vec<u64>,

    /// Expected consumer app; records of other apps make the fetch incomplete.
    #[arg(short, long)]
    pub app_id: Option<u64>,

    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Maximum requests in flight.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Language of titles and descriptions (`ELanguage`).
    #[arg(short, long)]
    pub language: Option<u32>,

    /// Fail instead of printing the records of an incomplete fetch.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ServersArgs {
    #[arg(short, long)]
    pub app_id: u64,

    /// Only servers running this map.
    #[arg(long)]
    pub map: Option<String>,

    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Print the version histogram instead of the servers.
    #[arg(long)]
    pub versions: bool,
}

#[derive(Debug, Args, Clone)]
pub struct LatestArgs {
    #[arg(short, long)]
    pub app_id: u64,

    /// Share of servers in percent a version needs.
    #[arg(short, long, value_parser = validate_percent)]
    pub threshold: Option<f64>,

    /// Share in percent tried when no version reaches the threshold.
    #[arg(short, long, value_parser = validate_percent)]
    pub fallback: Option<f64>,

    /// Announce the version on the configured chat channels.
    #[arg(short, long)]
    pub notify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One request at a time, stop at the first failure.
    Sequential,
    /// Requests in parallel, failed chunks do not stop the others.
    Concurrent,
}

impl From<Mode> for FetchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => FetchMode::Sequential,
            Mode::Concurrent => FetchMode::Concurrent,
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.is_file() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Validate a percentage
#[inline(always)]
fn validate_percent(value: &str) -> Result<f64, String> {
    let percent: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a valid percentage"))?;
    if (0.0..=99.0).contains(&percent) {
        Ok(percent)
    } else {
        Err("Percentage must be between 0 and 99".to_string())
    }
}
