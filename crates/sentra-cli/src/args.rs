use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentra")]
#[command(about = "Score the sentiment of text with a remote analysis service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/sentra/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service, e.g. http://localhost:8000
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Log file (default: <data dir>/sentra/sentra.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
