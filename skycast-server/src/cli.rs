use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast-server", version, about = "Sun-time + weather aggregation service")]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "skycast.toml")]
    pub config: PathBuf,

    /// Bind address override, e.g. "127.0.0.1:8080".
    #[arg(long)]
    pub listen: Option<String>,
}
