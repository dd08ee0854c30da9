use std::path::PathBuf;

use clap::Parser;

/// Isolix: many sites side by side, each in its own browser profile.
#[derive(Parser, Debug)]
#[command(name = "isolix", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `isolix=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Keep workspaces in memory for this session only.
    #[arg(long)]
    pub in_memory: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
