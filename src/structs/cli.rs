use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "fix-agent")]
#[clap(about = "Repository analysis agent with simulated CI and scoring", long_about = None)]
pub struct Cli {
    /// Path to a config.toml; defaults to ~/.fix-agent/config.toml
    #[clap(long, global = true)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
