use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Load the configuration and report problems
    Validate,
    /// Clone a repository and run one analysis
    Analyze {
        #[clap(short, long)]
        repo: String,
        #[clap(short, long)]
        team: String,
        #[clap(short, long)]
        leader: String,
        /// Print the result as JSON instead of a report
        #[clap(long)]
        json: bool,
    },
    /// Serve the analysis API over HTTP
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
}
