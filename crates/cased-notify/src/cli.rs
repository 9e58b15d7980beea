use clap::{Parser, Subcommand};

/// cased-notify: report deployments from CI to Cased
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one deployment event from the environment and post it (default)
    Send {
        /// Print the payload to stdout instead of posting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
