use clap::Parser;
use tokio::runtime::Runtime;
use tracing::{error, info};

use cased_notify::cli::{Cli, Commands};
use cased_notify::config::Config;
use cased_notify::logging;
use cased_notify::notifier::post_deployment;
use cased_notify::payload::build_event;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rt = Runtime::new()?;
    rt.block_on(async {
        // A bare invocation is a send, so CI steps can run the binary as-is.
        match cli.command.unwrap_or(Commands::Send { dry_run: false }) {
            Commands::Send { dry_run } => {
                let config = Config::from_env();

                if dry_run {
                    let event = build_event(&config);
                    info!("Dry run; payload not sent");
                    println!("{}", serde_json::to_string_pretty(&event)?);
                    return Ok(());
                }

                let api_key = match config.api_key() {
                    Ok(key) => key,
                    Err(e) => {
                        error!("{e}");
                        std::process::exit(1);
                    }
                };

                let event = build_event(&config);
                let endpoint = config.endpoint();

                info!("Posting deployment event to {endpoint}");
                if let Err(e) = post_deployment(&endpoint, api_key, &event).await {
                    error!("Failed to send deployment notification: {e:#}");
                    std::process::exit(1);
                }
                info!("Notification sent successfully");
            }
            Commands::Version { json } => {
                if json {
                    let info = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                        "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!(
                        "cased-notify {} (commit: {}, built: {})",
                        env!("CARGO_PKG_VERSION"),
                        option_env!("GIT_SHA").unwrap_or("unknown"),
                        option_env!("BUILD_DATE").unwrap_or("unknown"),
                    );
                }
            }
        }
        Ok(())
    })
}
