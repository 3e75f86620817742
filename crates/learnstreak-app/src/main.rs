use anyhow::Context;
use clap::Parser;

use learnstreak_infrastructure::config::AppConfig;
use learnstreak_lib::presentation::commands::execute;
use learnstreak_lib::presentation::error::CommandError;
use learnstreak_lib::{build_app_state, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(err) => {
            let error = CommandError::from(err);
            tracing::error!(code = error.code, "Command failed: {}", error.message);
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error).unwrap_or_else(|_| error.to_string())
            );
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = AppConfig::from_env()?;
    if let Some(db) = cli.db {
        config.database_path = db;
    }

    if let Err(e) = learnstreak_infrastructure::logging::init_logger(config.log_dir.clone()) {
        eprintln!("⚠️  Failed to initialize file logging: {}", e);
    }
    tracing::info!("🚀 learnstreak starting...");

    let state = build_app_state(&config).await?;
    let output = execute(&state, cli.command).await?;

    serde_json::to_string_pretty(&output).context("Failed to render output")
}
