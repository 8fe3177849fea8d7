use clap::Parser;
use tracing::{debug, error};

use wagerbook::cli::{self, output, Cli};
use wagerbook::error::Result;
use wagerbook::infrastructure::bootstrap::build_sportsbook;
use wagerbook::infrastructure::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)?;

    if let Some(ref path) = cli.data_file {
        config.ledger.data_file = path.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    config.init_logging();
    debug!(command = ?cli.command, "wagerbook starting");

    let book = build_sportsbook(&config).await?;
    cli::dispatch(&cli.command, &book, config.ledger.leaderboard_size).await
}
