//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::store::JsonFileRepository;
use crate::application::Sportsbook;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Open the file-backed ledger described by `config`.
pub async fn build_sportsbook(config: &Config) -> Result<Sportsbook> {
    let repository = Arc::new(JsonFileRepository::new(&config.ledger.data_file));
    let sportsbook = Sportsbook::open(repository, config.ledger.policy()).await?;

    info!(
        data_file = %config.ledger.data_file,
        starting_balance = config.ledger.starting_balance,
        "Ledger ready"
    );
    Ok(sportsbook)
}
