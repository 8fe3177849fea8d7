//! Handler for the `bet` command.

use crate::application::Sportsbook;
use crate::cli::output;
use crate::cli::BetArgs;
use crate::domain::{MatchId, UserId};
use crate::error::Result;

/// Execute `bet`.
pub async fn execute_bet(book: &Sportsbook, args: &BetArgs) -> Result<()> {
    let user = UserId::new(args.user.as_str());
    let receipt = book
        .place_bet(MatchId::new(args.match_id), &user, args.amount, args.side)
        .await?;

    output::ok(&format!(
        "{} bet {} on {}.",
        receipt.user_id,
        output::money(receipt.amount),
        receipt.backing
    ));
    output::key_value("Balance", output::money(receipt.balance_after));
    Ok(())
}
