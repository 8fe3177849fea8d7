//! Handlers for balance and leaderboard commands.

use tabled::Tabled;

use crate::application::Sportsbook;
use crate::cli::output;
use crate::cli::{SetBalanceArgs, UserArg};
use crate::domain::UserId;
use crate::error::Result;

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Execute `balance`.
pub fn execute_balance(book: &Sportsbook, args: &UserArg) {
    let user = UserId::new(args.user.as_str());
    let balance = book.balance(&user);
    output::note(&format!(
        "{user}, you have {} in virtual currency.",
        output::money(balance)
    ));
}

/// Execute `set-balance`.
pub async fn execute_set_balance(book: &Sportsbook, args: &SetBalanceArgs) -> Result<()> {
    let user = UserId::new(args.user.as_str());
    book.set_balance(&user, args.amount).await?;

    output::ok(&format!(
        "{user}'s balance set to {}.",
        output::money(args.amount)
    ));
    if args.amount < 0 {
        output::warn("Balance is negative; this user cannot bet until it is raised.");
    }
    Ok(())
}

/// Execute `reset-balances`.
pub async fn execute_reset(book: &Sportsbook) -> Result<()> {
    let reset = book.reset_all_balances().await?;
    output::ok(&format!(
        "Balances reset to {}.",
        output::money(book.store().starting_balance())
    ));
    output::key_value("Users", reset);
    Ok(())
}

/// Execute `top`.
pub fn execute_top(book: &Sportsbook, count: usize) {
    let standings = book.top(count);
    if standings.is_empty() {
        output::note("No balances recorded yet.");
        return;
    }

    output::section("Leaderboard");
    output::table(standings.into_iter().map(|s| StandingRow {
        rank: s.rank,
        user: s.user_id.to_string(),
        balance: output::money(s.balance),
    }));
}
