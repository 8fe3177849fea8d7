//! Command-line interface definitions.
//!
//! The CLI is an operator front end over [`Sportsbook`](crate::application::Sportsbook).
//! It performs no authorization: whoever can run it administers the ledger.

pub mod accounts;
pub mod matches;
pub mod output;
pub mod wager;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::Sportsbook;
use crate::domain::Side;
use crate::error::Result;

/// Wagerbook - play-money moneyline betting ledger.
#[derive(Parser, Debug)]
#[command(name = "wagerbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the ledger data file
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a match between two competitors
    CreateMatch(CreateMatchArgs),

    /// Place a bet on an open match
    Bet(BetArgs),

    /// Resolve a match and pay out winning bets
    Result(ResultArgs),

    /// Cancel a match and refund every bet
    CancelMatch(MatchIdArg),

    /// List open matches
    Matches,

    /// Show a user's balance
    Balance(UserArg),

    /// Overwrite a user's balance
    SetBalance(SetBalanceArgs),

    /// Reset every recorded balance to the starting balance
    ResetBalances,

    /// Show the leaderboard
    Top(TopArgs),
}

/// Arguments for `create-match`.
#[derive(Parser, Debug)]
pub struct CreateMatchArgs {
    /// Label of side A
    pub player_a: String,
    /// Label of side B
    pub player_b: String,
    /// Moneyline of side A (e.g. +150)
    #[arg(allow_negative_numbers = true)]
    pub moneyline_a: i64,
    /// Moneyline of side B (e.g. -200)
    #[arg(allow_negative_numbers = true)]
    pub moneyline_b: i64,
}

/// Arguments for `bet`.
#[derive(Parser, Debug)]
pub struct BetArgs {
    /// Match ID
    pub match_id: u64,
    /// Stake
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
    /// Side to back (a or b)
    pub side: Side,
    /// Bettor's user ID
    #[arg(short, long)]
    pub user: String,
}

/// Arguments for `result`.
#[derive(Parser, Debug)]
pub struct ResultArgs {
    /// Match ID
    pub match_id: u64,
    /// Winning side (a or b)
    pub winner: Side,
}

/// Shared argument for commands that only need a match.
#[derive(Parser, Debug)]
pub struct MatchIdArg {
    /// Match ID
    pub match_id: u64,
}

/// Shared argument for commands that only need a user.
#[derive(Parser, Debug)]
pub struct UserArg {
    /// User ID
    #[arg(short, long)]
    pub user: String,
}

/// Arguments for `set-balance`.
#[derive(Parser, Debug)]
pub struct SetBalanceArgs {
    /// User ID
    pub user: String,
    /// New balance
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for `top`.
#[derive(Parser, Debug)]
pub struct TopArgs {
    /// Number of rows (defaults to ledger.leaderboard_size)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

/// Run one command against an opened ledger.
pub async fn dispatch(command: &Commands, book: &Sportsbook, leaderboard_size: usize) -> Result<()> {
    match command {
        Commands::CreateMatch(args) => matches::execute_create(book, args).await,
        Commands::Bet(args) => wager::execute_bet(book, args).await,
        Commands::Result(args) => matches::execute_result(book, args).await,
        Commands::CancelMatch(args) => matches::execute_cancel(book, args).await,
        Commands::Matches => {
            matches::execute_list(book);
            Ok(())
        }
        Commands::Balance(args) => {
            accounts::execute_balance(book, args);
            Ok(())
        }
        Commands::SetBalance(args) => accounts::execute_set_balance(book, args).await,
        Commands::ResetBalances => accounts::execute_reset(book).await,
        Commands::Top(args) => {
            accounts::execute_top(book, args.count.unwrap_or(leaderboard_size));
            Ok(())
        }
    }
}
