//! Handlers for the match commands.

use tabled::Tabled;

use crate::application::Sportsbook;
use crate::cli::output;
use crate::cli::{CreateMatchArgs, MatchIdArg, ResultArgs};
use crate::domain::{MatchId, MatchSummary};
use crate::error::Result;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "ID")]
    id: MatchId,
    #[tabled(rename = "Side A")]
    player_a: String,
    #[tabled(rename = "Side B")]
    player_b: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Bets")]
    bets: usize,
    #[tabled(rename = "Staked")]
    staked: String,
}

impl From<MatchSummary> for MatchRow {
    fn from(m: MatchSummary) -> Self {
        Self {
            id: m.id,
            player_a: format!("{} ({})", m.player_a, output::moneyline(m.moneyline_a)),
            player_b: format!("{} ({})", m.player_b, output::moneyline(m.moneyline_b)),
            odds: output::odds_pair(m.odds_a, m.odds_b),
            bets: m.bet_count,
            staked: output::money(m.total_staked),
        }
    }
}

/// Execute `create-match`.
pub async fn execute_create(book: &Sportsbook, args: &CreateMatchArgs) -> Result<()> {
    let m = book
        .create_match(
            &args.player_a,
            &args.player_b,
            args.moneyline_a,
            args.moneyline_b,
        )
        .await?;

    output::ok(&format!(
        "Match {}: {} ({}) vs {} ({})",
        m.id,
        m.player_a,
        output::moneyline(m.moneyline_a),
        m.player_b,
        output::moneyline(m.moneyline_b)
    ));
    output::key_value("Odds", output::odds_pair(m.odds_a, m.odds_b));
    output::note(&format!(
        "Use `wagerbook bet {} <amount> a|b --user <id>` to bet.",
        m.id
    ));
    Ok(())
}

/// Execute `result`.
pub async fn execute_result(book: &Sportsbook, args: &ResultArgs) -> Result<()> {
    let settlement = book
        .resolve_match(MatchId::new(args.match_id), args.winner)
        .await?;

    output::ok(&format!(
        "Winner: {} ({}), payouts sent.",
        settlement.winner_label,
        output::moneyline(settlement.winner_moneyline)
    ));
    output::key_value("Odds", format!("{:.2}", settlement.odds));
    output::key_value("Winning bets", settlement.payouts.len());
    output::key_value("Paid", output::money(settlement.total_paid()));
    output::key_value("Forfeited", output::money(settlement.forfeited));
    Ok(())
}

/// Execute `cancel-match`.
pub async fn execute_cancel(book: &Sportsbook, args: &MatchIdArg) -> Result<()> {
    let cancellation = book.cancel_match(MatchId::new(args.match_id)).await?;

    output::ok(&format!(
        "Match {} cancelled. Bets refunded.",
        cancellation.match_id
    ));
    output::key_value("Refunds", cancellation.refunds.len());
    output::key_value("Refunded", output::money(cancellation.total_refunded()));
    Ok(())
}

/// Execute `matches`.
pub fn execute_list(book: &Sportsbook) {
    let open = book.list_open_matches();
    if open.is_empty() {
        output::note("No active matches.");
        return;
    }

    output::section("Active Matches");
    output::table(open.into_iter().map(MatchRow::from));
}
