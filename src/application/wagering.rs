//! Bet placement.

use std::sync::Arc;

use tracing::info;

use super::store::LedgerStore;
use crate::domain::{Bet, BetReceipt, DomainError, MatchId, Side, UserId};
use crate::error::Result;

/// Validates bets and escrows their stakes.
///
/// The balance check, the debit and the append to the match happen in one
/// store transaction, so two bets racing against the same balance cannot
/// both spend it.
#[derive(Clone)]
pub struct WageringEngine {
    store: Arc<LedgerStore>,
}

impl WageringEngine {
    pub const fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Escrow `amount` from `user` on `side` of an open match.
    ///
    /// Checks run in order: match exists, match open, amount positive,
    /// amount covered by the user's balance. A user may hold any number of
    /// bets on either side of the same match.
    pub async fn place_bet(
        &self,
        match_id: MatchId,
        user: &UserId,
        amount: i64,
        side: Side,
    ) -> Result<BetReceipt> {
        let starting_balance = self.store.starting_balance();
        let bettor = user.clone();

        let receipt = self
            .store
            .transact("place_bet", move |root| {
                let backing = root.open_match(match_id)?.player(side).to_string();
                if amount <= 0 {
                    return Err(DomainError::InvalidAmount { amount });
                }

                let balance_after = root.debit(&bettor, amount, starting_balance)?;
                root.get_match_mut(match_id)?
                    .push_bet(Bet::new(bettor.clone(), amount, side));

                Ok(BetReceipt {
                    match_id,
                    user_id: bettor,
                    amount,
                    side,
                    backing,
                    balance_after,
                })
            })
            .await?;

        info!(
            match_id = %receipt.match_id,
            user_id = %receipt.user_id,
            amount = receipt.amount,
            side = %receipt.side,
            balance_after = receipt.balance_after,
            "Bet placed"
        );
        Ok(receipt)
    }
}
