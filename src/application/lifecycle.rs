//! Match lifecycle: creation, listing, resolution and cancellation.
//!
//! Callers are trusted to have checked the invoker may administer matches.

use std::sync::Arc;

use tracing::info;

use super::store::LedgerStore;
use crate::domain::settlement::{refunds, settle};
use crate::domain::{Cancellation, DomainError, Match, MatchId, MatchSummary, Settlement, Side};
use crate::error::Result;

/// Creates, lists, resolves and cancels matches.
#[derive(Clone)]
pub struct MatchLifecycle {
    store: Arc<LedgerStore>,
}

impl MatchLifecycle {
    pub const fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Open a match with odds derived from both moneylines.
    ///
    /// Fails with [`DomainError::InvalidOdds`] if either moneyline is zero,
    /// in which case no id is consumed.
    pub async fn create_match(
        &self,
        player_a: &str,
        player_b: &str,
        moneyline_a: i64,
        moneyline_b: i64,
    ) -> Result<MatchSummary> {
        let new_match = Match::try_new(player_a, player_b, moneyline_a, moneyline_b)?;

        let summary = self
            .store
            .transact("create_match", move |root| {
                let id = root.insert_match(new_match)?;
                Ok(root.get_match(id)?.summary(id))
            })
            .await?;

        info!(
            match_id = %summary.id,
            player_a = %summary.player_a,
            player_b = %summary.player_b,
            moneyline_a = summary.moneyline_a,
            moneyline_b = summary.moneyline_b,
            odds_a = %summary.odds_a,
            odds_b = %summary.odds_b,
            "Match created"
        );
        Ok(summary)
    }

    /// Unresolved matches in ascending id order.
    #[must_use]
    pub fn list_open_matches(&self) -> Vec<MatchSummary> {
        self.store
            .snapshot()
            .matches
            .iter()
            .filter(|(_, m)| !m.is_resolved())
            .map(|(id, m)| m.summary(*id))
            .collect()
    }

    /// Summary of any stored match, open or resolved.
    pub fn match_summary(&self, match_id: MatchId) -> Result<MatchSummary> {
        let root = self.store.snapshot();
        Ok(root.get_match(match_id)?.summary(match_id))
    }

    /// Declare `winner` and pay every winning bet `floor(stake * odds)`.
    ///
    /// A match resolves at most once: a second call fails with
    /// [`DomainError::AlreadyResolved`] and moves no money.
    pub async fn resolve_match(&self, match_id: MatchId, winner: Side) -> Result<Settlement> {
        let starting_balance = self.store.starting_balance();

        let settlement = self
            .store
            .transact("resolve_match", move |root| {
                let target = root.open_match_mut(match_id)?;
                let settlement = settle(match_id, target, winner)?;
                target.mark_resolved(winner);

                for payout in &settlement.payouts {
                    root.credit(&payout.user_id, payout.amount, starting_balance)?;
                }
                Ok(settlement)
            })
            .await?;

        info!(
            match_id = %match_id,
            winner = %settlement.winner,
            winner_label = %settlement.winner_label,
            odds = %settlement.odds,
            winning_bets = settlement.payouts.len(),
            paid = settlement.total_paid(),
            forfeited = settlement.forfeited,
            "Match resolved"
        );
        Ok(settlement)
    }

    /// Refund every stake in full and delete the match.
    ///
    /// Resolved matches cannot be cancelled: their winners were already
    /// paid, so refunding stakes on top would create money.
    pub async fn cancel_match(&self, match_id: MatchId) -> Result<Cancellation> {
        let starting_balance = self.store.starting_balance();

        let cancellation = self
            .store
            .transact("cancel_match", move |root| {
                let refunds = refunds(root.open_match(match_id)?);
                for refund in &refunds {
                    root.credit(&refund.user_id, refund.amount, starting_balance)?;
                }
                if root.matches.remove(&match_id).is_none() {
                    return Err(DomainError::MatchNotFound { match_id });
                }
                Ok(Cancellation { match_id, refunds })
            })
            .await?;

        info!(
            match_id = %match_id,
            refunds = cancellation.refunds.len(),
            refunded = cancellation.total_refunded(),
            "Match cancelled"
        );
        Ok(cancellation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::WageringEngine;
    use crate::domain::UserId;
    use crate::error::Error;
    use crate::testkit::ledger::memory_store;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let lifecycle = MatchLifecycle::new(memory_store().await);

        let first = lifecycle.create_match("X", "Y", 150, -200).await.unwrap();
        let second = lifecycle.create_match("P", "Q", -110, -110).await.unwrap();

        assert_eq!(first.id, MatchId::new(1));
        assert_eq!(second.id, MatchId::new(2));
        assert_eq!((first.odds_a, first.odds_b), (dec!(2.50), dec!(1.50)));
        assert_eq!(second.odds_a, dec!(1.91));
    }

    #[tokio::test]
    async fn invalid_odds_consume_no_id() {
        let store = memory_store().await;
        let lifecycle = MatchLifecycle::new(store.clone());

        let err = lifecycle.create_match("X", "Y", 0, 100).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::InvalidOdds { moneyline: 0 })
        ));
        assert_eq!(store.snapshot().next_match_id, MatchId::FIRST);
    }

    #[tokio::test]
    async fn resolved_matches_leave_the_open_list() {
        let lifecycle = MatchLifecycle::new(memory_store().await);
        let a = lifecycle.create_match("X", "Y", 150, -200).await.unwrap();
        let b = lifecycle.create_match("P", "Q", 100, -100).await.unwrap();

        lifecycle.resolve_match(a.id, Side::B).await.unwrap();

        let open: Vec<_> = lifecycle.list_open_matches().iter().map(|m| m.id).collect();
        assert_eq!(open, vec![b.id]);
        assert_eq!(
            lifecycle.match_summary(a.id).unwrap().winner,
            Some(Side::B)
        );
    }

    #[tokio::test]
    async fn second_resolution_is_rejected_without_payout() {
        let store = memory_store().await;
        let lifecycle = MatchLifecycle::new(store.clone());
        let wagers = WageringEngine::new(store.clone());
        let m = lifecycle.create_match("X", "Y", 150, -200).await.unwrap();
        wagers
            .place_bet(m.id, &UserId::new("1"), 100, Side::A)
            .await
            .unwrap();

        lifecycle.resolve_match(m.id, Side::A).await.unwrap();
        let before = store.snapshot();
        let err = lifecycle.resolve_match(m.id, Side::A).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Domain(DomainError::AlreadyResolved { .. })
        ));
        assert_eq!(*store.snapshot(), *before);
        assert_eq!(store.snapshot().users.get(&UserId::new("1")), Some(1150));
    }

    #[tokio::test]
    async fn cancelling_a_resolved_match_is_rejected() {
        let store = memory_store().await;
        let lifecycle = MatchLifecycle::new(store.clone());
        let m = lifecycle.create_match("X", "Y", 150, -200).await.unwrap();
        lifecycle.resolve_match(m.id, Side::A).await.unwrap();

        let err = lifecycle.cancel_match(m.id).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::AlreadyResolved { .. })
        ));
        assert!(store.snapshot().matches.contains_key(&m.id));
    }

    #[tokio::test]
    async fn unknown_match_is_reported() {
        let lifecycle = MatchLifecycle::new(memory_store().await);
        let missing = MatchId::new(99);

        for err in [
            lifecycle.resolve_match(missing, Side::A).await.unwrap_err(),
            lifecycle.cancel_match(missing).await.unwrap_err(),
        ] {
            assert!(matches!(
                err,
                Error::Domain(DomainError::MatchNotFound { match_id }) if match_id == missing
            ));
        }
    }

    #[tokio::test]
    async fn cancelled_ids_are_not_reused() {
        let lifecycle = MatchLifecycle::new(memory_store().await);
        let m = lifecycle.create_match("X", "Y", 150, -200).await.unwrap();
        lifecycle.cancel_match(m.id).await.unwrap();

        let next = lifecycle.create_match("X", "Y", 150, -200).await.unwrap();
        assert_eq!(next.id, MatchId::new(2));
    }
}
