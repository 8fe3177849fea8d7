#![allow(dead_code)]

use wagerbook::application::Sportsbook;
use wagerbook::domain::UserId;

pub fn user(id: &str) -> UserId {
    UserId::new(id)
}

/// Sum of the visible balances of `users`, counting unseen users at their
/// starting balance.
pub fn balances_of(book: &Sportsbook, users: &[UserId]) -> i64 {
    users.iter().map(|u| book.balance(u)).sum()
}
