pub(crate) mod errors;
mod import_row;
mod position;
mod transaction;

use serde::Serialize;

pub use import_row::ImportRow;
pub use position::Position;
pub use transaction::Transaction;

/// Direction of a share trade.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TradeSide {
    Buy,
    Sell
}

/// Semantic category a raw export row routes into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Category {
    Trade(TradeSide),
    Deposit,
    Dividend,
    Interest,
    Ignored
}

/// Value of the `Side` column in the import format.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Side {
    Buy,
    Sell,
    Deposit,
    Dividend,
    Interest
}

impl From<TradeSide> for Side {
    fn from(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => Side::Buy,
            TradeSide::Sell => Side::Sell
        }
    }
}

/// Result of classifying one export row: the category it routes into and
/// whether the row carries every field that category needs downstream.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub valid: bool
}
