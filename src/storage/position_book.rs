use std::collections::HashMap;

use crate::models::errors::PositionError;
use crate::models::{Position, TradeSide, Transaction};
use crate::types::Ticker;

/// In-memory ticker to position map for a single aggregation run.
///
/// Owned exclusively by the run that created it and discarded when the run
/// completes; nothing persists between runs.
pub struct PositionBook {
    positions: HashMap<Ticker, Position>
}

impl PositionBook {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new()
        }
    }

    /// Folds one trade row into the state for its ticker, creating zero
    /// state the first time a ticker is seen.
    pub fn apply(&mut self, transaction: &Transaction, side: TradeSide) -> Result<(), PositionError> {
        let position = self.positions
            .entry(transaction.ticker.clone())
            .or_insert_with(|| Position::new(transaction.ticker.clone()));

        position.apply(transaction, side)
    }

    /// Number of distinct tickers that traded at least once.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Consumes the book and returns the open positions, sorted by ticker.
    ///
    /// Net-zero and net-negative positions are dropped with no diagnostic:
    /// a negative count would mean a short position or a gap in the export,
    /// and neither belongs in a holdings snapshot.
    pub fn into_open_positions(self) -> Vec<Position> {
        let mut open: Vec<Position> = self.positions
            .into_values()
            .filter(|position| position.is_open())
            .collect();

        open.sort_by(|left, right| left.ticker.cmp(&right.ticker));

        open
    }
}
