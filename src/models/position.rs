use rust_decimal::Decimal;

use crate::models::errors::PositionError;
use crate::models::{TradeSide, Transaction};
use crate::types::Ticker;

/// Net share count a position must exceed to be reported as open (0.0001).
///
/// Fractional-share exports carry rounded quantities, so a fully closed
/// position can land a hair above zero instead of exactly on it.
const OPEN_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Running aggregation state for one instrument.
///
/// Created with zero state the first time a ticker trades and mutated for
/// every subsequent trade row; discarded when the run completes.
#[derive(Debug, Clone)]
pub struct Position {
    pub ticker: Ticker,
    /// Signed net share count: buys add, sells subtract.
    pub shares: Decimal,
    /// Price of the most recently processed trade, in file order.
    pub last_price: Decimal,
    /// Timestamp of the most recently processed trade, in file order.
    pub last_time: String
}

impl Position {
    /// Creates empty state for a ticker that is about to trade.
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            shares: Decimal::ZERO,
            last_price: Decimal::ZERO,
            last_time: String::new()
        }
    }

    /// Applies one trade row to the running state.
    ///
    /// Missing share or price fields count as zero, matching rows where
    /// the export leaves those columns blank. Price and timestamp are
    /// overwritten on every trade, sells included, so the surviving values
    /// belong to the last row processed rather than the calendar-latest
    /// trade when the export is not chronologically ordered.
    ///
    /// # Errors
    /// Returns `PositionError::Overflow` if the accumulated share count
    /// leaves the representable decimal range.
    pub fn apply(&mut self, transaction: &Transaction, side: TradeSide) -> Result<(), PositionError> {
        let shares = transaction.shares.unwrap_or_default();

        self.shares = match side {
            TradeSide::Buy => self.shares.checked_add(shares),
            TradeSide::Sell => self.shares.checked_sub(shares)
        }
        .ok_or_else(|| PositionError::overflow(&self.ticker))?;

        self.last_price = transaction.price.unwrap_or_default();
        self.last_time = transaction.time.clone();

        Ok(())
    }

    /// Whether the instrument is still held at end of processing.
    pub fn is_open(&self) -> bool {
        self.shares > OPEN_THRESHOLD
    }
}
