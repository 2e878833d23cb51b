use thiserror::Error;

use crate::types::Ticker;

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("Share count overflow for ticker [{ticker}]")]
    Overflow {
        ticker: Ticker
    }
}

impl PositionError {
    pub fn overflow(ticker: &str) -> Self {
        Self::Overflow { ticker: ticker.to_string() }
    }
}
