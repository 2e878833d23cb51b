use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Category, Classification, TradeSide};
use crate::types::{CashAmount, Ticker};

/// Action labels the export uses for share trades.
const TRADE_ACTIONS: [&str; 5] = [
    "Market buy",
    "Limit buy",
    "Market sell",
    "Limit sell",
    "Stop limit sell"
];

/// Represents a single row from the broker's export CSV.
///
/// Numeric fields are optional because non-trade rows (deposits, interest)
/// leave the share columns blank and trade rows leave the cash columns
/// blank. The timestamp is carried verbatim as a string and never parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Ticker", default)]
    pub ticker: Ticker,
    #[serde(rename = "Time", default)]
    pub time: String,
    /// Share quantity of a trade row.
    #[serde(rename = "No. of shares")]
    pub shares: Option<Decimal>,
    /// Per-share fill price of a trade row.
    #[serde(rename = "Price / share")]
    pub price: Option<Decimal>,
    /// Realized result, dividend or interest amount.
    #[serde(rename = "Result")]
    pub result: Option<Decimal>,
    /// Total cash amount, rendered with thousands separators in the export.
    #[serde(rename = "Total")]
    pub total: Option<CashAmount>
}

impl Transaction {
    /// Routes the row into its semantic category.
    ///
    /// Classification is pure and infallible: rows with an empty or
    /// unrecognized action label land in [`Category::Ignored`] without an
    /// error or a log line. The validity flag reports whether the row
    /// carries the fields its category needs to produce an import row;
    /// the normalizer drops invalid rows, while the position aggregator
    /// consumes every trade row and substitutes zero for missing numerics.
    pub fn classify(&self) -> Classification {
        if self.action.is_empty() {
            return Classification { category: Category::Ignored, valid: false };
        }

        if TRADE_ACTIONS.contains(&self.action.as_str()) && !self.ticker.is_empty() {
            let side = if self.action.to_lowercase().contains("buy") {
                TradeSide::Buy
            } else {
                TradeSide::Sell
            };

            return Classification {
                category: Category::Trade(side),
                valid: self.shares.is_some() && self.price.is_some()
            };
        }

        if self.action == "Deposit" {
            return Classification {
                category: Category::Deposit,
                valid: self.total.is_some()
            };
        }

        if self.action.starts_with("Dividend") {
            return Classification {
                category: Category::Dividend,
                valid: !self.ticker.is_empty() && self.result.is_some()
            };
        }

        if self.action == "Lending interest" {
            return Classification {
                category: Category::Interest,
                valid: self.result.is_some()
            };
        }

        Classification { category: Category::Ignored, valid: false }
    }
}
