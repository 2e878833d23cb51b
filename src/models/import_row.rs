use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Position, Side, TradeSide, Transaction};

/// Exchange tag applied to every instrument symbol.
///
/// The export does not carry listing venues and the import format requires
/// one, so every instrument gets the same tag regardless of where it
/// actually lists.
const EXCHANGE_TAG: &str = "NASDAQ";

/// Symbol under which cash movements (deposits, interest) are reported.
const CASH_SYMBOL: &str = "$CASH";

/// A single row of the import-format CSV.
///
/// `fill_price` and `commission` are optional because the import format
/// distinguishes a literal "0" from an empty cell: buys carry a zero
/// commission while sells, dividends and interest leave it blank.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRow {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(rename = "Qty")]
    pub qty: Decimal,
    #[serde(rename = "Fill Price")]
    pub fill_price: Option<Decimal>,
    #[serde(rename = "Commission")]
    pub commission: Option<Decimal>,
    #[serde(rename = "Closing Time")]
    pub closing_time: String
}

impl ImportRow {
    /// Maps one export row to its import-format row.
    ///
    /// Stateless: every row is mapped independently of the rows around it.
    /// Returns `None` for ignored rows and for rows whose category is
    /// missing a required field, both of which are dropped silently.
    pub fn from_transaction(transaction: &Transaction) -> Option<ImportRow> {
        let classification = transaction.classify();

        if !classification.valid {
            return None;
        }

        match classification.category {
            Category::Trade(side) => Some(ImportRow {
                symbol: exchange_symbol(&transaction.ticker),
                side: side.into(),
                qty: transaction.shares?,
                fill_price: Some(transaction.price?),
                commission: match side {
                    TradeSide::Buy => Some(Decimal::ZERO),
                    TradeSide::Sell => None
                },
                closing_time: transaction.time.clone()
            }),
            Category::Deposit => Some(ImportRow {
                symbol: CASH_SYMBOL.to_string(),
                side: Side::Deposit,
                qty: transaction.total?.value(),
                fill_price: Some(Decimal::ZERO),
                commission: Some(Decimal::ZERO),
                closing_time: transaction.time.clone()
            }),
            Category::Dividend => Some(ImportRow {
                symbol: exchange_symbol(&transaction.ticker),
                side: Side::Dividend,
                qty: transaction.result?,
                fill_price: None,
                commission: None,
                closing_time: transaction.time.clone()
            }),
            Category::Interest => Some(ImportRow {
                symbol: CASH_SYMBOL.to_string(),
                side: Side::Interest,
                qty: transaction.result?,
                fill_price: None,
                commission: None,
                closing_time: transaction.time.clone()
            }),
            Category::Ignored => None
        }
    }

    /// Renders a surviving open position as an import-format row.
    ///
    /// Side is reported as Buy for every open position: the snapshot states
    /// that the holding was accumulated, not how individual trades were
    /// directed.
    pub fn from_position(position: &Position) -> ImportRow {
        ImportRow {
            symbol: exchange_symbol(&position.ticker),
            side: Side::Buy,
            qty: position.shares,
            fill_price: Some(position.last_price),
            commission: Some(Decimal::ZERO),
            closing_time: position.last_time.clone()
        }
    }
}

/// Qualifies a bare ticker with the fixed exchange tag.
fn exchange_symbol(ticker: &str) -> String {
    format!("{EXCHANGE_TAG}:{ticker}")
}
