use thiserror::Error;

#[derive(Debug, Error)]
pub enum CashAmountError {
    #[error("Cash amount error: Value is an empty string")]
    Empty,
    #[error("Cash amount error: {0}")]
    InvalidNumber(#[from] rust_decimal::Error),
}
