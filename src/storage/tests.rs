use super::PositionBook;
use crate::models::{TradeSide, Transaction};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

fn create_trade(action: &str, ticker: &str, time: &str, shares: &str, price: &str) -> Result<Transaction> {
    Ok(Transaction {
        action: action.to_string(),
        ticker: ticker.to_string(),
        time: time.to_string(),
        shares: Some(Decimal::from_str(shares)?),
        price: Some(Decimal::from_str(price)?),
        result: None,
        total: None
    })
}

#[test]
fn test_book_nets_equal_buys_and_sells_to_zero() -> Result<()> {
    let mut book = PositionBook::new();

    book.apply(&create_trade("Market buy", "TICK", "t1", "10", "5.00")?, TradeSide::Buy)?;
    book.apply(&create_trade("Market sell", "TICK", "t2", "10", "6.00")?, TradeSide::Sell)?;

    assert_eq!(book.len(), 1);
    assert!(book.into_open_positions().is_empty());

    Ok(())
}

#[test]
fn test_book_tracks_tickers_independently() -> Result<()> {
    let mut book = PositionBook::new();

    book.apply(&create_trade("Market buy", "AAPL", "t1", "10", "185.50")?, TradeSide::Buy)?;
    book.apply(&create_trade("Market buy", "TSLA", "t2", "4", "220.00")?, TradeSide::Buy)?;
    book.apply(&create_trade("Market sell", "TSLA", "t3", "4", "250.00")?, TradeSide::Sell)?;

    let open = book.into_open_positions();

    assert_eq!(open.len(), 1);
    assert_eq!(open[0].ticker, "AAPL");
    assert_eq!(open[0].shares, Decimal::from_str("10")?);

    Ok(())
}

#[test]
fn test_open_positions_are_sorted_by_ticker() -> Result<()> {
    let mut book = PositionBook::new();

    book.apply(&create_trade("Market buy", "ZZZT", "t1", "1", "10.00")?, TradeSide::Buy)?;
    book.apply(&create_trade("Market buy", "MSFT", "t2", "2", "400.00")?, TradeSide::Buy)?;
    book.apply(&create_trade("Market buy", "AAPL", "t3", "3", "185.50")?, TradeSide::Buy)?;

    let tickers: Vec<String> = book.into_open_positions()
        .into_iter()
        .map(|position| position.ticker)
        .collect();

    assert_eq!(tickers, vec!["AAPL", "MSFT", "ZZZT"]);

    Ok(())
}

#[test]
fn test_net_negative_positions_are_dropped() -> Result<()> {
    let mut book = PositionBook::new();

    book.apply(&create_trade("Market sell", "TICK", "t1", "5", "6.00")?, TradeSide::Sell)?;

    assert_eq!(book.len(), 1);
    assert!(book.into_open_positions().is_empty());

    Ok(())
}

#[test]
fn test_surviving_state_reflects_file_order() -> Result<()> {
    let mut book = PositionBook::new();

    book.apply(&create_trade("Market buy", "TICK", "t1", "10", "5.00")?, TradeSide::Buy)?;
    book.apply(&create_trade("Market sell", "TICK", "t2", "4", "6.00")?, TradeSide::Sell)?;

    let open = book.into_open_positions();

    assert_eq!(open[0].shares, Decimal::from_str("6")?);
    assert_eq!(open[0].last_price, Decimal::from_str("6.00")?);
    assert_eq!(open[0].last_time, "t2");

    Ok(())
}
