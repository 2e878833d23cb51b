mod engine;
mod models;
mod storage;
mod types;

use std::fs::File;
use std::io::{stderr, stdout, BufReader, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{ConvertEngine, RunSummary};

const DEFAULT_INPUT: &str = "trading212_export.csv";
const DEFAULT_TRANSACTIONS_OUTPUT: &str = "trading212_import.csv";
const DEFAULT_POSITIONS_OUTPUT: &str = "open_positions.csv";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Mode {
    Transactions,
    Positions
}

fn main() -> Result<()> {
    //NOTE: With only two modes and a pair of paths, positional arguments are
    //      enough; if this grows any further options, clap is the next step.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: broker-export-converter [transactions|positions] [input].csv [output].csv [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let mode = parse_mode(&args[1]);
    let input_path = args.get(2).cloned()
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output_path = args.get(3).cloned()
        .unwrap_or_else(|| default_output_path(mode).to_string());
    let log_level = args.get(4)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let engine = ConvertEngine::new();
    let input = BufReader::new(File::open(&input_path)?);
    let output = BufWriter::new(File::create(&output_path)?);

    let timer = Instant::now();

    let summary = match mode {
        Mode::Transactions => engine.normalize_transactions(input, output)?,
        Mode::Positions => engine.calculate_open_positions(input, output)?
    };

    let duration = timer.elapsed();

    info!("Processed {} rows in: {duration:?}", summary.rows_read);

    write_summary_to_stdout(mode, &summary, &output_path)?;

    Ok(())
}

fn parse_mode(mode: &str) -> Mode {
    match mode.to_lowercase().as_str() {
        "transactions" => Mode::Transactions,
        "positions" => Mode::Positions,
        _ => {
            eprintln!("Invalid mode '{}', expected 'transactions' or 'positions'", mode);
            exit(1);
        }
    }
}

fn default_output_path(mode: Mode) -> &'static str {
    match mode {
        Mode::Transactions => DEFAULT_TRANSACTIONS_OUTPUT,
        Mode::Positions => DEFAULT_POSITIONS_OUTPUT
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The run summary goes to stdout, so logging writes to stderr to
    //      keep the two streams separable.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(mode: Mode, summary: &RunSummary, output_path: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    match mode {
        Mode::Transactions => {
            writeln!(output, "Converted {} of {} transactions", summary.rows_written, summary.rows_read)?;
        }
        Mode::Positions => {
            writeln!(output, "Found {} open positions:", summary.positions.len())?;

            for position in &summary.positions {
                writeln!(output, "{:<10} {:>14} shares @ ${:.2}", position.ticker, position.shares, position.last_price)?;
            }
        }
    }

    writeln!(output, "Output saved to: {output_path}")?;
    output.flush()?;

    Ok(())
}
