use std::io::{Read, Write};

use anyhow::Result;
use csv::{Reader, ReaderBuilder, Trim, Writer, WriterBuilder};
use tracing::{debug, info};

use crate::models::{Category, ImportRow, Position, Transaction};
use crate::storage::PositionBook;

/// Column header of the import format.
const OUTPUT_HEADER: [&str; 6] = ["Symbol", "Side", "Qty", "Fill Price", "Commission", "Closing Time"];

/// What a conversion run produced, for the end-of-run console report.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Input rows deserialized.
    pub rows_read: usize,
    /// Output rows written.
    pub rows_written: usize,
    /// Open positions surviving aggregation; empty for the transaction pipeline.
    pub positions: Vec<Position>
}

/// Single-pass conversion engine for broker export files.
///
/// Both pipelines consume the full input before the output is complete and
/// share the same classification rules; they differ in whether rows map
/// through independently or fold into per-ticker state first.
pub struct ConvertEngine;

impl ConvertEngine {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes every classifiable row into the import format, preserving
    /// input order.
    ///
    /// # Errors
    /// Fails on the first row that cannot be deserialized (a malformed
    /// numeric field aborts the whole run) and on any write failure. There
    /// is no partial-output contract: a failed run leaves whatever was
    /// flushed before the failure.
    pub fn normalize_transactions<R: Read, W: Write>(&self, input: R, output: W) -> Result<RunSummary> {
        let mut reader = Self::export_reader(input);
        let mut writer = Self::import_writer(output)?;
        let mut summary = RunSummary::default();

        for result in reader.deserialize::<Transaction>() {
            let transaction = result?;
            summary.rows_read += 1;

            if let Some(row) = ImportRow::from_transaction(&transaction) {
                debug!("Row [{}] normalized as [{:?}] for symbol [{}]", summary.rows_read, row.side, row.symbol);
                writer.serialize(&row)?;
                summary.rows_written += 1;
            }
        }

        writer.flush()?;

        info!("Normalized {} of {} rows", summary.rows_written, summary.rows_read);

        Ok(summary)
    }

    /// Aggregates trade rows into net per-ticker positions and writes the
    /// surviving open set, sorted by ticker.
    ///
    /// # Errors
    /// Same failure contract as [`Self::normalize_transactions`], plus a
    /// fatal error if a share count overflows during accumulation.
    pub fn calculate_open_positions<R: Read, W: Write>(&self, input: R, output: W) -> Result<RunSummary> {
        let mut reader = Self::export_reader(input);
        let mut book = PositionBook::new();
        let mut summary = RunSummary::default();

        for result in reader.deserialize::<Transaction>() {
            let transaction = result?;
            summary.rows_read += 1;

            if let Category::Trade(side) = transaction.classify().category {
                book.apply(&transaction, side)?;
                debug!("Row [{}] applied to position [{}]", summary.rows_read, transaction.ticker);
            }
        }

        info!("Aggregated {} tickers from {} rows", book.len(), summary.rows_read);

        let positions = book.into_open_positions();
        let mut writer = Self::import_writer(output)?;

        for position in &positions {
            writer.serialize(ImportRow::from_position(position))?;
        }

        writer.flush()?;

        summary.rows_written = positions.len();
        summary.positions = positions;

        Ok(summary)
    }

    fn export_reader<R: Read>(input: R) -> Reader<R> {
        ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input)
    }

    //NOTE: serde only emits a header once a first row is serialized, so the
    //      header is written up front to keep zero-row outputs importable.
    fn import_writer<W: Write>(output: W) -> Result<Writer<W>> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);

        writer.write_record(OUTPUT_HEADER)?;

        Ok(writer)
    }
}
