//! Tabular feed parsing
//!
//! The feed is comma-separated text with a header row. Fields may be
//! quoted to embed commas or newlines, columns may come in any order, and
//! rows may be short. Each row is converted on its own: a bad row is
//! logged and left out, it never stops the rest of the feed.

use std::collections::HashSet;

use csv::{ReaderBuilder, StringRecord, Trim};
use shopfront_core::ProductRecord;
use tracing::{debug, error, trace, warn};

use crate::error::{FeedError, Result, RowError};
use crate::row::RawFeedRow;

/// Column every usable feed must carry
const ID_COLUMN: &str = "id";

/// A row that did not make it into the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the feed where the row starts
    pub line: u64,
    pub reason: RowError,
}

/// Outcome of parsing a feed
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Accepted records, in feed order
    pub records: Vec<ProductRecord>,

    /// Rejected rows with their reasons
    pub skipped: Vec<SkippedRow>,

    /// Rows without an id, dropped silently
    pub without_id: usize,
}

/// Parse a feed, keeping every row that converts cleanly
///
/// Returns an error only when the feed as a whole is unusable. Empty or
/// whitespace-only input is an empty catalog, not an error.
pub fn parse_catalog_report(raw: &str) -> Result<ParseReport> {
    let mut report = ParseReport::default();
    if raw.trim().is_empty() {
        return Ok(report);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == ID_COLUMN) {
        return Err(FeedError::MissingColumn(ID_COLUMN));
    }

    let mut seen = HashSet::new();
    let mut record = StringRecord::new();
    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!("Skipping unreadable feed row at line {}: {}", line, e);
                report.skipped.push(SkippedRow {
                    line,
                    reason: RowError::Malformed(e.to_string()),
                });
                continue;
            }
        }

        let line = record.position().map(|p| p.line()).unwrap_or(line);
        match convert(&record, &headers, &mut seen) {
            Ok(product) => report.records.push(product),
            Err(RowError::MissingId) => {
                trace!("Dropping feed row without id at line {}", line);
                report.without_id += 1;
            }
            Err(reason) => {
                warn!("Skipping feed row at line {}: {}", line, reason);
                report.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    debug!(
        "Parsed feed: {} record(s), {} skipped, {} without id",
        report.records.len(),
        report.skipped.len(),
        report.without_id
    );
    Ok(report)
}

/// Parse a feed into records, failing only on an unusable feed
pub fn parse_catalog(raw: &str) -> Result<Vec<ProductRecord>> {
    parse_catalog_report(raw).map(|report| report.records)
}

/// Best-effort parse: an unusable feed is logged and yields no records
pub fn parse(raw: &str) -> Vec<ProductRecord> {
    parse_catalog(raw).unwrap_or_else(|e| {
        error!("Feed could not be parsed: {}", e);
        Vec::new()
    })
}

fn convert(
    record: &StringRecord,
    headers: &StringRecord,
    seen: &mut HashSet<i64>,
) -> std::result::Result<ProductRecord, RowError> {
    let row: RawFeedRow = record
        .deserialize(Some(headers))
        .map_err(|e| RowError::Malformed(e.to_string()))?;
    let product = row.into_record()?;
    if !seen.insert(product.id.get()) {
        return Err(RowError::DuplicateId(product.id.get()));
    }
    Ok(product)
}
