//! Normalization of raw statement tables.
//!
//! Scraped statement pages arrive as a header row of period labels followed by
//! one row of textual cells per metric. [`RawTable::normalize`] parses the
//! headers, coerces cells to numbers and hands everything to the
//! [`StatementBuilder`](crate::StatementBuilder), so that ordering and units
//! are settled in exactly one place.
//!
//! A whole scraped company can be exported as a [`ScrapedEquity`] JSON
//! document and read back as an [`Equity`].

use crate::{
    Chronology, Date, Equity, EquityData, Result, Scale, StatementKind, StatementStore, Symbol,
    TenetError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Date format of the period headers in investing.com statement tables
/// (year followed by day/month, e.g. `202331/12`).
pub const INVESTING_DATE_FORMAT: &str = "%Y%d/%m";

/// A statement table as scraped, before any normalization.
#[derive(Debug, Clone)]
pub struct RawTable {
    kind: StatementKind,
    headers: Vec<String>,
    rows: Vec<(String, Vec<String>)>,
    date_format: String,
    scale: Scale,
}

impl RawTable {
    /// Create a table from its period headers.
    ///
    /// Defaults to [`INVESTING_DATE_FORMAT`] headers and figures in millions.
    #[must_use]
    pub fn new(kind: StatementKind, headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            date_format: INVESTING_DATE_FORMAT.to_string(),
            scale: Scale::Millions,
        }
    }

    /// Set the `chrono` format of the period headers.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the unit of the figures.
    #[must_use]
    pub const fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Append a metric row.
    #[must_use]
    pub fn row(
        mut self,
        label: impl Into<String>,
        cells: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.rows
            .push((label.into(), cells.into_iter().map(Into::into).collect()));
        self
    }

    /// Parse, clean and load the table into a [`StatementStore`].
    ///
    /// Cells that are not numbers ("-", "", "N/A") become missing values and
    /// rows missing in every period are dropped. The period order is inferred
    /// from the parsed header dates.
    ///
    /// # Errors
    ///
    /// Returns [`TenetError::InvalidData`] if a header does not match the date
    /// format, the headers are not strictly ordered, or a row does not have one
    /// cell per period.
    pub fn normalize(self) -> Result<StatementStore> {
        let periods = self
            .headers
            .iter()
            .map(|header| {
                Date::parse_from_str(header.trim(), &self.date_format).map_err(|e| {
                    TenetError::InvalidData(format!(
                        "{}: cannot parse period header '{header}' with '{}': {e}",
                        self.kind, self.date_format
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let chronology = Chronology::infer(&periods).ok_or_else(|| {
            TenetError::InvalidData(format!(
                "{}: period headers are not strictly ordered",
                self.kind
            ))
        })?;

        let mut builder = StatementStore::builder(self.kind)
            .periods(periods)
            .chronology(chronology)
            .scale(self.scale);

        for (label, cells) in self.rows {
            let values: Vec<Option<f64>> = cells.iter().map(|c| parse_cell(c)).collect();
            if values.iter().all(Option::is_none) {
                warn!(statement = %self.kind, %label, "row has no numeric value, dropped");
                continue;
            }
            builder = builder.metric(label, values);
        }

        builder.build()
    }
}

/// One metric row of a [`TableExport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowExport {
    /// Metric label as printed by the source.
    pub label: String,
    /// One textual cell per period header.
    pub cells: Vec<String>,
}

/// On-disk form of a [`RawTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExport {
    /// Statement the table belongs to.
    pub kind: StatementKind,
    /// Period headers, in source order.
    pub headers: Vec<String>,
    /// Metric rows.
    pub rows: Vec<RowExport>,
    /// `chrono` format of the headers, [`INVESTING_DATE_FORMAT`] if absent.
    #[serde(default)]
    pub date_format: Option<String>,
    /// Unit of the figures, millions if absent.
    #[serde(default)]
    pub scale: Option<Scale>,
}

impl TableExport {
    /// The table, ready to be normalized.
    #[must_use]
    pub fn into_table(self) -> RawTable {
        let mut table = RawTable::new(self.kind, self.headers);
        if let Some(format) = self.date_format {
            table = table.date_format(format);
        }
        if let Some(scale) = self.scale {
            table = table.scale(scale);
        }
        self.rows
            .into_iter()
            .fold(table, |table, row| table.row(row.label, row.cells))
    }
}

/// A company as exported by a statement scraper: identity plus raw tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedEquity {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Display name.
    pub name: String,
    /// Reference share price.
    pub price: f64,
    /// Reported market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Raw statement tables, at most one per statement kind.
    pub tables: Vec<TableExport>,
}

impl ScrapedEquity {
    /// Normalize every table and assemble the equity.
    ///
    /// # Errors
    ///
    /// Returns [`TenetError::InvalidData`] if a table cannot be normalized or
    /// a statement appears twice.
    pub fn into_equity(self) -> Result<Equity> {
        let mut seen = Vec::with_capacity(self.tables.len());
        let mut equity =
            Equity::new(self.symbol, self.name, self.price).with_market_cap(self.market_cap);
        for export in self.tables {
            if seen.contains(&export.kind) {
                return Err(TenetError::InvalidData(format!(
                    "{}: table appears more than once",
                    export.kind
                )));
            }
            seen.push(export.kind);
            equity = equity.with_statement(export.into_table().normalize()?);
        }
        debug!(symbol = %equity.symbol(), tables = seen.len(), "normalized scraped tables");
        Ok(equity)
    }
}

/// Parse one table cell; anything that is not a finite number is missing.
fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
