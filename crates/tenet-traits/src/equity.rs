//! The equity aggregate: one company's identity plus its four statements.

use crate::{
    Date, Metric, MetricSeries, Result, StatementKind, StatementSnapshot, StatementStore, Symbol,
};
use serde::{Deserialize, Serialize};

/// Read access to everything an evaluator may look at for one company.
///
/// This is the only boundary between the evaluators and data sources.
pub trait EquityData {
    /// Ticker symbol.
    fn symbol(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Current or reference share price.
    fn price(&self) -> f64;

    /// Market capitalization, if known or derivable.
    fn market_cap(&self) -> Option<f64>;

    /// Income statement.
    fn income_statement(&self) -> &StatementStore;

    /// Balance sheet.
    fn balance_sheet(&self) -> &StatementStore;

    /// Cash flow statement.
    fn cash_flow(&self) -> &StatementStore;

    /// Valuation ratios.
    fn ratios(&self) -> &StatementStore;

    /// Statement by category.
    fn statement(&self, kind: StatementKind) -> &StatementStore {
        match kind {
            StatementKind::IncomeStatement => self.income_statement(),
            StatementKind::BalanceSheet => self.balance_sheet(),
            StatementKind::CashFlow => self.cash_flow(),
            StatementKind::Ratios => self.ratios(),
        }
    }

    /// Full history of a canonical metric, most recent first.
    fn history(&self, metric: Metric) -> Option<MetricSeries> {
        self.statement(metric.statement()).metric(metric)
    }

    /// Most recent value of a canonical metric.
    fn latest(&self, metric: Metric) -> Option<f64> {
        self.history(metric).and_then(|s| s.latest())
    }
}

/// One company loaded for analysis. Read-only once built.
#[derive(Debug, Clone)]
pub struct Equity {
    symbol: Symbol,
    name: String,
    price: f64,
    market_cap: Option<f64>,
    income_statement: StatementStore,
    balance_sheet: StatementStore,
    cash_flow: StatementStore,
    ratios: StatementStore,
}

impl Equity {
    /// Create an equity with empty statements.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            market_cap: None,
            income_statement: StatementStore::empty(StatementKind::IncomeStatement),
            balance_sheet: StatementStore::empty(StatementKind::BalanceSheet),
            cash_flow: StatementStore::empty(StatementKind::CashFlow),
            ratios: StatementStore::empty(StatementKind::Ratios),
        }
    }

    /// Attach a statement, replacing the store of the same kind.
    #[must_use]
    pub fn with_statement(mut self, store: StatementStore) -> Self {
        match store.kind() {
            StatementKind::IncomeStatement => self.income_statement = store,
            StatementKind::BalanceSheet => self.balance_sheet = store,
            StatementKind::CashFlow => self.cash_flow = store,
            StatementKind::Ratios => self.ratios = store,
        }
        self
    }

    /// Set the directly sourced market capitalization.
    #[must_use]
    pub const fn with_market_cap(mut self, market_cap: Option<f64>) -> Self {
        self.market_cap = market_cap;
        self
    }

    /// Market capitalization as reported by the source, without fallback.
    #[must_use]
    pub const fn reported_market_cap(&self) -> Option<f64> {
        self.market_cap
    }

    /// Serializable copy of the equity.
    #[must_use]
    pub fn snapshot(&self) -> EquitySnapshot {
        EquitySnapshot {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            price: self.price,
            market_cap: self.market_cap,
            as_of: None,
            statements: StatementKind::ALL
                .iter()
                .map(|kind| self.statement(*kind).snapshot())
                .collect(),
        }
    }

    /// Rebuild an equity from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if a statement in the snapshot is malformed.
    pub fn from_snapshot(snapshot: EquitySnapshot) -> Result<Self> {
        snapshot.statements.into_iter().try_fold(
            Self::new(snapshot.symbol, snapshot.name, snapshot.price)
                .with_market_cap(snapshot.market_cap),
            |equity, statement| {
                Ok(equity.with_statement(StatementStore::from_snapshot(statement)?))
            },
        )
    }
}

impl EquityData for Equity {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    /// The reported market cap, else latest shares outstanding times price.
    fn market_cap(&self) -> Option<f64> {
        let reported = self.market_cap.filter(|m| m.is_finite() && *m != 0.0);
        reported.or_else(|| {
            let shares = self.latest(Metric::SharesOutstanding)?;
            let derived = shares * self.price;
            (derived.is_finite() && derived != 0.0).then_some(derived)
        })
    }

    fn income_statement(&self) -> &StatementStore {
        &self.income_statement
    }

    fn balance_sheet(&self) -> &StatementStore {
        &self.balance_sheet
    }

    fn cash_flow(&self) -> &StatementStore {
        &self.cash_flow
    }

    fn ratios(&self) -> &StatementStore {
        &self.ratios
    }
}

/// On-disk form of an [`Equity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySnapshot {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Display name.
    pub name: String,
    /// Reference share price.
    pub price: f64,
    /// Reported market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Date the data was retrieved.
    #[serde(default)]
    pub as_of: Option<Date>,
    /// Statements, raw units, most recent period first.
    pub statements: Vec<StatementSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn balance_sheet(shares: Option<f64>) -> StatementStore {
        StatementStore::builder(StatementKind::BalanceSheet)
            .periods([Date::from_ymd_opt(2023, 12, 31).unwrap()])
            .metric("Total Common Shares Outstanding", [shares])
            .metric("Total Current Assets", [Some(80.0)])
            .build()
            .unwrap()
    }

    #[test]
    fn test_reported_market_cap_wins() {
        let equity = Equity::new("ACME", "Acme Corp", 10.0)
            .with_market_cap(Some(5e8))
            .with_statement(balance_sheet(Some(1e6)));
        assert_relative_eq!(equity.market_cap().unwrap(), 5e8);
    }

    #[test]
    fn test_market_cap_falls_back_to_shares_times_price() {
        let equity =
            Equity::new("ACME", "Acme Corp", 12.5).with_statement(balance_sheet(Some(4e7)));
        assert_relative_eq!(equity.market_cap().unwrap(), 5e8);
    }

    #[test]
    fn test_market_cap_absent_without_shares() {
        let equity = Equity::new("ACME", "Acme Corp", 12.5).with_statement(balance_sheet(None));
        assert!(equity.market_cap().is_none());
    }

    #[test]
    fn test_latest_reads_from_owning_statement() {
        let equity = Equity::new("ACME", "Acme Corp", 1.0).with_statement(balance_sheet(None));
        assert_eq!(equity.latest(Metric::CurrentAssets), Some(80.0));
        assert_eq!(equity.latest(Metric::Revenue), None);
        assert!(equity.income_statement().is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let equity = Equity::new("ACME", "Acme Corp", 12.5)
            .with_market_cap(Some(3e8))
            .with_statement(balance_sheet(Some(4e7)));
        let json = serde_json::to_string(&equity.snapshot()).unwrap();
        let restored = Equity::from_snapshot(serde_json::from_str(&json).unwrap()).unwrap();

        assert_eq!(restored.symbol(), "ACME");
        assert_eq!(restored.name(), "Acme Corp");
        assert_eq!(restored.reported_market_cap(), Some(3e8));
        assert_eq!(restored.latest(Metric::CurrentAssets), Some(80.0));
        assert_eq!(restored.balance_sheet().periods(), equity.balance_sheet().periods());
    }
}
