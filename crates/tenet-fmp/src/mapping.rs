//! Conversion of FMP records into statement stores and an [`Equity`].
//!
//! FMP reports raw units, most recent period first. Records are re-sorted by
//! date anyway and duplicates dropped, so the stores always satisfy the
//! newest-first invariant.

use crate::{
    Result,
    error::FmpError,
    types::{
        BalanceSheet, CashFlowStatement, Dated, FinancialRatios, FundamentalData, IncomeStatement,
    },
};
use std::collections::HashMap;
use tenet_traits::{
    Chronology, Date, Equity, Metric, Metric::*, Scale, StatementBuilder, StatementKind,
    StatementStore,
};
use tracing::warn;

/// Field accessor of a record type.
type Field<R> = fn(&R) -> Option<f64>;

const INCOME_FIELDS: &[(Metric, Field<IncomeStatement>)] = &[
    (Revenue, |r| r.revenue),
    (GrossProfit, |r| r.gross_profit),
    (OperatingExpenses, |r| r.operating_expenses),
    (SellingGeneralAdministrative, |r| {
        r.selling_general_and_administrative_expenses
    }),
    (InterestExpense, |r| r.interest_expense),
    (OperatingIncome, |r| r.operating_income),
    (NetIncomeBeforeTaxes, |r| r.income_before_tax),
    (NetIncome, |r| r.net_income),
    (Ebitda, |r| r.ebitda),
];

const BALANCE_FIELDS: &[(Metric, Field<BalanceSheet>)] = &[
    (CurrentAssets, |r| r.total_current_assets),
    (CashAndEquivalents, |r| r.cash_and_cash_equivalents),
    (ShortTermInvestments, |r| r.short_term_investments),
    (AccountsReceivable, |r| r.net_receivables),
    (Inventory, |r| r.inventory),
    (TotalAssets, |r| r.total_assets),
    (CurrentLiabilities, |r| r.total_current_liabilities),
    (ShortTermDebt, |r| r.short_term_debt),
    (LongTermDebt, |r| r.long_term_debt),
    (PropertyPlantEquipment, |r| r.property_plant_equipment_net),
    (TotalEquity, |r| r.total_stockholders_equity),
];

const CASH_FLOW_FIELDS: &[(Metric, Field<CashFlowStatement>)] = &[
    (Depreciation, |r| r.depreciation_and_amortization),
    (CapitalExpenditures, |r| r.capital_expenditure),
];

const RATIO_FIELDS: &[(Metric, Field<FinancialRatios>)] =
    &[(PriceToSales, |r| r.price_to_sales_ratio)];

/// Records with a valid date, newest first, one per date.
fn dated<R: Dated>(kind: StatementKind, records: &[R]) -> Vec<(Date, &R)> {
    let mut rows: Vec<(Date, &R)> = records
        .iter()
        .filter_map(|r| {
            let date = r.parsed_date();
            if date.is_none() {
                warn!(statement = %kind, date = r.date(), "dropping record with unparseable date");
            }
            date.map(|d| (d, r))
        })
        .collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0));
    rows.dedup_by_key(|(d, _)| *d);
    rows
}

fn store<R: Dated>(
    kind: StatementKind,
    rows: &[(Date, &R)],
    fields: &[(Metric, Field<R>)],
) -> StatementBuilder {
    fields.iter().fold(
        StatementStore::builder(kind)
            .periods(rows.iter().map(|(d, _)| *d))
            .chronology(Chronology::NewestFirst)
            .scale(Scale::Units),
        |builder, (metric, field)| {
            builder.metric(metric.label(), rows.iter().map(|&(_, r)| field(r)))
        },
    )
}

impl FundamentalData {
    /// Income statement store.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot form a valid store.
    pub fn income_store(&self) -> Result<StatementStore> {
        let kind = StatementKind::IncomeStatement;
        let rows = dated(kind, &self.income_statements);
        Ok(store(kind, &rows, INCOME_FIELDS).build()?)
    }

    /// Balance sheet store. Shares outstanding come from the income statement
    /// of the same period.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot form a valid store.
    pub fn balance_store(&self) -> Result<StatementStore> {
        let kind = StatementKind::BalanceSheet;
        let rows = dated(kind, &self.balance_sheets);
        let shares: HashMap<Date, f64> =
            dated(StatementKind::IncomeStatement, &self.income_statements)
                .into_iter()
                .filter_map(|(d, r)| Some((d, r.weighted_average_shs_out?)))
                .collect();
        Ok(store(kind, &rows, BALANCE_FIELDS)
            .metric(
                SharesOutstanding.label(),
                rows.iter().map(|(d, _)| shares.get(d).copied()),
            )
            .build()?)
    }

    /// Cash flow store.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot form a valid store.
    pub fn cash_flow_store(&self) -> Result<StatementStore> {
        let kind = StatementKind::CashFlow;
        let rows = dated(kind, &self.cash_flows);
        Ok(store(kind, &rows, CASH_FLOW_FIELDS).build()?)
    }

    /// Ratios store.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot form a valid store.
    pub fn ratios_store(&self) -> Result<StatementStore> {
        let kind = StatementKind::Ratios;
        let rows = dated(kind, &self.ratios);
        Ok(store(kind, &rows, RATIO_FIELDS).build()?)
    }

    /// Build the equity: quote identity and price plus the four stores.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::NoData`] if the quote carries no price, or an error
    /// if a store cannot be built.
    pub fn to_equity(&self) -> Result<Equity> {
        let price = self
            .quote
            .price
            .filter(|p| p.is_finite())
            .ok_or_else(|| FmpError::NoData(format!("{} quote price", self.symbol)))?;
        let name = self
            .quote
            .name
            .clone()
            .unwrap_or_else(|| self.symbol.clone());
        Ok(Equity::new(self.symbol.clone(), name, price)
            .with_market_cap(self.quote.market_cap)
            .with_statement(self.income_store()?)
            .with_statement(self.balance_store()?)
            .with_statement(self.cash_flow_store()?)
            .with_statement(self.ratios_store()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quote;
    use approx::assert_relative_eq;
    use tenet_traits::EquityData;

    fn data() -> FundamentalData {
        let income = |date: &str, net_income: f64| IncomeStatement {
            date: date.to_string(),
            revenue: Some(1000.0),
            gross_profit: Some(450.0),
            net_income: Some(net_income),
            weighted_average_shs_out: Some(50.0),
            ..Default::default()
        };
        FundamentalData {
            symbol: "ACME".to_string(),
            // deliberately out of order
            income_statements: vec![
                income("2021-12-31", 80.0),
                income("2023-12-31", 120.0),
                income("2022-12-31", 100.0),
            ],
            balance_sheets: vec![BalanceSheet {
                date: "2023-12-31".to_string(),
                total_current_assets: Some(300.0),
                total_current_liabilities: Some(150.0),
                ..Default::default()
            }],
            cash_flows: vec![CashFlowStatement {
                date: "bad".to_string(),
                capital_expenditure: Some(-10.0),
                ..Default::default()
            }],
            ratios: Vec::new(),
            quote: Quote {
                symbol: "ACME".to_string(),
                name: Some("Acme Corp".to_string()),
                price: Some(10.0),
                market_cap: None,
            },
        }
    }

    #[test]
    fn test_equity_from_records() {
        let equity = data().to_equity().unwrap();
        assert_eq!(equity.name(), "Acme Corp");

        let income = equity.income_statement();
        assert_eq!(income.period_count(), 3);
        assert!(income.periods().windows(2).all(|w| w[0] > w[1]));
        assert_eq!(equity.latest(NetIncome), Some(120.0));
        assert_eq!(
            equity.history(NetIncome).unwrap().values(),
            &[Some(120.0), Some(100.0), Some(80.0)]
        );
        assert_eq!(equity.latest(CurrentAssets), Some(300.0));
    }

    #[test]
    fn test_market_cap_falls_back_to_shares() {
        let equity = data().to_equity().unwrap();
        assert_eq!(equity.latest(SharesOutstanding), Some(50.0));
        assert_relative_eq!(equity.market_cap().unwrap(), 500.0);
    }

    #[test]
    fn test_unreported_fields_and_bad_dates() {
        let equity = data().to_equity().unwrap();
        assert!(equity.history(Inventory).is_none());
        assert!(equity.cash_flow().is_empty());
        assert!(equity.ratios().is_empty());
    }

    #[test]
    fn test_fields_land_in_their_statement() {
        assert!(INCOME_FIELDS.iter().all(|(m, _)| m.statement() == StatementKind::IncomeStatement));
        assert!(BALANCE_FIELDS.iter().all(|(m, _)| m.statement() == StatementKind::BalanceSheet));
        assert!(CASH_FLOW_FIELDS.iter().all(|(m, _)| m.statement() == StatementKind::CashFlow));
        assert!(RATIO_FIELDS.iter().all(|(m, _)| m.statement() == StatementKind::Ratios));
    }

    #[test]
    fn test_missing_price() {
        let mut data = data();
        data.quote.price = None;
        assert!(matches!(data.to_equity(), Err(FmpError::NoData(_))));
    }
}
