//! Data types for FMP API responses.
//!
//! Every figure is optional: FMP omits or nulls fields it has no value for,
//! and a missing figure must stay missing rather than read as zero.

use serde::{Deserialize, Serialize};
use tenet_traits::Date;

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// A dated statement record.
pub trait Dated {
    /// Raw `YYYY-MM-DD` period end date.
    fn date(&self) -> &str;

    /// Parse the date string into a [`Date`].
    fn parsed_date(&self) -> Option<Date> {
        Date::parse_from_str(self.date(), "%Y-%m-%d").ok()
    }
}

/// Income statement data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Gross profit.
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Operating expenses.
    #[serde(default)]
    pub operating_expenses: Option<f64>,
    /// Selling, general and administrative expenses.
    #[serde(default)]
    pub selling_general_and_administrative_expenses: Option<f64>,
    /// Interest expense.
    #[serde(default)]
    pub interest_expense: Option<f64>,
    /// Operating income.
    #[serde(default)]
    pub operating_income: Option<f64>,
    /// Income before tax.
    #[serde(default)]
    pub income_before_tax: Option<f64>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// EBITDA.
    #[serde(default)]
    pub ebitda: Option<f64>,
    /// Weighted average shares outstanding.
    #[serde(default)]
    pub weighted_average_shs_out: Option<f64>,
}

/// Balance sheet data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Total current assets.
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    /// Cash and cash equivalents.
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
    /// Short-term investments.
    #[serde(default)]
    pub short_term_investments: Option<f64>,
    /// Net receivables.
    #[serde(default)]
    pub net_receivables: Option<f64>,
    /// Inventory.
    #[serde(default)]
    pub inventory: Option<f64>,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Total current liabilities.
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    /// Short-term debt.
    #[serde(default)]
    pub short_term_debt: Option<f64>,
    /// Long-term debt.
    #[serde(default)]
    pub long_term_debt: Option<f64>,
    /// Property, plant and equipment, net.
    #[serde(default)]
    pub property_plant_equipment_net: Option<f64>,
    /// Total stockholders' equity.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
}

/// Cash flow statement data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Depreciation and amortization.
    #[serde(default)]
    pub depreciation_and_amortization: Option<f64>,
    /// Capital expenditure, negative as reported.
    #[serde(default)]
    pub capital_expenditure: Option<f64>,
}

/// Financial ratios from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Price to sales ratio.
    #[serde(default)]
    pub price_to_sales_ratio: Option<f64>,
}

macro_rules! impl_dated {
    ($($ty:ty),+) => {
        $(impl Dated for $ty {
            fn date(&self) -> &str {
                &self.date
            }
        })+
    };
}

impl_dated!(IncomeStatement, BalanceSheet, CashFlowStatement, FinancialRatios);

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
}

/// Everything fetched for one symbol.
#[derive(Debug, Clone)]
pub struct FundamentalData {
    /// Ticker symbol.
    pub symbol: String,
    /// Income statements (most recent first).
    pub income_statements: Vec<IncomeStatement>,
    /// Balance sheets (most recent first).
    pub balance_sheets: Vec<BalanceSheet>,
    /// Cash flow statements (most recent first).
    pub cash_flows: Vec<CashFlowStatement>,
    /// Financial ratios (most recent first).
    pub ratios: Vec<FinancialRatios>,
    /// Current quote.
    pub quote: Quote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_absent_fields_stay_missing() {
        let income: IncomeStatement = serde_json::from_str(
            r#"{"date": "2023-09-30", "symbol": "AAPL", "revenue": 383285000000,
                "netIncome": null, "ebitda": 125820000000}"#,
        )
        .unwrap();
        assert_eq!(income.revenue, Some(383_285_000_000.0));
        assert_eq!(income.net_income, None);
        assert_eq!(income.gross_profit, None);
        assert_eq!(income.parsed_date(), Date::from_ymd_opt(2023, 9, 30));
    }

    #[test]
    fn test_quote_fields() {
        let quotes: Vec<Quote> = serde_json::from_str(
            r#"[{"symbol": "AAPL", "name": "Apple Inc.", "price": 189.5, "marketCap": 2950000000000}]"#,
        )
        .unwrap();
        assert_eq!(quotes[0].name.as_deref(), Some("Apple Inc."));
        assert_eq!(quotes[0].market_cap, Some(2.95e12));
    }

    #[test]
    fn test_bad_date() {
        let ratios = FinancialRatios {
            date: "30/09/2023".to_string(),
            ..Default::default()
        };
        assert!(ratios.parsed_date().is_none());
        assert_eq!(Period::Quarter.as_str(), "quarter");
    }
}
