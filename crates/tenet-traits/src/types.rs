//! Common types used throughout the tenet framework.
//!
//! This module defines the vocabulary shared by loaders and evaluators: the
//! four statement categories, the canonical metric labels found in them, and
//! the unit and ordering conventions a source declares when it is loaded.

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, typically a ticker like "AAPL".
pub type Symbol = String;

/// Financial statement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Income statement (revenue down to net income).
    IncomeStatement,
    /// Balance sheet (assets, liabilities, equity).
    BalanceSheet,
    /// Cash flow statement.
    CashFlow,
    /// Valuation and financial ratios.
    Ratios,
}

impl StatementKind {
    /// All statement kinds in loading order.
    pub const ALL: [Self; 4] = [
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::Ratios,
    ];

    /// Human-readable title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "Income statement",
            Self::BalanceSheet => "Balance sheet",
            Self::CashFlow => "Cash flow",
            Self::Ratios => "Ratios",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Canonical metrics read by the evaluators.
///
/// Each metric lives in exactly one statement and is stored under a fixed
/// label. Loaders map their source-specific field names onto these labels so
/// that evaluators never depend on the source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    // Income statement
    /// Total revenue.
    Revenue,
    /// Gross profit.
    GrossProfit,
    /// Total operating expenses.
    OperatingExpenses,
    /// Selling, general and administrative expenses.
    SellingGeneralAdministrative,
    /// Interest expense.
    InterestExpense,
    /// Operating income.
    OperatingIncome,
    /// Net income before taxes, used as EBIT.
    NetIncomeBeforeTaxes,
    /// Net income.
    NetIncome,
    /// EBITDA.
    Ebitda,

    // Balance sheet
    /// Total current assets.
    CurrentAssets,
    /// Cash and cash equivalents.
    CashAndEquivalents,
    /// Short term investments.
    ShortTermInvestments,
    /// Trade accounts receivable.
    AccountsReceivable,
    /// Total inventory.
    Inventory,
    /// Total assets.
    TotalAssets,
    /// Total current liabilities.
    CurrentLiabilities,
    /// Notes payable and short term debt.
    ShortTermDebt,
    /// Total long term debt.
    LongTermDebt,
    /// Net property, plant and equipment.
    PropertyPlantEquipment,
    /// Total shareholders' equity.
    TotalEquity,
    /// Total common shares outstanding.
    SharesOutstanding,

    // Cash flow
    /// Depreciation and depletion.
    Depreciation,
    /// Capital expenditures (usually reported as a negative number).
    CapitalExpenditures,

    // Ratios
    /// Price to sales, trailing twelve months.
    PriceToSales,
}

impl Metric {
    /// Statement the metric belongs to.
    #[must_use]
    pub const fn statement(&self) -> StatementKind {
        match self {
            Self::Revenue
            | Self::GrossProfit
            | Self::OperatingExpenses
            | Self::SellingGeneralAdministrative
            | Self::InterestExpense
            | Self::OperatingIncome
            | Self::NetIncomeBeforeTaxes
            | Self::NetIncome
            | Self::Ebitda => StatementKind::IncomeStatement,
            Self::CurrentAssets
            | Self::CashAndEquivalents
            | Self::ShortTermInvestments
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::TotalAssets
            | Self::CurrentLiabilities
            | Self::ShortTermDebt
            | Self::LongTermDebt
            | Self::PropertyPlantEquipment
            | Self::TotalEquity
            | Self::SharesOutstanding => StatementKind::BalanceSheet,
            Self::Depreciation | Self::CapitalExpenditures => StatementKind::CashFlow,
            Self::PriceToSales => StatementKind::Ratios,
        }
    }

    /// Label under which the metric is stored.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Total Revenue",
            Self::GrossProfit => "Gross Profit",
            Self::OperatingExpenses => "Total Operating Expenses",
            Self::SellingGeneralAdministrative => "Selling/General/Admin. Expenses, Total",
            Self::InterestExpense => "Interest Expense (Income) - Net Operating",
            Self::OperatingIncome => "Operating Income",
            Self::NetIncomeBeforeTaxes => "Net Income Before Taxes",
            Self::NetIncome => "Net Income",
            Self::Ebitda => "EBITDA",
            Self::CurrentAssets => "Total Current Assets",
            Self::CashAndEquivalents => "Cash & Equivalents",
            Self::ShortTermInvestments => "Short Term Investments",
            Self::AccountsReceivable => "Accounts Receivables - Trade, Net",
            Self::Inventory => "Total Inventory",
            Self::TotalAssets => "Total Assets",
            Self::CurrentLiabilities => "Total Current Liabilities",
            Self::ShortTermDebt => "Notes Payable/Short Term Debt",
            Self::LongTermDebt => "Total Long Term Debt",
            Self::PropertyPlantEquipment => "Property/Plant/Equipment, Total - Net",
            Self::TotalEquity => "Total Equity",
            Self::SharesOutstanding => "Total Common Shares Outstanding",
            Self::Depreciation => "Depreciation/Depletion",
            Self::CapitalExpenditures => "Capital Expenditures",
            Self::PriceToSales => "Price to Sales TTM",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit in which a source reports its figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Raw units.
    #[default]
    Units,
    /// Thousands.
    Thousands,
    /// Millions, as in most scraped statement tables.
    Millions,
}

impl Scale {
    /// Multiplier converting the reported figure to raw units.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Units => 1.0,
            Self::Thousands => 1e3,
            Self::Millions => 1e6,
        }
    }
}

/// Order of the periods in a source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chronology {
    /// Most recent period first (the internal convention).
    NewestFirst,
    /// Oldest period first; reversed when loaded.
    OldestFirst,
}

impl Chronology {
    /// Infer the order of a period axis from its dates.
    ///
    /// Returns `None` when the dates are not strictly monotonic. A single
    /// period is trivially newest-first.
    #[must_use]
    pub fn infer(periods: &[Date]) -> Option<Self> {
        if periods.windows(2).all(|w| w[0] > w[1]) {
            Some(Self::NewestFirst)
        } else if periods.windows(2).all(|w| w[0] < w[1]) {
            Some(Self::OldestFirst)
        } else {
            None
        }
    }
}
