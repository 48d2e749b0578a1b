//! Report result shapes returned by the ledger engine.
//!
//! These mirror the engine's encoding exactly. Quantities are decimal
//! strings produced by the engine; this layer never reinterprets them
//! as binary floats, so the engine stays the sole source of numeric
//! precision. All report data is transient: created per response,
//! owned by the requesting view, never mutated after construction.

use serde::{Deserialize, Serialize};

/// A single commodity amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Commodity symbol (e.g. "$", "EUR")
    pub commodity: String,
    /// Decimal quantity, verbatim from the engine
    pub quantity: String,
}

/// Position of a transaction in its source journal file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePosition {
    pub file: String,
    pub line: u32,
}

/// Balance assertion attached to a posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceAssertion {
    pub amount: Amount,
    /// Asserts the total across all commodities
    pub total: bool,
    /// Includes subaccount balances
    pub inclusive: bool,
}

/// A single account line within a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintPosting {
    /// Account path; hierarchical by convention, opaque to this layer
    pub account: String,
    /// Posting amounts, in engine order
    pub amounts: Vec<Amount>,
    pub comment: Option<String>,
    pub balance_assertion: Option<BalanceAssertion>,
}

/// A dated group of postings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintTransaction {
    /// Primary date (ISO)
    pub date: String,
    /// Secondary date, when recorded
    pub date2: Option<String>,
    /// Status marker: "*" cleared, "!" pending
    pub status: Option<String>,
    /// Transaction code (e.g. a cheque number)
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    /// (name, value) pairs, order-preserving
    pub tags: Vec<(String, String)>,
    pub postings: Vec<PrintPosting>,
    /// Journal positions; used only for user-initiated copy actions,
    /// never for identity or joins
    pub source_positions: Option<Vec<SourcePosition>>,
}

/// Print report: the raw transaction listing
pub type PrintReport = Vec<PrintTransaction>;

/// Accounts report: flat list of account names
pub type AccountsReport = Vec<String>;

/// One account row in a single-period balance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceAccount {
    /// Full account name
    pub name: String,
    /// Name as the engine chose to display it (tree mode indents)
    pub display_name: String,
    /// Indentation level in tree mode
    pub indent: u32,
    pub amounts: Vec<Amount>,
}

/// Single-period balance report body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleBalance {
    pub accounts: Vec<BalanceAccount>,
    pub totals: Vec<Amount>,
}

/// Start and end of one report subperiod (half-open, end exclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodDate {
    pub start: String,
    pub end: String,
}

/// One account row in a periodic balance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicBalanceRow {
    pub account: String,
    pub display_name: String,
    /// One amount list per period, aligned with `PeriodicBalance::dates`
    pub amounts: Vec<Vec<Amount>>,
    pub total: Vec<Amount>,
    pub average: Vec<Amount>,
}

/// Multi-period balance report body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodicBalance {
    pub dates: Vec<PeriodDate>,
    pub rows: Vec<PeriodicBalanceRow>,
    pub totals: Option<PeriodicBalanceRow>,
}

/// Balance report: simple or periodic depending on the period flags
///
/// Untagged: the engine returns one shape or the other from the same
/// call, distinguished by structure alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BalanceReport {
    Periodic(PeriodicBalance),
    Simple(SimpleBalance),
}

impl Default for BalanceReport {
    /// The empty "no data" state: a simple report with no accounts
    fn default() -> Self {
        BalanceReport::Simple(SimpleBalance::default())
    }
}

impl BalanceReport {
    /// True iff the report carries no account rows
    pub fn is_empty(&self) -> bool {
        match self {
            BalanceReport::Simple(simple) => simple.accounts.is_empty(),
            BalanceReport::Periodic(periodic) => periodic.rows.is_empty(),
        }
    }
}

/// Named section of a compound report (e.g. "Assets", "Liabilities")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subreport {
    pub name: String,
    pub report: BalanceReport,
    /// Whether this section adds to or subtracts from the grand total
    pub increases_total: bool,
}

/// Balance sheet: assets and liabilities subreports plus grand totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    pub dates: Vec<PeriodDate>,
    pub subreports: Vec<Subreport>,
    pub totals: Vec<Amount>,
}

impl BalanceSheetReport {
    /// True iff every section is empty of account rows
    pub fn is_empty(&self) -> bool {
        self.subreports.iter().all(|s| s.report.is_empty())
    }
}

/// Income statement: revenues and expenses subreports plus net total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    pub dates: Vec<PeriodDate>,
    pub subreports: Vec<Subreport>,
    pub totals: Vec<Amount>,
}

impl IncomeStatementReport {
    /// True iff every section is empty of account rows
    pub fn is_empty(&self) -> bool {
        self.subreports.iter().all(|s| s.report.is_empty())
    }
}

// ==================== Tests ====================
