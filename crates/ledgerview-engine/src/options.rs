//! Report option records sent to the ledger engine.
//!
//! One record per report kind, exhaustively enumerated. The engine
//! performs no defaulting of its own, so every field is always present
//! on the wire: inapplicable fields are `null` or `false`, never
//! absent. The `Default` impls are the canonical safe defaults and
//! must match the engine's conventions exactly.

use serde::{Deserialize, Serialize};

/// Report kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Account name listing
    Accounts,
    /// Account balances, optionally grouped by period
    Balance,
    /// Assets and liabilities snapshot
    BalanceSheet,
    /// Revenues and expenses over a period
    IncomeStatement,
    /// Raw transaction listing
    Print,
}

impl ReportKind {
    /// Engine method name for this report kind
    pub fn method(&self) -> &'static str {
        match self {
            ReportKind::Accounts => "get_accounts",
            ReportKind::Balance => "get_balance",
            ReportKind::BalanceSheet => "get_balance_sheet",
            ReportKind::IncomeStatement => "get_income_statement",
            ReportKind::Print => "get_print",
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accounts" => Ok(ReportKind::Accounts),
            "balance" => Ok(ReportKind::Balance),
            "balancesheet" | "balance_sheet" | "balance-sheet" => Ok(ReportKind::BalanceSheet),
            "incomestatement" | "income_statement" | "income-statement" => {
                Ok(ReportKind::IncomeStatement)
            }
            "print" => Ok(ReportKind::Print),
            _ => Err(format!("Invalid report kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Accounts => write!(f, "accounts"),
            ReportKind::Balance => write!(f, "balance"),
            ReportKind::BalanceSheet => write!(f, "balance_sheet"),
            ReportKind::IncomeStatement => write!(f, "income_statement"),
            ReportKind::Print => write!(f, "print"),
        }
    }
}

/// Output layout for balance-family reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One row per account, one column per period
    Wide,
    /// One row per account per commodity
    Tall,
    /// Commodity symbols in their own column
    Bare,
}

impl std::str::FromStr for Layout {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "tall" => Ok(Layout::Tall),
            "bare" => Ok(Layout::Bare),
            _ => Err(format!("Invalid layout: {}", s)),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Wide => write!(f, "wide"),
            Layout::Tall => write!(f, "tall"),
            Layout::Bare => write!(f, "bare"),
        }
    }
}

/// Options for the accounts report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsOptions {
    /// Only accounts used by transactions
    pub used: bool,
    /// Only accounts declared by directives
    pub declared: bool,
    /// Declared but unused accounts
    pub unused: bool,
    /// Used but undeclared accounts
    pub undeclared: bool,
    /// Show account types
    pub types: bool,
    /// Show declaration positions
    pub positions: bool,
    /// Show as account directives
    pub directives: bool,
    /// Show only the first account matched by this pattern
    pub find: Option<String>,
    /// Flatten: omit this many leading account name components
    pub drop: Option<u32>,
    /// Clip account names at this depth
    pub depth: Option<u32>,
    /// Inclusive start date (ISO)
    pub begin: Option<String>,
    /// Exclusive end date (ISO)
    pub end: Option<String>,
    /// Period expression shortcut; must not be combined with begin/end
    pub period: Option<String>,
    pub unmarked: bool,
    pub pending: bool,
    pub cleared: bool,
    /// Only real (non-virtual) postings
    pub real: bool,
    /// Include empty accounts
    pub empty: bool,
    /// Free-text query terms
    pub queries: Vec<String>,
}

impl Default for AccountsOptions {
    fn default() -> Self {
        Self {
            used: false,
            declared: false,
            unused: false,
            undeclared: false,
            types: false,
            positions: false,
            directives: false,
            find: None,
            drop: None,
            depth: None,
            begin: None,
            end: None,
            period: None,
            unmarked: false,
            pending: false,
            cleared: false,
            real: false,
            empty: false,
            queries: Vec::new(),
        }
    }
}

/// Options for the balance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceOptions {
    /// Calculation mode: sum of postings
    pub sum: bool,
    /// Calculation mode: change of value
    pub valuechange: bool,
    /// Calculation mode: unrealised gain
    pub gain: bool,
    /// Show budget performance for this report interval
    pub budget: Option<String>,
    /// Calculation mode: count of postings
    pub count: bool,
    /// Accumulation: change over the period
    pub change: bool,
    /// Accumulation: cumulative from report start
    pub cumulative: bool,
    /// Accumulation: historical from journal start
    pub historical: bool,
    /// Flat account list (default)
    pub flat: bool,
    /// Hierarchical account tree
    pub tree: bool,
    /// Omit this many leading account name components
    pub drop: Option<u32>,
    /// Include declared accounts even if unused
    pub declared: bool,
    /// Show a row average column
    pub average: bool,
    /// Show a row total column
    pub row_total: bool,
    /// Show only the totals row
    pub summary_only: bool,
    /// Omit the final total row
    pub no_total: bool,
    /// Do not squash boring parent accounts
    pub no_elide: bool,
    /// Sort by amount instead of account name
    pub sort_amount: bool,
    /// Show percentages of column totals
    pub percent: bool,
    /// Show the other postings of matched transactions
    pub related: bool,
    /// Negate all amounts
    pub invert: bool,
    /// Swap rows and columns
    pub transpose: bool,
    /// Output layout
    pub layout: Option<Layout>,
    // Period grouping; at most one should be set
    pub daily: bool,
    pub weekly: bool,
    pub monthly: bool,
    pub quarterly: bool,
    pub yearly: bool,
    /// Period expression shortcut; must not be combined with begin/end
    pub period: Option<String>,
    /// Inclusive start date (ISO)
    pub begin: Option<String>,
    /// Exclusive end date (ISO)
    pub end: Option<String>,
    /// Clip account names at this depth
    pub depth: Option<u32>,
    pub unmarked: bool,
    pub pending: bool,
    pub cleared: bool,
    /// Only real (non-virtual) postings
    pub real: bool,
    /// Include zero balances
    pub empty: bool,
    /// Convert amounts to cost basis
    pub cost: bool,
    /// Convert amounts to market value
    pub market: bool,
    /// Convert amounts to this commodity
    pub exchange: Option<String>,
    /// Valuation mode expression
    pub value: Option<String>,
    /// Free-text query terms
    pub queries: Vec<String>,
}

impl Default for BalanceOptions {
    fn default() -> Self {
        Self {
            sum: false,
            valuechange: false,
            gain: false,
            budget: None,
            count: false,
            change: false,
            cumulative: false,
            historical: false,
            flat: true,
            tree: false,
            drop: None,
            declared: false,
            average: false,
            row_total: false,
            summary_only: false,
            no_total: false,
            no_elide: false,
            sort_amount: false,
            percent: false,
            related: false,
            invert: false,
            transpose: false,
            layout: None,
            daily: false,
            weekly: false,
            monthly: false,
            quarterly: false,
            yearly: false,
            period: None,
            begin: None,
            end: None,
            depth: None,
            unmarked: false,
            pending: false,
            cleared: false,
            real: false,
            empty: false,
            cost: false,
            market: false,
            exchange: None,
            value: None,
            queries: Vec::new(),
        }
    }
}

/// Options for the balance sheet report
///
/// Defaults to `historical = true`: a balance sheet shows cumulative
/// balances from inception, not period-scoped changes. Flipping this
/// changes the meaning of the report, not just its display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetOptions {
    pub sum: bool,
    pub valuechange: bool,
    pub gain: bool,
    pub change: bool,
    pub cumulative: bool,
    /// Cumulative-from-inception balances (default for this report)
    pub historical: bool,
    pub flat: bool,
    pub tree: bool,
    pub drop: Option<u32>,
    pub declared: bool,
    pub average: bool,
    pub row_total: bool,
    pub summary_only: bool,
    pub no_total: bool,
    pub no_elide: bool,
    pub sort_amount: bool,
    pub percent: bool,
    pub layout: Option<Layout>,
    pub daily: bool,
    pub weekly: bool,
    pub monthly: bool,
    pub quarterly: bool,
    pub yearly: bool,
    pub period: Option<String>,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub depth: Option<u32>,
    pub unmarked: bool,
    pub pending: bool,
    pub cleared: bool,
    pub real: bool,
    pub empty: bool,
    pub cost: bool,
    pub market: bool,
    pub exchange: Option<String>,
    pub value: Option<String>,
    pub queries: Vec<String>,
}

impl Default for BalanceSheetOptions {
    fn default() -> Self {
        Self {
            sum: false,
            valuechange: false,
            gain: false,
            change: false,
            cumulative: false,
            historical: true,
            flat: true,
            tree: false,
            drop: None,
            declared: false,
            average: false,
            row_total: false,
            summary_only: false,
            no_total: false,
            no_elide: false,
            sort_amount: false,
            percent: false,
            layout: None,
            daily: false,
            weekly: false,
            monthly: false,
            quarterly: false,
            yearly: false,
            period: None,
            begin: None,
            end: None,
            depth: None,
            unmarked: false,
            pending: false,
            cleared: false,
            real: false,
            empty: false,
            cost: false,
            market: false,
            exchange: None,
            value: None,
            queries: Vec::new(),
        }
    }
}

/// Options for the income statement report
///
/// Defaults to `change = true` and `historical = false`: an income
/// statement shows period-scoped flows, unlike the balance sheet's
/// cumulative balances. The asymmetry is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatementOptions {
    pub sum: bool,
    pub valuechange: bool,
    pub gain: bool,
    /// Period-scoped change (default for this report)
    pub change: bool,
    pub cumulative: bool,
    pub historical: bool,
    pub flat: bool,
    pub tree: bool,
    pub drop: Option<u32>,
    pub declared: bool,
    pub average: bool,
    pub row_total: bool,
    pub summary_only: bool,
    pub no_total: bool,
    pub no_elide: bool,
    pub sort_amount: bool,
    pub percent: bool,
    pub layout: Option<Layout>,
    pub daily: bool,
    pub weekly: bool,
    pub monthly: bool,
    pub quarterly: bool,
    pub yearly: bool,
    pub period: Option<String>,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub depth: Option<u32>,
    pub unmarked: bool,
    pub pending: bool,
    pub cleared: bool,
    pub real: bool,
    pub empty: bool,
    pub cost: bool,
    pub market: bool,
    pub exchange: Option<String>,
    pub value: Option<String>,
    pub queries: Vec<String>,
}

impl Default for IncomeStatementOptions {
    fn default() -> Self {
        Self {
            sum: false,
            valuechange: false,
            gain: false,
            change: true,
            cumulative: false,
            historical: false,
            flat: true,
            tree: false,
            drop: None,
            declared: false,
            average: false,
            row_total: false,
            summary_only: false,
            no_total: false,
            no_elide: false,
            sort_amount: false,
            percent: false,
            layout: None,
            daily: false,
            weekly: false,
            monthly: false,
            quarterly: false,
            yearly: false,
            period: None,
            begin: None,
            end: None,
            depth: None,
            unmarked: false,
            pending: false,
            cleared: false,
            real: false,
            empty: false,
            cost: false,
            market: false,
            exchange: None,
            value: None,
            queries: Vec::new(),
        }
    }
}

/// Options for the print report
///
/// Print is a raw transaction listing, so it carries no aggregation
/// or valuation flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintOptions {
    /// Show all amounts explicitly
    pub explicit: bool,
    /// Show transaction prices even when implied
    pub show_costs: bool,
    /// Rounding mode: none, soft, hard or all
    pub round: Option<String>,
    /// Only transactions newer than the last run
    pub new: bool,
    /// Show the transaction whose description best matches this text
    pub match_desc: Option<String>,
    /// Inclusive start date (ISO)
    pub begin: Option<String>,
    /// Exclusive end date (ISO)
    pub end: Option<String>,
    pub unmarked: bool,
    pub pending: bool,
    pub cleared: bool,
    /// Only real (non-virtual) postings
    pub real: bool,
    /// Include empty postings
    pub empty: bool,
    /// Free-text query terms
    pub queries: Vec<String>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            explicit: false,
            show_costs: false,
            round: None,
            new: false,
            match_desc: None,
            begin: None,
            end: None,
            unmarked: false,
            pending: false,
            cleared: false,
            real: false,
            empty: false,
            queries: Vec::new(),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_method_names() {
        assert_eq!(ReportKind::Accounts.method(), "get_accounts");
        assert_eq!(ReportKind::Balance.method(), "get_balance");
        assert_eq!(ReportKind::BalanceSheet.method(), "get_balance_sheet");
        assert_eq!(ReportKind::IncomeStatement.method(), "get_income_statement");
        assert_eq!(ReportKind::Print.method(), "get_print");
    }

    #[test]
    fn test_report_kind_from_str() {
        assert_eq!("print".parse::<ReportKind>().unwrap(), ReportKind::Print);
        assert_eq!(
            "balance-sheet".parse::<ReportKind>().unwrap(),
            ReportKind::BalanceSheet
        );
        assert_eq!(
            "income_statement".parse::<ReportKind>().unwrap(),
            ReportKind::IncomeStatement
        );
        assert!("ledger".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_balance_defaults() {
        let opts = BalanceOptions::default();
        assert!(opts.flat);
        assert!(!opts.tree);
        assert!(!opts.historical);
        assert!(!opts.daily && !opts.weekly && !opts.monthly && !opts.quarterly && !opts.yearly);
        assert_eq!(opts.layout, None);
        assert!(opts.queries.is_empty());
    }

    #[test]
    fn test_historical_asymmetry() {
        // A balance sheet is cumulative from inception; an income
        // statement is a period-scoped flow. Flipping either changes
        // the report's meaning.
        let bs = BalanceSheetOptions::default();
        assert!(bs.historical);
        assert!(!bs.change);

        let is = IncomeStatementOptions::default();
        assert!(!is.historical);
        assert!(is.change);
    }

    #[test]
    fn test_print_defaults() {
        let opts = PrintOptions::default();
        assert!(!opts.explicit);
        assert!(!opts.show_costs);
        assert_eq!(opts.round, None);
        assert_eq!(opts.match_desc, None);
        assert_eq!(opts.begin, None);
        assert_eq!(opts.end, None);
        assert!(opts.queries.is_empty());
    }

    #[test]
    fn test_defaults_are_independent() {
        let a = PrintOptions::default();
        let mut b = PrintOptions::default();
        assert_eq!(a, b);

        b.queries.push("rent".to_string());
        b.begin = Some("2024-01-01".to_string());
        assert_eq!(a, PrintOptions::default());
    }

    #[test]
    fn test_every_field_serializes() {
        // The engine does no defaulting: inapplicable fields must be
        // serialized as null, never omitted.
        let value = serde_json::to_value(PrintOptions::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 13);
        assert!(object.get("round").unwrap().is_null());
        assert!(object.get("begin").unwrap().is_null());
        assert!(object.get("end").unwrap().is_null());
        assert_eq!(object.get("queries").unwrap(), &serde_json::json!([]));

        let value = serde_json::to_value(BalanceOptions::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 42);
        assert!(object.get("layout").unwrap().is_null());
        assert_eq!(object.get("flat").unwrap(), &serde_json::json!(true));
    }

    #[test]
    fn test_layout_round_trip() {
        assert_eq!(serde_json::to_string(&Layout::Wide).unwrap(), "\"wide\"");
        assert_eq!("bare".parse::<Layout>().unwrap(), Layout::Bare);
        assert_eq!(Layout::Tall.to_string(), "tall");
    }
}
