//! Filter merging: ambient UI state into an options record
//!
//! The UI works with a free-text search string and an inclusive date
//! range; the engine expects a query-term list and a half-open
//! `[begin, end)` window. The merger owns both translations: a
//! trimmed-empty search must produce no query term at all (an empty
//! string term would mean "match everything"), and the inclusive end
//! date must shift forward one calendar day, or the last day of every
//! report silently disappears.

use chrono::NaiveDate;
use ledgerview_engine::{
    AccountsOptions, BalanceOptions, BalanceSheetOptions, IncomeStatementOptions, PrintOptions,
};

/// Inclusive date range as selected in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new inclusive range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Options records that accept the shared query/date-window filters
pub trait WindowFilter {
    /// Replace the free-text query terms
    fn set_queries(&mut self, queries: Vec<String>);

    /// Set the half-open report window; `end` is already exclusive
    fn set_window(&mut self, begin: String, end: String);
}

impl WindowFilter for AccountsOptions {
    fn set_queries(&mut self, queries: Vec<String>) {
        self.queries = queries;
    }
    fn set_window(&mut self, begin: String, end: String) {
        self.begin = Some(begin);
        self.end = Some(end);
    }
}

impl WindowFilter for BalanceOptions {
    fn set_queries(&mut self, queries: Vec<String>) {
        self.queries = queries;
    }
    fn set_window(&mut self, begin: String, end: String) {
        self.begin = Some(begin);
        self.end = Some(end);
    }
}

impl WindowFilter for BalanceSheetOptions {
    fn set_queries(&mut self, queries: Vec<String>) {
        self.queries = queries;
    }
    fn set_window(&mut self, begin: String, end: String) {
        self.begin = Some(begin);
        self.end = Some(end);
    }
}

impl WindowFilter for IncomeStatementOptions {
    fn set_queries(&mut self, queries: Vec<String>) {
        self.queries = queries;
    }
    fn set_window(&mut self, begin: String, end: String) {
        self.begin = Some(begin);
        self.end = Some(end);
    }
}

impl WindowFilter for PrintOptions {
    fn set_queries(&mut self, queries: Vec<String>) {
        self.queries = queries;
    }
    fn set_window(&mut self, begin: String, end: String) {
        self.begin = Some(begin);
        self.end = Some(end);
    }
}

/// Merge ambient filter state into a fresh copy of `base`
///
/// `base` is normally a default-factory record and is never mutated;
/// the returned record is structurally independent of it.
///
/// - A non-empty trimmed `query` becomes the single query term (the
///   original untrimmed string, as typed). Empty or whitespace-only
///   input leaves `queries` as given in `base`.
/// - A present `range` sets `begin` to the start date and `end` to the
///   day after the inclusive end date, both as ISO strings. An absent
///   range leaves `begin`/`end` untouched.
///
/// A window where `begin > end` is passed through as-is; validating it
/// is the engine's responsibility.
pub fn merge_filters<T>(base: &T, query: &str, range: Option<&DateRange>) -> T
where
    T: WindowFilter + Clone,
{
    let mut merged = base.clone();

    if !query.trim().is_empty() {
        merged.set_queries(vec![query.to_string()]);
    }

    if let Some(range) = range {
        // Inclusive UI selection to the engine's exclusive end.
        // succ_opt is None only at NaiveDate::MAX, out of reach for
        // any picker-selected date.
        let end_exclusive = range.end.succ_opt().unwrap_or(range.end);
        merged.set_window(
            range.start.format("%Y-%m-%d").to_string(),
            end_exclusive.format("%Y-%m-%d").to_string(),
        );
    }

    merged
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_shifts_one_day() {
        let base = PrintOptions::default();
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));

        let merged = merge_filters(&base, "", Some(&range));
        assert_eq!(merged.begin.as_deref(), Some("2024-01-01"));
        assert_eq!(merged.end.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_end_shift_crosses_year_boundary() {
        let base = BalanceOptions::default();
        let range = DateRange::new(date(2024, 12, 1), date(2024, 12, 31));

        let merged = merge_filters(&base, "", Some(&range));
        assert_eq!(merged.end.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn test_single_day_range() {
        let base = PrintOptions::default();
        let range = DateRange::new(date(2024, 2, 29), date(2024, 2, 29));

        let merged = merge_filters(&base, "", Some(&range));
        assert_eq!(merged.begin.as_deref(), Some("2024-02-29"));
        assert_eq!(merged.end.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_query_becomes_single_term() {
        let base = PrintOptions::default();
        let merged = merge_filters(&base, "rent", None);
        assert_eq!(merged.queries, vec!["rent".to_string()]);
    }

    #[test]
    fn test_whitespace_query_adds_no_term() {
        let base = PrintOptions::default();
        for query in ["", "   ", "\t\n"] {
            let merged = merge_filters(&base, query, None);
            assert!(merged.queries.is_empty(), "query {:?} leaked a term", query);
        }
    }

    #[test]
    fn test_absent_range_leaves_window_untouched() {
        let mut base = PrintOptions::default();
        base.begin = Some("2023-01-01".to_string());
        base.end = Some("2023-06-01".to_string());

        let merged = merge_filters(&base, "rent", None);
        assert_eq!(merged.begin.as_deref(), Some("2023-01-01"));
        assert_eq!(merged.end.as_deref(), Some("2023-06-01"));
    }

    #[test]
    fn test_base_is_never_mutated() {
        let base = PrintOptions::default();
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));

        let _ = merge_filters(&base, "rent", Some(&range));
        assert_eq!(base, PrintOptions::default());
    }

    #[test]
    fn test_rent_march_scenario() {
        let base = PrintOptions::default();
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));

        let merged = merge_filters(&base, "rent", Some(&range));
        assert_eq!(merged.queries, vec!["rent".to_string()]);
        assert_eq!(merged.begin.as_deref(), Some("2024-03-01"));
        assert_eq!(merged.end.as_deref(), Some("2024-04-01"));
    }

    #[test]
    fn test_merge_applies_to_all_report_kinds() {
        let range = DateRange::new(date(2024, 5, 1), date(2024, 5, 31));

        let accounts = merge_filters(&AccountsOptions::default(), "cash", Some(&range));
        assert_eq!(accounts.end.as_deref(), Some("2024-06-01"));

        let sheet = merge_filters(&BalanceSheetOptions::default(), "cash", Some(&range));
        assert_eq!(sheet.end.as_deref(), Some("2024-06-01"));
        assert!(sheet.historical);

        let statement = merge_filters(&IncomeStatementOptions::default(), "cash", Some(&range));
        assert_eq!(statement.queries, vec!["cash".to_string()]);
        assert!(statement.change);
    }
}
