//! Report client: one dispatch per query, failures as values
//!
//! The client is the last layer an engine failure can cross. Every
//! outcome — data, a skipped dispatch, a normalized failure — comes
//! back as a value, so the caller can always render a defined
//! empty/default state instead of handling an interruption.

use ledgerview_engine::{
    AccountsOptions, AccountsReport, BalanceOptions, BalanceReport, BalanceSheetOptions,
    BalanceSheetReport, EngineError, EngineRef, IncomeStatementOptions, IncomeStatementReport,
    PrintOptions, PrintReport,
};

/// Outcome of a single report fetch
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// The engine answered with report data
    Fetched(T),
    /// No journal file selected; no dispatch occurred
    Skipped,
    /// The dispatch failed; the diagnostic has already been logged
    Failed(EngineError),
}

impl<T> FetchOutcome<T> {
    /// True if the engine answered with data
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    /// Resolve to report data, with the empty default standing in for
    /// skipped and failed fetches
    pub fn into_data(self) -> T
    where
        T: Default,
    {
        match self {
            FetchOutcome::Fetched(data) => data,
            FetchOutcome::Skipped | FetchOutcome::Failed(_) => T::default(),
        }
    }
}

/// Client over the engine boundary
///
/// Issues exactly one outbound request per invocation. No caching,
/// retry or coalescing; concurrency policy belongs to the caller.
#[derive(Clone)]
pub struct ReportClient {
    engine: EngineRef,
}

impl ReportClient {
    /// Create a new client over the given engine
    pub fn new(engine: EngineRef) -> Self {
        Self { engine }
    }

    // Selecting "no file" is a valid, non-exceptional state: the
    // client skips dispatch entirely rather than asking the engine to
    // fail on an empty path.
    fn no_file(journal_file: &str) -> bool {
        journal_file.trim().is_empty()
    }

    /// Fetch the accounts report
    pub async fn fetch_accounts(
        &self,
        journal_file: &str,
        options: &AccountsOptions,
    ) -> FetchOutcome<AccountsReport> {
        if Self::no_file(journal_file) {
            return FetchOutcome::Skipped;
        }
        match self.engine.get_accounts(journal_file, options).await {
            Ok(report) => FetchOutcome::Fetched(report),
            Err(e) => {
                log::warn!("accounts report fetch failed: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Fetch the balance report
    pub async fn fetch_balance(
        &self,
        journal_file: &str,
        options: &BalanceOptions,
    ) -> FetchOutcome<BalanceReport> {
        if Self::no_file(journal_file) {
            return FetchOutcome::Skipped;
        }
        match self.engine.get_balance(journal_file, options).await {
            Ok(report) => FetchOutcome::Fetched(report),
            Err(e) => {
                log::warn!("balance report fetch failed: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Fetch the balance sheet report
    pub async fn fetch_balance_sheet(
        &self,
        journal_file: &str,
        options: &BalanceSheetOptions,
    ) -> FetchOutcome<BalanceSheetReport> {
        if Self::no_file(journal_file) {
            return FetchOutcome::Skipped;
        }
        match self.engine.get_balance_sheet(journal_file, options).await {
            Ok(report) => FetchOutcome::Fetched(report),
            Err(e) => {
                log::warn!("balance sheet fetch failed: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Fetch the income statement report
    pub async fn fetch_income_statement(
        &self,
        journal_file: &str,
        options: &IncomeStatementOptions,
    ) -> FetchOutcome<IncomeStatementReport> {
        if Self::no_file(journal_file) {
            return FetchOutcome::Skipped;
        }
        match self
            .engine
            .get_income_statement(journal_file, options)
            .await
        {
            Ok(report) => FetchOutcome::Fetched(report),
            Err(e) => {
                log::warn!("income statement fetch failed: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Fetch the print report
    pub async fn fetch_print(
        &self,
        journal_file: &str,
        options: &PrintOptions,
    ) -> FetchOutcome<PrintReport> {
        if Self::no_file(journal_file) {
            return FetchOutcome::Skipped;
        }
        match self.engine.get_print(journal_file, options).await {
            Ok(report) => FetchOutcome::Fetched(report),
            Err(e) => {
                log::warn!("print report fetch failed: {}", e);
                FetchOutcome::Failed(e)
            }
        }
    }
}

// ==================== Tests ====================
