//! Boundary to the external ledger-processing engine
//!
//! The engine parses journal files and computes report data; this
//! crate consumes it strictly as a request/response boundary. The
//! contract is closed and versioned: one call per report kind, taking
//! a journal file plus a complete options record, returning that
//! kind's report shape or a normalized failure.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub mod error;
pub mod options;
pub mod reports;

pub use error::{EngineError, EngineErrorCode, EngineErrorSeverity, EngineResult};
pub use options::{
    AccountsOptions, BalanceOptions, BalanceSheetOptions, IncomeStatementOptions, Layout,
    PrintOptions, ReportKind,
};
pub use reports::{
    AccountsReport, Amount, BalanceAccount, BalanceAssertion, BalanceReport, BalanceSheetReport,
    IncomeStatementReport, PeriodDate, PeriodicBalance, PeriodicBalanceRow, PrintPosting,
    PrintReport, PrintTransaction, SimpleBalance, SourcePosition, Subreport,
};

/// Engine reference type
pub type EngineRef = Arc<dyn LedgerEngine>;

/// Trait for ledger engines
///
/// The engine performs no defaulting of its own, so every options
/// record must arrive fully populated (see [`options`]).
#[async_trait]
pub trait LedgerEngine: Send + Sync {
    /// List account names
    async fn get_accounts(
        &self,
        journal_file: &str,
        options: &AccountsOptions,
    ) -> EngineResult<AccountsReport>;

    /// Compute account balances
    async fn get_balance(
        &self,
        journal_file: &str,
        options: &BalanceOptions,
    ) -> EngineResult<BalanceReport>;

    /// Compute a balance sheet
    async fn get_balance_sheet(
        &self,
        journal_file: &str,
        options: &BalanceSheetOptions,
    ) -> EngineResult<BalanceSheetReport>;

    /// Compute an income statement
    async fn get_income_statement(
        &self,
        journal_file: &str,
        options: &IncomeStatementOptions,
    ) -> EngineResult<IncomeStatementReport>;

    /// List transaction entries with postings
    async fn get_print(
        &self,
        journal_file: &str,
        options: &PrintOptions,
    ) -> EngineResult<PrintReport>;
}

// ==================== Wire Encoding ====================

/// Encode one engine request as a JSON document
///
/// `{ "command": "<get_*>", "journal_file": "...", "options": {...} }`
pub fn encode_request<O: Serialize>(
    kind: ReportKind,
    journal_file: &str,
    options: &O,
) -> EngineResult<String> {
    let request = serde_json::json!({
        "command": kind.method(),
        "journal_file": journal_file,
        "options": options,
    });
    serde_json::to_string(&request).map_err(|e| EngineError::Protocol {
        message: format!("request encoding failed: {}", e),
    })
}

/// Decode one engine response
///
/// The engine answers with either the report shape itself or an error
/// envelope `{ "error": "..." }`.
pub fn decode_response<R: DeserializeOwned>(payload: &[u8]) -> EngineResult<R> {
    let value: serde_json::Value =
        serde_json::from_slice(payload).map_err(|e| EngineError::Protocol {
            message: format!("response is not valid JSON: {}", e),
        })?;

    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(EngineError::Engine {
            message: message.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| EngineError::Protocol {
        message: format!("unexpected response shape: {}", e),
    })
}

// ==================== Process Engine ====================

/// Engine implementation that speaks JSON over a spawned subprocess
///
/// Each request spawns the configured command, writes one request
/// document to its stdin and reads one response document from its
/// stdout. Exactly one outbound request per call; no retry, caching
/// or coalescing at this layer.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    command: String,
    args: Vec<String>,
}

impl ProcessEngine {
    /// Create a new process engine for the given command line
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    async fn call<O, R>(&self, kind: ReportKind, journal_file: &str, options: &O) -> EngineResult<R>
    where
        O: Serialize + Sync,
        R: DeserializeOwned,
    {
        let request = encode_request(kind, journal_file, options)?;
        log::debug!("engine request: {} file={}", kind.method(), journal_file);

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::Unavailable {
                reason: format!("failed to spawn '{}': {}", self.command, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(request.as_bytes()).await?;
            // Closing stdin signals end of request to the engine
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::Engine {
                message: format!(
                    "engine exited with {}: {}",
                    output.status,
                    stderr.trim()
                ),
            });
        }

        decode_response(&output.stdout)
    }
}

#[async_trait]
impl LedgerEngine for ProcessEngine {
    async fn get_accounts(
        &self,
        journal_file: &str,
        options: &AccountsOptions,
    ) -> EngineResult<AccountsReport> {
        self.call(ReportKind::Accounts, journal_file, options).await
    }

    async fn get_balance(
        &self,
        journal_file: &str,
        options: &BalanceOptions,
    ) -> EngineResult<BalanceReport> {
        self.call(ReportKind::Balance, journal_file, options).await
    }

    async fn get_balance_sheet(
        &self,
        journal_file: &str,
        options: &BalanceSheetOptions,
    ) -> EngineResult<BalanceSheetReport> {
        self.call(ReportKind::BalanceSheet, journal_file, options)
            .await
    }

    async fn get_income_statement(
        &self,
        journal_file: &str,
        options: &IncomeStatementOptions,
    ) -> EngineResult<IncomeStatementReport> {
        self.call(ReportKind::IncomeStatement, journal_file, options)
            .await
    }

    async fn get_print(
        &self,
        journal_file: &str,
        options: &PrintOptions,
    ) -> EngineResult<PrintReport> {
        self.call(ReportKind::Print, journal_file, options).await
    }
}

// ==================== Tests ====================
