//! Core report query layer
//!
//! Converts ambient UI filter state (search text, an inclusive date
//! range, a selected journal file) into canonical engine-compatible
//! option records, dispatches them across the engine boundary, and
//! exposes the result as a read-only view:
//!
//! - [`filters`]: merges filter state into a fresh default options record
//! - [`client`]: one dispatch per query, failures as values
//! - [`session`]: one in-flight query cycle per view, stale responses discarded
//! - [`view`]: derived presentation values for report results

pub mod client;
pub mod filters;
pub mod session;
pub mod view;

pub use client::{FetchOutcome, ReportClient};
pub use filters::{merge_filters, DateRange, WindowFilter};
pub use session::ReportSession;
pub use view::{format_amount, source_reference, PrintView};

// Re-export the engine contract so callers need only one import path
pub use ledgerview_engine::{
    AccountsOptions, AccountsReport, Amount, BalanceOptions, BalanceReport, BalanceSheetOptions,
    BalanceSheetReport, EngineError, EngineRef, EngineResult, IncomeStatementOptions,
    IncomeStatementReport, Layout, LedgerEngine, PrintOptions, PrintReport, PrintTransaction,
    ReportKind,
};
