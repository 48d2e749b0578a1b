//! Report API endpoints - JSON responses
//!
//! Every handler follows the same cycle: resolve the journal file
//! (request parameter or configured default), build the report kind's
//! default options, merge the ambient filters, dispatch through the
//! client inside a session cycle, and render whatever the session now
//! holds. Engine failures have already been reduced to the empty "no
//! data" state by the time a response is built; the raw diagnostic
//! only reaches the log.

use axum::extract::{Query, State};
use chrono::NaiveDate;
use ledgerview_core::{
    merge_filters, AccountsOptions, BalanceOptions, BalanceSheetOptions, DateRange,
    IncomeStatementOptions, PrintOptions, PrintView,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::AppState;

/// Common query parameters for all report endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    /// Journal file; falls back to the configured default
    pub file: Option<String>,
    /// Free-text search
    pub query: Option<String>,
    /// Inclusive range start (ISO date)
    pub start: Option<String>,
    /// Inclusive range end (ISO date)
    pub end: Option<String>,
}

impl ReportParams {
    fn query_text(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Parse the UI date range, if one was supplied
    fn range(&self) -> Result<Option<DateRange>, ApiError> {
        match (self.start.as_deref(), self.end.as_deref()) {
            (Some(start), Some(end)) => Ok(Some(DateRange::new(
                parse_date("start", start)?,
                parse_date("end", end)?,
            ))),
            (None, None) => Ok(None),
            _ => Err(ApiError::BadRequest {
                message: "start and end must be supplied together".to_string(),
            }),
        }
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ApiError::BadRequest {
        message: format!("invalid {} date: {}", field, value),
    })
}

/// Resolve the journal file for a request
///
/// An empty result is not an error; it means "no file selected" and
/// the fetch cycle is skipped entirely.
fn resolve_file(state: &AppState, file: Option<String>) -> String {
    file.unwrap_or_else(|| {
        state
            .config
            .default_journal_path()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_default()
    })
}

/// Print report: raw transaction listing
pub async fn api_print_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<String, ApiError> {
    let range = params.range()?;
    let file = resolve_file(&state, params.file.clone());
    let options = merge_filters(&PrintOptions::default(), params.query_text(), range.as_ref());

    if file.trim().is_empty() {
        state.view.write().await.print.clear();
    } else {
        let ticket = state.view.write().await.print.begin();
        let outcome = state.client.fetch_print(&file, &options).await;
        state.view.write().await.print.apply(ticket, outcome);
    }

    let view = state.view.read().await;
    let print_view = PrintView::new(view.print.data());
    let response = serde_json::json!({
        "generation": view.print.generation(),
        "count": print_view.transaction_count(),
        "is_empty": print_view.is_empty(),
        "transactions": print_view,
    });
    Ok(serde_json::to_string(&response).unwrap_or_default())
}

/// Accounts report: flat account name listing
pub async fn api_accounts_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<String, ApiError> {
    let range = params.range()?;
    let file = resolve_file(&state, params.file.clone());
    let options = merge_filters(
        &AccountsOptions::default(),
        params.query_text(),
        range.as_ref(),
    );

    if file.trim().is_empty() {
        state.view.write().await.accounts.clear();
    } else {
        let ticket = state.view.write().await.accounts.begin();
        let outcome = state.client.fetch_accounts(&file, &options).await;
        state.view.write().await.accounts.apply(ticket, outcome);
    }

    let view = state.view.read().await;
    let accounts = view.accounts.data();
    let response = serde_json::json!({
        "generation": view.accounts.generation(),
        "count": accounts.len(),
        "is_empty": accounts.is_empty(),
        "accounts": accounts,
    });
    Ok(serde_json::to_string(&response).unwrap_or_default())
}

/// Balance report: account balances, simple or periodic
pub async fn api_balance_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<String, ApiError> {
    let range = params.range()?;
    let file = resolve_file(&state, params.file.clone());
    let options = merge_filters(
        &BalanceOptions::default(),
        params.query_text(),
        range.as_ref(),
    );

    if file.trim().is_empty() {
        state.view.write().await.balance.clear();
    } else {
        let ticket = state.view.write().await.balance.begin();
        let outcome = state.client.fetch_balance(&file, &options).await;
        state.view.write().await.balance.apply(ticket, outcome);
    }

    let view = state.view.read().await;
    let report = view.balance.data();
    let response = serde_json::json!({
        "generation": view.balance.generation(),
        "is_empty": report.is_empty(),
        "report": report,
    });
    Ok(serde_json::to_string(&response).unwrap_or_default())
}

/// Balance sheet report: assets and liabilities
pub async fn api_balance_sheet_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<String, ApiError> {
    let range = params.range()?;
    let file = resolve_file(&state, params.file.clone());
    let options = merge_filters(
        &BalanceSheetOptions::default(),
        params.query_text(),
        range.as_ref(),
    );

    if file.trim().is_empty() {
        state.view.write().await.balance_sheet.clear();
    } else {
        let ticket = state.view.write().await.balance_sheet.begin();
        let outcome = state.client.fetch_balance_sheet(&file, &options).await;
        state.view.write().await.balance_sheet.apply(ticket, outcome);
    }

    let view = state.view.read().await;
    let report = view.balance_sheet.data();
    let response = serde_json::json!({
        "generation": view.balance_sheet.generation(),
        "is_empty": report.is_empty(),
        "report": report,
    });
    Ok(serde_json::to_string(&response).unwrap_or_default())
}

/// Income statement report: revenues and expenses
pub async fn api_income_statement_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<String, ApiError> {
    let range = params.range()?;
    let file = resolve_file(&state, params.file.clone());
    let options = merge_filters(
        &IncomeStatementOptions::default(),
        params.query_text(),
        range.as_ref(),
    );

    if file.trim().is_empty() {
        state.view.write().await.income_statement.clear();
    } else {
        let ticket = state.view.write().await.income_statement.begin();
        let outcome = state.client.fetch_income_statement(&file, &options).await;
        state
            .view
            .write()
            .await
            .income_statement
            .apply(ticket, outcome);
    }

    let view = state.view.read().await;
    let report = view.income_statement.data();
    let response = serde_json::json!({
        "generation": view.income_statement.generation(),
        "is_empty": report.is_empty(),
        "report": report,
    });
    Ok(serde_json::to_string(&response).unwrap_or_default())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_requires_both_ends() {
        let params = ReportParams {
            start: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert!(params.range().is_err());

        let params = ReportParams::default();
        assert!(params.range().unwrap().is_none());
    }

    #[test]
    fn test_range_parses_iso_dates() {
        let params = ReportParams {
            start: Some("2024-03-01".to_string()),
            end: Some("2024-03-31".to_string()),
            ..Default::default()
        };
        let range = params.range().unwrap().unwrap();
        assert_eq!(range.start.to_string(), "2024-03-01");
        assert_eq!(range.end.to_string(), "2024-03-31");
    }

    #[test]
    fn test_range_rejects_malformed_dates() {
        let params = ReportParams {
            start: Some("03/01/2024".to_string()),
            end: Some("2024-03-31".to_string()),
            ..Default::default()
        };
        assert!(params.range().is_err());
    }
}
