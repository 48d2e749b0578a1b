//! HTTP JSON API for browsing ledger reports
//!
//! Routes are organized into modules:
//! - routes::reports: one endpoint per report kind
//! - routes::settings: configuration display
//!
//! The API is JSON-only; presentation is a front-end concern.

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use ledgerview_config::Config;
use ledgerview_core::{
    AccountsReport, BalanceReport, BalanceSheetReport, IncomeStatementReport, PrintReport,
    ReportClient, ReportSession,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Per-kind fetch sessions for the single browsing view
#[derive(Default)]
pub struct ViewState {
    pub accounts: ReportSession<AccountsReport>,
    pub balance: ReportSession<BalanceReport>,
    pub balance_sheet: ReportSession<BalanceSheetReport>,
    pub income_statement: ReportSession<IncomeStatementReport>,
    pub print: ReportSession<PrintReport>,
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub client: ReportClient,
    pub config: Config,
    pub view: Arc<RwLock<ViewState>>,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::reports::{
        api_accounts_report, api_balance_report, api_balance_sheet_report,
        api_income_statement_report, api_print_report,
    };
    use routes::settings::api_settings;

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/reports/accounts", get(api_accounts_report))
        .route("/api/reports/balance", get(api_balance_report))
        .route("/api/reports/balance-sheet", get(api_balance_sheet_report))
        .route(
            "/api/reports/income-statement",
            get(api_income_statement_report),
        )
        .route("/api/reports/print", get(api_print_report))
        .route("/api/settings", get(api_settings))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and serves
/// until the process ends.
pub async fn start_server(config: Config, client: ReportClient) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        client,
        config,
        view: Arc::new(RwLock::new(ViewState::default())),
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting ledgerview server on http://{}", addr);
    log::info!("Report endpoints under /api/reports/*");

    axum::serve(listener, router).await
}

// ==================== Tests ====================
