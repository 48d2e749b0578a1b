//! Report routes - one endpoint per report kind
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::{
    api_accounts_report, api_balance_report, api_balance_sheet_report,
    api_income_statement_report, api_print_report,
};
