//! Route modules for the API server
//!
//! - reports: one JSON endpoint per report kind
//! - settings: configuration display
//!
//! Each module follows a consistent structure:
//! - mod.rs: module declaration and exports
//! - api.rs: JSON API endpoints

pub mod reports;
pub mod settings;
