//! Settings routes
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::api_settings;
