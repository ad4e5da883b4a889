//! Snyk Checker - a small web service for browsing open Snyk issues
//!
//! Accepts an organization id and API token, queries the Snyk REST issues
//! endpoint on behalf of the caller, and returns the issues as flattened
//! display records for a browser UI.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use config::Config;
pub use logging::init_tracing;
pub use presentation::AppState;
