//! HTTP controllers

pub mod health;
pub mod issues;

use std::sync::Arc;

use crate::application::IssueService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub issue_service: Arc<dyn IssueService>,
}
