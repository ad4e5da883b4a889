//! Presentation Layer - Web API and HTTP handling
//!
//! This module contains the Axum web server setup, controllers, and API models.

pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;


pub use controllers::AppState;
pub use middleware::*;
pub use models::*;
pub use routes::*;
