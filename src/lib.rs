//! GearGuard Maintenance Tracking System
//!
//! A REST JSON API server for tracking equipment maintenance: work requests
//! move across a kanban board from new to repaired or scrap, preventive work
//! lands on a calendar, and scrapping a request retires the equipment behind
//! it.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
