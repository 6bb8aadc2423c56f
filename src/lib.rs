//! Exercise Tracker Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use store::{new_store, Store, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Store, config: Config) -> Self {
        Self { store, config }
    }
}
