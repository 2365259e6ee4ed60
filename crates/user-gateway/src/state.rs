//! Application state for the User Gateway server.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::user_client::UserServiceClient;

/// Shared application state.
///
/// Cloned into every handler; holds nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote user service
    pub users: UserServiceClient,

    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `users` - Client for the remote user service
    /// * `config` - Application configuration
    pub fn new(users: UserServiceClient, config: AppConfig) -> Self {
        Self {
            users,
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        }
    }

    /// Build the state from configuration alone, constructing the client.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let users = UserServiceClient::new(&config.upstream_url, config.upstream_timeout())?;
        Ok(Self::new(users, config))
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
