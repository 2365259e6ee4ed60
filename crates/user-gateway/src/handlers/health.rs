//! Health check endpoint for the User Gateway.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Health status ("ok")
    pub status: String,

    /// Server version
    pub version: String,

    /// Server uptime in seconds
    pub uptime_seconds: u64,
}

/// Basic health check endpoint.
///
/// `GET /health`
///
/// Does not contact the user service, so it stays suitable for
/// load balancer probes even when the remote is down.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState::from_config(AppConfig::default()).unwrap();
        let response = health_check(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
