//! Error types for the User Gateway server.
//!
//! Every failure of the remote user service collapses into a single
//! [`RemoteError`]. Handlers wrap it in a route-specific [`GatewayError`],
//! whose `IntoResponse` impl writes the fixed message for that route and
//! keeps the remote detail in the logs.

use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A failed call to the remote user service.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport failure, timeout, or a body that is not valid JSON
    #[error("request to user service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The user service answered with a non-2xx status
    #[error("user service responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Route-level errors, one per gateway operation.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Error fetching users")]
    ListUsers(#[source] RemoteError),

    #[error("Error fetching user")]
    GetUser(#[source] RemoteError),

    #[error("Error updating user data")]
    UpdateUser(#[source] RemoteError),

    /// The `/process` lookup of the referenced user failed
    #[error("Error fetching user data")]
    FetchUserData(#[source] RemoteError),

    /// `/process` body carried no usable `userId`
    #[error("Error fetching user data")]
    MissingUserId,

    /// `/process` body could not be read
    #[error("Invalid request body")]
    InvalidBody(#[source] axum::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self.source() {
            Some(source) => {
                tracing::error!(error = %source, status = status.as_u16(), "{}", self)
            }
            None => tracing::error!(status = status.as_u16(), "{}", self),
        }

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

/// Result type alias using GatewayError.
pub type GatewayResult<T> = Result<T, GatewayError>;
