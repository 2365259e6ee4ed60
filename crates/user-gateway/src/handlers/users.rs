//! User API handlers.
//!
//! Pass-through endpoints for the remote user service. The remote payload is
//! returned verbatim with `200 OK`; any remote failure becomes the route's
//! fixed `500` error.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::error::{GatewayError, GatewayResult};
use crate::state::AppState;

/// List all users.
///
/// `GET /users`
pub async fn list(State(state): State<AppState>) -> GatewayResult<Json<Value>> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(GatewayError::ListUsers)?;
    Ok(Json(users))
}

/// Fetch a single user.
///
/// `GET /users/{id}`
///
/// The `id` is forwarded to the remote service as-is.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> GatewayResult<Json<Value>> {
    let user = state
        .users
        .get_user(&id)
        .await
        .map_err(GatewayError::GetUser)?;
    Ok(Json(user))
}

/// Update a user.
///
/// `PUT /users/{id}`
///
/// # Request Body
///
/// ```json
/// { "name": "Updated Name" }
/// ```
///
/// The body is forwarded unchanged and the remote's answer is returned.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> GatewayResult<Json<Value>> {
    info!(user_id = %id, "Updating user");
    let updated = state
        .users
        .update_user(&id, &payload)
        .await
        .map_err(GatewayError::UpdateUser)?;
    Ok(Json(updated))
}
