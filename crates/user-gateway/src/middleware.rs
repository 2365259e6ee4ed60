//! Request middleware for the User Gateway.
//!
//! [`fetch_user`] runs in front of `POST /process`: it reads the JSON body,
//! looks up the user referenced by `userId` on the remote service and stores
//! the record in the request extensions as [`FetchedUser`]. The body is put
//! back untouched so the handler can still extract it. Requests not sent as
//! JSON carry no `userId` and never reach the remote service.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::error::GatewayError;
use crate::state::AppState;

/// Remote user record fetched by [`fetch_user`].
#[derive(Debug, Clone)]
pub struct FetchedUser(pub Value);

/// Resolve `userId` from a request body to a path segment.
///
/// Numbers and strings are accepted; anything else yields `None`.
/// Floats without a fractional part render as integers (`1.0` -> `1`).
pub fn user_id_segment(body: &Value) -> Option<String> {
    match body.get("userId")? {
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Whether the request declares a JSON body (`application/json` or `application/*+json`).
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Middleware to fetch the user referenced by the body and inject it
pub async fn fetch_user(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    if !has_json_content_type(request.headers()) {
        tracing::debug!("Request body is not declared as JSON");
        return Err(GatewayError::MissingUserId);
    }

    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, state.config.body_limit_bytes)
        .await
        .map_err(GatewayError::InvalidBody)?;

    // A body that is not JSON has no userId either.
    let user_id = serde_json::from_slice::<Value>(&bytes)
        .ok()
        .as_ref()
        .and_then(user_id_segment);

    let Some(user_id) = user_id else {
        tracing::debug!("Request body has no usable userId");
        return Err(GatewayError::MissingUserId);
    };

    tracing::debug!(user_id = %user_id, "Fetching user for request");
    let user = state
        .users
        .get_user(&user_id)
        .await
        .map_err(GatewayError::FetchUserData)?;

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(FetchedUser(user));
    Ok(next.run(request).await)
}
