//! Process API handler.
//!
//! Combines the incoming body with the user record that the
//! [`fetch_user`](crate::middleware::fetch_user) middleware looked up.

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::middleware::FetchedUser;

pub const PROCESS_SUCCESS_MESSAGE: &str = "Processing completed successfully";

/// Response for `POST /process`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub message: String,
    /// Request body as received.
    pub incoming_data: Value,
    /// User record from the remote service.
    pub fetched_data: Value,
}

/// Process incoming data together with the fetched user.
///
/// `POST /process`
///
/// # Request Body
///
/// ```json
/// { "userId": 1 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Processing completed successfully",
///   "incomingData": { "userId": 1 },
///   "fetchedData": { "id": 1, "name": "Leanne Graham" }
/// }
/// ```
pub async fn process(
    Extension(FetchedUser(user)): Extension<FetchedUser>,
    Json(incoming): Json<Value>,
) -> Json<ProcessResponse> {
    info!("Processing request with fetched user data");
    Json(ProcessResponse {
        message: PROCESS_SUCCESS_MESSAGE.to_string(),
        incoming_data: incoming,
        fetched_data: user,
    })
}
