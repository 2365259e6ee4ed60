//! User Gateway Library
//!
//! A small HTTP gateway in front of a remote user-data REST service
//! (by default `https://jsonplaceholder.typicode.com`). Every route makes a
//! single outbound call and maps the outcome to a response:
//!
//! - `GET /users` and `GET /users/{id}` pass the remote payload through
//! - `PUT /users/{id}` forwards the body and passes the answer through
//! - `POST /process` combines the body with the user named by `userId`
//! - `GET /health` reports liveness without touching the remote
//!
//! Remote failures become a fixed, route-specific `500` response.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`error`]: Remote and route error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`middleware`]: User lookup in front of `/process`
//! - [`router`]: Router assembly
//! - [`state`]: Shared application state
//! - [`user_client`]: Outbound client for the user service
//!
//! ## Example
//!
//! ```ignore
//! use user_gateway::{build_router, config::AppConfig, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let addr = config.bind_address();
//!     let app = build_router(AppState::from_config(config)?);
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod result_ext;
pub mod router;
pub mod state;
pub mod user_client;

pub use error::{GatewayError, GatewayResult, RemoteError};
pub use result_ext::ResultExt;
pub use router::build_router;
