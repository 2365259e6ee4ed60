//! HTTP handlers for the User Gateway API.

pub mod health;
pub mod process;
pub mod users;

pub use health::health_check;
pub use process::process;
