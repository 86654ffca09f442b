//! Users Domain
//!
//! A fixed user list compiled into the binary, exposed read-only.

pub mod handlers;
pub mod models;

pub use handlers::ApiDoc;
pub use models::{StaticUser, USERS, User};
