//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with the failure envelope so handlers never see a
//! malformed id or body.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
