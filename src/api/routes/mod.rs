//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`publish`] — Artifact publication
//! - [`validate`] — Store and artifact descriptor validation
//! - [`system`] — Health, capabilities, OpenAPI

mod publish;
mod system;
mod validate;

// Re-export all handlers so `routes::function_name` continues to work
pub use publish::*;
pub use system::*;
pub use validate::*;
