//! Application state for the API server

use crate::{ArtifactPublisher, Config};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the publisher instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The artifact publisher
    pub publisher: Arc<ArtifactPublisher>,

    /// Configuration (read-only; the server never mutates it)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(publisher: Arc<ArtifactPublisher>, config: Arc<Config>) -> Self {
        Self { publisher, config }
    }
}
