//! Named operations of the publisher's control surface
//!
//! The control surface is a fixed set of named request kinds. Each kind is
//! one [`Operation`] variant; request names resolve through a lookup table
//! rather than string matching scattered across call sites. The pure
//! operations (capabilities, validation) are plain functions over the
//! request body; publishing delegates to [`ArtifactPublisher`].
//!
//! There is deliberately no fetch/download counterpart: artifact retrieval
//! is out of scope until a real protocol exists for it.

use crate::error::{Error, Result};
use crate::publisher::ArtifactPublisher;
use crate::types::{ArtifactConfig, ArtifactStore, PublishRequest};
use serde_json::Value;

/// A supported request kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Report the publisher's capabilities (static empty object)
    Capabilities,
    /// Validate an [`ArtifactStore`] descriptor
    ValidateStore,
    /// Validate an [`ArtifactConfig`] descriptor
    ValidateArtifact,
    /// Publish one artifact
    PublishArtifact,
}

/// Request-name → operation lookup table
const OPERATIONS: &[(&str, Operation)] = &[
    ("capabilities", Operation::Capabilities),
    ("validate-store", Operation::ValidateStore),
    ("validate-artifact", Operation::ValidateArtifact),
    ("publish-artifact", Operation::PublishArtifact),
];

/// Handler signature for operations that need no I/O
type Handler = fn(&str) -> Result<Value>;

/// Operation → handler lookup table for the pure operations
///
/// `PublishArtifact` is absent: it performs I/O and is dispatched to the
/// publisher instead.
const HANDLERS: &[(Operation, Handler)] = &[
    (Operation::Capabilities, capabilities),
    (Operation::ValidateStore, validate_store),
    (Operation::ValidateArtifact, validate_artifact),
];

impl Operation {
    /// Resolve a request name to an operation
    pub fn from_name(name: &str) -> Result<Self> {
        OPERATIONS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, operation)| *operation)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))
    }

    /// The wire-level request name of this operation
    pub fn name(self) -> &'static str {
        match OPERATIONS.iter().find(|(_, operation)| *operation == self) {
            Some((name, _)) => name,
            // OPERATIONS covers every variant
            None => unreachable!(),
        }
    }
}

/// Execute one operation against its JSON request body
///
/// This is the single entry point an embedding orchestrator needs: resolve
/// the request name with [`Operation::from_name`], pass the raw body here,
/// and get the JSON payload back. Validation findings come back as a JSON
/// array (empty = valid); a publish returns an empty object on success and
/// the store's verbatim response body on rejection.
pub async fn dispatch(
    publisher: &ArtifactPublisher,
    operation: Operation,
    body: &str,
) -> Result<Value> {
    if operation == Operation::PublishArtifact {
        let request: PublishRequest = serde_json::from_str(body)?;
        let coordinates = request.coordinates()?;
        let result = publisher
            .publish(&request.artifact_config, &request.artifact_store, &coordinates)
            .await?;
        return Ok(result.payload());
    }

    match HANDLERS.iter().find(|(op, _)| *op == operation) {
        Some((_, handler)) => handler(body),
        None => Err(Error::UnknownOperation(operation.name().to_string())),
    }
}

fn capabilities(_body: &str) -> Result<Value> {
    Ok(serde_json::json!({}))
}

fn validate_store(body: &str) -> Result<Value> {
    let store: ArtifactStore = serde_json::from_str(body)?;
    Ok(serde_json::to_value(store.validate())?)
}

fn validate_artifact(body: &str) -> Result<Value> {
    let artifact: ArtifactConfig = serde_json::from_str(body)?;
    Ok(serde_json::to_value(artifact.validate())?)
}
