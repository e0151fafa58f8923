//! Error types for restoplan-engine

use thiserror::Error;

use restoplan_store::StoreError;

/// Errors that abort a planning request.
///
/// Per-component scoring and bundle-load failures never abort a request;
/// they surface as skip reasons in the plan instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The artifact store failed at the request level (configuration or
    /// discovery), before any scoring could happen
    #[error("Artifact store failure: {0}")]
    Store(#[from] StoreError),
}
