//! Restoplan Engine - Request Pipeline
//!
//! Wires the artifact store, scoring models, and decision core into one
//! inference call: `PlanEngine::plan(job)` returns the priced work plan.
//! The web layer (external to this workspace) is expected to sit directly
//! on top of this crate.

mod cache;
mod engine;
mod error;

pub use cache::{ArtifactCache, ComponentSet};
pub use engine::{EngineConfig, PlanEngine};
pub use error::EngineError;
