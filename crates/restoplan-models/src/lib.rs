//! Restoplan Models - Scoring Capability
//!
//! Per-component scoring behind one narrow trait: transform a job record
//! into features, predict labor minutes, predict success probability.
//! Bundles arrive from an artifact store as raw bytes and are materialized
//! by an explicitly-typed [`BundleLoader`].

mod error;
mod features;
mod linear;
mod loader;
mod oracle;

pub use error::ModelError;
pub use features::{FeatureSpec, FeatureVector, Preprocessor};
pub use linear::{SuccessModel, TimeModel};
pub use loader::{BundleLoader, JsonBundleLoader, RawBundle};
pub use oracle::{ModelBundle, ScoringOracle};
