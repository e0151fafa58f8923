//! Restoplan Store - Artifact Storage Backends
//!
//! Read access to trained model bundles behind one async trait, with a
//! local-filesystem backend, a cloud object-storage backend, and an
//! in-memory fake for tests.

mod cloud;
mod error;
pub mod fakes;
mod local;
mod traits;

pub use cloud::{CloudArtifactStore, CloudConfig};
pub use error::{StoreError, StoreResult};
pub use local::LocalArtifactStore;
pub use traits::{bundle_file_names, component_from_file_name, ArtifactStore, TIME_SUFFIX};
