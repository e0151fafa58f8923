//! Artifact store trait definition.
//!
//! A store holds one artifact trio per component:
//! `{comp}_preprocessor.json`, `{comp}_time.json`, `{comp}_success.json`.
//! Components are discovered by the `_time.json` suffix, exactly as the
//! training side lays them out. Backends are async and interchangeable; an
//! in-memory fake is provided for testing via the `fakes` module.

use async_trait::async_trait;

use restoplan_models::RawBundle;

use crate::error::StoreResult;

/// Suffix that marks a component's time-model artifact; discovery strips it
/// to recover the component id.
pub const TIME_SUFFIX: &str = "_time.json";

/// File names of the artifact trio for one component.
pub fn bundle_file_names(component: &str) -> [String; 3] {
    [
        format!("{component}_preprocessor.json"),
        format!("{component}_time.json"),
        format!("{component}_success.json"),
    ]
}

/// Derive a component id from a file name, if it is a time artifact.
pub fn component_from_file_name(name: &str) -> Option<&str> {
    name.strip_suffix(TIME_SUFFIX).filter(|s| !s.is_empty())
}

/// Read access to trained artifact bundles.
///
/// Guarantees:
/// - `discover_components` is stable-sorted, so downstream selection
///   tie-breaks are deterministic across backends and runs.
/// - `fetch_bundle` returns the exact bytes of the three artifact files.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Sorted component ids found in the store.
    async fn discover_components(&self) -> StoreResult<Vec<String>>;

    /// Fetch the raw artifact trio for one component.
    async fn fetch_bundle(&self, component: &str) -> StoreResult<RawBundle>;

    /// Human-readable description of the searched location, used verbatim
    /// in the plan's system-level skip entry.
    fn location(&self) -> String;
}

#[async_trait]
impl<T: ArtifactStore + ?Sized> ArtifactStore for std::sync::Arc<T> {
    async fn discover_components(&self) -> StoreResult<Vec<String>> {
        (**self).discover_components().await
    }

    async fn fetch_bundle(&self, component: &str) -> StoreResult<RawBundle> {
        (**self).fetch_bundle(component).await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
