//! In-memory fake for the artifact store trait (testing only)

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use restoplan_models::RawBundle;

use crate::error::{StoreError, StoreResult};
use crate::traits::ArtifactStore;

/// In-memory artifact store backed by a component -> bundle map.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    bundles: Mutex<BTreeMap<String, RawBundle>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bundle for a component.
    pub fn insert(&self, component: &str, bundle: RawBundle) {
        let mut bundles = self.bundles.lock().unwrap();
        bundles.insert(component.to_string(), bundle);
    }
}

#[async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn discover_components(&self) -> StoreResult<Vec<String>> {
        let bundles = self.bundles.lock().unwrap();
        // BTreeMap keys are already sorted
        Ok(bundles.keys().cloned().collect())
    }

    async fn fetch_bundle(&self, component: &str) -> StoreResult<RawBundle> {
        let bundles = self.bundles.lock().unwrap();
        bundles
            .get(component)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(component.to_string()))
    }

    fn location(&self) -> String {
        "memory://artifacts".to_string()
    }
}
