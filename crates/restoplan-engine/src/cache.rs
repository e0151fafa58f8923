//! Artifact cache with atomic whole-set swap.
//!
//! Model bundles are read-mostly and shared between requests. A refresh
//! builds a complete new [`ComponentSet`] off to the side and then swaps it
//! in with a single `Arc` assignment, so a request always scores every
//! component against one consistent artifact generation; it never observes
//! a half-reloaded set.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use futures::future::join_all;
use tracing::{info, warn};

use restoplan_models::{BundleLoader, ScoringOracle};
use restoplan_store::ArtifactStore;

use crate::error::EngineError;

/// One consistent generation of loaded artifacts.
pub struct ComponentSet {
    /// Ready-to-score oracles, keyed by component id.
    pub oracles: BTreeMap<String, Arc<dyn ScoringOracle>>,

    /// Components whose bundle failed to fetch or parse, with the reason.
    /// These become per-component skip entries rather than request errors.
    pub load_failures: BTreeMap<String, String>,

    /// Where the backing store was searched, for the system skip entry.
    pub location: String,
}

impl ComponentSet {
    /// True when discovery found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.oracles.is_empty() && self.load_failures.is_empty()
    }
}

/// Owned, shared cache over a store's artifact bundles.
#[derive(Default)]
pub struct ArtifactCache {
    current: RwLock<Option<Arc<ComponentSet>>>,
}

impl ArtifactCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current set, loading it on first use.
    pub async fn get_or_load<S: ArtifactStore>(
        &self,
        store: &S,
        loader: &dyn BundleLoader,
    ) -> Result<Arc<ComponentSet>, EngineError> {
        if let Some(set) = self.current.read().unwrap().clone() {
            return Ok(set);
        }
        self.refresh(store, loader).await
    }

    /// Discover and load every bundle, then atomically publish the new set.
    /// Concurrent readers keep their old `Arc` until they finish.
    pub async fn refresh<S: ArtifactStore>(
        &self,
        store: &S,
        loader: &dyn BundleLoader,
    ) -> Result<Arc<ComponentSet>, EngineError> {
        let components = store.discover_components().await?;

        let fetches = components.iter().map(|component| async move {
            let raw = store.fetch_bundle(component).await;
            (component.clone(), raw)
        });
        let fetched = join_all(fetches).await;

        let mut oracles = BTreeMap::new();
        let mut load_failures = BTreeMap::new();
        for (component, raw) in fetched {
            match raw {
                Ok(raw) => match loader.load(&component, &raw) {
                    Ok(oracle) => {
                        oracles.insert(component, oracle);
                    }
                    Err(e) => {
                        warn!(component = %component, error = %e, "bundle failed to load");
                        load_failures.insert(component, format!("bundle failed to load: {e}"));
                    }
                },
                Err(e) => {
                    warn!(component = %component, error = %e, "bundle failed to fetch");
                    load_failures.insert(component, format!("bundle failed to fetch: {e}"));
                }
            }
        }

        let set = Arc::new(ComponentSet {
            oracles,
            load_failures,
            location: store.location(),
        });
        info!(
            components = set.oracles.len(),
            failures = set.load_failures.len(),
            location = %set.location,
            "artifact cache refreshed"
        );

        *self.current.write().unwrap() = Some(set.clone());
        Ok(set)
    }
}
