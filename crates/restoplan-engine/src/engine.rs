//! The per-request planning pipeline.
//!
//! One call to [`PlanEngine::plan`] runs the whole decision chain: cache
//! snapshot -> per-component scoring -> candidate construction -> budget
//! selection -> mandatory steps -> plan assembly. All intermediate state is
//! request-local; the only shared structure is the read-mostly artifact
//! cache.

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use restoplan_core::{
    render_empty_plan, render_plan, resolve_mandatory_steps, select_under_budget, BuildOutcome,
    CandidateBuilder, CandidateItem, JobRecord, Plan,
};
use restoplan_models::{BundleLoader, JsonBundleLoader, ScoringOracle};
use restoplan_store::ArtifactStore;

use crate::cache::ArtifactCache;
use crate::error::EngineError;

/// Tunables for candidate construction.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Labor cost per predicted minute.
    pub labor_rate: f64,

    /// Minimum acceptable success probability for a candidate.
    pub min_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            labor_rate: 0.5,
            min_confidence: 0.35,
        }
    }
}

/// Planning engine over one artifact store.
pub struct PlanEngine<S: ArtifactStore> {
    store: S,
    loader: Box<dyn BundleLoader>,
    cache: ArtifactCache,
    builder: CandidateBuilder,
}

impl<S: ArtifactStore> PlanEngine<S> {
    /// Engine with the JSON bundle loader and default tunables.
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            loader: Box::new(JsonBundleLoader),
            cache: ArtifactCache::new(),
            builder: CandidateBuilder::new(config.labor_rate, config.min_confidence),
        }
    }

    /// Swap in a different bundle loader (e.g. for another artifact format).
    pub fn with_loader(mut self, loader: Box<dyn BundleLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Sorted component ids currently known to the store.
    pub async fn components(&self) -> Result<Vec<String>, EngineError> {
        let set = self.cache.get_or_load(&self.store, self.loader.as_ref()).await?;
        Ok(set.oracles.keys().cloned().collect())
    }

    /// Rebuild the artifact cache from the store, atomically.
    pub async fn refresh_artifacts(&self) -> Result<usize, EngineError> {
        let set = self.cache.refresh(&self.store, self.loader.as_ref()).await?;
        Ok(set.oracles.len())
    }

    /// Produce the priced work plan for one job.
    #[instrument(skip(self, job), fields(budget_min = job.time_budget_min))]
    pub async fn plan(&self, job: &JobRecord) -> Result<Plan, EngineError> {
        let set = self.cache.get_or_load(&self.store, self.loader.as_ref()).await?;

        if set.is_empty() {
            debug!(location = %set.location, "no components discoverable");
            return Ok(render_empty_plan(&set.location));
        }

        let time_budget = job.time_budget_min;
        let mut candidates: Vec<CandidateItem> = Vec::new();
        let mut skipped: BTreeMap<String, String> = set.load_failures.clone();

        for (component, oracle) in &set.oracles {
            match score(oracle.as_ref(), job) {
                Ok((minutes, probability)) => {
                    match self
                        .builder
                        .build(job, component, minutes, probability, time_budget)
                    {
                        BuildOutcome::Candidate(item) => candidates.push(item),
                        BuildOutcome::Skipped(reason) => {
                            skipped.insert(component.clone(), reason);
                        }
                    }
                }
                // one bad model never aborts the whole plan
                Err(e) => {
                    warn!(component = %component, error = %e, "scoring failed; component skipped");
                    skipped.insert(component.clone(), format!("scoring failed: {e}"));
                }
            }
        }

        let chosen = select_under_budget(&candidates, time_budget);

        // feasible candidates the optimizer left out still get an entry, so
        // every discovered component lands in exactly one of chosen/skipped
        for item in &candidates {
            if !chosen.iter().any(|c| c.component == item.component) {
                skipped.insert(
                    item.component.clone(),
                    "not selected under time budget".to_string(),
                );
            }
        }

        let chosen_ids: Vec<String> = chosen.iter().map(|i| i.component.clone()).collect();
        let mandatory = resolve_mandatory_steps(job, &chosen_ids);

        Ok(render_plan(mandatory, chosen, skipped))
    }
}

fn score(
    oracle: &dyn ScoringOracle,
    job: &JobRecord,
) -> Result<(f64, f64), restoplan_models::ModelError> {
    let features = oracle.transform(job)?;
    let minutes = oracle.predict_time(&features)?;
    let probability = oracle.predict_success(&features)?;
    Ok((minutes, probability))
}
