//! Artifact bundle loading.
//!
//! Stores hand over raw bytes; a [`BundleLoader`] turns them into a scoring
//! oracle. Loading is explicitly typed per artifact (no generic
//! deserialization of arbitrary objects): the JSON loader parses exactly a
//! preprocessor spec, a time head, and a success head.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::ModelError;
use crate::features::Preprocessor;
use crate::linear::{SuccessModel, TimeModel};
use crate::oracle::{ModelBundle, ScoringOracle};

/// The three raw artifact files for one component, as fetched from a store.
#[derive(Debug, Clone)]
pub struct RawBundle {
    pub preprocessor: Vec<u8>,
    pub time_model: Vec<u8>,
    pub success_model: Vec<u8>,
}

impl RawBundle {
    /// SHA-256 over the concatenated artifact bytes, in fixed file order.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.preprocessor);
        hasher.update(&self.time_model);
        hasher.update(&self.success_model);
        hex::encode(hasher.finalize())
    }
}

/// Turns raw artifact bytes into a ready-to-score oracle.
pub trait BundleLoader: Send + Sync {
    fn load(&self, component: &str, raw: &RawBundle) -> Result<Arc<dyn ScoringOracle>, ModelError>;
}

/// Loader for the JSON artifact format
/// (`{comp}_preprocessor.json`, `{comp}_time.json`, `{comp}_success.json`).
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonBundleLoader;

impl BundleLoader for JsonBundleLoader {
    fn load(&self, component: &str, raw: &RawBundle) -> Result<Arc<dyn ScoringOracle>, ModelError> {
        let parse_err = |source| ModelError::Parse {
            component: component.to_string(),
            source,
        };

        let preprocessor: Preprocessor =
            serde_json::from_slice(&raw.preprocessor).map_err(parse_err)?;
        let time_model: TimeModel = serde_json::from_slice(&raw.time_model).map_err(parse_err)?;
        let success_model: SuccessModel =
            serde_json::from_slice(&raw.success_model).map_err(parse_err)?;

        let digest = raw.digest();
        let bundle = ModelBundle::new(
            component.to_string(),
            preprocessor,
            time_model,
            success_model,
            digest,
        )?;
        info!(component, digest = bundle.digest(), "loaded model bundle");

        Ok(Arc::new(bundle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_bundle() -> RawBundle {
        RawBundle {
            preprocessor: br#"{"features":[
                {"kind":"numeric","field":"year","mean":2010.0,"scale":10.0},
                {"kind":"one_hot","field":"vehicle_type","value":"electric"}
            ]}"#
            .to_vec(),
            time_model: br#"{"weights":[12.0,-3.0],"intercept":40.0}"#.to_vec(),
            success_model: br#"{"weights":[-0.4,0.3],"intercept":1.2}"#.to_vec(),
        }
    }

    #[test]
    fn json_loader_builds_a_working_oracle() {
        let oracle = JsonBundleLoader.load("brakes", &raw_bundle()).unwrap();
        let job: restoplan_core::JobRecord = serde_json::from_value(serde_json::json!({
            "year": 2020,
            "odometer_km": 50000.0,
            "rust_grade": 0,
            "vehicle_type": "electric"
        }))
        .unwrap();

        let features = oracle.transform(&job).unwrap();
        let minutes = oracle.predict_time(&features).unwrap();
        let p = oracle.predict_success(&features).unwrap();
        assert_eq!(minutes, 49.0);
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut raw = raw_bundle();
        raw.time_model = b"not json".to_vec();
        let err = JsonBundleLoader.load("brakes", &raw).unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
    }

    #[test]
    fn mismatched_weights_are_a_shape_error() {
        let mut raw = raw_bundle();
        raw.success_model = br#"{"weights":[0.1],"intercept":0.0}"#.to_vec();
        let err = JsonBundleLoader.load("brakes", &raw).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { .. }));
    }

    #[test]
    fn digest_is_stable_for_identical_bytes() {
        assert_eq!(raw_bundle().digest(), raw_bundle().digest());
    }
}
