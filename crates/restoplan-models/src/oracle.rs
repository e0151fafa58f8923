//! The scoring capability: transform + predict time + predict success.
//!
//! Every component is scored through the [`ScoringOracle`] trait, so
//! structurally different models can sit behind the same three operations.
//! [`ModelBundle`] is the shipped implementation, composed from a
//! preprocessor and two linear heads loaded from one artifact bundle.

use restoplan_core::JobRecord;

use crate::error::ModelError;
use crate::features::{FeatureVector, Preprocessor};
use crate::linear::{SuccessModel, TimeModel};

/// Per-component scoring capability.
///
/// Guarantees:
/// - `predict_time` returns minutes >= 0.
/// - `predict_success` returns a probability in [0, 1].
/// - All three operations are pure; identical jobs score identically.
pub trait ScoringOracle: std::fmt::Debug + Send + Sync {
    /// Extract model features from a job record.
    fn transform(&self, job: &JobRecord) -> Result<FeatureVector, ModelError>;

    /// Predicted labor minutes for this component.
    fn predict_time(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Predicted success probability for this component.
    fn predict_success(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// The trained-model trio for one component, plus its content digest.
#[derive(Debug)]
pub struct ModelBundle {
    component: String,
    preprocessor: Preprocessor,
    time_model: TimeModel,
    success_model: SuccessModel,
    digest: String,
}

impl ModelBundle {
    /// Assemble a bundle, verifying that both heads match the
    /// preprocessor's feature width.
    pub fn new(
        component: String,
        preprocessor: Preprocessor,
        time_model: TimeModel,
        success_model: SuccessModel,
        digest: String,
    ) -> Result<Self, ModelError> {
        preprocessor.validate()?;
        let width = preprocessor.width();
        for weights in [&time_model.weights, &success_model.weights] {
            if weights.len() != width {
                return Err(ModelError::ShapeMismatch {
                    component,
                    expected: width,
                    got: weights.len(),
                });
            }
        }
        Ok(Self {
            component,
            preprocessor,
            time_model,
            success_model,
            digest,
        })
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// SHA-256 over the raw artifact bytes, for load-time audit logs.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl ScoringOracle for ModelBundle {
    fn transform(&self, job: &JobRecord) -> Result<FeatureVector, ModelError> {
        self.preprocessor.transform(job)
    }

    fn predict_time(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(self.time_model.predict(features))
    }

    fn predict_success(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(self.success_model.predict(features))
    }
}
