//! Feature extraction from job records.
//!
//! A preprocessor is an ordered list of feature specs, serialized alongside
//! the models it was trained with. Numeric features are standardized with
//! the training-set mean and scale; categorical attributes are expanded as
//! one-hot indicators.

use serde::{Deserialize, Serialize};

use restoplan_core::JobRecord;

use crate::error::ModelError;

/// Dense feature vector produced by a preprocessor.
pub type FeatureVector = Vec<f64>;

/// One feature extracted from the job record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureSpec {
    /// Standardized numeric attribute: `(value - mean) / scale`.
    Numeric { field: String, mean: f64, scale: f64 },

    /// One-hot indicator: 1.0 when the categorical attribute equals `value`.
    OneHot { field: String, value: String },
}

/// Ordered feature extraction trained alongside a component's models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preprocessor {
    pub features: Vec<FeatureSpec>,
}

impl Preprocessor {
    /// Number of features this preprocessor emits.
    pub fn width(&self) -> usize {
        self.features.len()
    }

    /// Validate that every referenced attribute resolves against a job
    /// record and that scales are usable. Run once at load time so scoring
    /// itself cannot hit a malformed spec.
    pub fn validate(&self) -> Result<(), ModelError> {
        for spec in &self.features {
            match spec {
                FeatureSpec::Numeric { field, scale, .. } => {
                    if !KNOWN_NUMERIC_FIELDS.contains(&field.as_str()) {
                        return Err(ModelError::UnknownAttribute {
                            field: field.clone(),
                        });
                    }
                    if *scale == 0.0 {
                        return Err(ModelError::InvalidScale {
                            field: field.clone(),
                        });
                    }
                }
                FeatureSpec::OneHot { field, .. } => {
                    if !KNOWN_CATEGORICAL_FIELDS.contains(&field.as_str()) {
                        return Err(ModelError::UnknownAttribute {
                            field: field.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Extract the feature vector for one job record.
    pub fn transform(&self, job: &JobRecord) -> Result<FeatureVector, ModelError> {
        self.features
            .iter()
            .map(|spec| match spec {
                FeatureSpec::Numeric { field, mean, scale } => job
                    .numeric(field)
                    .map(|v| (v - mean) / scale)
                    .ok_or_else(|| ModelError::UnknownAttribute {
                        field: field.clone(),
                    }),
                FeatureSpec::OneHot { field, value } => job
                    .categorical(field)
                    .map(|v| if v == value { 1.0 } else { 0.0 })
                    .ok_or_else(|| ModelError::UnknownAttribute {
                        field: field.clone(),
                    }),
            })
            .collect()
    }
}

const KNOWN_NUMERIC_FIELDS: &[&str] = &[
    "year",
    "odometer_km",
    "rust_grade",
    "accident_severity",
    "is_flooded",
    "ease_of_access",
    "time_budget_min",
];

const KNOWN_CATEGORICAL_FIELDS: &[&str] = &["accident_zone", "vehicle_type"];
