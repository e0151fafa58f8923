//! Linear predictors over preprocessed features.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Linear regression head predicting labor minutes. Output is clamped to
/// zero from below; a trained model can extrapolate slightly negative on
/// unusual inputs and predicted time must stay non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl TimeModel {
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        dot(&self.weights, features, self.intercept).max(0.0)
    }
}

/// Logistic regression head predicting success probability in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl SuccessModel {
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        sigmoid(dot(&self.weights, features, self.intercept))
    }
}

fn dot(weights: &[f64], features: &[f64], intercept: f64) -> f64 {
    weights
        .iter()
        .zip(features.iter())
        .fold(intercept, |acc, (w, x)| acc + w * x)
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_prediction_is_linear() {
        let model = TimeModel {
            weights: vec![10.0, -5.0],
            intercept: 30.0,
        };
        assert_eq!(model.predict(&vec![2.0, 1.0]), 45.0);
    }

    #[test]
    fn negative_time_is_clamped_to_zero() {
        let model = TimeModel {
            weights: vec![-100.0],
            intercept: 10.0,
        };
        assert_eq!(model.predict(&vec![1.0]), 0.0);
    }

    #[test]
    fn success_probability_stays_in_unit_interval() {
        let model = SuccessModel {
            weights: vec![50.0],
            intercept: 0.0,
        };
        let high = model.predict(&vec![10.0]);
        let low = model.predict(&vec![-10.0]);
        assert!(high > 0.999 && high <= 1.0);
        assert!(low < 0.001 && low >= 0.0);
    }

    #[test]
    fn zero_score_maps_to_half() {
        let model = SuccessModel {
            weights: vec![1.0],
            intercept: 0.0,
        };
        assert!((model.predict(&vec![0.0]) - 0.5).abs() < 1e-12);
    }
}
