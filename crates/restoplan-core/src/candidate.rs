//! Candidate construction: scoring output → priced, feasibility-checked item.

use serde::{Deserialize, Serialize};

use crate::job::JobRecord;
use crate::pricing::{price_for, round_cents};

/// A component-level restoration action that survived feasibility checks and
/// is eligible for budget selection. Request-scoped and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Component id (e.g. "brakes").
    pub component: String,

    /// Integer minutes charged against the budget: `ceil(predicted_minutes)`,
    /// at least 1.
    pub time_cost_min: u32,

    /// Raw model prediction in minutes.
    pub predicted_minutes: f64,

    /// Calibrated success probability in [0, 1].
    pub success_probability: f64,

    /// Price charged for this component on this vehicle.
    pub price: f64,

    /// `price * success_probability - labor_rate * predicted_minutes`.
    pub expected_value: f64,
}

/// Outcome of one candidate build: either an item for the optimizer or a
/// reason the component is skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Candidate(CandidateItem),
    Skipped(String),
}

/// Turns per-component predictions into priced candidates, rejecting
/// components that can never be worth doing.
///
/// Pure and deterministic: identical inputs always yield identical output.
#[derive(Debug, Clone, Copy)]
pub struct CandidateBuilder {
    /// Labor cost per predicted minute.
    pub labor_rate: f64,

    /// Minimum acceptable success probability.
    pub min_confidence: f64,
}

impl Default for CandidateBuilder {
    fn default() -> Self {
        Self {
            labor_rate: 0.5,
            min_confidence: 0.35,
        }
    }
}

impl CandidateBuilder {
    pub fn new(labor_rate: f64, min_confidence: f64) -> Self {
        Self {
            labor_rate,
            min_confidence,
        }
    }

    /// Build a candidate for `component`, or a skip reason.
    ///
    /// Rejection rules, checked in order:
    /// 1. the item alone exceeds the time budget
    /// 2. success probability is below the confidence floor
    /// 3. expected value is not positive
    pub fn build(
        &self,
        job: &JobRecord,
        component: &str,
        predicted_minutes: f64,
        success_probability: f64,
        time_budget_min: u32,
    ) -> BuildOutcome {
        let time_cost_min = (predicted_minutes.ceil().max(1.0)) as u32;

        if time_cost_min > time_budget_min {
            return BuildOutcome::Skipped(format!(
                "exceeds time budget ({time_cost_min} min > {time_budget_min} min)"
            ));
        }

        if success_probability < self.min_confidence {
            return BuildOutcome::Skipped(format!(
                "insufficient confidence ({success_probability:.2} < {:.2})",
                self.min_confidence
            ));
        }

        let price = price_for(job, component);
        let expected_value =
            round_cents(price * success_probability - self.labor_rate * predicted_minutes);

        if expected_value <= 0.0 {
            return BuildOutcome::Skipped(format!(
                "not cost-effective (expected value {expected_value:.2})"
            ));
        }

        BuildOutcome::Candidate(CandidateItem {
            component: component.to_string(),
            time_cost_min,
            predicted_minutes,
            success_probability,
            price,
            expected_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{AccidentZone, VehicleType};

    fn job() -> JobRecord {
        JobRecord {
            year: 2019,
            odometer_km: 80_000.0,
            rust_grade: 0,
            accident_zone: AccidentZone::None,
            accident_severity: 0,
            is_flooded: false,
            vehicle_type: VehicleType::Combustion,
            ease_of_access: 1,
            time_budget_min: 90,
        }
    }

    #[test]
    fn feasible_component_becomes_candidate() {
        let builder = CandidateBuilder::default();
        match builder.build(&job(), "brakes", 45.0, 0.9, 90) {
            BuildOutcome::Candidate(item) => {
                assert_eq!(item.component, "brakes");
                assert_eq!(item.time_cost_min, 45);
                assert!(item.expected_value > 0.0);
            }
            BuildOutcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn time_exceeding_budget_is_skipped() {
        let builder = CandidateBuilder::default();
        match builder.build(&job(), "engine", 120.0, 0.95, 90) {
            BuildOutcome::Skipped(reason) => {
                assert!(reason.contains("exceeds time budget"), "{reason}")
            }
            BuildOutcome::Candidate(_) => panic!("expected skip"),
        }
    }

    #[test]
    fn low_confidence_is_skipped_before_pricing() {
        let builder = CandidateBuilder::default();
        match builder.build(&job(), "engine", 30.0, 0.10, 90) {
            BuildOutcome::Skipped(reason) => {
                assert!(reason.contains("insufficient confidence"), "{reason}")
            }
            BuildOutcome::Candidate(_) => panic!("expected skip"),
        }
    }

    #[test]
    fn negative_expected_value_is_skipped() {
        // cheap component, long predicted time: labor eats the price
        let builder = CandidateBuilder::new(10.0, 0.35);
        match builder.build(&job(), "exhaust", 60.0, 0.5, 90) {
            BuildOutcome::Skipped(reason) => {
                assert!(reason.contains("not cost-effective"), "{reason}")
            }
            BuildOutcome::Candidate(_) => panic!("expected skip"),
        }
    }

    #[test]
    fn time_cost_is_ceiled_and_at_least_one() {
        let builder = CandidateBuilder::default();
        match builder.build(&job(), "brakes", 0.2, 0.9, 90) {
            BuildOutcome::Candidate(item) => assert_eq!(item.time_cost_min, 1),
            BuildOutcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
        match builder.build(&job(), "brakes", 30.4, 0.9, 90) {
            BuildOutcome::Candidate(item) => assert_eq!(item.time_cost_min, 31),
            BuildOutcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn build_is_deterministic() {
        let builder = CandidateBuilder::default();
        let a = builder.build(&job(), "suspension", 40.0, 0.8, 90);
        let b = builder.build(&job(), "suspension", 40.0, 0.8, 90);
        assert_eq!(a, b);
    }
}
