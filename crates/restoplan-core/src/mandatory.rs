//! Mandatory follow-on steps.
//!
//! Steps derived purely from the job record and the chosen component set.
//! They are unconditionally included in the plan and their time is never
//! charged against the optimizer's budget; the renderer surfaces it
//! separately.

use serde::{Deserialize, Serialize};

use crate::job::JobRecord;

/// A restoration step forced into the plan regardless of budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryStep {
    /// Step id (e.g. "post_repair_road_test").
    pub step: String,

    /// Why this step is required for this job.
    pub reason: String,

    /// Nominal duration, reported outside the optimizer budget.
    pub estimated_minutes: u32,
}

impl MandatoryStep {
    fn new(step: &str, reason: String, estimated_minutes: u32) -> Self {
        Self {
            step: step.to_string(),
            reason,
            estimated_minutes,
        }
    }
}

/// Components whose repair requires a road test afterwards.
const ROAD_TEST_COMPONENTS: &[&str] = &["brakes", "steering", "suspension"];

/// Derive the mandatory steps for `job` given the optimizer's chosen
/// component ids.
///
/// Pure and idempotent: rule order is fixed, so identical inputs always
/// produce the same ordered output.
pub fn resolve_mandatory_steps(job: &JobRecord, chosen_components: &[String]) -> Vec<MandatoryStep> {
    let mut steps = Vec::new();

    if job.is_flooded {
        steps.push(MandatoryStep::new(
            "electrical_system_inspection",
            "vehicle has flood exposure".to_string(),
            45,
        ));
    }

    if job.rust_grade >= 4 {
        steps.push(MandatoryStep::new(
            "structural_rust_treatment",
            format!("rust grade {} requires structural treatment", job.rust_grade),
            60,
        ));
    }

    if job.accident_severity >= 3 {
        steps.push(MandatoryStep::new(
            "frame_alignment_check",
            format!(
                "accident severity {} in zone '{}'",
                job.accident_severity,
                job.accident_zone.as_str()
            ),
            30,
        ));
    }

    let safety_work: Vec<&str> = chosen_components
        .iter()
        .map(String::as_str)
        .filter(|c| ROAD_TEST_COMPONENTS.contains(c))
        .collect();
    if !safety_work.is_empty() {
        steps.push(MandatoryStep::new(
            "post_repair_road_test",
            format!("safety-critical work planned: {}", safety_work.join(", ")),
            20,
        ));
    }

    if !chosen_components.is_empty() {
        steps.push(MandatoryStep::new(
            "final_quality_inspection",
            "work plan contains restoration items".to_string(),
            15,
        ));
    }

    steps
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
    fn clean_job_with_no_chosen_work_has_no_steps() {
        assert!(resolve_mandatory_steps(&job(), &[]).is_empty());
    }

    #[test]
    fn flood_forces_electrical_inspection_even_with_zero_budget() {
        let mut j = job();
        j.is_flooded = true;
        j.time_budget_min = 0;
        let steps = resolve_mandatory_steps(&j, &[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, "electrical_system_inspection");
    }

    #[test]
    fn safety_components_trigger_road_test() {
        let chosen = vec!["brakes".to_string(), "interior".to_string()];
        let steps = resolve_mandatory_steps(&job(), &chosen);
        let ids: Vec<&str> = steps.iter().map(|s| s.step.as_str()).collect();
        assert!(ids.contains(&"post_repair_road_test"));
        assert!(ids.contains(&"final_quality_inspection"));
    }

    #[test]
    fn non_safety_work_still_gets_final_inspection() {
        let chosen = vec!["interior".to_string()];
        let steps = resolve_mandatory_steps(&job(), &chosen);
        let ids: Vec<&str> = steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(ids, vec!["final_quality_inspection"]);
    }

    #[test]
    fn rule_order_is_fixed() {
        let mut j = job();
        j.is_flooded = true;
        j.rust_grade = 5;
        j.accident_severity = 4;
        j.accident_zone = AccidentZone::Front;
        let chosen = vec!["steering".to_string()];
        let ids: Vec<String> = resolve_mandatory_steps(&j, &chosen)
            .into_iter()
            .map(|s| s.step)
            .collect();
        assert_eq!(
            ids,
            vec![
                "electrical_system_inspection",
                "structural_rust_treatment",
                "frame_alignment_check",
                "post_repair_road_test",
                "final_quality_inspection",
            ]
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut j = job();
        j.is_flooded = true;
        let chosen = vec!["brakes".to_string(), "suspension".to_string()];
        let first = resolve_mandatory_steps(&j, &chosen);
        let second = resolve_mandatory_steps(&j, &chosen);
        assert_eq!(first, second);
    }
}
