//! Final plan assembly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateItem;
use crate::mandatory::MandatoryStep;

/// Synthetic skip key for request-level conditions (e.g. empty artifact
/// store) that are not tied to any single component.
pub const SYSTEM_SKIP_KEY: &str = "_system";

/// Aggregate figures for the plan. Mandatory time is reported separately
/// because it is never charged against the optimizer budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTotals {
    /// Sum of chosen items' budgeted minutes.
    pub chosen_time_min: u32,

    /// Sum of chosen items' expected values.
    pub chosen_value: f64,

    /// Sum of mandatory step durations, outside the budget.
    pub mandatory_time_min: u32,
}

/// The priced work plan returned to the caller.
///
/// Field order is fixed (mandatory, chosen, skipped, totals) and `skipped`
/// is a `BTreeMap`, so identical inputs serialize byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Steps included regardless of budget.
    pub mandatory: Vec<MandatoryStep>,

    /// Optimizer-selected items, in canonical selection order.
    pub chosen: Vec<CandidateItem>,

    /// Component id (or [`SYSTEM_SKIP_KEY`]) to human-readable reason.
    pub skipped: BTreeMap<String, String>,

    /// Aggregate time and value figures.
    pub totals: PlanTotals,
}

/// Assemble the final plan from the three streams. Pure.
pub fn render_plan(
    mandatory: Vec<MandatoryStep>,
    chosen: Vec<CandidateItem>,
    skipped: BTreeMap<String, String>,
) -> Plan {
    let totals = PlanTotals {
        chosen_time_min: chosen.iter().map(|i| i.time_cost_min).sum(),
        chosen_value: chosen.iter().map(|i| i.expected_value).sum(),
        mandatory_time_min: mandatory.iter().map(|s| s.estimated_minutes).sum(),
    };
    Plan {
        mandatory,
        chosen,
        skipped,
        totals,
    }
}

/// Degenerate plan for requests where no components were discoverable:
/// empty everywhere, with a single system-level skip naming the searched
/// location. This is a valid response, never an error.
pub fn render_empty_plan(location: &str) -> Plan {
    let mut skipped = BTreeMap::new();
    skipped.insert(
        SYSTEM_SKIP_KEY.to_string(),
        format!("no artifacts found under '{location}'"),
    );
    render_plan(Vec::new(), Vec::new(), skipped)
}
