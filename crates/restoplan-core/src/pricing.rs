//! Component pricing.
//!
//! Produces the revenue side of a candidate's expected value: what the shop
//! charges for restoring one component on this particular vehicle. Prices
//! start from a per-component base and are adjusted by vehicle age, rust,
//! accident damage in the affected zone, flood exposure, and how hard the
//! work area is to reach.

use crate::job::{AccidentZone, JobRecord};

/// Fixed reference year for the age factor. Wall-clock time must not leak
/// into pricing or the same job would price differently across runs.
const REFERENCE_YEAR: i32 = 2025;

/// Base labor+parts price per known component. Unknown component ids fall
/// back to `DEFAULT_BASE_PRICE`.
const BASE_PRICES: &[(&str, f64)] = &[
    ("bodywork", 400.0),
    ("brakes", 180.0),
    ("cooling", 240.0),
    ("electrical", 320.0),
    ("engine", 900.0),
    ("exhaust", 150.0),
    ("interior", 200.0),
    ("steering", 220.0),
    ("suspension", 260.0),
    ("transmission", 750.0),
];

const DEFAULT_BASE_PRICE: f64 = 250.0;

/// Price charged for restoring `component` on the given vehicle, rounded to
/// cents. Pure function of its inputs.
pub fn price_for(job: &JobRecord, component: &str) -> f64 {
    let base = BASE_PRICES
        .iter()
        .find(|(id, _)| *id == component)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASE_PRICE);

    let age = (REFERENCE_YEAR - job.year).clamp(0, 30);
    let age_factor = 1.0 + f64::from(age) * 0.01;

    let rust_factor = if is_body_component(component) {
        1.0 + f64::from(job.rust_grade) * 0.10
    } else {
        1.0
    };

    let accident_factor = if zone_affects(job.accident_zone, component) {
        1.0 + f64::from(job.accident_severity) * 0.15
    } else {
        1.0
    };

    let flood_factor = if job.is_flooded && component == "electrical" {
        1.25
    } else {
        1.0
    };

    // ease_of_access: 0 = hard (surcharge), 1 = neutral, 2 = easy (discount)
    let access_factor = match job.ease_of_access {
        0 => 1.20,
        2 => 0.90,
        _ => 1.0,
    };

    let price = base * age_factor * rust_factor * accident_factor * flood_factor * access_factor;
    round_cents(price)
}

fn is_body_component(component: &str) -> bool {
    matches!(component, "bodywork" | "exhaust")
}

fn zone_affects(zone: AccidentZone, component: &str) -> bool {
    match zone {
        AccidentZone::None => false,
        AccidentZone::Front => {
            matches!(component, "engine" | "cooling" | "bodywork" | "steering")
        }
        AccidentZone::Rear => matches!(component, "bodywork" | "exhaust"),
        AccidentZone::Side => matches!(component, "bodywork" | "suspension"),
    }
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
