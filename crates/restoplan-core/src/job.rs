//! Vehicle condition record ingested at the request boundary.
//!
//! A `JobRecord` is built once from the caller-supplied attribute map and
//! never mutated afterwards. Optional attributes receive their neutral
//! defaults at deserialization time; the full default table is:
//!
//! | field             | default |
//! |-------------------|---------|
//! | `accident_zone`   | `none`  |
//! | `accident_severity` | `0`   |
//! | `is_flooded`      | `false` |
//! | `ease_of_access`  | `1` (neutral, range 0-2) |
//! | `time_budget_min` | `90`    |

use serde::{Deserialize, Serialize};

/// Where the vehicle took accident damage, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentZone {
    None,
    Front,
    Rear,
    Side,
}

impl AccidentZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentZone::None => "none",
            AccidentZone::Front => "front",
            AccidentZone::Rear => "rear",
            AccidentZone::Side => "side",
        }
    }
}

/// Drivetrain category of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Combustion,
    Hybrid,
    Electric,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Combustion => "combustion",
            VehicleType::Hybrid => "hybrid",
            VehicleType::Electric => "electric",
        }
    }
}

/// Immutable vehicle-condition record for one planning request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Model year.
    pub year: i32,

    /// Odometer reading in kilometers.
    pub odometer_km: f64,

    /// Rust severity, 0 (clean) to 5 (structural).
    pub rust_grade: u8,

    /// Accident damage location.
    #[serde(default = "default_accident_zone")]
    pub accident_zone: AccidentZone,

    /// Accident severity, 0 (no accident) to 5 (severe).
    #[serde(default)]
    pub accident_severity: u8,

    /// Whether the vehicle has flood damage.
    #[serde(default)]
    pub is_flooded: bool,

    /// Drivetrain category.
    pub vehicle_type: VehicleType,

    /// How easy the work areas are to reach: 0 (hard) to 2 (easy).
    /// Injected as the neutral 1 when the caller omits it.
    #[serde(default = "default_ease_of_access")]
    pub ease_of_access: u8,

    /// Authorized labor budget in minutes.
    #[serde(default = "default_time_budget_min")]
    pub time_budget_min: u32,
}

fn default_accident_zone() -> AccidentZone {
    AccidentZone::None
}

fn default_ease_of_access() -> u8 {
    1
}

fn default_time_budget_min() -> u32 {
    90
}

impl JobRecord {
    /// Numeric view of an attribute by name, as fed to model preprocessors.
    ///
    /// Boolean attributes are exposed as 0.0/1.0. Returns `None` for
    /// unknown names and for categorical attributes (see
    /// [`JobRecord::categorical`]).
    pub fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "year" => Some(f64::from(self.year)),
            "odometer_km" => Some(self.odometer_km),
            "rust_grade" => Some(f64::from(self.rust_grade)),
            "accident_severity" => Some(f64::from(self.accident_severity)),
            "is_flooded" => Some(if self.is_flooded { 1.0 } else { 0.0 }),
            "ease_of_access" => Some(f64::from(self.ease_of_access)),
            "time_budget_min" => Some(f64::from(self.time_budget_min)),
            _ => None,
        }
    }

    /// Categorical view of an attribute by name.
    pub fn categorical(&self, field: &str) -> Option<&'static str> {
        match field {
            "accident_zone" => Some(self.accident_zone.as_str()),
            "vehicle_type" => Some(self.vehicle_type.as_str()),
            _ => None,
        }
    }
}
