//! Restoplan Core - Domain Model and Decision Engine
//!
//! This crate holds the pure heart of restoplan: the job record, candidate
//! construction with pricing, the budget-constrained selection algorithm,
//! mandatory-step derivation, and plan assembly. Everything here is
//! deterministic and free of IO; model scoring and artifact storage live in
//! sibling crates.
//!
//! ## Pipeline position
//!
//! job record -> (scoring, elsewhere) -> [`CandidateBuilder`] ->
//! [`select_under_budget`] -> [`resolve_mandatory_steps`] -> [`render_plan`]

mod candidate;
mod job;
mod knapsack;
mod mandatory;
mod plan;
mod pricing;

pub use candidate::{BuildOutcome, CandidateBuilder, CandidateItem};
pub use job::{AccidentZone, JobRecord, VehicleType};
pub use knapsack::select_under_budget;
pub use mandatory::{resolve_mandatory_steps, MandatoryStep};
pub use plan::{render_empty_plan, render_plan, Plan, PlanTotals, SYSTEM_SKIP_KEY};
pub use pricing::price_for;
