//! Layout module orchestrator.
//!
//! Callers import the generator and its result types from here; the tier
//! strategies live in the private `tiers` module.

mod core;
mod tiers;

pub use core::{LayoutReport, PlacementSet, ScatterLayout, generate_placements, place_items};
pub use tiers::Tier;
