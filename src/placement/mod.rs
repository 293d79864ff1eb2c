//! Placement engine and floor layout

pub mod engine;
pub mod layout;

pub use engine::PlacementEngine;
