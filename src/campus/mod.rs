//! Campus capacity model and seed data

pub mod loader;
pub mod model;
pub mod seed;

pub use model::{Building, Campus, Floor, PlacedTeam, Team};
pub use seed::seed_campus;
