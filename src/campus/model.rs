//! Campus data model: buildings, floors, teams, and the unassigned pool
//!
//! This is the capacity model the placement engine and command resolver
//! operate on. The campus is an explicitly owned session object passed
//! into every operation; there is no ambient global state.

use crate::core::types::{BuildingId, FloorId, Location, TeamId};
use serde::{Deserialize, Serialize};

/// The unit of placement: a named team requiring a fixed number of seats
///
/// Name, occupancy, and color are immutable once created; only a team's
/// location (and its layout offset while placed) change over a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Display name, the human-facing lookup key. Lookup is
    /// case-insensitive and first-match-wins; nothing guards against
    /// duplicate names.
    pub name: String,
    /// Seats this team requires on a floor
    pub occupancy: u32,
    /// Display color (hex string, presentation only)
    pub color: String,
}

/// A team placed on a floor, carrying its horizontal layout offset
///
/// The offset exists only while placed; pooled teams have none. It is
/// purely a layout value with no business meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTeam {
    #[serde(flatten)]
    pub team: Team,
    /// Horizontal offset in floor pixels
    pub offset_x: f32,
}

/// A capacity-bounded placement surface within a building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    /// Floor number, unique within its building (not necessarily
    /// contiguous)
    pub number: u32,
    /// Fixed seat capacity, positive
    pub capacity: u32,
    /// Placed teams in insertion order
    #[serde(default)]
    pub teams: Vec<PlacedTeam>,
}

impl Floor {
    /// Total seats currently occupied on this floor
    pub fn occupancy(&self) -> u32 {
        self.teams.iter().map(|p| p.team.occupancy).sum()
    }

    /// Whether `extra` more seats fit without exceeding capacity
    pub fn has_capacity(&self, extra: u32) -> bool {
        self.occupancy() + extra <= self.capacity
    }
}

/// Top-level container of floors, fixed at initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub floors: Vec<Floor>,
}

/// Owned session state: the building topology plus the unassigned pool
///
/// The topology and the team set are created once at startup and never
/// grow or shrink; "emptying" a floor moves its teams to the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campus {
    pub buildings: Vec<Building>,
    /// Teams not currently on any floor
    pub unassigned: Vec<Team>,
}

/// Case-insensitive name comparison used for every human-facing lookup
pub fn name_matches(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Campus {
    pub fn new(buildings: Vec<Building>, unassigned: Vec<Team>) -> Self {
        Self {
            buildings,
            unassigned,
        }
    }

    /// Find a floor by identity across all buildings
    pub fn floor(&self, id: &FloorId) -> Option<&Floor> {
        self.buildings
            .iter()
            .flat_map(|b| b.floors.iter())
            .find(|f| &f.id == id)
    }

    /// Mutable variant of [`Campus::floor`]
    pub fn floor_mut(&mut self, id: &FloorId) -> Option<&mut Floor> {
        self.buildings
            .iter_mut()
            .flat_map(|b| b.floors.iter_mut())
            .find(|f| &f.id == id)
    }

    /// Find a building by case-insensitive display name
    pub fn building_by_name(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| name_matches(&b.name, name))
    }

    /// Locate a team by case-insensitive name: the pool first, then every
    /// floor of every building in declared order. First match wins.
    pub fn locate_team_by_name(&self, name: &str) -> Option<(&Team, Location)> {
        if let Some(team) = self
            .unassigned
            .iter()
            .find(|t| name_matches(&t.name, name))
        {
            return Some((team, Location::Pool));
        }
        for building in &self.buildings {
            for floor in &building.floors {
                if let Some(placed) = floor.teams.iter().find(|p| name_matches(&p.team.name, name))
                {
                    return Some((&placed.team, Location::Floor(floor.id.clone())));
                }
            }
        }
        None
    }

    /// Whether the pool currently holds a team with this identity
    pub fn pool_contains(&self, id: &TeamId) -> bool {
        self.unassigned.iter().any(|t| &t.id == id)
    }

    /// Total number of teams across the pool and every floor
    pub fn team_count(&self) -> usize {
        let placed: usize = self
            .buildings
            .iter()
            .flat_map(|b| b.floors.iter())
            .map(|f| f.teams.len())
            .sum();
        self.unassigned.len() + placed
    }
}
