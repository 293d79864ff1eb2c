//! Load campus definitions from JSON files
//!
//! An alternative to the built-in seed: a JSON document declaring the
//! building/floor topology and the starting team pool. Definitions are
//! validated before a `Campus` is produced.

use crate::campus::model::{Building, Campus, Floor, Team};
use crate::core::types::{BuildingId, FloorId, TeamId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a campus definition
#[derive(Debug, Error)]
pub enum LoadError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Floor capacity must be a positive number of seats
    #[error("Floor {floor} has invalid capacity {capacity}")]
    InvalidCapacity { floor: String, capacity: u32 },
    /// Team occupancy must be a positive number of seats
    #[error("Team {team} has invalid occupancy {occupancy}")]
    InvalidOccupancy { team: String, occupancy: u32 },
    /// Every building, floor, and team id must be unique
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    /// Floor numbers must be unique within their building
    #[error("Duplicate floor number {number} in building {building}")]
    DuplicateFloorNumber { building: String, number: u32 },
}

/// Root structure of a campus definition file
#[derive(Debug, Deserialize)]
pub struct CampusFile {
    pub buildings: Vec<BuildingDef>,
    pub teams: Vec<TeamDef>,
}

#[derive(Debug, Deserialize)]
pub struct BuildingDef {
    pub id: String,
    pub name: String,
    pub floors: Vec<FloorDef>,
}

#[derive(Debug, Deserialize)]
pub struct FloorDef {
    pub id: String,
    pub number: u32,
    pub capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct TeamDef {
    pub id: String,
    pub name: String,
    pub occupancy: u32,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#CCCCCC".into()
}

/// Load a campus from a JSON string
pub fn load_from_json(json: &str) -> Result<Campus, LoadError> {
    let file: CampusFile = serde_json::from_str(json)?;
    build_campus(file)
}

/// Load a campus from a JSON file on disk
pub fn load_from_file(path: &Path) -> Result<Campus, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_from_json(&content)
}

fn build_campus(file: CampusFile) -> Result<Campus, LoadError> {
    let mut seen_ids: HashSet<String> = HashSet::new();

    let mut buildings = Vec::with_capacity(file.buildings.len());
    for def in file.buildings {
        if !seen_ids.insert(def.id.clone()) {
            return Err(LoadError::DuplicateId(def.id));
        }
        let mut numbers: HashSet<u32> = HashSet::new();
        let mut floors = Vec::with_capacity(def.floors.len());
        for f in def.floors {
            if f.capacity == 0 {
                return Err(LoadError::InvalidCapacity {
                    floor: f.id,
                    capacity: f.capacity,
                });
            }
            if !seen_ids.insert(f.id.clone()) {
                return Err(LoadError::DuplicateId(f.id));
            }
            if !numbers.insert(f.number) {
                return Err(LoadError::DuplicateFloorNumber {
                    building: def.name.clone(),
                    number: f.number,
                });
            }
            floors.push(Floor {
                id: FloorId::new(f.id),
                number: f.number,
                capacity: f.capacity,
                teams: Vec::new(),
            });
        }
        buildings.push(Building {
            id: BuildingId::new(def.id),
            name: def.name,
            floors,
        });
    }

    let mut unassigned = Vec::with_capacity(file.teams.len());
    for t in file.teams {
        if t.occupancy == 0 {
            return Err(LoadError::InvalidOccupancy {
                team: t.id,
                occupancy: t.occupancy,
            });
        }
        if !seen_ids.insert(t.id.clone()) {
            return Err(LoadError::DuplicateId(t.id));
        }
        unassigned.push(Team {
            id: TeamId::new(t.id),
            name: t.name,
            occupancy: t.occupancy,
            color: t.color,
        });
    }

    Ok(Campus::new(buildings, unassigned))
}
