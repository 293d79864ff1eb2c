//! Placement engine: relocation with capacity enforcement and re-layout
//!
//! All mutation of team locations goes through here. The engine enforces
//! two postconditions on every operation: a team is always in exactly one
//! of {pool, one floor}, and no floor ever ends an operation above its
//! capacity. A rejected placement parks the team in the unassigned pool,
//! never on the over-full floor and never back on a different source
//! floor.

use crate::campus::model::{Campus, PlacedTeam, Team};
use crate::core::config::PlannerConfig;
use crate::core::error::{CampusError, Result};
use crate::core::types::{FloorId, Location, TeamId};
use crate::placement::layout;

/// Executes placement operations against a campus
pub struct PlacementEngine {
    config: PlannerConfig,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl PlacementEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Offset for appending a team after a floor's last occupant
    pub fn free_offset(&self, floor: &crate::campus::model::Floor) -> f32 {
        layout::free_offset(floor, self.config.floor_px_width)
    }

    /// Move a team between the pool and floors (or floor to floor)
    ///
    /// The team is extracted from the claimed source; a source that does
    /// not actually hold the team is a lookup error, not a silent no-op.
    /// Moving an already-pooled team to the pool is idempotent. When the
    /// destination floor cannot absorb the team, it is returned to the
    /// pool and a capacity error carrying capacity/occupied/required is
    /// reported. Every floor a team leaves or joins is compacted.
    pub fn relocate(
        &self,
        campus: &mut Campus,
        team_id: &TeamId,
        source: Location,
        dest: Location,
        offset_hint: f32,
    ) -> Result<()> {
        let team = match &source {
            Location::Pool => {
                let idx = campus
                    .unassigned
                    .iter()
                    .position(|t| &t.id == team_id)
                    .ok_or_else(|| CampusError::TeamNotFound(team_id.clone()))?;
                if dest == Location::Pool {
                    // Already pooled, nothing to move
                    return Ok(());
                }
                campus.unassigned.remove(idx)
            }
            Location::Floor(floor_id) => self.take_from_floor(campus, floor_id, team_id)?,
        };

        match dest {
            Location::Pool => {
                tracing::debug!(team = %team.id, "team returned to pool");
                self.park_in_pool(campus, team);
                if let Location::Floor(src) = &source {
                    self.compact(campus, src);
                }
                Ok(())
            }
            Location::Floor(dest_id) => {
                self.place_on_floor(campus, team, &source, dest_id, offset_hint)
            }
        }
    }

    /// Directly set a placed team's offset, with no capacity or collision
    /// check (drag-repositioning within a floor)
    pub fn set_offset(
        &self,
        campus: &mut Campus,
        team_id: &TeamId,
        floor_id: &FloorId,
        new_offset: f32,
    ) -> Result<()> {
        let floor = campus
            .floor_mut(floor_id)
            .ok_or_else(|| CampusError::FloorNotFound(floor_id.clone()))?;
        let placed = floor
            .teams
            .iter_mut()
            .find(|p| &p.team.id == team_id)
            .ok_or_else(|| CampusError::TeamNotFound(team_id.clone()))?;
        placed.offset_x = new_offset;
        Ok(())
    }

    fn take_from_floor(
        &self,
        campus: &mut Campus,
        floor_id: &FloorId,
        team_id: &TeamId,
    ) -> Result<Team> {
        let floor = campus
            .floor_mut(floor_id)
            .ok_or_else(|| CampusError::FloorNotFound(floor_id.clone()))?;
        let idx = floor
            .teams
            .iter()
            .position(|p| &p.team.id == team_id)
            .ok_or_else(|| CampusError::TeamNotFound(team_id.clone()))?;
        Ok(floor.teams.remove(idx).team)
    }

    fn place_on_floor(
        &self,
        campus: &mut Campus,
        team: Team,
        source: &Location,
        dest_id: FloorId,
        offset_hint: f32,
    ) -> Result<()> {
        let width = self.config.floor_px_width;

        let Some(floor) = campus.floor_mut(&dest_id) else {
            // Unknown destination: the team must not be lost
            self.park_in_pool(campus, team);
            if let Location::Floor(src) = source {
                self.compact(campus, src);
            }
            return Err(CampusError::FloorNotFound(dest_id));
        };

        let occupied = floor.occupancy();
        if occupied + team.occupancy > floor.capacity {
            let capacity = floor.capacity;
            let required = team.occupancy;
            tracing::warn!(
                team = %team.id,
                floor = %dest_id,
                capacity,
                occupied,
                required,
                "placement rejected, floor full"
            );
            self.park_in_pool(campus, team);
            if let Location::Floor(src) = source {
                self.compact(campus, src);
            }
            return Err(CampusError::CapacityExceeded {
                capacity,
                occupied,
                required,
            });
        }

        tracing::debug!(team = %team.id, floor = %dest_id, "team placed");
        floor.teams.push(PlacedTeam {
            team,
            offset_x: offset_hint,
        });
        layout::compact_floor(floor, width);

        if let Location::Floor(src) = source {
            if src != &dest_id {
                self.compact(campus, src);
            }
        }
        Ok(())
    }

    /// Append to the pool only if no team with that identity is present
    fn park_in_pool(&self, campus: &mut Campus, team: Team) {
        if !campus.pool_contains(&team.id) {
            campus.unassigned.push(team);
        }
    }

    fn compact(&self, campus: &mut Campus, floor_id: &FloorId) {
        if let Some(floor) = campus.floor_mut(floor_id) {
            layout::compact_floor(floor, self.config.floor_px_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::model::{Building, Floor};
    use crate::core::types::BuildingId;

    fn team(id: &str, name: &str, occupancy: u32) -> Team {
        Team {
            id: TeamId::new(id),
            name: name.into(),
            occupancy,
            color: "#CCCCCC".into(),
        }
    }

    fn campus_one_building(floors: Vec<Floor>, pool: Vec<Team>) -> Campus {
        Campus::new(
            vec![Building {
                id: BuildingId::new("edificio-1"),
                name: "Edificio A".into(),
                floors,
            }],
            pool,
        )
    }

    fn floor(id: &str, number: u32, capacity: u32) -> Floor {
        Floor {
            id: FloorId::new(id),
            number,
            capacity,
            teams: Vec::new(),
        }
    }

    #[test]
    fn test_relocate_pool_to_floor() {
        let engine = PlacementEngine::default();
        let mut campus =
            campus_one_building(vec![floor("e1-p1", 1, 100)], vec![team("t1", "Marketing", 25)]);

        engine
            .relocate(
                &mut campus,
                &TeamId::new("t1"),
                Location::Pool,
                Location::Floor(FloorId::new("e1-p1")),
                0.0,
            )
            .unwrap();

        assert!(campus.unassigned.is_empty());
        let f = campus.floor(&FloorId::new("e1-p1")).unwrap();
        assert_eq!(f.teams.len(), 1);
        assert_eq!(f.teams[0].offset_x, 0.0);
    }

    #[test]
    fn test_relocate_pool_to_pool_is_idempotent() {
        let engine = PlacementEngine::default();
        let mut campus = campus_one_building(vec![], vec![team("t1", "Marketing", 25)]);

        engine
            .relocate(
                &mut campus,
                &TeamId::new("t1"),
                Location::Pool,
                Location::Pool,
                0.0,
            )
            .unwrap();

        assert_eq!(campus.unassigned.len(), 1);
    }

    #[test]
    fn test_capacity_rejection_parks_team_in_pool() {
        let engine = PlacementEngine::default();
        let mut f = floor("e1-p1", 1, 30);
        f.teams.push(PlacedTeam {
            team: team("t1", "Finanzas", 25),
            offset_x: 0.0,
        });
        let mut campus = campus_one_building(vec![f], vec![team("t2", "Marketing", 10)]);

        let err = engine
            .relocate(
                &mut campus,
                &TeamId::new("t2"),
                Location::Pool,
                Location::Floor(FloorId::new("e1-p1")),
                0.0,
            )
            .unwrap_err();

        match err {
            CampusError::CapacityExceeded {
                capacity,
                occupied,
                required,
            } => {
                assert_eq!(capacity, 30);
                assert_eq!(occupied, 25);
                assert_eq!(required, 10);
            }
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }
        // Rejected team ends in the pool, the floor is untouched
        assert!(campus.pool_contains(&TeamId::new("t2")));
        assert_eq!(campus.floor(&FloorId::new("e1-p1")).unwrap().occupancy(), 25);
    }

    #[test]
    fn test_rejected_floor_move_does_not_restore_source() {
        let engine = PlacementEngine::default();
        let mut src = floor("e1-p1", 1, 100);
        src.teams.push(PlacedTeam {
            team: team("t1", "Ventas", 35),
            offset_x: 0.0,
        });
        let mut dst = floor("e1-p2", 2, 30);
        dst.teams.push(PlacedTeam {
            team: team("t2", "Legal", 12),
            offset_x: 0.0,
        });
        let mut campus = campus_one_building(vec![src, dst], vec![]);

        let result = engine.relocate(
            &mut campus,
            &TeamId::new("t1"),
            Location::Floor(FloorId::new("e1-p1")),
            Location::Floor(FloorId::new("e1-p2")),
            0.0,
        );

        assert!(result.is_err());
        // The team is in the pool, not back on its original floor
        assert!(campus.pool_contains(&TeamId::new("t1")));
        assert!(campus.floor(&FloorId::new("e1-p1")).unwrap().teams.is_empty());
        assert_eq!(campus.floor(&FloorId::new("e1-p2")).unwrap().teams.len(), 1);
    }

    #[test]
    fn test_source_floor_compacted_after_move_to_pool() {
        let engine = PlacementEngine::default();
        let mut f = floor("e1-p1", 1, 50);
        for (i, offset) in [(0, 0.0), (1, 80.0), (2, 160.0)] {
            f.teams.push(PlacedTeam {
                team: team(&format!("t{}", i), &format!("Team {}", i), 10),
                offset_x: offset,
            });
        }
        let mut campus = campus_one_building(vec![f], vec![]);

        engine
            .relocate(
                &mut campus,
                &TeamId::new("t1"),
                Location::Floor(FloorId::new("e1-p1")),
                Location::Pool,
                0.0,
            )
            .unwrap();

        let f = campus.floor(&FloorId::new("e1-p1")).unwrap();
        assert_eq!(f.teams.len(), 2);
        // 10/50 * 400 = 80px per team, re-packed from zero
        assert_eq!(f.teams[0].offset_x, 0.0);
        assert_eq!(f.teams[1].offset_x, 80.0);
    }

    #[test]
    fn test_relocate_missing_team_is_lookup_error() {
        let engine = PlacementEngine::default();
        let mut campus = campus_one_building(vec![floor("e1-p1", 1, 100)], vec![]);

        let err = engine
            .relocate(
                &mut campus,
                &TeamId::new("ghost"),
                Location::Pool,
                Location::Floor(FloorId::new("e1-p1")),
                0.0,
            )
            .unwrap_err();
        assert!(matches!(err, CampusError::TeamNotFound(_)));
    }

    #[test]
    fn test_set_offset_unconditional() {
        let engine = PlacementEngine::default();
        let mut f = floor("e1-p1", 1, 100);
        f.teams.push(PlacedTeam {
            team: team("t1", "Marketing", 25),
            offset_x: 0.0,
        });
        let mut campus = campus_one_building(vec![f], vec![]);

        engine
            .set_offset(
                &mut campus,
                &TeamId::new("t1"),
                &FloorId::new("e1-p1"),
                123.5,
            )
            .unwrap();
        assert_eq!(
            campus.floor(&FloorId::new("e1-p1")).unwrap().teams[0].offset_x,
            123.5
        );
    }
}
