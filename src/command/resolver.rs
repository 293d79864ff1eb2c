//! Resolves campus operations against session state
//!
//! CampusOp -> name lookups -> PlacementEngine calls -> CommandOutcome.
//! Every failure is a value carried in the outcome so the caller (chat
//! bridge or UI) can render the message directly; the resolver never
//! panics and never aborts a batch early.

use crate::campus::model::Campus;
use crate::command::ops::{CampusOp, DistributeCriterion};
use crate::core::types::{FloorId, Location, TeamId};
use crate::llm::protocol::FunctionCall;
use crate::placement::PlacementEngine;
use serde::Serialize;

/// Result of one resolved operation
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
    /// Populated by `getCampusState` only
    pub data: Option<CampusSnapshot>,
}

impl CommandOutcome {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Serializable snapshot of the whole campus
#[derive(Debug, Clone, Serialize)]
pub struct CampusSnapshot {
    pub buildings: Vec<BuildingSnapshot>,
    pub unassigned: Vec<TeamSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildingSnapshot {
    pub name: String,
    pub floors: Vec<FloorSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FloorSnapshot {
    pub number: u32,
    pub capacity: u32,
    pub occupancy: u32,
    pub teams: Vec<TeamSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSnapshot {
    pub name: String,
    pub occupancy: u32,
}

/// Executes resolved operations through the placement engine
pub struct CommandResolver {
    engine: PlacementEngine,
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::new(PlacementEngine::default())
    }
}

impl CommandResolver {
    pub fn new(engine: PlacementEngine) -> Self {
        Self { engine }
    }

    /// Execute a single operation against the campus
    pub fn execute(&self, campus: &mut Campus, op: &CampusOp) -> CommandOutcome {
        match op {
            CampusOp::MoveTeamToFloor {
                team_name,
                building_name,
                floor_number,
            } => self.move_team_to_floor(campus, team_name, building_name, *floor_number),
            CampusOp::MoveTeamToPool { team_name } => self.move_team_to_pool(campus, team_name),
            CampusOp::GetCampusState => self.get_campus_state(campus),
            CampusOp::AutoDistribute { criterion } => self.auto_distribute(campus, *criterion),
            CampusOp::EmptyFloor {
                building_name,
                floor_number,
            } => self.empty_floor(campus, building_name, *floor_number),
            CampusOp::EmptyBuilding { building_name } => {
                self.empty_building(campus, building_name)
            }
        }
    }

    /// Decode and execute one bridge function call
    pub fn execute_call(&self, campus: &mut Campus, call: &FunctionCall) -> CommandOutcome {
        match CampusOp::from_call(&call.name, &call.args) {
            Ok(op) => {
                tracing::debug!(op = op.wire_name(), "executing bridge call");
                self.execute(campus, &op)
            }
            Err(e) => CommandOutcome::fail(e.to_string()),
        }
    }

    /// Execute bridge calls strictly in the order received
    ///
    /// Each call is independently attempted; a failure never stops the
    /// rest of the batch.
    pub fn execute_batch(
        &self,
        campus: &mut Campus,
        calls: &[FunctionCall],
    ) -> Vec<CommandOutcome> {
        calls
            .iter()
            .map(|call| self.execute_call(campus, call))
            .collect()
    }

    fn move_team_to_floor(
        &self,
        campus: &mut Campus,
        team_name: &str,
        building_name: &str,
        floor_number: u32,
    ) -> CommandOutcome {
        let Some((team, source)) = campus.locate_team_by_name(team_name) else {
            return CommandOutcome::fail(format!("Team \"{}\" not found", team_name));
        };
        let team_id = team.id.clone();

        let Some(building) = campus.building_by_name(building_name) else {
            return CommandOutcome::fail(format!("Building \"{}\" not found", building_name));
        };
        let Some(floor) = building.floors.iter().find(|f| f.number == floor_number) else {
            return CommandOutcome::fail(format!(
                "Floor {} not found in {}",
                floor_number, building_name
            ));
        };
        let floor_id = floor.id.clone();
        let offset = self.engine.free_offset(floor);

        match self
            .engine
            .relocate(campus, &team_id, source, Location::Floor(floor_id), offset)
        {
            Ok(()) => CommandOutcome::ok(format!(
                "Team \"{}\" moved to {}, floor {}",
                team_name, building_name, floor_number
            )),
            Err(e) => CommandOutcome::fail(e.to_string()),
        }
    }

    fn move_team_to_pool(&self, campus: &mut Campus, team_name: &str) -> CommandOutcome {
        // Only placed teams qualify; a pooled team is already there
        let mut found: Option<(TeamId, FloorId)> = None;
        'search: for building in &campus.buildings {
            for floor in &building.floors {
                if let Some(placed) = floor
                    .teams
                    .iter()
                    .find(|p| crate::campus::model::name_matches(&p.team.name, team_name))
                {
                    found = Some((placed.team.id.clone(), floor.id.clone()));
                    break 'search;
                }
            }
        }

        let Some((team_id, floor_id)) = found else {
            return CommandOutcome::fail(format!("Team \"{}\" is not on any floor", team_name));
        };

        match self.engine.relocate(
            campus,
            &team_id,
            Location::Floor(floor_id),
            Location::Pool,
            0.0,
        ) {
            Ok(()) => CommandOutcome::ok(format!(
                "Team \"{}\" returned to the unassigned pool",
                team_name
            )),
            Err(e) => CommandOutcome::fail(e.to_string()),
        }
    }

    fn get_campus_state(&self, campus: &Campus) -> CommandOutcome {
        let snapshot = CampusSnapshot {
            buildings: campus
                .buildings
                .iter()
                .map(|b| BuildingSnapshot {
                    name: b.name.clone(),
                    floors: b
                        .floors
                        .iter()
                        .map(|f| FloorSnapshot {
                            number: f.number,
                            capacity: f.capacity,
                            occupancy: f.occupancy(),
                            teams: f
                                .teams
                                .iter()
                                .map(|p| TeamSnapshot {
                                    name: p.team.name.clone(),
                                    occupancy: p.team.occupancy,
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
            unassigned: campus
                .unassigned
                .iter()
                .map(|t| TeamSnapshot {
                    name: t.name.clone(),
                    occupancy: t.occupancy,
                })
                .collect(),
        };
        CommandOutcome {
            success: true,
            message: "Campus state retrieved".into(),
            data: Some(snapshot),
        }
    }

    fn auto_distribute(
        &self,
        campus: &mut Campus,
        criterion: DistributeCriterion,
    ) -> CommandOutcome {
        if campus.unassigned.is_empty() {
            return CommandOutcome::fail("No unassigned teams to distribute");
        }

        let placed = match criterion {
            DistributeCriterion::Balanced => self.distribute_first_fit(campus),
            // Currently identical to balanced; kept as a separate named
            // strategy pending a distinct algorithm
            DistributeCriterion::FillFirst => self.distribute_first_fit(campus),
            // Accepted on the wire but no algorithm is defined for it
            DistributeCriterion::ByBuilding => 0,
        };

        CommandOutcome::ok(format!(
            "{} team(s) distributed using criterion \"{}\"",
            placed, criterion
        ))
    }

    /// Place each pooled team on the first floor with room, scanning
    /// buildings then floors in declared order
    fn distribute_first_fit(&self, campus: &mut Campus) -> usize {
        let pending: Vec<TeamId> = campus.unassigned.iter().map(|t| t.id.clone()).collect();
        let mut placed = 0;

        for team_id in pending {
            let Some(team) = campus.unassigned.iter().find(|t| t.id == team_id) else {
                continue;
            };
            let occupancy = team.occupancy;

            let mut dest: Option<(FloorId, f32)> = None;
            'search: for building in &campus.buildings {
                for floor in &building.floors {
                    if floor.has_capacity(occupancy) {
                        dest = Some((floor.id.clone(), self.engine.free_offset(floor)));
                        break 'search;
                    }
                }
            }
            let Some((floor_id, offset)) = dest else {
                continue;
            };

            if self
                .engine
                .relocate(campus, &team_id, Location::Pool, Location::Floor(floor_id), offset)
                .is_ok()
            {
                placed += 1;
            }
        }
        placed
    }

    fn empty_floor(
        &self,
        campus: &mut Campus,
        building_name: &str,
        floor_number: u32,
    ) -> CommandOutcome {
        let Some(building) = campus.building_by_name(building_name) else {
            return CommandOutcome::fail(format!("Building \"{}\" not found", building_name));
        };
        let Some(floor) = building.floors.iter().find(|f| f.number == floor_number) else {
            return CommandOutcome::fail(format!("Floor {} not found", floor_number));
        };
        let floor_id = floor.id.clone();
        let team_ids: Vec<TeamId> = floor.teams.iter().map(|p| p.team.id.clone()).collect();

        let mut moved = 0;
        for team_id in &team_ids {
            if self
                .engine
                .relocate(
                    campus,
                    team_id,
                    Location::Floor(floor_id.clone()),
                    Location::Pool,
                    0.0,
                )
                .is_ok()
            {
                moved += 1;
            }
        }

        CommandOutcome::ok(format!(
            "Floor {} of {} emptied ({} team(s))",
            floor_number, building_name, moved
        ))
    }

    fn empty_building(&self, campus: &mut Campus, building_name: &str) -> CommandOutcome {
        let Some(building) = campus.building_by_name(building_name) else {
            return CommandOutcome::fail(format!("Building \"{}\" not found", building_name));
        };
        let floor_teams: Vec<(FloorId, Vec<TeamId>)> = building
            .floors
            .iter()
            .map(|f| {
                (
                    f.id.clone(),
                    f.teams.iter().map(|p| p.team.id.clone()).collect(),
                )
            })
            .collect();
        let display_name = building.name.clone();

        let mut moved = 0;
        for (floor_id, team_ids) in &floor_teams {
            for team_id in team_ids {
                if self
                    .engine
                    .relocate(
                        campus,
                        team_id,
                        Location::Floor(floor_id.clone()),
                        Location::Pool,
                        0.0,
                    )
                    .is_ok()
                {
                    moved += 1;
                }
            }
        }

        CommandOutcome::ok(format!(
            "{} emptied completely ({} team(s))",
            display_name, moved
        ))
    }
}

/// Combine batch outcomes into one user-facing message
///
/// Successes are counted, failures are listed individually; an empty
/// batch yields an empty string.
pub fn summarize(outcomes: &[CommandOutcome]) -> String {
    let succeeded = outcomes.iter().filter(|o| o.success).count();
    let failures: Vec<&str> = outcomes
        .iter()
        .filter(|o| !o.success)
        .map(|o| o.message.as_str())
        .collect();

    let mut summary = String::new();
    if succeeded > 0 {
        summary.push_str(&format!("{} action(s) completed.", succeeded));
    }
    if !failures.is_empty() {
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(&format!("Errors: {}", failures.join(", ")));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::seed::seed_campus;

    #[test]
    fn test_move_team_reports_missing_building() {
        let resolver = CommandResolver::default();
        let mut campus = seed_campus();
        let outcome = resolver.execute(
            &mut campus,
            &CampusOp::MoveTeamToFloor {
                team_name: "Marketing".into(),
                building_name: "Edificio Z".into(),
                floor_number: 1,
            },
        );
        assert!(!outcome.success);
        assert!(outcome.message.contains("Edificio Z"));
    }

    #[test]
    fn test_summarize_mixed_batch() {
        let outcomes = vec![
            CommandOutcome::ok("Team \"Marketing\" moved to Edificio A, floor 1"),
            CommandOutcome::fail("Team \"Ghost\" not found"),
        ];
        let summary = summarize(&outcomes);
        assert!(summary.contains("1 action(s) completed."));
        assert!(summary.contains("Team \"Ghost\" not found"));
    }

    #[test]
    fn test_summarize_empty_batch() {
        assert_eq!(summarize(&[]), "");
    }
}
