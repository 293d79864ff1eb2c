//! Integration tests for the placement engine
//!
//! These tests verify the capacity-constrained placement pipeline:
//! - Moving teams between the pool and floors
//! - Capacity enforcement with rejected placements parked in the pool
//! - Compaction after every placement and removal
//! - The exclusivity invariant: every team in exactly one location

use campus_planner::campus::model::{Building, Campus, Floor, PlacedTeam, Team};
use campus_planner::campus::seed::seed_campus;
use campus_planner::command::{CampusOp, CommandResolver};
use campus_planner::core::error::CampusError;
use campus_planner::core::types::{BuildingId, FloorId, Location, TeamId};
use campus_planner::placement::layout;
use campus_planner::placement::PlacementEngine;

fn team(id: &str, name: &str, occupancy: u32) -> Team {
    Team {
        id: TeamId::new(id),
        name: name.into(),
        occupancy,
        color: "#CCCCCC".into(),
    }
}

fn floor(id: &str, number: u32, capacity: u32) -> Floor {
    Floor {
        id: FloorId::new(id),
        number,
        capacity,
        teams: Vec::new(),
    }
}

/// Count the locations holding a team: must always be exactly one
fn locations_of(campus: &Campus, team_id: &TeamId) -> usize {
    let pooled = campus.unassigned.iter().filter(|t| &t.id == team_id).count();
    let placed: usize = campus
        .buildings
        .iter()
        .flat_map(|b| b.floors.iter())
        .map(|f| f.teams.iter().filter(|p| &p.team.id == team_id).count())
        .sum();
    pooled + placed
}

fn assert_invariants(campus: &Campus) {
    for building in &campus.buildings {
        for floor in &building.floors {
            assert!(
                floor.occupancy() <= floor.capacity,
                "floor {} over capacity: {} > {}",
                floor.id,
                floor.occupancy(),
                floor.capacity
            );
        }
    }
}

// ============================================================================
// Scenario A: pooled team onto an empty floor
// ============================================================================

#[test]
fn test_move_pooled_team_to_empty_floor() {
    let mut campus = seed_campus();
    let resolver = CommandResolver::default();

    let outcome = resolver.execute(
        &mut campus,
        &CampusOp::MoveTeamToFloor {
            team_name: "Marketing".into(),
            building_name: "Edificio A".into(),
            floor_number: 1,
        },
    );

    assert!(outcome.success, "{}", outcome.message);
    let f = campus.floor(&FloorId::new("e1-p1")).unwrap();
    assert_eq!(f.teams.len(), 1);
    assert_eq!(f.teams[0].team.name, "Marketing");
    assert_eq!(f.teams[0].offset_x, 0.0);
    assert!(!campus.unassigned.iter().any(|t| t.name == "Marketing"));
    assert_eq!(locations_of(&campus, &TeamId::new("equipo-1")), 1);
    assert_invariants(&campus);
}

// ============================================================================
// Scenario B: capacity violation
// ============================================================================

#[test]
fn test_capacity_violation_cites_numbers_and_pools_team() {
    let engine = PlacementEngine::default();
    let mut occupied_floor = floor("hq-1", 1, 30);
    occupied_floor.teams.push(PlacedTeam {
        team: team("resident", "Finanzas", 25),
        offset_x: 0.0,
    });
    let mut campus = Campus::new(
        vec![Building {
            id: BuildingId::new("hq"),
            name: "Headquarters".into(),
            floors: vec![occupied_floor],
        }],
        vec![team("incoming", "Marketing", 10)],
    );

    let err = engine
        .relocate(
            &mut campus,
            &TeamId::new("incoming"),
            Location::Pool,
            Location::Floor(FloorId::new("hq-1")),
            0.0,
        )
        .unwrap_err();

    match err {
        CampusError::CapacityExceeded {
            capacity,
            occupied,
            required,
        } => {
            assert_eq!((capacity, occupied, required), (30, 25, 10));
        }
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }

    assert!(campus.pool_contains(&TeamId::new("incoming")));
    assert_eq!(campus.floor(&FloorId::new("hq-1")).unwrap().occupancy(), 25);
    assert_invariants(&campus);
}

#[test]
fn test_capacity_message_carries_the_numbers() {
    let err = CampusError::CapacityExceeded {
        capacity: 30,
        occupied: 25,
        required: 10,
    };
    let message = err.to_string();
    assert!(message.contains("30"));
    assert!(message.contains("25"));
    assert!(message.contains("10"));
}

// ============================================================================
// Scenario C: removal compacts the remaining teams
// ============================================================================

#[test]
fn test_removing_middle_team_closes_the_gap() {
    let engine = PlacementEngine::default();
    let mut f = floor("hq-1", 1, 50);
    for (id, offset) in [("first", 0.0_f32), ("middle", 80.0), ("last", 160.0)] {
        f.teams.push(PlacedTeam {
            team: team(id, id, 10),
            offset_x: offset,
        });
    }
    let mut campus = Campus::new(
        vec![Building {
            id: BuildingId::new("hq"),
            name: "Headquarters".into(),
            floors: vec![f],
        }],
        vec![],
    );

    engine
        .relocate(
            &mut campus,
            &TeamId::new("middle"),
            Location::Floor(FloorId::new("hq-1")),
            Location::Pool,
            0.0,
        )
        .unwrap();

    let f = campus.floor(&FloorId::new("hq-1")).unwrap();
    assert_eq!(f.teams.len(), 2);
    // 10 of 50 seats on a 400px floor is 80px; no gap remains
    assert_eq!(f.teams[0].offset_x, 0.0);
    assert_eq!(f.teams[1].offset_x, 80.0);
    assert!(campus.pool_contains(&TeamId::new("middle")));
    assert_invariants(&campus);
}

// ============================================================================
// Scenario D: emptying a building
// ============================================================================

#[test]
fn test_empty_building_moves_every_team_to_pool() {
    let mut campus = seed_campus();
    let resolver = CommandResolver::default();

    // Five teams spread over the four floors of Edificio A
    for (team_name, floor_number) in [
        ("Marketing", 1),
        ("Legal", 1),
        ("Desarrollo", 2),
        ("Diseño", 3),
        ("Recursos Humanos", 4),
    ] {
        let outcome = resolver.execute(
            &mut campus,
            &CampusOp::MoveTeamToFloor {
                team_name: team_name.into(),
                building_name: "Edificio A".into(),
                floor_number,
            },
        );
        assert!(outcome.success, "{}", outcome.message);
    }
    assert_eq!(campus.unassigned.len(), 3);

    let outcome = resolver.execute(
        &mut campus,
        &CampusOp::EmptyBuilding {
            building_name: "Edificio A".into(),
        },
    );

    assert!(outcome.success);
    assert!(outcome.message.contains("5 team(s)"), "{}", outcome.message);
    assert_eq!(campus.unassigned.len(), 8);
    let building = campus.building_by_name("Edificio A").unwrap();
    for floor in &building.floors {
        assert_eq!(floor.occupancy(), 0);
    }
    assert_invariants(&campus);
}

// ============================================================================
// Scenario E: snapshot of the freshly seeded campus
// ============================================================================

#[test]
fn test_initial_snapshot_is_empty_floors_full_pool() {
    let mut campus = seed_campus();
    let resolver = CommandResolver::default();

    let outcome = resolver.execute(&mut campus, &CampusOp::GetCampusState);
    assert!(outcome.success);
    let snapshot = outcome.data.expect("snapshot expected");

    assert_eq!(snapshot.buildings.len(), 3);
    let floors: usize = snapshot.buildings.iter().map(|b| b.floors.len()).sum();
    assert_eq!(floors, 12);
    for building in &snapshot.buildings {
        for floor in &building.floors {
            assert_eq!(floor.occupancy, 0);
            assert!(floor.teams.is_empty());
        }
    }
    assert_eq!(snapshot.unassigned.len(), 8);
}

// ============================================================================
// Invariant checks
// ============================================================================

#[test]
fn test_pool_relocation_is_idempotent() {
    let engine = PlacementEngine::default();
    let mut campus = seed_campus();

    engine
        .relocate(
            &mut campus,
            &TeamId::new("equipo-8"),
            Location::Pool,
            Location::Pool,
            0.0,
        )
        .unwrap();

    assert_eq!(
        campus
            .unassigned
            .iter()
            .filter(|t| t.id == TeamId::new("equipo-8"))
            .count(),
        1
    );
}

#[test]
fn test_compaction_is_deterministic() {
    let mut f = floor("hq-1", 1, 100);
    for (id, occupancy, offset) in [("a", 25, 310.0_f32), ("b", 10, 12.0), ("c", 40, 150.0)] {
        f.teams.push(PlacedTeam {
            team: team(id, id, occupancy),
            offset_x: offset,
        });
    }

    layout::compact_floor(&mut f, 400.0);
    let once: Vec<f32> = f.teams.iter().map(|p| p.offset_x).collect();
    layout::compact_floor(&mut f, 400.0);
    let twice: Vec<f32> = f.teams.iter().map(|p| p.offset_x).collect();
    assert_eq!(once, twice);
}

#[test]
fn test_floor_to_floor_move_keeps_exclusivity() {
    let mut campus = seed_campus();
    let resolver = CommandResolver::default();

    resolver.execute(
        &mut campus,
        &CampusOp::MoveTeamToFloor {
            team_name: "Ventas".into(),
            building_name: "Edificio B".into(),
            floor_number: 1,
        },
    );
    resolver.execute(
        &mut campus,
        &CampusOp::MoveTeamToFloor {
            team_name: "Ventas".into(),
            building_name: "Edificio C".into(),
            floor_number: 5,
        },
    );

    assert_eq!(locations_of(&campus, &TeamId::new("equipo-6")), 1);
    assert!(campus
        .floor(&FloorId::new("e2-p1"))
        .unwrap()
        .teams
        .is_empty());
    assert_eq!(
        campus.floor(&FloorId::new("e3-p5")).unwrap().teams[0].team.name,
        "Ventas"
    );
    assert_invariants(&campus);
}

#[test]
fn test_rejected_cross_floor_move_lands_in_pool() {
    let mut campus = seed_campus();
    let resolver = CommandResolver::default();

    // Fill floor 4 of Edificio A (capacity 80) almost to the brim
    for team_name in ["Desarrollo", "Finanzas"] {
        let outcome = resolver.execute(
            &mut campus,
            &CampusOp::MoveTeamToFloor {
                team_name: team_name.into(),
                building_name: "Edificio A".into(),
                floor_number: 4,
            },
        );
        assert!(outcome.success, "{}", outcome.message);
    }
    // Park Ventas on another floor, then try to squeeze it in
    resolver.execute(
        &mut campus,
        &CampusOp::MoveTeamToFloor {
            team_name: "Ventas".into(),
            building_name: "Edificio B".into(),
            floor_number: 2,
        },
    );
    let outcome = resolver.execute(
        &mut campus,
        &CampusOp::MoveTeamToFloor {
            team_name: "Ventas".into(),
            building_name: "Edificio A".into(),
            floor_number: 4,
        },
    );

    assert!(!outcome.success);
    assert!(outcome.message.contains("capacity"), "{}", outcome.message);
    // Ventas is in the pool, not back on Edificio B floor 2
    assert!(campus.pool_contains(&TeamId::new("equipo-6")));
    assert!(campus
        .floor(&FloorId::new("e2-p2"))
        .unwrap()
        .teams
        .is_empty());
    assert_eq!(locations_of(&campus, &TeamId::new("equipo-6")), 1);
    assert_invariants(&campus);
}

#[test]
fn test_set_offset_then_compact_orders_by_offset() {
    let engine = PlacementEngine::default();
    let mut campus = seed_campus();
    let resolver = CommandResolver::default();

    for team_name in ["Diseño", "Legal"] {
        resolver.execute(
            &mut campus,
            &CampusOp::MoveTeamToFloor {
                team_name: team_name.into(),
                building_name: "Edificio C".into(),
                floor_number: 1,
            },
        );
    }

    // Drag Legal to the far left, then normalize
    engine
        .set_offset(
            &mut campus,
            &TeamId::new("equipo-8"),
            &FloorId::new("e3-p1"),
            -5.0,
        )
        .unwrap();
    let floor = campus.floor_mut(&FloorId::new("e3-p1")).unwrap();
    layout::compact_floor(floor, 400.0);

    // Legal (12/150 -> 32px) now leads, Diseño follows with no gap
    let legal = floor
        .teams
        .iter()
        .find(|p| p.team.name == "Legal")
        .unwrap();
    let diseno = floor
        .teams
        .iter()
        .find(|p| p.team.name == "Diseño")
        .unwrap();
    assert_eq!(legal.offset_x, 0.0);
    assert_eq!(diseno.offset_x, 32.0);
}
