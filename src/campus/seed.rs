//! Fixed seed campus used at startup
//!
//! Three buildings, twelve floors, eight unassigned teams. The topology
//! and team set are immutable for the lifetime of a session.

use crate::campus::model::{Building, Campus, Floor, Team};
use crate::core::types::{BuildingId, FloorId, TeamId};

fn floor(id: &str, number: u32, capacity: u32) -> Floor {
    Floor {
        id: FloorId::new(id),
        number,
        capacity,
        teams: Vec::new(),
    }
}

fn team(id: &str, name: &str, occupancy: u32, color: &str) -> Team {
    Team {
        id: TeamId::new(id),
        name: name.into(),
        occupancy,
        color: color.into(),
    }
}

/// Build the seed campus: every floor empty, every team in the pool
pub fn seed_campus() -> Campus {
    let buildings = vec![
        Building {
            id: BuildingId::new("edificio-1"),
            name: "Edificio A".into(),
            floors: vec![
                floor("e1-p1", 1, 100),
                floor("e1-p2", 2, 120),
                floor("e1-p3", 3, 100),
                floor("e1-p4", 4, 80),
            ],
        },
        Building {
            id: BuildingId::new("edificio-2"),
            name: "Edificio B".into(),
            floors: vec![
                floor("e2-p1", 1, 90),
                floor("e2-p2", 2, 90),
                floor("e2-p3", 3, 110),
            ],
        },
        Building {
            id: BuildingId::new("edificio-3"),
            name: "Edificio C".into(),
            floors: vec![
                floor("e3-p1", 1, 150),
                floor("e3-p2", 2, 150),
                floor("e3-p3", 3, 130),
                floor("e3-p4", 4, 130),
                floor("e3-p5", 5, 100),
            ],
        },
    ];

    let unassigned = vec![
        team("equipo-1", "Marketing", 25, "#FF6B6B"),
        team("equipo-2", "Desarrollo", 45, "#4ECDC4"),
        team("equipo-3", "Diseño", 15, "#FFE66D"),
        team("equipo-4", "Recursos Humanos", 20, "#95E1D3"),
        team("equipo-5", "Finanzas", 30, "#F38181"),
        team("equipo-6", "Ventas", 35, "#AA96DA"),
        team("equipo-7", "IT Support", 18, "#FCBAD3"),
        team("equipo-8", "Legal", 12, "#A8D8EA"),
    ];

    Campus::new(buildings, unassigned)
}
