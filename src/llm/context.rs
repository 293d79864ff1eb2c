//! Campus state rendering for bridge prompts
//!
//! The bridge receives a textual snapshot of the campus with every
//! request so the model can resolve names and infer missing details.
//! The snapshot is regenerated before each call; it is never cached
//! across mutations.

use crate::campus::model::Campus;

/// Render the per-building/per-floor occupancy listing
pub fn campus_summary(campus: &Campus) -> String {
    let mut s = String::new();

    s.push_str("Buildings:\n");
    for building in &campus.buildings {
        s.push_str(&format!("- {}:\n", building.name));
        for floor in &building.floors {
            s.push_str(&format!(
                "  * Floor {}: capacity {} seats, occupied {} seats\n",
                floor.number,
                floor.capacity,
                floor.occupancy()
            ));
            if floor.teams.is_empty() {
                s.push_str("    Teams: none\n");
            } else {
                let teams: Vec<String> = floor
                    .teams
                    .iter()
                    .map(|p| format!("{} ({} seats)", p.team.name, p.team.occupancy))
                    .collect();
                s.push_str(&format!("    Teams: {}\n", teams.join(", ")));
            }
        }
    }

    s.push_str("\nUnassigned teams:\n");
    if campus.unassigned.is_empty() {
        s.push_str("none\n");
    } else {
        for team in &campus.unassigned {
            s.push_str(&format!("- {}: {} seats\n", team.name, team.occupancy));
        }
    }

    s
}

/// Build the full system-context block sent with every bridge request
pub fn system_context(campus: &Campus) -> String {
    format!(
        "You are an assistant managing the placement of work teams across a campus of buildings.\n\
         \n\
         IMPORTANT: When the user gives a clear instruction, call the matching function IMMEDIATELY \
         without asking follow-up questions. Only ask when essential information is missing.\n\
         \n\
         CURRENT CAMPUS STATE:\n\
         \n\
         {}\n\
         ACTION INSTRUCTIONS:\n\
         - \"Put [team] in [building] floor [number]\" -> call moveTeamToFloor immediately\n\
         - \"Empty floor [number] of building [name]\" -> call emptyFloor immediately\n\
         - \"Empty building [name]\" -> call emptyBuilding immediately\n\
         - \"Distribute the teams\" -> call autoDistribute immediately\n\
         \n\
         Do not ask questions when the information is complete. Act directly.\n\
         Reply in a friendly tone and confirm the actions performed.",
        campus_summary(campus)
    )
}
