//! Campus Planner - Entry Point
//!
//! Seeds (or loads) a campus and runs an interactive loop: structured
//! placement commands are executed directly, anything else is forwarded
//! to the command bridge and the returned function calls are executed in
//! order.

use campus_planner::campus::loader;
use campus_planner::campus::seed::seed_campus;
use campus_planner::command::{summarize, CampusOp, CommandResolver, DistributeCriterion};
use campus_planner::core::config::PlannerConfig;
use campus_planner::core::error::Result;
use campus_planner::llm::client::BridgeClient;
use campus_planner::llm::context::{campus_summary, system_context};
use campus_planner::llm::protocol::ChatTurn;
use campus_planner::placement::PlacementEngine;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

/// Arrange teams onto campus floors, by hand or by natural language
#[derive(Parser, Debug)]
#[command(name = "campus-planner")]
#[command(about = "Arrange teams onto campus floors, by hand or by natural language")]
struct Args {
    /// Load the campus from a JSON definition instead of the built-in seed
    #[arg(long)]
    campus: Option<PathBuf>,

    /// Command bridge base URL (defaults to BRIDGE_URL or the local bridge)
    #[arg(long)]
    bridge_url: Option<String>,

    /// Run without the command bridge (structured commands only)
    #[arg(long)]
    no_bridge: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("campus_planner=debug")
        .init();

    let args = Args::parse();
    tracing::info!("Campus Planner starting...");

    let mut campus = match &args.campus {
        Some(path) => match loader::load_from_file(path) {
            Ok(campus) => campus,
            Err(e) => {
                eprintln!("Failed to load campus from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => seed_campus(),
    };

    let rt = Runtime::new()?;
    let resolver = CommandResolver::new(PlacementEngine::new(PlannerConfig::default()));

    let bridge = if args.no_bridge {
        None
    } else {
        Some(match args.bridge_url {
            Some(url) => BridgeClient::new(url),
            None => BridgeClient::from_env(),
        })
    };
    if bridge.is_none() {
        tracing::warn!("bridge disabled - structured commands only");
    }

    let mut history: Vec<ChatTurn> = Vec::new();

    println!("\n=== CAMPUS PLANNER ===");
    println!("Teams: {} | Buildings: {}", campus.team_count(), campus.buildings.len());
    println!();
    println!("Commands:");
    println!("  state / s                    - Show the campus state");
    println!("  move <team>, <building>, <n> - Move a team to a floor");
    println!("  pool <team>                  - Return a team to the pool");
    println!("  distribute [criterion]       - Auto-distribute unassigned teams");
    println!("  empty <building> [floor n]   - Empty a building or one floor");
    println!("  quit / q                     - Exit");
    if bridge.is_some() {
        println!("  <any text>                   - Natural language command (via bridge)");
    }
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "state" || input == "s" {
            println!("\n{}", campus_summary(&campus));
            continue;
        }

        if let Some(op) = parse_direct(input) {
            let outcome = resolver.execute(&mut campus, &op);
            println!("{}", outcome.message);
            continue;
        }

        let Some(ref client) = bridge else {
            println!("Unknown command. Available: state, move, pool, distribute, empty, quit");
            continue;
        };

        let context = system_context(&campus);
        match rt.block_on(client.send_text(input, &history_window(&history), &context)) {
            Ok(reply) => {
                if !reply.text.is_empty() {
                    println!("{}", reply.text);
                }
                let outcomes = resolver.execute_batch(&mut campus, &reply.function_calls);
                for outcome in &outcomes {
                    if let Some(snapshot) = &outcome.data {
                        match serde_json::to_string_pretty(snapshot) {
                            Ok(json) => println!("{}", json),
                            Err(e) => println!("Could not render snapshot: {}", e),
                        }
                    }
                }
                let summary = summarize(&outcomes);
                if !summary.is_empty() {
                    println!("{}", summary);
                }
                history.push(ChatTurn::user(input));
                history.push(ChatTurn::assistant(reply.text));
            }
            Err(e) => println!("Bridge error: {}", e),
        }
    }

    println!("\nGoodbye! {} team(s) across {} building(s).", campus.team_count(), campus.buildings.len());
    Ok(())
}

/// Keep only the most recent turns to bound prompt size
fn history_window(history: &[ChatTurn]) -> Vec<ChatTurn> {
    const WINDOW: usize = 10;
    history.iter().rev().take(WINDOW).rev().cloned().collect()
}

/// Parse structured REPL commands; names may contain spaces, so
/// multi-argument commands are comma-separated
fn parse_direct(input: &str) -> Option<CampusOp> {
    if let Some(rest) = input.strip_prefix("move ") {
        let parts: Vec<&str> = rest.split(',').map(str::trim).collect();
        if let [team, building, floor] = parts[..] {
            if let Ok(floor_number) = floor.parse::<u32>() {
                return Some(CampusOp::MoveTeamToFloor {
                    team_name: team.into(),
                    building_name: building.into(),
                    floor_number,
                });
            }
        }
        return None;
    }

    if let Some(team) = input.strip_prefix("pool ") {
        return Some(CampusOp::MoveTeamToPool {
            team_name: team.trim().into(),
        });
    }

    if input == "distribute" {
        return Some(CampusOp::AutoDistribute {
            criterion: DistributeCriterion::Balanced,
        });
    }
    if let Some(criterion) = input.strip_prefix("distribute ") {
        let criterion = match criterion.trim() {
            "balanced" => DistributeCriterion::Balanced,
            "fill_first" | "fill-first" => DistributeCriterion::FillFirst,
            "by_building" | "by-building" => DistributeCriterion::ByBuilding,
            _ => return None,
        };
        return Some(CampusOp::AutoDistribute { criterion });
    }

    if let Some(rest) = input.strip_prefix("empty ") {
        let rest = rest.trim();
        // Trailing number selects a single floor
        if let Some((building, floor)) = rest.rsplit_once(' ') {
            if let Ok(floor_number) = floor.parse::<u32>() {
                return Some(CampusOp::EmptyFloor {
                    building_name: building.trim().into(),
                    floor_number,
                });
            }
        }
        return Some(CampusOp::EmptyBuilding {
            building_name: rest.into(),
        });
    }

    None
}
