//! The closed set of campus operations and their wire decoding
//!
//! The six operation names and their argument shapes are the wire
//! contract with the command bridge; they must not drift. Dispatch is a
//! total match over this enum, never a string-keyed lookup.

use crate::core::error::{CampusError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Distribution criterion accepted by `autoDistribute`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributeCriterion {
    Balanced,
    #[serde(alias = "fill-first")]
    FillFirst,
    #[serde(alias = "by-building")]
    ByBuilding,
}

impl Default for DistributeCriterion {
    fn default() -> Self {
        Self::Balanced
    }
}

impl std::fmt::Display for DistributeCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Balanced => "balanced",
            Self::FillFirst => "fill_first",
            Self::ByBuilding => "by_building",
        };
        write!(f, "{}", s)
    }
}

/// A campus operation, resolved from a bridge function call or built
/// directly by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum CampusOp {
    /// Move a team (wherever it currently is) onto a numbered floor
    MoveTeamToFloor {
        team_name: String,
        building_name: String,
        floor_number: u32,
    },
    /// Return a placed team to the unassigned pool
    MoveTeamToPool { team_name: String },
    /// Snapshot of every building, floor, and the pool
    GetCampusState,
    /// Place every unassigned team using the given criterion
    AutoDistribute { criterion: DistributeCriterion },
    /// Move every team on one floor to the pool
    EmptyFloor {
        building_name: String,
        floor_number: u32,
    },
    /// Move every team in a building to the pool
    EmptyBuilding { building_name: String },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveTeamToFloorArgs {
    team_name: String,
    building_name: String,
    floor_number: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveTeamToPoolArgs {
    team_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutoDistributeArgs {
    #[serde(default)]
    criterion: Option<DistributeCriterion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmptyFloorArgs {
    building_name: String,
    floor_number: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmptyBuildingArgs {
    building_name: String,
}

fn parse_args<T: DeserializeOwned>(op: &str, args: &Value) -> Result<T> {
    // Bridges may omit args entirely for no-argument calls
    let value = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args.clone()
    };
    serde_json::from_value(value).map_err(|e| CampusError::InvalidArguments {
        op: op.into(),
        message: e.to_string(),
    })
}

impl CampusOp {
    /// Decode a bridge function call into an operation
    ///
    /// A name outside the six declared operations is an unknown-operation
    /// error; nothing is executed for it.
    pub fn from_call(name: &str, args: &Value) -> Result<Self> {
        match name {
            "moveTeamToFloor" => {
                let a: MoveTeamToFloorArgs = parse_args(name, args)?;
                Ok(Self::MoveTeamToFloor {
                    team_name: a.team_name,
                    building_name: a.building_name,
                    floor_number: a.floor_number,
                })
            }
            "moveTeamToPool" => {
                let a: MoveTeamToPoolArgs = parse_args(name, args)?;
                Ok(Self::MoveTeamToPool {
                    team_name: a.team_name,
                })
            }
            "getCampusState" => Ok(Self::GetCampusState),
            "autoDistribute" => {
                let a: AutoDistributeArgs = parse_args(name, args)?;
                Ok(Self::AutoDistribute {
                    criterion: a.criterion.unwrap_or_default(),
                })
            }
            "emptyFloor" => {
                let a: EmptyFloorArgs = parse_args(name, args)?;
                Ok(Self::EmptyFloor {
                    building_name: a.building_name,
                    floor_number: a.floor_number,
                })
            }
            "emptyBuilding" => {
                let a: EmptyBuildingArgs = parse_args(name, args)?;
                Ok(Self::EmptyBuilding {
                    building_name: a.building_name,
                })
            }
            other => Err(CampusError::UnknownOperation(other.to_string())),
        }
    }

    /// The operation's name on the bridge wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::MoveTeamToFloor { .. } => "moveTeamToFloor",
            Self::MoveTeamToPool { .. } => "moveTeamToPool",
            Self::GetCampusState => "getCampusState",
            Self::AutoDistribute { .. } => "autoDistribute",
            Self::EmptyFloor { .. } => "emptyFloor",
            Self::EmptyBuilding { .. } => "emptyBuilding",
        }
    }
}
