use thiserror::Error;

use crate::core::types::{FloorId, TeamId};

#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Floor not found: {0}")]
    FloorNotFound(FloorId),

    #[error("Not enough capacity on the floor. Capacity: {capacity}, occupied: {occupied}, required: {required}")]
    CapacityExceeded {
        capacity: u32,
        occupied: u32,
        required: u32,
    },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments for {op}: {message}")]
    InvalidArguments { op: String, message: String },

    #[error("Bridge error: {0}")]
    BridgeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CampusError>;
