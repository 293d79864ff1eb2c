//! Command resolution pipeline
//!
//! Bridge function calls become typed operations, operations become
//! placement-engine calls:
//! FunctionCall -> CampusOp -> CommandResolver -> CommandOutcome

pub mod ops;
pub mod resolver;

pub use ops::{CampusOp, DistributeCriterion};
pub use resolver::{summarize, CampusSnapshot, CommandOutcome, CommandResolver};
