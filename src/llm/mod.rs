//! Command bridge integration: wire protocol, HTTP client, and prompt
//! context

pub mod client;
pub mod context;
pub mod protocol;

pub use client::BridgeClient;
pub use protocol::{BridgeReply, ChatTurn, FunctionCall};
