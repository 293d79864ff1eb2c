//! Wire types exchanged with the command bridge
//!
//! The bridge fronts a hosted language model configured with the six
//! campus operations as callable functions. Field names are camelCase on
//! the wire to match the bridge's JSON contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One turn of prior conversation forwarded for disambiguation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// Free-text request to the bridge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    pub message: String,
    pub history: Vec<ChatTurn>,
    pub system_context: String,
}

/// Audio request to the bridge: an opaque recording plus its encoding
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioBridgeRequest {
    /// Base64-encoded audio bytes
    pub audio_data: String,
    /// Declared encoding, e.g. "audio/webm;codecs=opus"
    pub mime_type: String,
    pub history: Vec<ChatTurn>,
    pub system_context: String,
}

/// A single operation invocation returned by the bridge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Flat argument object matching the operation's declared inputs
    #[serde(default)]
    pub args: Value,
}

/// Bridge reply: advisory text plus zero or more operation invocations,
/// to be executed in the order received
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeReply {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub function_calls: Vec<FunctionCall>,
}
