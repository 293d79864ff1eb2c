//! Async HTTP client for the command bridge
//!
//! The bridge is an out-of-process proxy that forwards text or audio to
//! a hosted language model configured with the six campus operations as
//! callable functions, and returns advisory text plus an ordered list of
//! function calls. While a call is outstanding the engine is idle, so
//! the core never sees concurrent mutation.

use crate::core::error::{CampusError, Result};
use crate::llm::protocol::{AudioBridgeRequest, BridgeReply, BridgeRequest, ChatTurn};
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::Serialize;

const DEFAULT_BRIDGE_URL: &str = "http://localhost:3001";

/// Async client for the command bridge
pub struct BridgeClient {
    client: Client,
    base_url: String,
}

impl BridgeClient {
    /// Create a client against an explicit bridge base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from the environment
    ///
    /// Optional: BRIDGE_URL (defaults to the local development bridge)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BRIDGE_URL").unwrap_or_else(|_| DEFAULT_BRIDGE_URL.into());
        Self::new(base_url)
    }

    /// Send a free-text instruction to the bridge
    pub async fn send_text(
        &self,
        message: &str,
        history: &[ChatTurn],
        system_context: &str,
    ) -> Result<BridgeReply> {
        let request = BridgeRequest {
            message: message.into(),
            history: history.to_vec(),
            system_context: system_context.into(),
        };
        self.post("/api/chat", &request).await
    }

    /// Send a recorded instruction to the bridge
    ///
    /// The audio is base64-encoded with its declared mime type; the
    /// bridge transcribes and interprets it in one round trip.
    pub async fn send_audio(
        &self,
        audio: &[u8],
        mime_type: &str,
        history: &[ChatTurn],
        system_context: &str,
    ) -> Result<BridgeReply> {
        let request = AudioBridgeRequest {
            audio_data: general_purpose::STANDARD.encode(audio),
            mime_type: mime_type.into(),
            history: history.to_vec(),
            system_context: system_context.into(),
        };
        self.post("/api/chat-audio", &request).await
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<BridgeReply> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| CampusError::BridgeError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CampusError::BridgeError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<BridgeReply>()
            .await
            .map_err(|e| CampusError::BridgeError(e.to_string()))
    }
}
