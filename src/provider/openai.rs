use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::CompletionError;
use crate::wire::{ChatRequest, ChatResponse};

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completions adapter. Sends the request body as-is and returns the
/// first choice's message text.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    timeout_secs: u64,
}

impl OpenAIProvider {
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            api_key,
            timeout_secs,
        }
    }
}

#[async_trait]
impl super::Provider for OpenAIProvider {
    async fn complete(&self, req: &ChatRequest, debug: bool) -> Result<String, CompletionError> {
        if debug {
            if let Ok(body) = serde_json::to_string_pretty(req) {
                eprintln!("debug[openai]: HTTP POST /v1/chat/completions body:\n{body}");
            }
        }

        let resp = self
            .client
            .post(ENDPOINT)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(req)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if debug {
            eprintln!("debug[openai]: raw status: {status}");
            eprintln!("debug[openai]: raw response:\n{text}");
        }

        if !status.is_success() {
            return Err(CompletionError::BadStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        match parsed.first_content() {
            Some(content) => Ok(content.to_string()),
            None => Err(CompletionError::MalformedResponse(
                "response carried no choices".into(),
            )),
        }
    }
}
