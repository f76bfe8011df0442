//! Never-fails boundary around the completion endpoint. Every request resolves
//! to usable text: model output when the call works, a rule-based substitute
//! for every failure class. Callers never see an error.

use crate::config::Config;
use crate::errors::CompletionError;
use crate::fallback;
use crate::prompt;
use crate::provider::DynProvider;
use crate::wire::{ChatMessage, ChatRequest};

#[derive(Debug)]
pub enum Completion {
    Model(String),
    Fallback { reason: CompletionError, text: String },
}

impl Completion {
    pub fn text(&self) -> &str {
        match self {
            Completion::Model(t) => t,
            Completion::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Completion::Model(t) => t,
            Completion::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Completion::Fallback { .. })
    }

    /// Source tag recorded in session artifacts.
    pub fn tag(&self) -> &'static str {
        match self {
            Completion::Model(_) => "model",
            Completion::Fallback { reason, .. } => reason.tag(),
        }
    }
}

pub struct CompletionClient {
    provider: DynProvider,
    model: String,
    max_tokens: u32,
    temperature: f32,
    has_credential: bool,
    debug: bool,
}

impl CompletionClient {
    pub fn new(provider: DynProvider, cfg: &Config, debug: bool) -> Self {
        Self {
            provider,
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            has_credential: cfg.has_credential(),
            debug,
        }
    }

    /// One attempt, no retry. Without a credential the network is never
    /// touched; any provider error is logged and replaced by a fallback.
    pub async fn request(&self, user_prompt: &str) -> Completion {
        if !self.has_credential {
            if self.debug {
                eprintln!("debug[client]: no credential, skipping network call");
            }
            return Completion::Fallback {
                reason: CompletionError::MissingCredential,
                text: fallback::for_prompt(user_prompt),
            };
        }

        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::system_persona()),
                ChatMessage::user(user_prompt),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        match self.provider.complete(&req, self.debug).await {
            Ok(text) => Completion::Model(text.trim().to_string()),
            Err(err) => {
                eprintln!("warn[client]: {err}; substituting fallback");
                Completion::Fallback {
                    reason: err,
                    text: fallback::for_prompt(user_prompt),
                }
            }
        }
    }
}
