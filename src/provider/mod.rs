use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::errors::CompletionError;
use crate::wire::ChatRequest;

pub mod openai;

#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, req: &ChatRequest, debug: bool) -> Result<String, CompletionError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(kind: ProviderKind, timeout_secs: u64, api_key: Option<String>) -> DynProvider {
    match kind {
        ProviderKind::OpenAI => Box::new(openai::OpenAIProvider::new(
            api_key.unwrap_or_default(),
            timeout_secs,
        )),
        ProviderKind::Offline => Box::new(OfflineProvider),
    }
}

/// Stand-in used with `--provider offline`. The client skips the network when
/// no credential is resolved, so this only answers if something calls it anyway.
pub struct OfflineProvider;

#[async_trait]
impl Provider for OfflineProvider {
    async fn complete(&self, _req: &ChatRequest, _debug: bool) -> Result<String, CompletionError> {
        Err(CompletionError::MissingCredential)
    }
}
