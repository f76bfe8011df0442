use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(ValueEnum, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "open-ai", alias = "openai")]
    OpenAI,
    /// Skip the network entirely; every stage uses rule-based fallbacks.
    #[value(alias = "offline")]
    Offline,
}

#[derive(Parser, Debug)]
#[command(name = "founderai", version, about = "Startup wizard: from problem statement to action plan")]
pub struct Args {
    /// Directory that receives .founderai/ session artifacts (default ".", or the config file's value)
    #[arg(long)]
    pub root: Option<String>,

    #[arg(long, value_enum, default_value_t = ProviderKind::OpenAI)]
    pub provider: ProviderKind,

    /// Completion model (default gpt-4o-mini, or the config file's value)
    #[arg(long)]
    pub model: Option<String>,

    /// Extra context woven into the action-steps prompt
    #[arg(long)]
    pub context: Option<String>,

    /// Request timeout (default 60, or the config file's value)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Save stage prompts under the session directory (default on)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub save_request: Option<bool>,

    /// Save stage responses under the session directory (default on)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub save_response: Option<bool>,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Optional TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<String>,
}

impl Args {
    /// Overlays explicitly passed flags onto the loaded config; values left
    /// unset keep whatever the config file (or `Default`) provided.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(v) = &self.root {
            cfg.root = v.clone();
        }
        if let Some(v) = &self.model {
            cfg.model = v.clone();
        }
        if let Some(v) = self.timeout_secs {
            cfg.timeout_secs = v;
        }
        if let Some(v) = self.save_request {
            cfg.save_request = v;
        }
        if let Some(v) = self.save_response {
            cfg.save_response = v;
        }
        if matches!(self.provider, ProviderKind::Offline) {
            cfg.api_key = None;
        }
    }
}
