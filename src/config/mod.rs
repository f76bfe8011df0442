use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const API_KEY_PLACEHOLDER: &str = "your-api-key-here";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub save_request: bool,
    pub save_response: bool,
    /// Resolved once at startup; `None` keeps the wizard fully offline.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 800,
            temperature: 0.3,
            timeout_secs: 60,
            save_request: true,
            save_response: true,
            api_key: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with an optional TOML file, then the environment key.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                let raw = fs_err::read_to_string(p)
                    .with_context(|| format!("reading config file {p}"))?;
                toml::from_str(&raw).with_context(|| format!("parsing config file {p}"))?
            }
            None => Self::default(),
        };
        cfg.api_key = resolve_api_key();
        Ok(cfg)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Absent, empty, or the well-known placeholder all count as "not configured".
fn resolve_api_key() -> Option<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(v) if !v.trim().is_empty() && v != API_KEY_PLACEHOLDER => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.max_tokens, 800);
        assert!((cfg.temperature - 0.3).abs() < f32::EPSILON);
        assert!(!cfg.has_credential());
    }

    #[test]
    fn toml_overlay_keeps_unset_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = \"gpt-4.1-mini\"\ntimeout_secs = 10").unwrap();
        let cfg = Config::load(Some(f.path().to_str().unwrap())).unwrap();
        assert_eq!(cfg.model, "gpt-4.1-mini");
        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.max_tokens, 800);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(Config::load(Some("/nonexistent/founderai.toml")).is_err());
    }
}
