use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::Config;

/// Per-session artifact directory under `<root>/.founderai/sessions/<uuid>/`.
/// Each stage leaves its prompt and response as plain text for inspection.
pub struct SessionLog {
    dir: PathBuf,
    save_request: bool,
    save_response: bool,
}

#[derive(Serialize)]
struct SessionMeta {
    id: Uuid,
    started_at: DateTime<Utc>,
    model: String,
}

impl SessionLog {
    pub fn create(root: &Path, id: Uuid, cfg: &Config) -> anyhow::Result<Self> {
        let dir = root.join(".founderai").join("sessions").join(id.to_string());
        fs::create_dir_all(&dir)?;

        let meta = SessionMeta {
            id,
            started_at: Utc::now(),
            model: cfg.model.clone(),
        };
        fs::write(dir.join("session.json"), serde_json::to_string_pretty(&meta)?)?;

        Ok(Self {
            dir,
            save_request: cfg.save_request,
            save_response: cfg.save_response,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_stage(
        &self,
        stage: &str,
        prompt: &str,
        response: &str,
        source_tag: &str,
    ) -> anyhow::Result<()> {
        if self.save_request {
            fs::write(self.dir.join(format!("{stage}.prompt.txt")), prompt)?;
        }
        if self.save_response {
            let body = format!("source: {source_tag}\n\n{response}");
            fs::write(self.dir.join(format!("{stage}.response.txt")), body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_session_dir_with_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();
        let log = SessionLog::create(tmp.path(), id, &Config::default()).unwrap();
        assert!(log.dir().join("session.json").exists());
        assert!(log.dir().ends_with(id.to_string()));
    }

    #[test]
    fn save_stage_honors_flags() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config {
            save_request: false,
            save_response: true,
            ..Config::default()
        };
        let log = SessionLog::create(tmp.path(), Uuid::new_v4(), &cfg).unwrap();
        log.save_stage("question", "the prompt", "the reply", "model").unwrap();
        assert!(!log.dir().join("question.prompt.txt").exists());
        let saved = std::fs::read_to_string(log.dir().join("question.response.txt")).unwrap();
        assert!(saved.starts_with("source: model\n"));
        assert!(saved.ends_with("the reply"));
    }
}
