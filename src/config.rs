use crate::error::{ResumeAssistError, Result};
use resume_assist_common::{Action, Endpoints, PathOverrides, Tone};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BASE_URL_ENV: &str = "RESUME_ASSIST_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// アクションごとのパス上書き（例: `{"list-templates": "/v2/templates"}`）
    pub paths: PathOverrides,
    pub timeout_seconds: u64,
    pub default_role: String,
    pub default_tone: Tone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            paths: PathOverrides::new(),
            timeout_seconds: 120,
            default_role: resume_assist_common::settings::DEFAULT_ROLE.into(),
            default_tone: Tone::default(),
        }
    }
}

impl Config {
    /// 既定パスから読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        Ok(config)
    }

    /// ファイルがなければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ResumeAssistError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("resume-assist").join("config.json"))
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ResumeAssistError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.base_url = url.to_string();
        Ok(())
    }

    /// `action=/path` 形式。パスが空なら上書きを解除
    pub fn set_path(&mut self, spec: &str) -> Result<()> {
        let (key, path) = spec.split_once('=').ok_or_else(|| {
            ResumeAssistError::Config(format!("action=/path の形式で指定してください: {}", spec))
        })?;
        let action: Action = key.parse().map_err(ResumeAssistError::Config)?;
        let path = path.trim();
        if path.is_empty() {
            self.paths.remove(&action);
        } else {
            self.paths.insert(action, path.to_string());
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url).with_overrides(&self.paths)
    }
}
