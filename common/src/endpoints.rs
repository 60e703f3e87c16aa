//! エンドポイント定義
//!
//! アクションごとのパス・メソッド・ペイロードフィールド名をまとめたマップ。
//! 契約は1つだけ。バックエンドの配置に合わせてパスだけ個別に上書きできる。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// アクションごとのパス上書き（キーは `analyze`, `cover-letter` など）
pub type PathOverrides = BTreeMap<Action, String>;

/// ユーザー操作1回につき1リクエストを送るアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Analyze,
    Rewrite,
    CoverLetter,
    ParseJobDescription,
    ListTemplates,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Analyze,
        Action::Rewrite,
        Action::CoverLetter,
        Action::ParseJobDescription,
        Action::ListTemplates,
    ];

    /// 設定キー
    pub fn key(&self) -> &'static str {
        match self {
            Action::Analyze => "analyze",
            Action::Rewrite => "rewrite",
            Action::CoverLetter => "cover-letter",
            Action::ParseJobDescription => "parse-job-description",
            Action::ListTemplates => "list-templates",
        }
    }

    /// 失敗時にユーザーへ表示するメッセージ
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Analyze => "Failed to analyze resume. Please try again.",
            Action::Rewrite => "Failed to rewrite resume. Please try again.",
            Action::CoverLetter => "Failed to generate cover letter. Please try again.",
            Action::ParseJobDescription => "Failed to parse job description. Please try again.",
            Action::ListTemplates => "Failed to load templates.",
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Action::ALL
            .into_iter()
            .find(|action| action.key() == key)
            .ok_or_else(|| {
                let keys: Vec<&str> = Action::ALL.iter().map(|a| a.key()).collect();
                format!("Unknown action: {}. Use one of {}", s, keys.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// リクエストボディの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    None,
    Json,
    Multipart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub path: String,
    pub method: Method,
    pub body: BodyKind,
    /// レスポンスJSONでペイロードが入るフィールド名
    pub payload_field: String,
}

impl Endpoint {
    fn new(path: &str, method: Method, body: BodyKind, payload_field: &str) -> Self {
        Self {
            path: path.to_string(),
            method,
            body,
            payload_field: payload_field.to_string(),
        }
    }
}

/// アクション → エンドポイントのマップ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    /// 空文字なら同一オリジン
    pub base_url: String,
    pub analyze: Endpoint,
    pub rewrite: Endpoint,
    pub cover_letter: Endpoint,
    pub parse_job_description: Endpoint,
    pub list_templates: Endpoint,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new("")
    }
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            analyze: Endpoint::new("/api/analyze-resume", Method::Post, BodyKind::Multipart, "analysis"),
            rewrite: Endpoint::new("/api/rewrite-resume", Method::Post, BodyKind::Json, "rewrittenResume"),
            cover_letter: Endpoint::new("/api/generate-cover-letter", Method::Post, BodyKind::Json, "coverLetter"),
            parse_job_description: Endpoint::new("/api/parse-job-description", Method::Post, BodyKind::Json, "analysis"),
            list_templates: Endpoint::new("/api/get-templates", Method::Get, BodyKind::None, "templates"),
        }
    }

    pub fn endpoint(&self, action: Action) -> &Endpoint {
        match action {
            Action::Analyze => &self.analyze,
            Action::Rewrite => &self.rewrite,
            Action::CoverLetter => &self.cover_letter,
            Action::ParseJobDescription => &self.parse_job_description,
            Action::ListTemplates => &self.list_templates,
        }
    }

    fn endpoint_mut(&mut self, action: Action) -> &mut Endpoint {
        match action {
            Action::Analyze => &mut self.analyze,
            Action::Rewrite => &mut self.rewrite,
            Action::CoverLetter => &mut self.cover_letter,
            Action::ParseJobDescription => &mut self.parse_job_description,
            Action::ListTemplates => &mut self.list_templates,
        }
    }

    /// 完全なURL（base_url + path）
    pub fn url(&self, action: Action) -> String {
        format!("{}{}", self.base_url, self.endpoint(action).path)
    }

    /// パスだけ差し替える。先頭の `/` は補う
    pub fn with_path(mut self, action: Action, path: &str) -> Self {
        let path = path.trim();
        self.endpoint_mut(action).path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        self
    }

    /// 設定ファイル・metaタグのパス上書きをまとめて適用
    pub fn with_overrides(self, overrides: &PathOverrides) -> Self {
        overrides
            .iter()
            .filter(|(_, path)| !path.trim().is_empty())
            .fold(self, |endpoints, (action, path)| endpoints.with_path(*action, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.url(Action::Analyze), "/api/analyze-resume");
        assert_eq!(endpoints.url(Action::Rewrite), "/api/rewrite-resume");
        assert_eq!(endpoints.endpoint(Action::Rewrite).payload_field, "rewrittenResume");
        assert_eq!(endpoints.endpoint(Action::CoverLetter).payload_field, "coverLetter");
        assert_eq!(endpoints.endpoint(Action::ListTemplates).method, Method::Get);
        assert_eq!(endpoints.endpoint(Action::Analyze).body, BodyKind::Multipart);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let endpoints = Endpoints::new("http://localhost:3000/");
        assert_eq!(
            endpoints.url(Action::ParseJobDescription),
            "http://localhost:3000/api/parse-job-description"
        );
    }

    #[test]
    fn test_with_path_override() {
        let endpoints = Endpoints::default().with_path(Action::ListTemplates, "v2/templates");
        assert_eq!(endpoints.url(Action::ListTemplates), "/v2/templates");
        assert_eq!(endpoints.url(Action::Analyze), "/api/analyze-resume");
    }

    #[test]
    fn test_overrides_keep_payload_fields() {
        let mut overrides = PathOverrides::new();
        overrides.insert(Action::Rewrite, "/api/rewrite".to_string());
        overrides.insert(Action::CoverLetter, "  ".to_string());

        let endpoints = Endpoints::new("https://api.example.com").with_overrides(&overrides);
        assert_eq!(endpoints.url(Action::Rewrite), "https://api.example.com/api/rewrite");
        assert_eq!(endpoints.endpoint(Action::Rewrite).payload_field, "rewrittenResume");
        // 空のパスは無視
        assert_eq!(endpoints.url(Action::CoverLetter), "https://api.example.com/api/generate-cover-letter");
    }

    #[test]
    fn test_action_keys() {
        for action in Action::ALL {
            assert_eq!(action.key().parse::<Action>(), Ok(action));
        }
        assert_eq!("parse_job_description".parse::<Action>(), Ok(Action::ParseJobDescription));
        assert!("review".parse::<Action>().is_err());
    }

    #[test]
    fn test_overrides_json_keys() {
        let overrides: PathOverrides =
            serde_json::from_str(r#"{"cover-letter": "/v2/cover", "list-templates": "/v2/templates"}"#)
                .expect("デシリアライズ失敗");
        assert_eq!(overrides.get(&Action::CoverLetter).map(String::as_str), Some("/v2/cover"));
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn test_every_action_has_failure_message() {
        for action in Action::ALL {
            assert!(!action.failure_message().is_empty());
        }
    }
}
