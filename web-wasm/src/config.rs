//! 起動時設定
//!
//! index.html の meta タグからAPIのベースURLとパス上書きを読む:
//! `<meta name="resume-assist-api" content="https://api.example.com">`
//! `<meta name="resume-assist-path-list-templates" content="/v2/templates">`

use resume_assist_common::{Action, Endpoints, PathOverrides};

const API_META_NAME: &str = "resume-assist-api";
const PATH_META_PREFIX: &str = "resume-assist-path-";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// 空文字なら同一オリジン
    pub base_url: String,
    pub paths: PathOverrides,
}

impl AppConfig {
    pub fn from_document() -> Self {
        Self::from_values(meta_content(API_META_NAME), |action| {
            meta_content(&format!("{}{}", PATH_META_PREFIX, action.key()))
        })
    }

    /// `path_for` はアクションごとの上書きパス（なければ None）
    pub fn from_values(
        base_url: Option<String>,
        path_for: impl Fn(Action) -> Option<String>,
    ) -> Self {
        let paths = Action::ALL
            .into_iter()
            .filter_map(|action| {
                path_for(action)
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .map(|p| (action, p))
            })
            .collect();

        Self {
            base_url: base_url.map(|u| u.trim().to_string()).unwrap_or_default(),
            paths,
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url).with_overrides(&self.paths)
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}
