//! fetch API によるバックエンド呼び出し
//!
//! 1アクション = 1リクエスト。タイムアウト・リトライは行わない。
//! レスポンスの検証は全て `resume_assist_common::response` に委譲する。

use resume_assist_common::request::{RESUME_FIELD, TARGET_ROLE_FIELD};
use resume_assist_common::response::http_error;
use resume_assist_common::{
    parse_analysis, parse_extracted_text, parse_job_description, parse_templates, parse_text,
    Action, BodyKind, CoverLetterRequest, Endpoints, Error, JobDescriptionAnalysis,
    JobDescriptionRequest, Result, ResumeAnalysis, ResumeTemplate, RewriteRequest,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// JS側のエラーをネットワークエラーに変換
fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    /// リクエスト送信（共通処理）。成功時はレスポンス本文を返す
    async fn send(&self, action: Action, body: Option<JsValue>) -> Result<String> {
        let endpoint = self.endpoints.endpoint(action);
        let url = self.endpoints.url(action);

        let opts = RequestInit::new();
        opts.set_method(endpoint.method.as_str());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(body);
        }

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        // multipart はブラウザが boundary 付きで設定する
        if endpoint.body == BodyKind::Json {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| Error::Network("window unavailable".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            return Err(http_error(resp.status(), &text));
        }
        Ok(text)
    }

    fn json_body<T: Serialize>(value: &T) -> Result<JsValue> {
        Ok(JsValue::from_str(&serde_json::to_string(value)?))
    }

    fn resume_form(file: &File, role: Option<&str>) -> Result<JsValue> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())
            .map_err(js_error)?;
        if let Some(role) = role {
            form.append_with_str(TARGET_ROLE_FIELD, role).map_err(js_error)?;
        }
        Ok(form.into())
    }

    /// 履歴書ファイルを解析
    pub async fn analyze(&self, file: &File, role: &str) -> Result<ResumeAnalysis> {
        let body = Self::resume_form(file, Some(role))?;
        let text = self.send(Action::Analyze, Some(body)).await?;
        parse_analysis(&text, &self.endpoints.analyze.payload_field)
    }

    /// リライト用にファイルを再送してテキストを抽出
    pub async fn extract_text(&self, file: &File) -> Result<Option<String>> {
        let body = Self::resume_form(file, None)?;
        let text = self.send(Action::Analyze, Some(body)).await?;
        parse_extracted_text(&text)
    }

    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<String> {
        let text = self
            .send(Action::Rewrite, Some(Self::json_body(request)?))
            .await?;
        parse_text(&text, &self.endpoints.rewrite.payload_field)
    }

    pub async fn cover_letter(&self, request: &CoverLetterRequest) -> Result<String> {
        let text = self
            .send(Action::CoverLetter, Some(Self::json_body(request)?))
            .await?;
        parse_text(&text, &self.endpoints.cover_letter.payload_field)
    }

    pub async fn parse_job_description(
        &self,
        request: &JobDescriptionRequest,
    ) -> Result<JobDescriptionAnalysis> {
        let text = self
            .send(Action::ParseJobDescription, Some(Self::json_body(request)?))
            .await?;
        parse_job_description(&text, &self.endpoints.parse_job_description.payload_field)
    }

    pub async fn list_templates(&self) -> Result<Vec<ResumeTemplate>> {
        let text = self.send(Action::ListTemplates, None).await?;
        parse_templates(&text, &self.endpoints.list_templates.payload_field)
    }
}
