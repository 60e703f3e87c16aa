//! バックエンドAPIクライアント（reqwest）
//!
//! 1アクション = 1リクエスト。レスポンスの検証は `resume_assist_common::response` に任せる。

use crate::error::{ResumeAssistError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use resume_assist_common::request::{RESUME_FIELD, TARGET_ROLE_FIELD};
use resume_assist_common::response::http_error;
use resume_assist_common::{
    parse_analysis, parse_extracted_text, parse_job_description, parse_templates, parse_text,
    Action, CoverLetterRequest, Endpoints, Error, JobDescriptionAnalysis, JobDescriptionRequest,
    Method, ResumeAnalysis, ResumeTemplate, RewriteRequest, UploadedFile,
};
use std::path::Path;
use std::time::Duration;

/// 拡張子からContent-Typeを推定
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// 送信前のファイル情報
pub fn describe_file(path: &Path) -> Result<UploadedFile> {
    let meta = std::fs::metadata(path)
        .map_err(|_| ResumeAssistError::FileNotFound(path.display().to_string()))?;
    Ok(UploadedFile {
        name: file_name(path),
        size: meta.len(),
        content_type: content_type_for(path).to_string(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string())
}

fn network(err: reqwest::Error) -> Error {
    Error::Network(err.to_string())
}

pub struct ApiClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self { client, endpoints })
    }

    fn request(&self, action: Action) -> RequestBuilder {
        let url = self.endpoints.url(action);
        match self.endpoints.endpoint(action).method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        }
    }

    /// 送信して本文を返す。非2xxは `Error::Http`
    async fn execute(&self, action: Action, builder: RequestBuilder) -> Result<String> {
        tracing::debug!(?action, url = %self.endpoints.url(action), "sending request");

        let response = builder.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(?action, %status, bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(http_error(status.as_u16(), &body).into());
        }
        Ok(body)
    }

    async fn resume_form(path: &Path, role: Option<&str>) -> Result<Form> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|_| ResumeAssistError::FileNotFound(path.display().to_string()))?;
        let part = Part::bytes(bytes)
            .file_name(file_name(path))
            .mime_str(content_type_for(path))?;

        let form = Form::new().part(RESUME_FIELD, part);
        Ok(match role {
            Some(role) => form.text(TARGET_ROLE_FIELD, role.to_string()),
            None => form,
        })
    }

    /// 履歴書ファイルを解析
    pub async fn analyze(&self, path: &Path, role: &str) -> Result<ResumeAnalysis> {
        let form = Self::resume_form(path, Some(role)).await?;
        let body = self
            .execute(Action::Analyze, self.request(Action::Analyze).multipart(form))
            .await?;
        Ok(parse_analysis(&body, &self.endpoints.analyze.payload_field)?)
    }

    /// リライト用にファイルを再送してテキストを抽出
    pub async fn extract_text(&self, path: &Path) -> Result<Option<String>> {
        let form = Self::resume_form(path, None).await?;
        let body = self
            .execute(Action::Analyze, self.request(Action::Analyze).multipart(form))
            .await?;
        Ok(parse_extracted_text(&body)?)
    }

    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<String> {
        let body = self
            .execute(Action::Rewrite, self.request(Action::Rewrite).json(request))
            .await?;
        Ok(parse_text(&body, &self.endpoints.rewrite.payload_field)?)
    }

    pub async fn cover_letter(&self, request: &CoverLetterRequest) -> Result<String> {
        let body = self
            .execute(Action::CoverLetter, self.request(Action::CoverLetter).json(request))
            .await?;
        Ok(parse_text(&body, &self.endpoints.cover_letter.payload_field)?)
    }

    pub async fn parse_job_description(
        &self,
        request: &JobDescriptionRequest,
    ) -> Result<JobDescriptionAnalysis> {
        let builder = self.request(Action::ParseJobDescription).json(request);
        let body = self.execute(Action::ParseJobDescription, builder).await?;
        Ok(parse_job_description(
            &body,
            &self.endpoints.parse_job_description.payload_field,
        )?)
    }

    pub async fn list_templates(&self) -> Result<Vec<ResumeTemplate>> {
        let body = self
            .execute(Action::ListTemplates, self.request(Action::ListTemplates))
            .await?;
        Ok(parse_templates(&body, &self.endpoints.list_templates.payload_field)?)
    }
}
