//! バックエンドへ送信するリクエストボディ

use crate::error::{Error, Result};
use crate::settings::{CoverLetterTone, RewriteOptions, RewriteSettings, Tone};
use serde::Serialize;

/// multipart送信時のフィールド名
pub const RESUME_FIELD: &str = "resume";
pub const TARGET_ROLE_FIELD: &str = "targetRole";

/// リライト要求
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub resume_text: String,
    pub tone: Tone,
    pub target_role: String,
    pub options: RewriteOptions,
}

impl RewriteRequest {
    /// 抽出テキスト → 貼り付けテキストの順に本文を決める
    ///
    /// どちらも空ならエラー（プレースホルダ文字列は送らない）
    pub fn build(
        settings: &RewriteSettings,
        extracted_text: Option<&str>,
        pasted_text: &str,
    ) -> Result<Self> {
        let resume_text = extracted_text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| Some(pasted_text.trim()).filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                Error::Validation("No resume text could be extracted from the file".to_string())
            })?;

        Ok(Self {
            resume_text: resume_text.to_string(),
            tone: settings.tone,
            target_role: settings.role.clone(),
            options: settings.options,
        })
    }
}

/// カバーレター生成要求
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverLetterRequest {
    pub company: String,
    pub position: String,
    pub experience: String,
    pub tone: CoverLetterTone,
}

/// 求人票解析要求
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

impl JobDescriptionRequest {
    pub fn new(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::Validation("Please enter a job description".to_string()));
        }
        Ok(Self {
            job_description: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_request_prefers_extracted_text() {
        let settings = RewriteSettings::default();
        let request = RewriteRequest::build(&settings, Some("Extracted body"), "Pasted body")
            .expect("作成失敗");
        assert_eq!(request.resume_text, "Extracted body");
        assert_eq!(request.target_role, "Software Engineer");
    }

    #[test]
    fn test_rewrite_request_falls_back_to_pasted_text() {
        let settings = RewriteSettings::default();
        let request = RewriteRequest::build(&settings, Some("  "), "Pasted body").expect("作成失敗");
        assert_eq!(request.resume_text, "Pasted body");

        let request = RewriteRequest::build(&settings, None, "Pasted body").expect("作成失敗");
        assert_eq!(request.resume_text, "Pasted body");
    }

    #[test]
    fn test_rewrite_request_without_text_is_error() {
        let settings = RewriteSettings::default();
        let result = RewriteRequest::build(&settings, None, "");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_rewrite_request_serialize() {
        let settings = RewriteSettings {
            tone: Tone::Concise,
            role: "Data Scientist".to_string(),
            ..Default::default()
        };
        let request = RewriteRequest::build(&settings, Some("text"), "").expect("作成失敗");
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(json.contains("\"resumeText\":\"text\""));
        assert!(json.contains("\"tone\":\"concise\""));
        assert!(json.contains("\"targetRole\":\"Data Scientist\""));
        assert!(json.contains("\"options\":{\"optimizeKeywords\":true"));
    }

    #[test]
    fn test_job_description_request_rejects_blank() {
        assert!(JobDescriptionRequest::new("").is_err());
        assert!(JobDescriptionRequest::new(" \n\t").is_err());

        let request = JobDescriptionRequest::new("We need Rust").expect("作成失敗");
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"jobDescription":"We need Rust"}"#);
    }

    #[test]
    fn test_cover_letter_request_serialize() {
        let request = CoverLetterRequest {
            company: "Acme".to_string(),
            position: "PM".to_string(),
            experience: "5 years".to_string(),
            tone: CoverLetterTone::Formal,
        };
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(
            json,
            r#"{"company":"Acme","position":"PM","experience":"5 years","tone":"formal"}"#
        );
    }
}
