//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力検証エラー（リクエストは送信しない）
    #[error("{0}")]
    Validation(String),

    #[error("Please upload a resume first")]
    MissingUpload,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `success` が true でないレスポンス
    #[error("Request was not successful: {0}")]
    Unsuccessful(String),

    #[error("Response field missing: {0}")]
    MissingField(String),

    #[error("Response schema error: {0}")]
    Schema(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation("Please enter a job description".to_string());
        assert_eq!(format!("{}", error), "Please enter a job description");
    }

    #[test]
    fn test_error_display_http() {
        let error = Error::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP error 502: Bad Gateway");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_missing_upload() {
        assert_eq!(
            format!("{}", Error::MissingUpload),
            "Please upload a resume first"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::MissingField("coverLetter".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("MissingField"));
        assert!(debug.contains("coverLetter"));
    }
}
