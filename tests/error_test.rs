//! エラー表示のテスト

use resume_assist::error::ResumeAssistError;
use resume_assist_common::Error;

/// ResumeAssistErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ResumeAssistError::Config("テスト設定エラー".to_string()),
        ResumeAssistError::FileNotFound("resume.pdf".to_string()),
        ResumeAssistError::Input("Please enter a job description".to_string()),
        ResumeAssistError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

/// 共通エラーはそのままのメッセージで表示
#[test]
fn test_api_error_passthrough() {
    let err: ResumeAssistError = Error::Http {
        status: 502,
        message: "bad gateway".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "HTTP error 502: bad gateway");

    let err: ResumeAssistError = Error::MissingUpload.into();
    assert_eq!(err.to_string(), "Please upload a resume first");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ResumeAssistError = io_err.into();
    assert!(matches!(err, ResumeAssistError::Io(_)));
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let err: ResumeAssistError = json_err.into();
    assert!(matches!(err, ResumeAssistError::JsonParse(_)));
}
