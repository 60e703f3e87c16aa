//! APIクライアントの結合テスト
//!
//! ローカルのモックサーバーに対してリクエスト内容とレスポンス検証を確認

mod support;

use resume_assist::client::ApiClient;
use resume_assist::error::ResumeAssistError;
use resume_assist_common::{
    Action, CoverLetterForm, CoverLetterTone, Endpoints, Error, JobDescriptionRequest,
    PathOverrides, RewriteRequest, RewriteSettings,
};
use std::path::PathBuf;
use support::MockServer;
use tempfile::TempDir;

const ANALYSIS_BODY: &str = r#"{
    "success": true,
    "analysis": {
        "atsScore": 82,
        "overallRating": 4,
        "strengths": ["Clear summary"],
        "improvements": ["Add metrics"],
        "keywords": {"missing": ["Python"], "suggested": ["Agile"], "present": ["Java"]},
        "sections": {"summary": {"score": 8, "feedback": "Concise"}}
    },
    "extractedText": "Jane Doe\nSoftware Engineer"
}"#;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(Endpoints::new(&server.base_url), 5).unwrap()
}

fn resume_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "Jane Doe\nSoftware Engineer").unwrap();
    (dir, path)
}

#[tokio::test]
async fn test_analyze_sends_multipart_with_role() {
    let server = MockServer::start(vec![(200, ANALYSIS_BODY)]).await;
    let (_dir, path) = resume_file();

    let analysis = client(&server)
        .analyze(&path, "Data Scientist")
        .await
        .unwrap();

    assert_eq!(analysis.ats_score, 82.0);
    assert_eq!(analysis.sections[0].name, "summary");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/analyze-resume");
    assert!(requests[0].headers.to_lowercase().contains("multipart/form-data"));
    assert!(requests[0].body.contains("name=\"resume\""));
    assert!(requests[0].body.contains("name=\"targetRole\""));
    assert!(requests[0].body.contains("Data Scientist"));
}

/// パス上書きは送信先だけを変え、ペイロードのフィールド名は変えない
#[tokio::test]
async fn test_path_overrides_keep_contract() {
    let server = MockServer::start(vec![(
        200,
        r#"{"success": true, "coverLetter": "Dear Hiring Manager"}"#,
    )])
    .await;
    let mut overrides = PathOverrides::new();
    overrides.insert(Action::CoverLetter, "/v2/cover-letter".to_string());
    let api = ApiClient::new(Endpoints::new(&server.base_url).with_overrides(&overrides), 5).unwrap();

    let request = CoverLetterForm {
        company: "Acme".into(),
        position: "Engineer".into(),
        ..Default::default()
    }
    .to_request()
    .unwrap();
    let text = api.cover_letter(&request).await.unwrap();
    assert_eq!(text, "Dear Hiring Manager");

    let requests = server.requests();
    assert_eq!(requests[0].path, "/v2/cover-letter");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["position"], "Engineer");
}

/// 旧来のフィールド名（`cover`）は受け付けない
#[tokio::test]
async fn test_other_payload_field_names_are_rejected() {
    let server = MockServer::start(vec![(200, r#"{"success": true, "cover": "Dear Hiring Manager"}"#)]).await;
    let request = CoverLetterForm {
        company: "Acme".into(),
        position: "Engineer".into(),
        ..Default::default()
    }
    .to_request()
    .unwrap();

    let err = client(&server).cover_letter(&request).await.unwrap_err();
    assert!(matches!(err, ResumeAssistError::Api(Error::MissingField(ref f)) if f == "coverLetter"));
}

#[tokio::test]
async fn test_rewrite_flow_extracts_then_posts_json() {
    let server = MockServer::start(vec![
        (200, ANALYSIS_BODY),
        (200, r#"{"success": true, "rewrittenResume": "Improved resume"}"#),
    ])
    .await;
    let (_dir, path) = resume_file();
    let api = client(&server);

    let extracted = api.extract_text(&path).await.unwrap();
    let request =
        RewriteRequest::build(&RewriteSettings::default(), extracted.as_deref(), "").unwrap();
    let text = api.rewrite(&request).await.unwrap();
    assert_eq!(text, "Improved resume");

    let requests = server.requests();
    assert_eq!(requests[0].path, "/api/analyze-resume");
    assert!(!requests[0].body.contains("name=\"targetRole\""));
    assert_eq!(requests[1].path, "/api/rewrite-resume");

    let body: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
    assert_eq!(body["resumeText"], "Jane Doe\nSoftware Engineer");
    assert_eq!(body["tone"], "achievement-focused");
    assert_eq!(body["targetRole"], "Software Engineer");
    assert_eq!(body["options"]["optimizeKeywords"], true);
}

#[tokio::test]
async fn test_cover_letter_sends_fields_as_entered() {
    let server = MockServer::start(vec![(
        200,
        r#"{"success": true, "coverLetter": "Dear Hiring Manager"}"#,
    )])
    .await;
    let form = CoverLetterForm {
        company: "Acme".into(),
        position: "Engineer".into(),
        experience: "  Led a team of 5\n".into(),
        tone: CoverLetterTone::Formal,
    };

    let text = client(&server)
        .cover_letter(&form.to_request().unwrap())
        .await
        .unwrap();
    assert_eq!(text, "Dear Hiring Manager");

    let requests = server.requests();
    assert_eq!(requests[0].path, "/api/generate-cover-letter");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["experience"], "  Led a team of 5\n");
    assert_eq!(body["tone"], "formal");
}

#[tokio::test]
async fn test_parse_job_description() {
    let server = MockServer::start(vec![(
        200,
        r#"{"success": true, "analysis": {"skills": {"technical": ["Rust"]}, "keywords": ["backend"]}}"#,
    )])
    .await;

    let request = JobDescriptionRequest::new("We need a Rust engineer").unwrap();
    let analysis = client(&server)
        .parse_job_description(&request)
        .await
        .unwrap();

    assert_eq!(analysis.skills.technical, vec!["Rust"]);
    assert!(analysis.skills.soft.is_empty());
    let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
    assert_eq!(body["jobDescription"], "We need a Rust engineer");
}

#[tokio::test]
async fn test_list_templates_uses_get() {
    let server = MockServer::start(vec![(
        200,
        r#"{"success": true, "templates": [{"id": 1, "name": "Modern", "category": "Tech", "popularity": 95, "atsScore": 98.5, "features": ["Clean"]}]}"#,
    )])
    .await;

    let templates = client(&server)
        .list_templates()
        .await
        .unwrap();

    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].id, "1");
    let requests = server.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/get-templates");
}

#[tokio::test]
async fn test_unsuccessful_response_carries_server_message() {
    let server =
        MockServer::start(vec![(200, r#"{"success": false, "error": "quota exceeded"}"#)]).await;

    let err = client(&server)
        .list_templates()
        .await
        .unwrap_err();

    match err {
        ResumeAssistError::Api(Error::Unsuccessful(message)) => {
            assert_eq!(message, "quota exceeded")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start(vec![(500, r#"{"error": "boom"}"#)]).await;

    let err = client(&server)
        .list_templates()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResumeAssistError::Api(Error::Http { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let api = ApiClient::new(Endpoints::new(&base_url), 5).unwrap();
    let err = api.list_templates().await.unwrap_err();

    assert!(matches!(err, ResumeAssistError::Api(Error::Network(_))));
}

#[tokio::test]
async fn test_missing_file_is_reported_before_sending() {
    let server = MockServer::start(vec![]).await;

    let err = client(&server)
        .analyze(std::path::Path::new("/nonexistent/resume.pdf"), "Software Engineer")
        .await
        .unwrap_err();

    assert!(matches!(err, ResumeAssistError::FileNotFound(_)));
    assert!(server.requests().is_empty());
}
