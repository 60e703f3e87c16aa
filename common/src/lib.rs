//! Resume Assist Common Library
//!
//! CLIとWeb(WASM)で共有される型・エンドポイント定義・セッション状態

pub mod artifact;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;
pub mod settings;
pub mod state;
pub mod types;
pub mod view;

pub use artifact::{Artifact, DownloadFile};
pub use endpoints::{Action, BodyKind, Endpoint, Endpoints, Method, PathOverrides};
pub use error::{Error, Result};
pub use request::{CoverLetterRequest, JobDescriptionRequest, RewriteRequest};
pub use response::{
    parse_analysis, parse_extracted_text, parse_job_description, parse_templates, parse_text,
};
pub use settings::{
    CoverLetterField, CoverLetterForm, CoverLetterTone, RewriteOption, RewriteOptions,
    RewriteSettings, Tone, ROLE_PRESETS,
};
pub use state::{Event, Flight, Notice, NoticeLevel, SessionState, UploadedFile};
pub use types::{
    JobDescriptionAnalysis, KeywordBuckets, ResumeAnalysis, ResumeTemplate, SectionScore,
    SkillBuckets,
};
pub use view::{AnalysisView, BadgeKind, JobDescriptionView, KeywordGroup, SectionRow, TemplateCard};
