//! セッション状態とイベント適用（reducer）
//!
//! 画面の状態は全て `SessionState` に集約し、`apply(Event)` でのみ更新する。
//! 各アクションは Idle → InFlight → Succeeded | Failed の状態を持ち、
//! 実行中のアクションは再度開始できない（ボタン無効化に相当）。

use crate::artifact::Artifact;
use crate::endpoints::Action;
use crate::error::Error;
use crate::request::{CoverLetterRequest, JobDescriptionRequest};
use crate::settings::{
    CoverLetterField, CoverLetterForm, CoverLetterTone, RewriteOption, RewriteSettings, Tone,
};
use crate::types::{JobDescriptionAnalysis, ResumeAnalysis, ResumeTemplate};
use std::collections::BTreeMap;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// アップロード済みファイルの参照（本体はフロントエンド側で保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

/// アクションの進行状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Flight {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    /// 失敗詳細（ログ用）
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        }
    }
}

/// 画面内に表示する通知（閉じるまで残る）
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// 状態を変更するイベント
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FileSelected(UploadedFile),
    ResumeTextChanged(String),
    JobDescriptionChanged(String),
    RoleChanged(String),
    ToneChanged(Tone),
    RewriteOptionToggled(RewriteOption, bool),
    CoverLetterFieldChanged(CoverLetterField, String),
    CoverLetterToneChanged(CoverLetterTone),
    AnalysisLoaded(ResumeAnalysis),
    RewriteLoaded(String),
    CoverLetterLoaded(String),
    JobDescriptionLoaded(JobDescriptionAnalysis),
    TemplatesLoaded(Vec<ResumeTemplate>),
    Failed { action: Action, detail: String },
    Copied,
    DismissNotice(u64),
}

/// 1セッション分の画面状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub uploaded_file: Option<UploadedFile>,
    pub resume_text: String,
    pub job_description: String,
    pub rewrite: RewriteSettings,
    pub cover_letter_form: CoverLetterForm,

    pub analysis: Option<ResumeAnalysis>,
    pub rewritten_resume: String,
    pub cover_letter: String,
    pub job_analysis: Option<JobDescriptionAnalysis>,
    pub templates: Vec<ResumeTemplate>,

    pub notices: Vec<Notice>,
    flights: BTreeMap<Action, Flight>,
    next_notice_id: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flight(&self, action: Action) -> Flight {
        self.flights.get(&action).cloned().unwrap_or_default()
    }

    pub fn is_in_flight(&self, action: Action) -> bool {
        self.flight(action) == Flight::InFlight
    }

    /// 表示中の生成テキスト
    pub fn artifact_text(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::RewrittenResume => &self.rewritten_resume,
            Artifact::CoverLetter => &self.cover_letter,
        }
    }

    /// イベントを適用する
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::FileSelected(file) => self.uploaded_file = Some(file),
            Event::ResumeTextChanged(text) => self.resume_text = text,
            Event::JobDescriptionChanged(text) => self.job_description = text,
            Event::RoleChanged(role) => self.rewrite.role = role,
            Event::ToneChanged(tone) => self.rewrite.tone = tone,
            Event::RewriteOptionToggled(option, enabled) => self.rewrite.options.set(option, enabled),
            Event::CoverLetterFieldChanged(field, value) => self.cover_letter_form.set(field, value),
            Event::CoverLetterToneChanged(tone) => self.cover_letter_form.tone = tone,

            Event::AnalysisLoaded(analysis) => {
                self.analysis = Some(analysis);
                self.settle(Action::Analyze);
            }
            Event::RewriteLoaded(text) => {
                self.rewritten_resume = text;
                self.settle(Action::Rewrite);
            }
            Event::CoverLetterLoaded(text) => {
                self.cover_letter = text;
                self.settle(Action::CoverLetter);
            }
            Event::JobDescriptionLoaded(analysis) => {
                self.job_analysis = Some(analysis);
                self.settle(Action::ParseJobDescription);
            }
            Event::TemplatesLoaded(templates) => {
                self.templates = templates;
                self.settle(Action::ListTemplates);
            }

            // 結果は変更しない。テンプレート読込の失敗はログのみ
            Event::Failed { action, detail } => {
                self.flights.insert(action, Flight::Failed(detail));
                if action != Action::ListTemplates {
                    self.notify(NoticeLevel::Error, action.failure_message());
                }
            }

            Event::Copied => self.notify(NoticeLevel::Info, COPIED_MESSAGE),
            Event::DismissNotice(id) => self.notices.retain(|n| n.id != id),
        }
    }

    fn settle(&mut self, action: Action) {
        self.flights.insert(action, Flight::Succeeded);
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id: self.next_notice_id,
            level,
            message: message.into(),
        });
    }

    /// アクション開始。実行中なら None、検証失敗なら通知して None
    fn begin<T>(&mut self, action: Action, prepare: impl FnOnce(&Self) -> crate::Result<T>) -> Option<T> {
        if self.is_in_flight(action) {
            return None;
        }

        match prepare(self) {
            Ok(value) => {
                self.flights.insert(action, Flight::InFlight);
                Some(value)
            }
            Err(err) => {
                self.notify(NoticeLevel::Error, err.to_string());
                None
            }
        }
    }

    /// 解析開始: 対象職種を返す
    pub fn begin_analyze(&mut self) -> Option<String> {
        self.begin(Action::Analyze, |s| {
            s.uploaded_file
                .as_ref()
                .map(|_| s.rewrite.role.clone())
                .ok_or(Error::MissingUpload)
        })
    }

    /// リライト開始: 送信時点の設定を返す
    pub fn begin_rewrite(&mut self) -> Option<RewriteSettings> {
        self.begin(Action::Rewrite, |s| {
            s.uploaded_file
                .as_ref()
                .map(|_| s.rewrite.clone())
                .ok_or(Error::MissingUpload)
        })
    }

    pub fn begin_cover_letter(&mut self) -> Option<CoverLetterRequest> {
        self.begin(Action::CoverLetter, |s| s.cover_letter_form.to_request())
    }

    pub fn begin_parse_job_description(&mut self) -> Option<JobDescriptionRequest> {
        self.begin(Action::ParseJobDescription, |s| {
            JobDescriptionRequest::new(&s.job_description)
        })
    }

    pub fn begin_load_templates(&mut self) -> bool {
        self.begin(Action::ListTemplates, |_| Ok(())).is_some()
    }
}
