//! ユーザー操作ハンドラ
//!
//! 状態遷移は `SessionState` に任せ、ここでは開始 → 非同期呼び出し →
//! 成功/失敗イベントの適用だけを行う。

use crate::api::ApiClient;
use crate::browser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use resume_assist_common::{
    Action, Artifact, Error, Event, Result, RewriteRequest, RewriteSettings, SessionState,
    UploadedFile,
};
use web_sys::File;

fn fail(state: RwSignal<SessionState>, action: Action, err: Error) {
    gloo::console::error!(format!("{} ({})", action.failure_message(), err));
    state.update(|s| {
        s.apply(Event::Failed {
            action,
            detail: err.to_string(),
        })
    });
}

fn uploaded_file(file: &File) -> UploadedFile {
    UploadedFile {
        name: file.name(),
        size: file.size() as u64,
        content_type: file.type_(),
    }
}

/// ファイル選択 → 解析
pub fn analyze_resume(state: RwSignal<SessionState>, client: StoredValue<ApiClient>, file: File) {
    state.update(|s| s.apply(Event::FileSelected(uploaded_file(&file))));
    let Some(role) = state.try_update(|s| s.begin_analyze()).flatten() else {
        return;
    };

    spawn_local(async move {
        let client = client.get_value();
        match client.analyze(&file, &role).await {
            Ok(analysis) => state.update(|s| s.apply(Event::AnalysisLoaded(analysis))),
            Err(err) => fail(state, Action::Analyze, err),
        }
    });
}

async fn run_rewrite(
    client: &ApiClient,
    file: &File,
    settings: &RewriteSettings,
    pasted_text: &str,
) -> Result<String> {
    let extracted = client.extract_text(file).await?;
    let request = RewriteRequest::build(settings, extracted.as_deref(), pasted_text)?;
    client.rewrite(&request).await
}

/// テキスト抽出 → リライト
pub fn rewrite_resume(
    state: RwSignal<SessionState>,
    client: StoredValue<ApiClient>,
    file: Option<File>,
) {
    let Some(settings) = state.try_update(|s| s.begin_rewrite()).flatten() else {
        return;
    };
    let Some(file) = file else {
        fail(state, Action::Rewrite, Error::MissingUpload);
        return;
    };
    let pasted_text = state.with_untracked(|s| s.resume_text.clone());

    spawn_local(async move {
        let client = client.get_value();
        match run_rewrite(&client, &file, &settings, &pasted_text).await {
            Ok(text) => state.update(|s| s.apply(Event::RewriteLoaded(text))),
            Err(err) => fail(state, Action::Rewrite, err),
        }
    });
}

pub fn generate_cover_letter(state: RwSignal<SessionState>, client: StoredValue<ApiClient>) {
    let Some(request) = state.try_update(|s| s.begin_cover_letter()).flatten() else {
        return;
    };

    spawn_local(async move {
        let client = client.get_value();
        match client.cover_letter(&request).await {
            Ok(text) => state.update(|s| s.apply(Event::CoverLetterLoaded(text))),
            Err(err) => fail(state, Action::CoverLetter, err),
        }
    });
}

pub fn parse_job_description(state: RwSignal<SessionState>, client: StoredValue<ApiClient>) {
    let Some(request) = state.try_update(|s| s.begin_parse_job_description()).flatten() else {
        return;
    };

    spawn_local(async move {
        let client = client.get_value();
        match client.parse_job_description(&request).await {
            Ok(analysis) => state.update(|s| s.apply(Event::JobDescriptionLoaded(analysis))),
            Err(err) => fail(state, Action::ParseJobDescription, err),
        }
    });
}

/// 起動時のテンプレート読込（失敗はログのみ）
pub fn load_templates(state: RwSignal<SessionState>, client: StoredValue<ApiClient>) {
    if !state.try_update(|s| s.begin_load_templates()).unwrap_or(false) {
        return;
    }

    spawn_local(async move {
        let client = client.get_value();
        match client.list_templates().await {
            Ok(templates) => state.update(|s| s.apply(Event::TemplatesLoaded(templates))),
            Err(err) => fail(state, Action::ListTemplates, err),
        }
    });
}

pub fn copy_text(state: RwSignal<SessionState>, text: String) {
    spawn_local(async move {
        match browser::copy_to_clipboard(&text).await {
            Ok(()) => state.update(|s| s.apply(Event::Copied)),
            Err(message) => gloo::console::error!(message),
        }
    });
}

pub fn download_text(artifact: Artifact, text: &str) {
    if let Err(err) = browser::download(&artifact.package(text)) {
        gloo::console::error!("Download failed", err);
    }
}
