//! メインアプリケーションコンポーネント

use crate::actions;
use crate::api::ApiClient;
use crate::components::{
    analysis_panel::AnalyzerPanel,
    cover_letter_panel::CoverLetterPanel,
    header::Header,
    job_parser_panel::JobParserPanel,
    notice_bar::NoticeBar,
    rewriter_panel::RewriterPanel,
    tab_bar::{Tab, TabBar},
    template_gallery::TemplateGallery,
};
use crate::config::AppConfig;
use leptos::prelude::*;
use resume_assist_common::SessionState;
use web_sys::File;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    gloo::console::log!(format!(
        "API: {} ({} path overrides)",
        config.base_url,
        config.paths.len()
    ));

    // アプリケーション状態
    let state = RwSignal::new(SessionState::new());
    let client = StoredValue::new(ApiClient::new(config.endpoints()));
    // File は Send ではないのでローカル保持
    let uploaded = StoredValue::new_local(None::<File>);
    let (tab, set_tab) = signal(Tab::Analyzer);

    // 起動時にテンプレートを読み込む
    actions::load_templates(state, client);

    let on_file_selected = move |file: File| {
        uploaded.set_value(Some(file.clone()));
        actions::analyze_resume(state, client, file);
    };
    let on_rewrite = move || actions::rewrite_resume(state, client, uploaded.get_value());
    let on_generate = move || actions::generate_cover_letter(state, client);
    let on_parse = move || actions::parse_job_description(state, client);

    view! {
        <div class="container">
            <Header />
            <NoticeBar state=state />
            <TabBar tab=tab set_tab=set_tab />

            <main>
                {move || match tab.get() {
                    Tab::Analyzer => view! {
                        <AnalyzerPanel state=state on_file_selected=on_file_selected />
                    }
                    .into_any(),
                    Tab::Rewriter => view! {
                        <RewriterPanel state=state on_rewrite=on_rewrite />
                    }
                    .into_any(),
                    Tab::CoverLetter => view! {
                        <CoverLetterPanel state=state on_generate=on_generate />
                    }
                    .into_any(),
                    Tab::Templates => view! { <TemplateGallery state=state /> }.into_any(),
                    Tab::JobParser => view! {
                        <JobParserPanel state=state on_parse=on_parse />
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
