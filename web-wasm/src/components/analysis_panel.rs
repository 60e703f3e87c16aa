//! 履歴書解析タブ

use super::keywords::KeywordGroupView;
use super::role_select::RoleSelect;
use super::score::{BulletList, ScoreCard};
use super::upload_area::UploadArea;
use leptos::prelude::*;
use resume_assist_common::{Action, AnalysisView, SectionRow, SessionState};
use web_sys::File;

#[component]
pub fn AnalyzerPanel<F>(state: RwSignal<SessionState>, on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let analysis = Memo::new(move |_| state.with(|s| s.analysis.as_ref().map(AnalysisView::from)));
    let is_analyzing = move || state.with(|s| s.is_in_flight(Action::Analyze));

    view! {
        <section class="tab-panel">
            <div class="panel">
                <h2>"Upload Your Resume"</h2>
                <div class="form-row">
                    <label for="analyze-role">"Target Role"</label>
                    <RoleSelect state=state id="analyze-role" />
                </div>
                <UploadArea state=state on_file_selected=on_file_selected />
            </div>

            <Show when=is_analyzing>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Analyzing your resume..."</p>
                </div>
            </Show>

            {move || analysis.get().map(|result| view! { <AnalysisResults result=result /> })}
        </section>
    }
}

#[component]
fn AnalysisResults(result: AnalysisView) -> impl IntoView {
    let AnalysisView {
        ats_score,
        overall_rating,
        strengths,
        improvements,
        keyword_groups,
        sections,
    } = result;

    view! {
        <div class="analysis-results">
            <div class="score-row">
                <ScoreCard label="ATS Score" value=ats_score color="blue" />
                <ScoreCard label="Overall Rating" value=overall_rating color="green" />
            </div>

            <div class="two-column">
                <BulletList title="Strengths" marker="bullet-green" items=strengths />
                <BulletList title="Areas for Improvement" marker="bullet-orange" items=improvements />
            </div>

            <div class="panel">
                <h3>"Keyword Analysis"</h3>
                {keyword_groups
                    .into_iter()
                    .map(|group| view! { <KeywordGroupView group=group /> })
                    .collect_view()}
            </div>

            <div class="panel">
                <h3>"Section Scores"</h3>
                {sections.into_iter().map(section_row).collect_view()}
            </div>
        </div>
    }
}

fn section_row(row: SectionRow) -> impl IntoView {
    view! {
        <div class="section-row">
            <div class="section-header">
                <span class="section-title">{row.title}</span>
                <span class="section-score">{row.score}</span>
            </div>
            <p class="text-muted">{row.feedback}</p>
        </div>
    }
}
