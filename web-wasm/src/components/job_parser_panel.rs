//! 求人票解析タブ

use super::keywords::KeywordGroupView;
use leptos::prelude::*;
use resume_assist_common::{Action, Event, JobDescriptionView, SessionState};

#[component]
pub fn JobParserPanel<F>(state: RwSignal<SessionState>, on_parse: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    let is_parsing = move || state.with(|s| s.is_in_flight(Action::ParseJobDescription));
    let result = Memo::new(move |_| {
        state.with(|s| s.job_analysis.as_ref().map(JobDescriptionView::from))
    });

    view! {
        <section class="tab-panel">
            <div class="panel">
                <h2>"Job Description"</h2>
                <textarea
                    rows="10"
                    placeholder="Paste the job description here..."
                    prop:value=move || state.with(|s| s.job_description.clone())
                    on:input=move |ev| {
                        state.update(|s| s.apply(Event::JobDescriptionChanged(event_target_value(&ev))))
                    }
                ></textarea>
                <button class="btn btn-primary" disabled=is_parsing on:click=move |_| on_parse()>
                    {move || if is_parsing() { "Parsing..." } else { "Parse Job Description" }}
                </button>
            </div>

            {move || {
                result
                    .get()
                    .map(|result| {
                        let JobDescriptionView { skill_groups, keywords } = result;
                        view! {
                            <div class="panel">
                                <h3>"Extracted Requirements"</h3>
                                {skill_groups
                                    .into_iter()
                                    .map(|group| view! { <KeywordGroupView group=group /> })
                                    .collect_view()}
                                {keywords.map(|group| view! { <KeywordGroupView group=group /> })}
                            </div>
                        }
                    })
            }}
        </section>
    }
}
