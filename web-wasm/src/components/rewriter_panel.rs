//! 履歴書リライトタブ

use super::role_select::RoleSelect;
use super::text_output::TextOutput;
use leptos::prelude::*;
use resume_assist_common::{Action, Artifact, Event, RewriteOption, SessionState, Tone};

#[component]
pub fn RewriterPanel<F>(state: RwSignal<SessionState>, on_rewrite: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    let is_processing = move || state.with(|s| s.is_in_flight(Action::Rewrite));
    // アップロード済みファイルがない場合は実行できない
    let can_rewrite = move || state.with(|s| s.uploaded_file.is_some()) && !is_processing();

    view! {
        <section class="tab-panel">
            <div class="panel">
                <h2>"Rewrite Settings"</h2>
                <div class="form-row">
                    <label for="rewrite-tone">"Tone"</label>
                    <select
                        id="rewrite-tone"
                        on:change=move |ev| {
                            if let Ok(tone) = event_target_value(&ev).parse::<Tone>() {
                                state.update(|s| s.apply(Event::ToneChanged(tone)));
                            }
                        }
                    >
                        {Tone::ALL
                            .into_iter()
                            .map(|tone| {
                                view! {
                                    <option
                                        value=tone.as_str()
                                        selected=move || state.with(|s| s.rewrite.tone == tone)
                                    >
                                        {tone.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-row">
                    <label for="rewrite-role">"Target Role"</label>
                    <RoleSelect state=state id="rewrite-role" />
                </div>
                <div class="option-list">
                    {RewriteOption::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.rewrite.options.get(option))
                                        on:change=move |ev| {
                                            let enabled = event_target_checked(&ev);
                                            state.update(|s| {
                                                s.apply(Event::RewriteOptionToggled(option, enabled))
                                            });
                                        }
                                    />
                                    {option.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="form-row">
                    <label for="resume-text">"Fallback Resume Text"</label>
                    <textarea
                        id="resume-text"
                        rows="8"
                        placeholder="Used only if no text can be extracted from the uploaded file"
                        prop:value=move || state.with(|s| s.resume_text.clone())
                        on:input=move |ev| {
                            state.update(|s| s.apply(Event::ResumeTextChanged(event_target_value(&ev))))
                        }
                    ></textarea>
                </div>
                <button
                    class="btn btn-primary"
                    disabled=move || !can_rewrite()
                    on:click=move |_| on_rewrite()
                >
                    {move || if is_processing() { "Rewriting..." } else { "Rewrite Resume" }}
                </button>
                <Show when=move || state.with(|s| s.uploaded_file.is_none())>
                    <p class="text-muted">"Upload a resume in the Analyzer tab first."</p>
                </Show>
            </div>

            <TextOutput state=state artifact=Artifact::RewrittenResume />
        </section>
    }
}
