//! カバーレター生成タブ

use super::text_output::TextOutput;
use leptos::prelude::*;
use resume_assist_common::{
    Action, Artifact, CoverLetterField, CoverLetterTone, Event, SessionState,
};

#[component]
fn FieldInput(
    state: RwSignal<SessionState>,
    field: CoverLetterField,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || {
        state.with(|s| {
            let form = &s.cover_letter_form;
            match field {
                CoverLetterField::Company => form.company.clone(),
                CoverLetterField::Position => form.position.clone(),
                CoverLetterField::Experience => form.experience.clone(),
            }
        })
    };
    let set = move |value: String| {
        state.update(|s| s.apply(Event::CoverLetterFieldChanged(field, value)))
    };

    view! {
        <div class="form-row">
            <label>{label}</label>
            {match field {
                CoverLetterField::Experience => view! {
                    <textarea
                        rows="5"
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| set(event_target_value(&ev))
                    ></textarea>
                }
                .into_any(),
                _ => view! {
                    <input
                        type="text"
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| set(event_target_value(&ev))
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn CoverLetterPanel<F>(state: RwSignal<SessionState>, on_generate: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    let is_generating = move || state.with(|s| s.is_in_flight(Action::CoverLetter));

    view! {
        <section class="tab-panel">
            <div class="panel">
                <h2>"Cover Letter Details"</h2>
                <FieldInput
                    state=state
                    field=CoverLetterField::Company
                    label="Company Name"
                    placeholder="e.g. Acme Corp"
                />
                <FieldInput
                    state=state
                    field=CoverLetterField::Position
                    label="Position"
                    placeholder="e.g. Senior Software Engineer"
                />
                <FieldInput
                    state=state
                    field=CoverLetterField::Experience
                    label="Relevant Experience"
                    placeholder="Highlight the experience you want to emphasize..."
                />
                <div class="form-row">
                    <label for="cover-letter-tone">"Tone"</label>
                    <select
                        id="cover-letter-tone"
                        on:change=move |ev| {
                            if let Ok(tone) = event_target_value(&ev).parse::<CoverLetterTone>() {
                                state.update(|s| s.apply(Event::CoverLetterToneChanged(tone)));
                            }
                        }
                    >
                        {CoverLetterTone::ALL
                            .into_iter()
                            .map(|tone| {
                                view! {
                                    <option
                                        value=tone.as_str()
                                        selected=move || {
                                            state.with(|s| s.cover_letter_form.tone == tone)
                                        }
                                    >
                                        {tone.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <button
                    class="btn btn-primary"
                    disabled=is_generating
                    on:click=move |_| on_generate()
                >
                    {move || if is_generating() { "Generating..." } else { "Generate Cover Letter" }}
                </button>
            </div>

            <TextOutput state=state artifact=Artifact::CoverLetter />
        </section>
    }
}
