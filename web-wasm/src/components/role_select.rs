//! 対象職種の選択

use leptos::prelude::*;
use resume_assist_common::{Event, SessionState, ROLE_PRESETS};

#[component]
pub fn RoleSelect(state: RwSignal<SessionState>, id: &'static str) -> impl IntoView {
    view! {
        <select
            id=id
            on:change=move |ev| {
                state.update(|s| s.apply(Event::RoleChanged(event_target_value(&ev))));
            }
        >
            {ROLE_PRESETS
                .into_iter()
                .map(|role| {
                    view! {
                        <option value=role selected=move || state.with(|s| s.rewrite.role == role)>
                            {role}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
