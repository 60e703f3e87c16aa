//! 生成テキストの表示（コピー・ダウンロード付き）

use crate::actions;
use leptos::prelude::*;
use resume_assist_common::{Artifact, SessionState};

#[component]
pub fn TextOutput(state: RwSignal<SessionState>, artifact: Artifact) -> impl IntoView {
    let text = Memo::new(move |_| state.with(|s| s.artifact_text(artifact).to_string()));

    view! {
        <Show when=move || !text.with(|t| t.is_empty())>
            <div class="panel text-output">
                <div class="panel-header">
                    <h3>{artifact.title()}</h3>
                    <div class="button-row">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| actions::copy_text(state, text.get_untracked())
                        >
                            "Copy"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| {
                                text.with_untracked(|t| actions::download_text(artifact, t))
                            }
                        >
                            "Download"
                        </button>
                    </div>
                </div>
                <pre class="generated-text">{move || text.get()}</pre>
            </div>
        </Show>
    }
}
