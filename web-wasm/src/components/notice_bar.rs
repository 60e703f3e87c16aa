//! 通知表示（閉じるボタン付き）

use leptos::prelude::*;
use resume_assist_common::{Event, Notice, SessionState};

#[component]
pub fn NoticeBar(state: RwSignal<SessionState>) -> impl IntoView {
    view! {
        <div class="notice-bar">
            <For
                each=move || state.with(|s| s.notices.clone())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice notice-{}", notice.level.as_str()) role="alert">
                            <span>{notice.message}</span>
                            <button
                                class="notice-dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| state.update(|s| s.apply(Event::DismissNotice(id)))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
