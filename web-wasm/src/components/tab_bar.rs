//! タブ切り替え

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analyzer,
    Rewriter,
    CoverLetter,
    Templates,
    JobParser,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Analyzer,
        Tab::Rewriter,
        Tab::CoverLetter,
        Tab::Templates,
        Tab::JobParser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Analyzer => "Resume Analyzer",
            Tab::Rewriter => "Resume Rewriter",
            Tab::CoverLetter => "Cover Letter",
            Tab::Templates => "Templates",
            Tab::JobParser => "Job Parser",
        }
    }
}

#[component]
pub fn TabBar(tab: ReadSignal<Tab>, set_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button
                            class="tab"
                            class:active=move || tab.get() == t
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
