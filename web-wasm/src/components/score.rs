//! スコアカード・箇条書きリスト

use leptos::prelude::*;

#[component]
pub fn ScoreCard(label: &'static str, value: String, color: &'static str) -> impl IntoView {
    view! {
        <div class=format!("score-card score-{}", color)>
            <span class="score-label">{label}</span>
            <span class="score-value">{value}</span>
        </div>
    }
}

#[component]
pub fn BulletList(title: &'static str, marker: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="panel">
            <h3>{title}</h3>
            <ul class="bullet-list">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li>
                                <span class=format!("bullet {}", marker)></span>
                                <span>{item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
