//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Resume Intelligence Platform"</h1>
            <p class="text-muted">"Analyze, rewrite, and tailor your resume with AI"</p>
        </header>
    }
}
