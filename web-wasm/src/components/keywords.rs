//! キーワード・スキルのバッジ表示

use leptos::prelude::*;
use resume_assist_common::KeywordGroup;

#[component]
pub fn KeywordGroupView(group: KeywordGroup) -> impl IntoView {
    let class = group.kind.css_class();
    view! {
        <div class="keyword-group">
            <h4>{group.title}</h4>
            <div class="badge-list">
                {group
                    .items
                    .into_iter()
                    .map(|item| view! { <span class=class>{item}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
