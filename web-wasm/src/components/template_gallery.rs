//! テンプレート一覧タブ

use leptos::prelude::*;
use resume_assist_common::{Action, SessionState, TemplateCard};

#[component]
pub fn TemplateGallery(state: RwSignal<SessionState>) -> impl IntoView {
    let is_loading = move || state.with(|s| s.is_in_flight(Action::ListTemplates));
    let cards = Memo::new(move |_| {
        state.with(|s| s.templates.iter().map(TemplateCard::from).collect::<Vec<_>>())
    });

    view! {
        <section class="tab-panel">
            <h2>"Resume Templates"</h2>
            <Show
                when=move || !is_loading()
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner"></div>
                    </div>
                }
            >
                <div class="template-grid">
                    <For
                        each={move || cards.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, card)| card_key(*index, card)
                        children=|(_, card)| template_card(card)
                    />
                </div>
            </Show>
        </section>
    }
}

/// サーバーが同じ id を返しても行が潰れないよう位置と id を組にする
fn card_key(index: usize, card: &TemplateCard) -> (usize, String) {
    (index, card.id.clone())
}

fn template_card(card: TemplateCard) -> impl IntoView {
    view! {
        <div class="template-card">
            <div class="template-header">
                <h3>{card.name}</h3>
                <span class="badge badge-keyword">{card.category}</span>
            </div>
            <p class="text-muted">{card.description}</p>
            <div class="template-stats">
                <span>{card.popularity}</span>
                <span>{card.ats_score}</span>
            </div>
            <ul class="feature-list">
                {card.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_assist_common::ResumeTemplate;

    #[test]
    fn test_duplicate_ids_get_distinct_keys() {
        let template = ResumeTemplate {
            id: "1".to_string(),
            name: "Modern".to_string(),
            ..Default::default()
        };
        let first = TemplateCard::from(&template);
        let second = TemplateCard::from(&template);

        assert_ne!(card_key(0, &first), card_key(1, &second));
        assert_eq!(card_key(0, &first), (0, "1".to_string()));
    }
}
