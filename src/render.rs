//! 端末向けの表示
//!
//! 表示文字列は `resume_assist_common::view` と同じものを使う

use resume_assist_common::{AnalysisView, JobDescriptionView, KeywordGroup, TemplateCard};
use std::fmt::Write;

fn push_list(out: &mut String, title: &str, marker: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}:", title);
    for item in items {
        let _ = writeln!(out, "  {} {}", marker, item);
    }
}

fn push_group(out: &mut String, group: &KeywordGroup) {
    if group.items.is_empty() {
        let _ = writeln!(out, "  {}: -", group.title);
    } else {
        let _ = writeln!(out, "  {}: {}", group.title, group.items.join(", "));
    }
}

pub fn analysis(view: &AnalysisView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ATS Score:      {}", view.ats_score);
    let _ = writeln!(out, "Overall Rating: {}", view.overall_rating);

    push_list(&mut out, "Strengths", "✔", &view.strengths);
    push_list(&mut out, "Areas for Improvement", "•", &view.improvements);

    let _ = writeln!(out, "\nKeyword Analysis:");
    for group in &view.keyword_groups {
        push_group(&mut out, group);
    }

    if !view.sections.is_empty() {
        let _ = writeln!(out, "\nSection Scores:");
        for row in &view.sections {
            let _ = writeln!(out, "  {:<20} {}", row.title, row.score);
            if !row.feedback.is_empty() {
                let _ = writeln!(out, "    {}", row.feedback);
            }
        }
    }
    out
}

pub fn job_description(view: &JobDescriptionView) -> String {
    let mut out = String::from("Extracted Requirements:\n");
    for group in &view.skill_groups {
        push_group(&mut out, group);
    }
    if let Some(keywords) = &view.keywords {
        push_group(&mut out, keywords);
    }
    out
}

pub fn templates(cards: &[TemplateCard]) -> String {
    if cards.is_empty() {
        return "テンプレートがありません\n".to_string();
    }

    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "[{}] {} ({})", card.id, card.name, card.category);
        if !card.description.is_empty() {
            let _ = writeln!(out, "    {}", card.description);
        }
        let _ = writeln!(out, "    {} | {}", card.popularity, card.ats_score);
        if !card.features.is_empty() {
            let _ = writeln!(out, "    {}", card.features.join(" / "));
        }
    }
    out
}
