//! 表示用モデル
//!
//! 解析結果を画面表示用の文字列に変換する。WebとCLIで同じ表示になるよう
//! フォーマットはここに集約する。

use crate::types::{JobDescriptionAnalysis, ResumeAnalysis, ResumeTemplate};

/// スコアの表示（整数なら小数点なし、それ以外は小数1桁）
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// 先頭を大文字にする（"work_experience" → "Work Experience"）
pub fn title_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// キーワードバッジの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Missing,
    Suggested,
    Present,
    Technical,
    Soft,
    Required,
    Preferred,
    Keyword,
}

impl BadgeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeKind::Missing => "badge badge-missing",
            BadgeKind::Suggested => "badge badge-suggested",
            BadgeKind::Present => "badge badge-present",
            BadgeKind::Technical => "badge badge-technical",
            BadgeKind::Soft => "badge badge-soft",
            BadgeKind::Required => "badge badge-required",
            BadgeKind::Preferred => "badge badge-preferred",
            BadgeKind::Keyword => "badge badge-keyword",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordGroup {
    pub title: &'static str,
    pub kind: BadgeKind,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionRow {
    pub title: String,
    pub score: String,
    pub feedback: String,
}

/// 解析結果の表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub ats_score: String,
    pub overall_rating: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keyword_groups: Vec<KeywordGroup>,
    pub sections: Vec<SectionRow>,
}

impl From<&ResumeAnalysis> for AnalysisView {
    fn from(analysis: &ResumeAnalysis) -> Self {
        Self {
            ats_score: format_score(analysis.ats_score),
            overall_rating: format!("{}/5", format_score(analysis.overall_rating)),
            strengths: analysis.strengths.clone(),
            improvements: analysis.improvements.clone(),
            keyword_groups: vec![
                KeywordGroup {
                    title: "Missing Keywords",
                    kind: BadgeKind::Missing,
                    items: analysis.keywords.missing.clone(),
                },
                KeywordGroup {
                    title: "Suggested Keywords",
                    kind: BadgeKind::Suggested,
                    items: analysis.keywords.suggested.clone(),
                },
                KeywordGroup {
                    title: "Present Keywords",
                    kind: BadgeKind::Present,
                    items: analysis.keywords.present.clone(),
                },
            ],
            sections: analysis
                .sections
                .iter()
                .map(|s| SectionRow {
                    title: title_case(&s.name),
                    score: format!("{}/10", format_score(s.score)),
                    feedback: s.feedback.clone(),
                })
                .collect(),
        }
    }
}

/// 求人票解析の表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescriptionView {
    pub skill_groups: Vec<KeywordGroup>,
    /// 空なら非表示
    pub keywords: Option<KeywordGroup>,
}

impl From<&JobDescriptionAnalysis> for JobDescriptionView {
    fn from(analysis: &JobDescriptionAnalysis) -> Self {
        let skills = &analysis.skills;
        Self {
            skill_groups: vec![
                KeywordGroup {
                    title: "Technical Skills",
                    kind: BadgeKind::Technical,
                    items: skills.technical.clone(),
                },
                KeywordGroup {
                    title: "Soft Skills",
                    kind: BadgeKind::Soft,
                    items: skills.soft.clone(),
                },
                KeywordGroup {
                    title: "Required Skills",
                    kind: BadgeKind::Required,
                    items: skills.required.clone(),
                },
                KeywordGroup {
                    title: "Preferred Skills",
                    kind: BadgeKind::Preferred,
                    items: skills.preferred.clone(),
                },
            ],
            keywords: (!analysis.keywords.is_empty()).then(|| KeywordGroup {
                title: "Keywords",
                kind: BadgeKind::Keyword,
                items: analysis.keywords.clone(),
            }),
        }
    }
}

/// テンプレートカードの表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub popularity: String,
    pub ats_score: String,
    pub features: Vec<String>,
}

impl From<&ResumeTemplate> for TemplateCard {
    fn from(template: &ResumeTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            category: template.category.clone(),
            description: template.description.clone(),
            popularity: format!("Popularity: {}%", format_score(template.popularity)),
            ats_score: format!("ATS Score: {}%", format_score(template.ats_score)),
            features: template.features.clone(),
        }
    }
}
