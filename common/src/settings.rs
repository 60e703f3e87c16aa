//! ユーザー入力設定（トーン・対象職種・リライトオプション・カバーレター入力）

use crate::error::{Error, Result};
use crate::request::CoverLetterRequest;
use serde::{Deserialize, Serialize};

/// 対象職種のプリセット（自由入力も可）
pub const ROLE_PRESETS: [&str; 6] = [
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Marketing Manager",
    "Sales Representative",
    "UX Designer",
];

pub const DEFAULT_ROLE: &str = "Software Engineer";

/// リライトのトーン
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Concise,
    Formal,
    #[default]
    AchievementFocused,
    Creative,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Concise,
        Tone::Formal,
        Tone::AchievementFocused,
        Tone::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Concise => "concise",
            Tone::Formal => "formal",
            Tone::AchievementFocused => "achievement-focused",
            Tone::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Concise => "Concise",
            Tone::Formal => "Formal",
            Tone::AchievementFocused => "Achievement-focused",
            Tone::Creative => "Creative",
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "concise" => Ok(Tone::Concise),
            "formal" => Ok(Tone::Formal),
            "achievement-focused" | "achievement" => Ok(Tone::AchievementFocused),
            "creative" => Ok(Tone::Creative),
            _ => Err(format!(
                "Unknown tone: {}. Use concise, formal, achievement-focused, or creative",
                s
            )),
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カバーレターのトーン
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverLetterTone {
    #[default]
    Professional,
    Enthusiastic,
    Formal,
    Creative,
}

impl CoverLetterTone {
    pub const ALL: [CoverLetterTone; 4] = [
        CoverLetterTone::Professional,
        CoverLetterTone::Enthusiastic,
        CoverLetterTone::Formal,
        CoverLetterTone::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverLetterTone::Professional => "professional",
            CoverLetterTone::Enthusiastic => "enthusiastic",
            CoverLetterTone::Formal => "formal",
            CoverLetterTone::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoverLetterTone::Professional => "Professional",
            CoverLetterTone::Enthusiastic => "Enthusiastic",
            CoverLetterTone::Formal => "Formal",
            CoverLetterTone::Creative => "Creative",
        }
    }
}

impl std::str::FromStr for CoverLetterTone {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(CoverLetterTone::Professional),
            "enthusiastic" => Ok(CoverLetterTone::Enthusiastic),
            "formal" => Ok(CoverLetterTone::Formal),
            "creative" => Ok(CoverLetterTone::Creative),
            _ => Err(format!(
                "Unknown tone: {}. Use professional, enthusiastic, formal, or creative",
                s
            )),
        }
    }
}

impl std::fmt::Display for CoverLetterTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// リライトオプションの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOption {
    OptimizeKeywords,
    QuantifyAchievements,
    ImproveFormatting,
    EnhanceSummary,
}

impl RewriteOption {
    pub const ALL: [RewriteOption; 4] = [
        RewriteOption::OptimizeKeywords,
        RewriteOption::QuantifyAchievements,
        RewriteOption::ImproveFormatting,
        RewriteOption::EnhanceSummary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RewriteOption::OptimizeKeywords => "Optimize Keywords",
            RewriteOption::QuantifyAchievements => "Quantify Achievements",
            RewriteOption::ImproveFormatting => "Improve Formatting",
            RewriteOption::EnhanceSummary => "Enhance Summary",
        }
    }
}

/// リライトオプション（デフォルトは全て有効）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOptions {
    pub optimize_keywords: bool,
    pub quantify_achievements: bool,
    pub improve_formatting: bool,
    pub enhance_summary: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            optimize_keywords: true,
            quantify_achievements: true,
            improve_formatting: true,
            enhance_summary: true,
        }
    }
}

impl RewriteOptions {
    pub fn get(&self, option: RewriteOption) -> bool {
        match option {
            RewriteOption::OptimizeKeywords => self.optimize_keywords,
            RewriteOption::QuantifyAchievements => self.quantify_achievements,
            RewriteOption::ImproveFormatting => self.improve_formatting,
            RewriteOption::EnhanceSummary => self.enhance_summary,
        }
    }

    pub fn set(&mut self, option: RewriteOption, enabled: bool) {
        let slot = match option {
            RewriteOption::OptimizeKeywords => &mut self.optimize_keywords,
            RewriteOption::QuantifyAchievements => &mut self.quantify_achievements,
            RewriteOption::ImproveFormatting => &mut self.improve_formatting,
            RewriteOption::EnhanceSummary => &mut self.enhance_summary,
        };
        *slot = enabled;
    }

    /// 表示順の (オプション, 値) 一覧
    pub fn entries(&self) -> [(RewriteOption, bool); 4] {
        RewriteOption::ALL.map(|option| (option, self.get(option)))
    }
}

/// リライト設定（解析時の対象職種も兼ねる）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteSettings {
    pub tone: Tone,
    pub role: String,
    pub options: RewriteOptions,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            role: DEFAULT_ROLE.to_string(),
            options: RewriteOptions::default(),
        }
    }
}

/// カバーレター入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverLetterField {
    Company,
    Position,
    Experience,
}

/// カバーレター入力フォーム
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterForm {
    pub company: String,
    pub position: String,
    pub experience: String,
    pub tone: CoverLetterTone,
}

impl CoverLetterForm {
    pub fn set(&mut self, field: CoverLetterField, value: String) {
        match field {
            CoverLetterField::Company => self.company = value,
            CoverLetterField::Position => self.position = value,
            CoverLetterField::Experience => self.experience = value,
        }
    }

    /// 会社名と職種が空白のみでないことを確認してリクエストを作る（値は入力のまま送る）
    pub fn to_request(&self) -> Result<CoverLetterRequest> {
        if self.company.trim().is_empty() || self.position.trim().is_empty() {
            return Err(Error::Validation(
                "Please fill in company and position fields".to_string(),
            ));
        }

        Ok(CoverLetterRequest {
            company: self.company.clone(),
            position: self.position.clone(),
            experience: self.experience.clone(),
            tone: self.tone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_serde_kebab_case() {
        let json = serde_json::to_string(&Tone::AchievementFocused).expect("シリアライズ失敗");
        assert_eq!(json, "\"achievement-focused\"");

        let tone: Tone = serde_json::from_str("\"concise\"").expect("デシリアライズ失敗");
        assert_eq!(tone, Tone::Concise);
    }

    #[test]
    fn test_tone_from_str() {
        assert_eq!("Formal".parse::<Tone>(), Ok(Tone::Formal));
        assert_eq!("achievement_focused".parse::<Tone>(), Ok(Tone::AchievementFocused));
        assert!("loud".parse::<Tone>().is_err());
    }

    #[test]
    fn test_cover_letter_tone_default_professional() {
        assert_eq!(CoverLetterTone::default(), CoverLetterTone::Professional);
        assert_eq!("enthusiastic".parse::<CoverLetterTone>(), Ok(CoverLetterTone::Enthusiastic));
    }

    #[test]
    fn test_rewrite_options_default_all_enabled() {
        let options = RewriteOptions::default();
        assert!(options.entries().iter().all(|(_, enabled)| *enabled));
    }

    #[test]
    fn test_rewrite_options_set_and_serialize() {
        let mut options = RewriteOptions::default();
        options.set(RewriteOption::ImproveFormatting, false);
        assert!(!options.get(RewriteOption::ImproveFormatting));

        let json = serde_json::to_string(&options).expect("シリアライズ失敗");
        assert!(json.contains("\"optimizeKeywords\":true"));
        assert!(json.contains("\"improveFormatting\":false"));
    }

    #[test]
    fn test_rewrite_settings_default() {
        let settings = RewriteSettings::default();
        assert_eq!(settings.tone, Tone::AchievementFocused);
        assert_eq!(settings.role, "Software Engineer");
    }

    #[test]
    fn test_cover_letter_form_requires_company_and_position() {
        let mut form = CoverLetterForm::default();
        form.set(CoverLetterField::Company, "Google".to_string());
        assert!(matches!(form.to_request(), Err(Error::Validation(_))));

        form.set(CoverLetterField::Position, "   ".to_string());
        assert!(form.to_request().is_err());

        form.set(CoverLetterField::Position, "Software Engineer".to_string());
        form.set(CoverLetterField::Experience, "3 years".to_string());
        let request = form.to_request().expect("検証失敗");
        assert_eq!(request.company, "Google");
        assert_eq!(request.experience, "3 years");
        assert_eq!(request.tone, CoverLetterTone::Professional);
    }

    #[test]
    fn test_cover_letter_form_sends_fields_as_entered() {
        let mut form = CoverLetterForm::default();
        form.set(CoverLetterField::Company, " Google ".to_string());
        form.set(CoverLetterField::Position, "Software Engineer\n".to_string());
        form.set(CoverLetterField::Experience, "  Led a team of 5\n".to_string());

        let request = form.to_request().expect("検証失敗");
        assert_eq!(request.company, " Google ");
        assert_eq!(request.position, "Software Engineer\n");
        assert_eq!(request.experience, "  Led a team of 5\n");
    }
}
