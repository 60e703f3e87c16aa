//! バックエンドレスポンスの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ResumeAnalysis: 履歴書解析結果（analyze）
//! - JobDescriptionAnalysis: 求人票のスキル抽出結果（parse job description）
//! - ResumeTemplate: テンプレートカタログ（list templates）

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// キーワード分類（不足/推奨/既存）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordBuckets {
    pub missing: Vec<String>,
    pub suggested: Vec<String>,
    pub present: Vec<String>,
}

/// セクション別の評価
#[derive(Debug, Clone, PartialEq)]
pub struct SectionScore {
    pub name: String,
    pub score: f64,
    pub feedback: String,
}

/// 履歴書解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub ats_score: f64,

    pub overall_rating: f64,

    #[serde(default)]
    pub strengths: Vec<String>,

    #[serde(default)]
    pub improvements: Vec<String>,

    #[serde(default)]
    pub keywords: KeywordBuckets,

    /// サーバーが返した順序を保持する
    #[serde(
        default,
        deserialize_with = "sections_from_map",
        serialize_with = "sections_to_map"
    )]
    pub sections: Vec<SectionScore>,
}

impl ResumeAnalysis {
    /// スコアの範囲チェック（ATS 0-100, 総合 0-5, セクション 0-10）
    pub fn validate(&self) -> Result<()> {
        check_range("atsScore", self.ats_score, 100.0)?;
        check_range("overallRating", self.overall_rating, 5.0)?;
        for section in &self.sections {
            check_range(&format!("sections.{}.score", section.name), section.score, 10.0)?;
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, max: f64) -> Result<()> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::Schema(format!(
            "{} out of range (0-{}): {}",
            field, max, value
        )))
    }
}

#[derive(Deserialize, Serialize)]
struct SectionBody {
    score: f64,
    #[serde(default)]
    feedback: String,
}

fn sections_from_map<'de, D>(deserializer: D) -> std::result::Result<Vec<SectionScore>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
    map.into_iter()
        .map(|(name, value)| -> std::result::Result<SectionScore, D::Error> {
            let body: SectionBody =
                serde_json::from_value(value).map_err(serde::de::Error::custom)?;
            Ok(SectionScore {
                name,
                score: body.score,
                feedback: body.feedback,
            })
        })
        .collect()
}

fn sections_to_map<S>(sections: &[SectionScore], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for section in sections {
        map.serialize_entry(
            &section.name,
            &SectionBody {
                score: section.score,
                feedback: section.feedback.clone(),
            },
        )?;
    }
    map.end()
}

/// 求人票から抽出したスキル分類
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillBuckets {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub required: Vec<String>,
    pub preferred: Vec<String>,
}

/// 求人票解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionAnalysis {
    pub skills: SkillBuckets,

    #[serde(default)]
    pub keywords: Vec<String>,
}

/// テンプレートカタログのエントリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplate {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub popularity: f64,    // %

    #[serde(default)]
    pub ats_score: f64,     // %

    #[serde(default)]
    pub features: Vec<String>,
}

impl ResumeTemplate {
    /// 人気度・ATSスコアの範囲チェック（どちらも 0-100）
    pub fn validate(&self) -> Result<()> {
        check_range(&format!("templates.{}.popularity", self.id), self.popularity, 100.0)?;
        check_range(&format!("templates.{}.atsScore", self.id), self.ats_score, 100.0)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
