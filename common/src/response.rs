//! APIレスポンスパーサー
//!
//! レスポンスは `{"success": true, "<payload>": ...}` 形式を前提とし、
//! 境界で検証してから型付きの値を返す。不正な形は全て `Error` になる。

use crate::error::{Error, Result};
use crate::types::{JobDescriptionAnalysis, ResumeAnalysis, ResumeTemplate};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// 解析エンドポイントが返す抽出テキストのフィールド
pub const EXTRACTED_TEXT_FIELD: &str = "extractedText";

/// success フラグを確認してオブジェクトを返す
fn envelope(body: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(map) = value else {
        return Err(Error::Schema("response body is not a JSON object".to_string()));
    };

    if map.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(Error::Unsuccessful(server_message(&map)));
    }

    Ok(map)
}

fn server_message(map: &Map<String, Value>) -> String {
    ["error", "message"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .unwrap_or("success flag missing or false")
        .to_string()
}

fn payload<T: DeserializeOwned>(map: &mut Map<String, Value>, field: &str) -> Result<T> {
    let value = map
        .remove(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| Error::MissingField(field.to_string()))?;
    serde_json::from_value(value).map_err(|e| Error::Schema(format!("{}: {}", field, e)))
}

/// 非2xxレスポンスのエラーを組み立てる
///
/// ボディに `error` / `message` があればそれを使う
pub fn http_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.as_object().map(server_message))
        .filter(|m| m != "success flag missing or false")
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        });
    Error::Http { status, message }
}

/// 履歴書解析レスポンスをパース
pub fn parse_analysis(body: &str, field: &str) -> Result<ResumeAnalysis> {
    let mut map = envelope(body)?;
    let analysis: ResumeAnalysis = payload(&mut map, field)?;
    analysis.validate()?;
    Ok(analysis)
}

/// リライト前のテキスト抽出レスポンスをパース
///
/// `extractedText` は任意。空文字は None として扱う
pub fn parse_extracted_text(body: &str) -> Result<Option<String>> {
    let map = envelope(body)?;
    Ok(map
        .get(EXTRACTED_TEXT_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|t| !t.trim().is_empty()))
}

/// 生成テキスト（リライト結果・カバーレター）をパース
pub fn parse_text(body: &str, field: &str) -> Result<String> {
    let mut map = envelope(body)?;
    let text: String = payload(&mut map, field)?;
    if text.trim().is_empty() {
        return Err(Error::Schema(format!("{}: empty text", field)));
    }
    Ok(text)
}

/// 求人票解析レスポンスをパース
pub fn parse_job_description(body: &str, field: &str) -> Result<JobDescriptionAnalysis> {
    let mut map = envelope(body)?;
    payload(&mut map, field)
}

/// テンプレート一覧レスポンスをパース
pub fn parse_templates(body: &str, field: &str) -> Result<Vec<ResumeTemplate>> {
    let mut map = envelope(body)?;
    let templates: Vec<ResumeTemplate> = payload(&mut map, field)?;
    for template in &templates {
        template.validate()?;
    }
    Ok(templates)
}
