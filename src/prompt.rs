//! カバーレター入力の対話プロンプト

use crate::error::{ResumeAssistError, Result};
use dialoguer::{Input, Select};
use resume_assist_common::{CoverLetterField, CoverLetterForm, CoverLetterTone};

fn ask(prompt: &str, initial: &str, allow_empty: bool) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| ResumeAssistError::Prompt(e.to_string()))
}

/// 引数で埋まっていない項目も含めて全項目を確認する
pub fn fill_cover_letter_form(form: &mut CoverLetterForm) -> Result<()> {
    println!("📝 カバーレター情報を入力してください\n");

    let company = ask("Company Name", &form.company, false)?;
    form.set(CoverLetterField::Company, company);

    let position = ask("Position", &form.position, false)?;
    form.set(CoverLetterField::Position, position);

    let experience = ask("Relevant Experience (任意)", &form.experience, true)?;
    form.set(CoverLetterField::Experience, experience);

    let labels: Vec<&str> = CoverLetterTone::ALL.iter().map(|t| t.label()).collect();
    let current = CoverLetterTone::ALL
        .iter()
        .position(|t| *t == form.tone)
        .unwrap_or(0);
    let selected = Select::new()
        .with_prompt("Tone")
        .items(&labels)
        .default(current)
        .interact()
        .map_err(|e| ResumeAssistError::Prompt(e.to_string()))?;
    form.tone = CoverLetterTone::ALL[selected];

    Ok(())
}
