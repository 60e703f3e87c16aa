use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use resume_assist::{cli, client, config, error, output, prompt, render};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::{ResumeAssistError, Result};
use resume_assist_common::{
    Action, AnalysisView, Artifact, CoverLetterField, Event, JobDescriptionView, RewriteOption,
    RewriteRequest, SessionState, TemplateCard,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 開始できなかった場合は直近の通知をエラーにする
fn started<T>(state: &SessionState, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        let message = state
            .notices
            .last()
            .map(|n| n.message.clone())
            .unwrap_or_else(|| "request already in progress".to_string());
        ResumeAssistError::Input(message)
    })
}

/// 失敗を状態に反映して、表示用メッセージを出す
fn failed(state: &mut SessionState, action: Action, err: ResumeAssistError) -> ResumeAssistError {
    tracing::error!(?action, error = %err, "request failed");
    state.apply(Event::Failed {
        action,
        detail: err.to_string(),
    });
    if let Some(notice) = state.notices.last() {
        eprintln!("✘ {}", notice.message);
    }
    err
}

fn save_artifact(artifact: Artifact, text: &str, target: Option<Option<PathBuf>>) -> Result<()> {
    let Some(target) = target else {
        return Ok(());
    };
    let cwd = std::env::current_dir()?;
    let path = output::resolve_path(artifact, target, &cwd);
    output::save(artifact, text, &path)?;
    println!("✔ 保存しました: {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("エラー: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = &cli.base_url {
        config.set_base_url(url)?;
    }
    tracing::debug!(base_url = %config.base_url, overrides = config.paths.len(), "config loaded");

    let mut state = SessionState::new();
    state.apply(Event::RoleChanged(config.default_role.clone()));
    state.apply(Event::ToneChanged(config.default_tone));

    match cli.command {
        Commands::Analyze { file, role, json } => {
            let client = ApiClient::new(config.endpoints(), config.timeout_seconds)?;
            state.apply(Event::FileSelected(client::describe_file(&file)?));
            if let Some(role) = role {
                state.apply(Event::RoleChanged(role));
            }
            let started_value = state.begin_analyze();
            let role = started(&state, started_value)?;

            let pb = spinner("Analyzing your resume...");
            let result = client.analyze(&file, &role).await;
            pb.finish_and_clear();

            let analysis = result.map_err(|e| failed(&mut state, Action::Analyze, e))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render::analysis(&AnalysisView::from(&analysis)));
            }
            state.apply(Event::AnalysisLoaded(analysis));
        }

        Commands::Rewrite {
            file,
            tone,
            role,
            text,
            no_optimize_keywords,
            no_quantify_achievements,
            no_improve_formatting,
            no_enhance_summary,
            output,
        } => {
            let client = ApiClient::new(config.endpoints(), config.timeout_seconds)?;
            state.apply(Event::FileSelected(client::describe_file(&file)?));
            if let Some(tone) = tone {
                state.apply(Event::ToneChanged(tone));
            }
            if let Some(role) = role {
                state.apply(Event::RoleChanged(role));
            }
            for (option, disabled) in [
                (RewriteOption::OptimizeKeywords, no_optimize_keywords),
                (RewriteOption::QuantifyAchievements, no_quantify_achievements),
                (RewriteOption::ImproveFormatting, no_improve_formatting),
                (RewriteOption::EnhanceSummary, no_enhance_summary),
            ] {
                state.apply(Event::RewriteOptionToggled(option, !disabled));
            }
            if let Some(path) = text {
                state.apply(Event::ResumeTextChanged(std::fs::read_to_string(path)?));
            }

            let started_value = state.begin_rewrite();
            let settings = started(&state, started_value)?;

            let pb = spinner("Rewriting your resume...");
            let result = async {
                let extracted = client.extract_text(&file).await?;
                let request =
                    RewriteRequest::build(&settings, extracted.as_deref(), &state.resume_text)?;
                client.rewrite(&request).await
            }
            .await;
            pb.finish_and_clear();

            let rewritten = result.map_err(|e| failed(&mut state, Action::Rewrite, e))?;
            state.apply(Event::RewriteLoaded(rewritten));

            let text = state.artifact_text(Artifact::RewrittenResume);
            println!("{}\n\n{}", Artifact::RewrittenResume.title(), text);
            save_artifact(Artifact::RewrittenResume, text, output)?;
        }

        Commands::CoverLetter {
            company,
            position,
            experience,
            tone,
            interactive,
            output,
        } => {
            for (field, value) in [
                (CoverLetterField::Company, company),
                (CoverLetterField::Position, position),
                (CoverLetterField::Experience, experience),
            ] {
                if let Some(value) = value {
                    state.apply(Event::CoverLetterFieldChanged(field, value));
                }
            }
            if let Some(tone) = tone {
                state.apply(Event::CoverLetterToneChanged(tone));
            }
            if interactive {
                let mut form = state.cover_letter_form.clone();
                prompt::fill_cover_letter_form(&mut form)?;
                state.cover_letter_form = form;
            }

            let client = ApiClient::new(config.endpoints(), config.timeout_seconds)?;
            let started_value = state.begin_cover_letter();
            let request = started(&state, started_value)?;

            let pb = spinner("Generating cover letter...");
            let result = client.cover_letter(&request).await;
            pb.finish_and_clear();

            let letter = result.map_err(|e| failed(&mut state, Action::CoverLetter, e))?;
            state.apply(Event::CoverLetterLoaded(letter));

            let text = state.artifact_text(Artifact::CoverLetter);
            println!("{}\n\n{}", Artifact::CoverLetter.title(), text);
            save_artifact(Artifact::CoverLetter, text, output)?;
        }

        Commands::ParseJd { file, text } => {
            let description = match (file, text) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .map_err(|_| ResumeAssistError::FileNotFound(path.display().to_string()))?,
                (None, Some(text)) => text,
                (None, None) => String::new(),
            };
            state.apply(Event::JobDescriptionChanged(description));

            let client = ApiClient::new(config.endpoints(), config.timeout_seconds)?;
            let started_value = state.begin_parse_job_description();
            let request = started(&state, started_value)?;

            let pb = spinner("Parsing job description...");
            let result = client.parse_job_description(&request).await;
            pb.finish_and_clear();

            let analysis =
                result.map_err(|e| failed(&mut state, Action::ParseJobDescription, e))?;
            print!("{}", render::job_description(&JobDescriptionView::from(&analysis)));
            state.apply(Event::JobDescriptionLoaded(analysis));
        }

        Commands::Templates => {
            let client = ApiClient::new(config.endpoints(), config.timeout_seconds)?;
            if !state.begin_load_templates() {
                return Ok(());
            }

            let pb = spinner("Loading templates...");
            let result = client.list_templates().await;
            pb.finish_and_clear();

            let templates = result.map_err(|e| failed(&mut state, Action::ListTemplates, e))?;
            let cards: Vec<TemplateCard> = templates.iter().map(TemplateCard::from).collect();
            print!("{}", render::templates(&cards));
            state.apply(Event::TemplatesLoaded(templates));
        }

        Commands::Config {
            set_base_url,
            set_path,
            show,
        } => {
            // 環境変数・引数の上書きを保存しないよう読み直す
            let mut stored = Config::load_from(&Config::config_path()?)?;
            let changed = set_base_url.is_some() || !set_path.is_empty();

            if let Some(url) = set_base_url {
                stored.set_base_url(&url)?;
                println!("✔ ベースURLを設定しました");
            }
            for spec in &set_path {
                stored.set_path(spec)?;
                println!("✔ パスを設定しました: {}", spec);
            }
            if changed {
                stored.save()?;
            }

            if show || !changed {
                let shown = if changed { &stored } else { &config };
                println!("設定:");
                println!("  ベースURL: {}", shown.base_url);
                for action in Action::ALL {
                    println!("  {}: {}", action.key(), shown.endpoints().url(action));
                }
                println!("  タイムアウト: {}秒", shown.timeout_seconds);
                println!("  対象職種: {}", shown.default_role);
                println!("  トーン: {}", shown.default_tone.label());
            }
        }
    }

    Ok(())
}
