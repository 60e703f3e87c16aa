use clap::{Parser, Subcommand};
use resume_assist_common::{CoverLetterTone, Tone};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-assist")]
#[command(about = "履歴書解析・リライト・カバーレター生成クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書ファイルを解析
    Analyze {
        /// 履歴書ファイル（PDF/DOC/DOCX/TXT）
        #[arg(required = true)]
        file: PathBuf,

        /// 対象職種
        #[arg(short, long)]
        role: Option<String>,

        /// 解析結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 履歴書をリライト
    Rewrite {
        /// 履歴書ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// トーン (concise/formal/achievement-focused/creative)
        #[arg(short, long)]
        tone: Option<Tone>,

        /// 対象職種
        #[arg(short, long)]
        role: Option<String>,

        /// テキスト抽出に失敗した場合に使う履歴書テキストファイル
        #[arg(long)]
        text: Option<PathBuf>,

        #[arg(long)]
        no_optimize_keywords: bool,

        #[arg(long)]
        no_quantify_achievements: bool,

        #[arg(long)]
        no_improve_formatting: bool,

        #[arg(long)]
        no_enhance_summary: bool,

        /// 結果をファイルに保存（パス省略時は rewritten-resume.txt）
        #[arg(short, long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// カバーレターを生成
    CoverLetter {
        /// 会社名
        #[arg(long)]
        company: Option<String>,

        /// 職種
        #[arg(long)]
        position: Option<String>,

        /// アピールしたい経験
        #[arg(long)]
        experience: Option<String>,

        /// トーン (professional/enthusiastic/formal/creative)
        #[arg(short, long)]
        tone: Option<CoverLetterTone>,

        /// 対話的に入力
        #[arg(short, long)]
        interactive: bool,

        /// 結果をファイルに保存（パス省略時は cover-letter.txt）
        #[arg(short, long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// 求人票を解析
    ParseJd {
        /// 求人票テキストファイル
        file: Option<PathBuf>,

        /// 求人票テキストを直接指定
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },

    /// テンプレート一覧を表示
    Templates,

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// エンドポイントのパスを上書き（action=/path、パス省略で解除）
        #[arg(long, value_name = "ACTION=PATH")]
        set_path: Vec<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
