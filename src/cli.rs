use clap::{Parser, Subcommand};
use gtm_dashboard_common::{DashboardView, ViewMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gtm-dashboard")]
#[command(about = "営業GTMダッシュボード（シート取込・サマリ表示・Excel出力）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 公開シートを取得してJSONで保存
    Fetch {
        /// シートURL（省略時は設定値）
        #[arg(short, long)]
        url: Option<String>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ダッシュボードを表示
    Show {
        /// 入力ファイル（csv/tsv/json/xlsx）。省略時はシートを取得
        input: Option<PathBuf>,

        /// シートを取得せずサンプルデータを表示
        #[arg(long, conflicts_with = "input")]
        sample: bool,

        /// 表示対象 (ae/cl-insight)
        #[arg(long, default_value = "ae")]
        view: DashboardView,

        /// 一覧の表示形式 (table/cards)
        #[arg(long, default_value = "table")]
        mode: ViewMode,

        /// 診断情報を表示
        #[arg(long)]
        dev: bool,
    },

    /// Excelに出力
    Export {
        /// 入力ファイル。省略時はシートを取得
        input: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// 設定の表示・変更
    Config {
        /// シートURLを設定
        #[arg(long)]
        set_sheet_url: Option<String>,

        /// オブジェクション色のJSONファイルを設定
        #[arg(long)]
        palette: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
