use clap::Parser;
use gtm_dashboard::{cli, config, error, export, fetcher, report, uploader};
use cli::{Cli, Commands};
use config::Config;
use error::{DashboardError, Result};
use gtm_dashboard_common::{DashboardControls, DashboardData, DataOrigin, Dataset};
use std::path::Path;
use std::time::Duration;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// ファイル指定があればファイル、無ければシートから読み込む
async fn load_input(input: Option<&Path>, config: &Config) -> Result<Option<(Dataset, DataOrigin)>> {
    match input {
        Some(path) => {
            let dataset = uploader::load_file(path)?;
            println!("✔ {}行を読み込み: {}", dataset.len(), path.display());
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            Ok(Some((dataset, DataOrigin::Upload(name))))
        }
        None => {
            let url = config.sheet_url();
            let timeout = Duration::from_secs(config.timeout_seconds);
            let dataset = fetcher::fetch_sheet(&url, timeout).await?;
            Ok(dataset.map(|d| (d, DataOrigin::Sheet(url))))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Fetch { url, output } => {
            let url = url.unwrap_or_else(|| config.sheet_url());
            let timeout = Duration::from_secs(config.timeout_seconds);

            let dataset = fetcher::fetch_sheet(&url, timeout)
                .await?
                .ok_or_else(|| DashboardError::NoData(url.clone()))?;

            let json = serde_json::to_string_pretty(&dataset)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ 保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Show { input, sample, view, mode, dev } => {
            let loaded = if sample {
                None
            } else {
                load_input(input.as_deref(), &config).await?
            };

            let (dataset, origin) = match loaded {
                Some((dataset, origin)) => (Some(dataset), origin),
                None => {
                    if !sample {
                        println!("- サンプルデータを表示します");
                    }
                    (None, DataOrigin::Sample)
                }
            };

            let data = dataset
                .as_ref()
                .map(DashboardData::from_dataset)
                .unwrap_or_else(DashboardData::sample);
            let palette = config.palette()?;
            let controls = DashboardControls {
                view,
                mode,
                developer_mode: dev,
            };

            let input = report::ReportInput {
                dataset: dataset.as_ref(),
                origin: &origin,
                data: &data,
                palette: &palette,
                currency: &config.currency_symbol,
            };
            print!("{}", report::render(&input, &controls));
        }

        Commands::Export { input, output } => {
            println!("📊 gtm-dashboard - エクスポート\n");

            let (dataset, _origin) = load_input(input.as_deref(), &config)
                .await?
                .ok_or_else(|| DashboardError::NoData(config.sheet_url()))?;

            let data = DashboardData::from_dataset(&dataset);
            let palette = config.palette()?;

            println!("- Excelを生成中...");
            let path = export::export_workbook(&dataset, &data, &palette, &config.currency_symbol, &output)?;
            println!("✔ Excel出力: {}", path.display());
        }

        Commands::Config { set_sheet_url, palette, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_sheet_url {
                config.set_sheet_url(url)?;
                changed = true;
                println!("✔ シートURLを設定しました");
            }

            if let Some(path) = palette {
                if !path.exists() {
                    return Err(DashboardError::FileNotFound(path.display().to_string()));
                }
                config.palette_path = Some(path);
                changed = true;
                println!("✔ オブジェクション色を設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  シートURL: {}", config.sheet_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  通貨記号: {}", config.currency_symbol);
                println!(
                    "  色設定: {}",
                    config
                        .palette_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "既定".into())
                );
            }
        }
    }

    Ok(())
}
