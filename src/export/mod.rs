use crate::error::{DashboardError, Result};
use gtm_dashboard_common::export::excel_core::generate_workbook_buffer;
use gtm_dashboard_common::{DashboardData, Dataset, ObjectionPalette};
use std::path::{Path, PathBuf};

/// 出力先がディレクトリ（または拡張子なし）なら日付入りのファイル名を付ける
pub fn output_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        let stamp = chrono::Local::now().format("%Y%m%d");
        output.join(format!("gtm-dashboard-{}.xlsx", stamp))
    } else {
        output.to_path_buf()
    }
}

/// Records / Summary の2シートを書き出す
pub fn export_workbook(
    dataset: &Dataset,
    data: &DashboardData,
    palette: &ObjectionPalette,
    currency: &str,
    output: &Path,
) -> Result<PathBuf> {
    let path = output_path(output);
    let bytes = generate_workbook_buffer(dataset, data, palette, currency)
        .map_err(|e| DashboardError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, bytes)?;
    Ok(path)
}
