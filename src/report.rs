//! ダッシュボードのテキスト表示
//!
//! Web版と同じカード表示モデルを使い、ターミナル向けに整形する

use gtm_dashboard_common::{
    market_slots, objection_bars, AlertBanner, DashboardControls, DashboardData, DashboardView,
    DataOrigin, Dataset, ObjectionPalette, ViewMode,
};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;
const MAX_CELL_WIDTH: usize = 24;

/// 表示に必要な入力一式
pub struct ReportInput<'a> {
    pub dataset: Option<&'a Dataset>,
    pub origin: &'a DataOrigin,
    pub data: &'a DashboardData,
    pub palette: &'a ObjectionPalette,
    pub currency: &'a str,
}

pub fn render(input: &ReportInput<'_>, controls: &DashboardControls) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===\n", controls.view.label());

    match controls.view {
        DashboardView::Ae => {
            render_hero(&mut out, input);
            render_alerts(&mut out, input.data);
            if let Some(dataset) = input.dataset {
                match controls.mode {
                    ViewMode::Table => render_table(&mut out, dataset),
                    ViewMode::Cards => render_cards(&mut out, dataset),
                }
            }
        }
        DashboardView::ClInsight => {
            render_market_context(&mut out, input.data);
            render_objections(&mut out, input.data, input.palette);
        }
    }

    if controls.developer_mode {
        render_developer(&mut out, input);
    }
    out
}

fn render_hero(out: &mut String, input: &ReportInput<'_>) {
    let tiles = input.data.hero.tiles(input.currency);
    let line: Vec<String> = tiles
        .iter()
        .map(|t| format!("{}: {}", t.label, t.value))
        .collect();
    let _ = writeln!(out, "{}\n", line.join("  |  "));
}

fn render_alerts(out: &mut String, data: &DashboardData) {
    let _ = writeln!(out, "Strategic Alerts");
    let banner = AlertBanner::new(false, &data.red_flags);
    match &banner {
        AlertBanner::Alerts(list) => {
            for alert in list {
                let _ = writeln!(out, "  ! {}", alert);
            }
        }
        _ => {
            let _ = writeln!(out, "  {}", banner.message().unwrap_or_default());
        }
    }
    out.push('\n');
}

fn render_market_context(out: &mut String, data: &DashboardData) {
    let _ = writeln!(out, "Market Context");
    for slot in market_slots(&data.market_context) {
        let _ = writeln!(out, "  {}: {}", slot.category.title(), slot.description);
    }
    out.push('\n');
}

fn render_objections(out: &mut String, data: &DashboardData, palette: &ObjectionPalette) {
    let _ = writeln!(out, "Objection Breakdown");
    let bars = objection_bars(&data.objections, palette);
    if bars.is_empty() {
        let _ = writeln!(out, "  (no objections recorded)");
    }
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    for bar in bars {
        let filled = (bar.ratio * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "  {:<width$} {} {}",
            bar.label,
            "█".repeat(filled.max(1)),
            bar.value,
            width = label_width
        );
    }
    out.push('\n');
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn render_table(out: &mut String, dataset: &Dataset) {
    let columns = dataset.columns();
    let rows: Vec<Vec<String>> = (0..dataset.len()).map(|i| dataset.row_cells(i)).collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(c, name)| {
            rows.iter()
                .map(|r| r[c].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", truncate(cell, *w), width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let _ = writeln!(out, "{}", format_row(columns));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
    );
    for row in &rows {
        let _ = writeln!(out, "{}", format_row(row.as_slice()));
    }
    out.push('\n');
}

fn render_cards(out: &mut String, dataset: &Dataset) {
    for i in 0..dataset.len() {
        let _ = writeln!(out, "+ Record {}", i + 1);
        for (name, value) in dataset.columns().iter().zip(dataset.row_cells(i)) {
            if !value.is_empty() {
                let _ = writeln!(out, "|  {}: {}", name, value);
            }
        }
    }
    out.push('\n');
}

fn render_developer(out: &mut String, input: &ReportInput<'_>) {
    let _ = writeln!(out, "--- developer ---");
    let _ = writeln!(out, "source: {}", input.origin.describe());
    if let Some(dataset) = input.dataset {
        let _ = writeln!(out, "rows: {}", dataset.len());
        let _ = writeln!(out, "columns: {}", dataset.columns().join(", "));
    }
    let _ = writeln!(out, "skipped rows: {}", input.data.skipped_rows);
}
