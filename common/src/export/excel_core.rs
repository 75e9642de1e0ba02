//! Excel生成（共通ライブラリ）
//!
//! シート構成:
//! - Records: 取込データそのまま（ヘッダ順）
//! - Summary: ヒーローメトリクス・アラート・オブジェクション内訳

use crate::cards::{objection_bars, ObjectionPalette};
use crate::dashboard::DashboardData;
use crate::error::Result;
use crate::record::{CellValue, Dataset};
use rust_xlsxwriter::*;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x1E293B))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCBD5E1))
}

fn section_format() -> Format {
    Format::new().set_bold().set_font_size(13.0)
}

/// Excelをバッファに生成
pub fn generate_workbook_buffer(
    dataset: &Dataset,
    data: &DashboardData,
    palette: &ObjectionPalette,
    currency: &str,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Records")?;
        write_records(worksheet, dataset)?;
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Summary")?;
        write_summary(worksheet, data, palette, currency)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_records(worksheet: &mut Worksheet, dataset: &Dataset) -> Result<()> {
    let header = header_format();
    for (col, name) in dataset.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header)?;
        worksheet.set_column_width(col as u16, 18)?;
    }

    for (i, record) in dataset.records().iter().enumerate() {
        let row = i as u32 + 1;
        for (col, name) in dataset.columns().iter().enumerate() {
            let col = col as u16;
            match record.get(name) {
                Some(CellValue::Number(n)) => {
                    worksheet.write_number(row, col, *n)?;
                }
                Some(CellValue::Bool(b)) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                Some(CellValue::Text(s)) => {
                    worksheet.write_string(row, col, s)?;
                }
                Some(CellValue::Empty) | None => {}
            }
        }
    }

    if !dataset.columns().is_empty() {
        worksheet.set_freeze_panes(1, 0)?;
    }
    Ok(())
}

fn write_summary(
    worksheet: &mut Worksheet,
    data: &DashboardData,
    palette: &ObjectionPalette,
    currency: &str,
) -> Result<()> {
    let section = section_format();
    let header = header_format();
    worksheet.set_column_width(0, 28)?;
    worksheet.set_column_width(1, 48)?;

    let mut row: u32 = 0;
    worksheet.write_string_with_format(row, 0, "Metrics", &section)?;
    row += 1;
    for tile in data.hero.tiles(currency) {
        worksheet.write_string(row, 0, tile.label)?;
        worksheet.write_string(row, 1, &tile.value)?;
        row += 1;
    }

    row += 1;
    worksheet.write_string_with_format(row, 0, "Strategic Alerts", &section)?;
    row += 1;
    for flag in &data.red_flags {
        worksheet.write_string(row, 0, flag)?;
        row += 1;
    }

    row += 1;
    worksheet.write_string_with_format(row, 0, "Objection", &header)?;
    worksheet.write_string_with_format(row, 1, "Count", &header)?;
    row += 1;
    for bar in objection_bars(&data.objections, palette) {
        let color = u32::from_str_radix(bar.color.trim_start_matches('#'), 16).unwrap_or(0x94A3B8);
        let swatch = Format::new().set_font_color(Color::RGB(color)).set_bold();
        worksheet.write_string_with_format(row, 0, &bar.label, &swatch)?;
        worksheet.write_number(row, 1, bar.value)?;
        row += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    #[test]
    fn test_generate_workbook_buffer() {
        let dataset = parse_csv("Account,Amount,Objection\nAcme,100,Objection::Pricing\n").expect("パース失敗");
        let data = DashboardData::from_dataset(&dataset);
        let bytes = generate_workbook_buffer(&dataset, &data, &ObjectionPalette::default(), "$")
            .expect("Excel生成失敗");

        // xlsx は zip
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_workbook_empty_dataset() {
        let bytes = generate_workbook_buffer(
            &Dataset::default(),
            &DashboardData::sample(),
            &ObjectionPalette::default(),
            "$",
        )
        .expect("Excel生成失敗");
        assert!(!bytes.is_empty());
    }
}
