use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{board_to_row, flatten, get_headers};
use crate::export::notify_export_success;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Column holding the status in the flat export.
const STATUS_COL: usize = 4;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn status_fill(status: &str) -> Option<Color> {
    match status {
        "Clean" => Some(Color::RGB(0xC6EFCE)),
        "In Progress" => Some(Color::RGB(0xFFEB9C)),
        "Dirty" => Some(Color::RGB(0xFFC7CE)),
        _ => None,
    }
}

/// XLSX export: a "Board" sheet with rooms and areas, a "Counts" sheet with
/// the totals.
pub(crate) fn export_xlsx(snapshot: &Snapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    write_board(workbook.add_worksheet(), snapshot)?;
    write_counts(workbook.add_worksheet(), snapshot)?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_board(worksheet: &mut Worksheet, snapshot: &Snapshot) -> AppResult<()> {
    worksheet.set_name("Board").map_err(to_export_error)?;

    let headers = get_headers();
    let head_fmt = header_format();
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &head_fmt)
            .map_err(to_export_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, item) in flatten(snapshot).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in board_to_row(item).iter().enumerate() {
            let bg = if col == STATUS_COL {
                status_fill(value).unwrap_or(band)
            } else {
                band
            };
            write_cell(worksheet, row, col as u16, value, bg)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn write_counts(worksheet: &mut Worksheet, snapshot: &Snapshot) -> AppResult<()> {
    worksheet.set_name("Counts").map_err(to_export_error)?;

    let head_fmt = header_format();
    for (col, h) in ["", "Total", "Dirty", "In Progress", "Clean"].iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *h, &head_fmt)
            .map_err(to_export_error)?;
    }

    let c = &snapshot.counts;
    let lines = [
        ("Rooms", [c.total_rooms, c.dirty_rooms, c.in_progress_rooms, c.clean_rooms]),
        ("Areas", [c.total_areas, c.dirty_areas, c.in_progress_areas, c.clean_areas]),
    ];
    for (i, (label, values)) in lines.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write(row, 0, *label).map_err(to_export_error)?;
        for (j, v) in values.iter().enumerate() {
            worksheet
                .write(row, (j + 1) as u16, *v as f64)
                .map_err(to_export_error)?;
        }
    }
    worksheet.set_column_width(0, 10.0).map_err(to_export_error)?;
    worksheet.set_column_width(3, 12.0).map_err(to_export_error)?;
    Ok(())
}

/// Write one cell, turning stamps into real Excel dates.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
