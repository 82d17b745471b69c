//! Workbook loader: first worksheet, header skipped, six mapped columns

use std::path::Path;

use umya_spreadsheet::Worksheet;

use super::types::{DateCell, LoadSummary, RawRow, Record};
use crate::consts::{DATE_FORMAT, MIN_COLUMNS};
use crate::error::AppError;
use crate::utils::{excel_serial_to_date, is_date_format_code};

/// Read every row of the first worksheet into memory.
///
/// Rows are as wide as the sheet's highest used column, so a row is only
/// "short" when the whole sheet is narrower than the mapped columns.
pub(crate) fn read_rows(path: &Path) -> Result<Vec<RawRow>, AppError> {
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| AppError::OpenWorkbook {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let sheet = book
        .get_sheet_collection()
        .first()
        .ok_or_else(|| AppError::NoWorksheet {
            path: path.to_path_buf(),
        })?;

    let (max_col, max_row) = sheet.get_highest_column_and_row();
    tracing::debug!(
        sheet = sheet.get_name(),
        columns = max_col,
        rows = max_row,
        "reading worksheet"
    );

    let rows = (1..=max_row)
        .map(|row| (1..=max_col).map(|col| cell_text(sheet, col, row)).collect())
        .collect();
    Ok(rows)
}

/// Display text of a cell; date-formatted serial numbers come back as ISO dates.
fn cell_text(sheet: &Worksheet, col: u32, row: u32) -> Option<String> {
    let cell = sheet.get_cell((col, row))?;

    let is_date_cell = cell
        .get_style()
        .get_number_format()
        .is_some_and(|fmt| is_date_format_code(fmt.get_format_code()));
    if is_date_cell
        && let Ok(serial) = cell.get_value().parse::<f64>()
        && let Some(date) = excel_serial_to_date(serial)
    {
        return Some(date.format(DATE_FORMAT).to_string());
    }

    let text = sheet.get_formatted_value((col, row));
    if text.is_empty() { None } else { Some(text) }
}

/// Map raw rows to records. The first row is the header; rows narrower than
/// the mapped columns are skipped and counted.
pub(crate) fn records_from_rows<S: AsRef<str>>(
    rows: Vec<RawRow>,
    date_markers: &[S],
    summary: &mut LoadSummary,
) -> Vec<Record> {
    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));

    for (idx, row) in rows.into_iter().enumerate().skip(1) {
        summary.rows_read += 1;
        if row.len() < MIN_COLUMNS {
            summary.short_rows += 1;
            tracing::debug!(row = idx + 1, width = row.len(), "skipping short row");
            continue;
        }

        let mut cells = row.into_iter();
        let mut next = || cells.next().flatten();
        let sequence = parse_sequence(next().as_deref());
        let tool = next();
        let model = next();
        let date = DateCell::new(next(), date_markers);
        let prompt = next();
        let purpose = next();

        records.push(Record {
            sequence,
            tool,
            model,
            date,
            prompt,
            purpose,
        });
    }

    records
}

/// Sequence numbers may be typed as text or stored as floats ("7.0").
fn parse_sequence(value: Option<&str>) -> i64 {
    let Some(raw) = value.map(str::trim) else {
        return 0;
    };
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        .unwrap_or(0)
}

/// Load all records from the workbook at `path`.
pub(crate) fn load_records<S: AsRef<str>>(
    path: &Path,
    date_markers: &[S],
    summary: &mut LoadSummary,
) -> Result<Vec<Record>, AppError> {
    let rows = read_rows(path)?;
    Ok(records_from_rows(rows, date_markers, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DATE_MARKERS;
    use chrono::NaiveDate;

    fn row(cells: &[&str]) -> RawRow {
        cells
            .iter()
            .map(|c| if c.is_empty() { None } else { Some((*c).to_string()) })
            .collect()
    }

    fn header() -> RawRow {
        row(&["Nr", "Tool", "Modell", "Datum", "Prompt", "Zweck"])
    }

    #[test]
    fn header_row_is_skipped() {
        let mut summary = LoadSummary::default();
        let records = records_from_rows(vec![header()], DATE_MARKERS, &mut summary);
        assert!(records.is_empty());
        assert_eq!(summary.rows_read, 0);
    }

    #[test]
    fn columns_map_in_order() {
        let mut summary = LoadSummary::default();
        let rows = vec![
            header(),
            row(&["3", "ChatGPT", "GPT-4o", "2025-05-10", "Erkläre Flexbox", "Layout"]),
        ];
        let records = records_from_rows(rows, DATE_MARKERS, &mut summary);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.sequence, 3);
        assert_eq!(r.tool.as_deref(), Some("ChatGPT"));
        assert_eq!(r.model.as_deref(), Some("GPT-4o"));
        assert_eq!(r.date.date, NaiveDate::from_ymd_opt(2025, 5, 10));
        assert_eq!(r.prompt.as_deref(), Some("Erkläre Flexbox"));
        assert_eq!(r.purpose.as_deref(), Some("Layout"));
    }

    #[test]
    fn short_rows_are_counted_and_skipped() {
        let mut summary = LoadSummary::default();
        let rows = vec![header(), row(&["1", "Copilot", "x", "2025-01-01", "p"])];
        let records = records_from_rows(rows, DATE_MARKERS, &mut summary);
        assert!(records.is_empty());
        assert_eq!(summary.rows_read, 1);
        assert_eq!(summary.short_rows, 1);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let mut summary = LoadSummary::default();
        let rows = vec![
            header(),
            row(&["1", "Claude", "Sonnet", "2026-01-02", "p", "Zweck", "Notiz"]),
        ];
        let records = records_from_rows(rows, DATE_MARKERS, &mut summary);
        assert_eq!(records[0].purpose.as_deref(), Some("Zweck"));
    }

    #[test]
    fn empty_cells_stay_empty() {
        let mut summary = LoadSummary::default();
        let rows = vec![header(), row(&["", "", "", "", "", ""])];
        let records = records_from_rows(rows, DATE_MARKERS, &mut summary);
        assert_eq!(records[0].sequence, 0);
        assert!(records[0].tool.is_none());
        assert!(records[0].date.text.is_none());
        assert!(records[0].purpose.is_none());
    }

    #[test]
    fn parse_sequence_variants() {
        assert_eq!(parse_sequence(Some("12")), 12);
        assert_eq!(parse_sequence(Some("12.0")), 12);
        assert_eq!(parse_sequence(Some(" 4 ")), 4);
        assert_eq!(parse_sequence(Some("x")), 0);
        assert_eq!(parse_sequence(None), 0);
    }

    #[test]
    fn read_rows_from_generated_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ki.xlsx");

        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        for (col, title) in ["Nr", "Tool", "Modell", "Datum", "Prompt", "Zweck"].iter().enumerate() {
            sheet.get_cell_mut((col as u32 + 1, 1u32)).set_value(*title);
        }
        sheet.get_cell_mut("A2").set_value("1");
        sheet.get_cell_mut("B2").set_value("ChatGPT");
        sheet.get_cell_mut("D2").set_value("2025-02-03");
        sheet.get_cell_mut("F2").set_value("Recherche");
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 6);
        assert_eq!(rows[1][1].as_deref(), Some("ChatGPT"));
        assert_eq!(rows[1][2], None);
        assert_eq!(rows[1][3].as_deref(), Some("2025-02-03"));
    }

    #[test]
    fn serial_date_cells_become_iso_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serial.xlsx");

        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.get_cell_mut("A1").set_value("Datum");
        sheet.get_cell_mut("A2").set_value_number(45787);
        sheet
            .get_style_mut("A2")
            .get_number_format_mut()
            .set_format_code("dd.mm.yyyy");
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[1][0].as_deref(), Some("2025-05-10"));
    }

    #[test]
    fn missing_workbook_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows(&dir.path().join("fehlt.xlsx")).unwrap_err();
        assert!(matches!(err, AppError::OpenWorkbook { .. }));
    }
}
