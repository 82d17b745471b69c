//! Row and record types produced by the workbook loader

use chrono::NaiveDate;

use crate::utils::parse_marked_date;

/// One worksheet row in display form; `None` marks an empty cell.
pub(crate) type RawRow = Vec<Option<String>>;

/// Date column normalized once at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DateCell {
    /// Text as shown in the sheet (serial dates already rendered as ISO)
    pub(crate) text: Option<String>,
    /// Parsed date, present only for marked ISO dates
    pub(crate) date: Option<NaiveDate>,
}

impl DateCell {
    pub(crate) fn new<S: AsRef<str>>(text: Option<String>, markers: &[S]) -> Self {
        let date = text.as_deref().and_then(|t| parse_marked_date(t, markers));
        Self { text, date }
    }
}

/// One spreadsheet row after column mapping
#[derive(Debug, Clone, Default)]
pub(crate) struct Record {
    pub(crate) sequence: i64,
    pub(crate) tool: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) date: DateCell,
    pub(crate) prompt: Option<String>,
    pub(crate) purpose: Option<String>,
}

impl Record {
    /// Ordering key: undated rows sort after every dated one.
    pub(crate) fn sort_key(&self) -> NaiveDate {
        self.date.date.unwrap_or(NaiveDate::MAX)
    }
}

/// Counts reported once a run finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LoadSummary {
    /// Data rows below the header
    pub(crate) rows_read: usize,
    /// Rows narrower than the six mapped columns
    pub(crate) short_rows: usize,
    pub(crate) excluded: usize,
    pub(crate) written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DATE_MARKERS;

    #[test]
    fn date_cell_parses_marked_text() {
        let cell = DateCell::new(Some("2025-03-01".to_string()), DATE_MARKERS);
        assert_eq!(cell.date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn date_cell_keeps_unparsable_text() {
        let cell = DateCell::new(Some("not-a-date-2024".to_string()), DATE_MARKERS);
        assert_eq!(cell.text.as_deref(), Some("not-a-date-2024"));
        assert_eq!(cell.date, None);
    }

    #[test]
    fn empty_date_sorts_last() {
        let undated = Record::default();
        let dated = Record {
            date: DateCell::new(Some("2026-12-31".to_string()), DATE_MARKERS),
            ..Default::default()
        };
        assert!(dated.sort_key() < undated.sort_key());
        assert_eq!(undated.sort_key(), NaiveDate::MAX);
    }
}
