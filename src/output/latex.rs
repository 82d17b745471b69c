//! LaTeX rendering of table rows for the appendix

use crate::data::Record;
use crate::utils::first_chars;

/// Umlauts written out as ASCII digraphs
const UMLAUTS: [(char, &str); 7] = [
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
];

/// Characters that must be backslash-escaped inside a tabular cell
const LATEX_SPECIAL: [char; 4] = ['&', '%', '#', '_'];

pub(crate) fn expand_umlauts(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match UMLAUTS.iter().find(|(u, _)| *u == c) {
            Some((_, digraph)) => out.push_str(digraph),
            None => out.push(c),
        }
    }
    out
}

/// Make a cell value safe for a LaTeX table row.
///
/// Umlauts are expanded first, then `& % # _` get a backslash, newlines
/// become spaces and the result is trimmed.
pub(crate) fn escape(s: &str) -> String {
    let expanded = expand_umlauts(s);
    let mut out = String::with_capacity(expanded.len());
    for c in expanded.chars() {
        if LATEX_SPECIAL.contains(&c) {
            out.push('\\');
        }
        if c == '\n' {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// `escape` for optional cells; empty cells render as nothing.
pub(crate) fn escape_cell(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}

/// Date column as printed: the first ten characters of the cell text.
pub(crate) fn fmt_date(value: Option<&str>) -> String {
    value.map(|s| first_chars(s, 10).to_string()).unwrap_or_default()
}

/// One `tabular` row plus its rule, `index` is 1-based.
pub(crate) fn format_row(index: usize, record: &Record) -> String {
    format!(
        "{} & {} & {} & {} & {} \\\\\n\\hline\n",
        index,
        escape_cell(record.tool.as_deref()),
        escape(&fmt_date(record.date.text.as_deref())),
        escape_cell(record.purpose.as_deref()),
        escape_cell(record.prompt.as_deref()),
    )
}

/// All rows in the given order, numbered from 1.
pub(crate) fn render_table(records: &[Record]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format_row(i + 1, record));
    }
    out
}
