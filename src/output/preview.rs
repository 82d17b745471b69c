use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::data::Record;
use crate::utils::first_chars;

/// Purpose cells longer than this are cut in the preview
const PURPOSE_WIDTH: usize = 48;

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

fn shorten(s: &str, width: usize) -> String {
    let cut = first_chars(s, width);
    if cut.len() < s.len() {
        format!("{cut}…")
    } else {
        cut.to_string()
    }
}

/// Terminal table of the rows a real run would write, in output order.
pub(crate) fn build_preview(records: &[Record], use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);

    table.set_header(
        ["#", "Nr", "Tool", "Model", "Date", "Purpose"]
            .iter()
            .map(|h| header_cell(h, use_color))
            .collect::<Vec<_>>(),
    );

    for (i, r) in records.iter().enumerate() {
        let date = match r.date.date {
            Some(d) => d.to_string(),
            None => r.date.text.clone().unwrap_or_default(),
        };
        let mut date_cell = Cell::new(date);
        if use_color && r.date.date.is_none() {
            date_cell = date_cell.fg(Color::Yellow);
        }
        table.add_row(vec![
            right_cell(&(i + 1).to_string()),
            right_cell(&r.sequence.to_string()),
            Cell::new(r.tool.as_deref().unwrap_or_default()),
            Cell::new(r.model.as_deref().unwrap_or_default()),
            date_cell,
            Cell::new(shorten(r.purpose.as_deref().unwrap_or_default(), PURPOSE_WIDTH)),
        ]);
    }

    table
}

pub(crate) fn print_preview(records: &[Record], use_color: bool) {
    println!("{}", build_preview(records, use_color));
}
