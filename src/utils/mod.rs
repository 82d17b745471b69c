pub(crate) mod date;

pub(crate) use date::{excel_serial_to_date, first_chars, is_date_format_code, parse_marked_date};
