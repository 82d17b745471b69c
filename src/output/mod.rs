mod latex;
mod preview;
mod writer;

pub(crate) use preview::print_preview;
pub(crate) use writer::write_table;
