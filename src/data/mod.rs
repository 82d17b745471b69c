pub(crate) mod loader;
pub(crate) mod types;

pub(crate) use loader::load_records;
pub(crate) use types::{LoadSummary, Record};
