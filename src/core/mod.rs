//! Core module - row selection and ordering

mod filter;
mod sort;

pub(crate) use filter::ExclusionRules;
pub(crate) use sort::sort_by_date;
