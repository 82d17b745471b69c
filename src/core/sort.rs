use crate::data::Record;

/// Oldest first. Stable, so rows sharing a date (or lacking one) keep sheet order.
pub(crate) fn sort_by_date(records: &mut [Record]) {
    records.sort_by_key(Record::sort_key);
}
