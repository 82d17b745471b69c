use std::fs;
use std::path::Path;

use super::latex::render_table;
use crate::data::Record;
use crate::error::AppError;

/// Create or truncate `path` and write every record as a table row.
/// The parent directory must already exist.
pub(crate) fn write_table(path: &Path, records: &[Record]) -> Result<(), AppError> {
    fs::write(path, render_table(records)).map_err(|source| AppError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote table");
    Ok(())
}
