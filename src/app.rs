use std::path::Path;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::{ExclusionRules, sort_by_date};
use crate::data::{LoadSummary, Record, load_records};
use crate::error::AppError;
use crate::output::{print_preview, write_table};

/// Drop rows matched by an exclusion rule, logging why.
fn apply_exclusions(records: Vec<Record>, rules: &ExclusionRules, summary: &mut LoadSummary) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| match rules.check(r.purpose.as_deref(), r.prompt.as_deref()) {
            Some(reason) => {
                tracing::debug!(sequence = r.sequence, %reason, "excluding row");
                summary.excluded += 1;
                false
            }
            None => true,
        })
        .collect()
}

/// Load, filter and sort the workbook rows.
pub(crate) fn select_records(
    input: &Path,
    config: &Config,
    summary: &mut LoadSummary,
) -> Result<Vec<Record>, AppError> {
    let markers = config.date_markers();
    let records = load_records(input, &markers, summary)?;
    let rules = ExclusionRules::from_config(config);

    let mut kept = apply_exclusions(records, &rules, summary);
    sort_by_date(&mut kept);
    Ok(kept)
}

/// Full run: select rows, then write the table (or preview it on a dry run).
pub(crate) fn run(cli: &Cli, config: &Config) -> Result<LoadSummary, AppError> {
    let input = cli.input_path();
    let mut summary = LoadSummary::default();

    let records = select_records(&input, config, &mut summary)?;
    summary.written = records.len();

    if cli.dry_run {
        print_preview(&records, cli.use_color());
    } else {
        write_table(&cli.output_path(), &records)?;
    }

    tracing::info!(
        rows = summary.rows_read,
        short = summary.short_rows,
        excluded = summary.excluded,
        kept = summary.written,
        "run finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::DateCell;
    use crate::consts::DATE_MARKERS;

    fn record(sequence: i64, purpose: Option<&str>, prompt: &str) -> Record {
        Record {
            sequence,
            purpose: purpose.map(str::to_string),
            prompt: Some(prompt.to_string()),
            date: DateCell::new(Some("2025-01-01".to_string()), DATE_MARKERS),
            ..Default::default()
        }
    }

    #[test]
    fn exclusions_are_counted() {
        let mut summary = LoadSummary::default();
        let records = vec![
            record(1, Some("Layout"), "Navbar bauen"),
            record(2, Some("Git-Push"), "push"),
            record(3, None, "leer"),
            record(4, Some("Deployment"), "alles"),
            record(5, Some("Tests"), "Unit-Tests fuer Parser"),
        ];
        let kept = apply_exclusions(records, &ExclusionRules::default(), &mut summary);
        let seq: Vec<i64> = kept.iter().map(|r| r.sequence).collect();
        assert_eq!(seq, vec![1, 5]);
        assert_eq!(summary.excluded, 3);
    }
}
