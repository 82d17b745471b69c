/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Workbook read when neither CLI nor config names one
pub(crate) const DEFAULT_INPUT: &str = "A6_EINSATZ_VON_KI_TOOLS_600 (1).xlsx";

/// Appendix file of the thesis template
pub(crate) const DEFAULT_OUTPUT: &str = "diplomarbeit_inhaltsverzeichnis/diplomarbeit_inhaltsverzeichnis/DA_Vorlage-main/DA_Vorlage-main/6_appendix/ki_table.tex";

/// Columns: sequence number, tool, model, date, prompt, purpose
pub(crate) const MIN_COLUMNS: usize = 6;

/// Purpose phrases that drop a row when contained (case-insensitive)
pub(crate) const EXCLUDE_PURPOSE: &[&str] = &[
    "Git-Push",
    "Git-Commit",
    "Git-Sync",
    "Versionierung",
    "Branch-Synchronisation",
    "Klarstellung Push-Scope",
    "Branch-Merge",
    "Commit + Merge",
    "Git-Synchronisation",
];

/// Prompt phrases that drop a row, but only for short prompts
pub(crate) const EXCLUDE_PROMPT: &[&str] = &["auf Ole-Branch", "auf Main-Branch", "alles", "ausführen"];

/// Lowercased purposes that drop a row on exact match.
// Overlaps EXCLUDE_PURPOSE; kept until the tables are reconciled.
pub(crate) const EXCLUDE_PURPOSE_EXACT: &[&str] = &["git-push", "git-commit", "git-sync / projektstand"];

/// Prompts at or above this many characters ignore EXCLUDE_PROMPT
pub(crate) const PROMPT_LENGTH_LIMIT: usize = 50;

/// A date cell is only trusted when its text contains one of these
pub(crate) const DATE_MARKERS: &[&str] = &["2025-", "2026-"];
